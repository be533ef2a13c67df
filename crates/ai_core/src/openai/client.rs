//! OpenAI-compatible client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::config::GenerationConfig;
use crate::error::GenerationError;
use crate::ports::{ChatCompletion, CompletionRequest, CompletionResponse};

/// Chat-completion client for OpenAI-compatible endpoints
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    config: GenerationConfig,
}

impl OpenAiClient {
    /// Create a new client
    ///
    /// Construction succeeds without an API key; requests made through an
    /// unconfigured client fail with a `Configuration` error instead.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError::Configuration` if the configuration is
    /// invalid.
    pub fn new(config: GenerationConfig) -> Result<Self, GenerationError> {
        config.validate().map_err(GenerationError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| {
                GenerationError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    fn api_key(&self) -> Result<&str, GenerationError> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                GenerationError::Configuration("Generation API key is not configured".into())
            })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.config.base_url)
    }
}

/// Wire-format chat request
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Wire-format chat response; only the fields we read
#[derive(Debug, Deserialize)]
struct ChatResponse {
    model: String,
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    #[instrument(skip(self, request), fields(user_len = request.user.len()))]
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, GenerationError> {
        let api_key = self.api_key()?;

        let chat_request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature.unwrap_or(self.config.temperature),
            max_tokens: request.max_tokens.unwrap_or(self.config.max_tokens),
        };

        debug!("Sending chat completion request");

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(api_key)
            .json(&chat_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Full upstream detail stays in the server log only
            warn!(status = %status, body = %body, "Completion request failed");
            return Err(GenerationError::ServerError(format!("Status {status}")));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                GenerationError::InvalidResponse("Response contained no choices".to_string())
            })?;

        debug!(content_len = content.len(), "Completion received");

        Ok(CompletionResponse {
            content,
            model: chat_response.model,
        })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> OpenAiClient {
        let config = GenerationConfig {
            api_key: Some("test-api-key".to_string()),
            base_url: mock_server.uri(),
            ..Default::default()
        };
        OpenAiClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn complete_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "gpt-4",
                "choices": [
                    {"message": {"role": "assistant", "content": "Bonjour!"}}
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client
            .complete(CompletionRequest::new("You are a coach.", "Say hello"))
            .await;

        assert!(result.is_ok());
        let response = result.unwrap();
        assert_eq!(response.content, "Bonjour!");
        assert_eq!(response.model, "gpt-4");
    }

    #[tokio::test]
    async fn complete_sends_both_messages_and_defaults() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "usr"}
                ],
                "max_tokens": 1500
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "gpt-4",
                "choices": [{"message": {"content": "ok"}}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.complete(CompletionRequest::new("sys", "usr")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn complete_request_overrides_take_precedence() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(serde_json::json!({
                "temperature": 0.9,
                "max_tokens": 200
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "gpt-4",
                "choices": [{"message": {"content": "ok"}}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let request = CompletionRequest::new("sys", "usr")
            .with_temperature(0.9)
            .with_max_tokens(200);

        assert!(client.complete(request).await.is_ok());
    }

    #[tokio::test]
    async fn complete_server_error_does_not_leak_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(500).set_body_string("secret upstream detail"),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.complete(CompletionRequest::new("s", "u")).await;

        let Err(GenerationError::ServerError(msg)) = result else {
            unreachable!("Expected ServerError");
        };
        assert!(!msg.contains("secret upstream detail"));
    }

    #[tokio::test]
    async fn complete_empty_choices_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "model": "gpt-4",
                "choices": []
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.complete(CompletionRequest::new("s", "u")).await;

        assert!(matches!(result, Err(GenerationError::InvalidResponse(_))));
    }

    #[test]
    fn new_succeeds_without_api_key() {
        assert!(OpenAiClient::new(GenerationConfig::default()).is_ok());
    }

    #[tokio::test]
    async fn complete_without_api_key_is_configuration_error() {
        let client = OpenAiClient::new(GenerationConfig::default()).unwrap();

        let result = client.complete(CompletionRequest::new("s", "u")).await;

        assert!(matches!(result, Err(GenerationError::Configuration(_))));
    }

    #[test]
    fn model_name_comes_from_config() {
        let client = OpenAiClient::new(GenerationConfig::test()).unwrap();
        assert_eq!(client.model_name(), "gpt-4");
    }
}
