//! Adapter from the application generation port to the OpenAI client

use std::sync::Arc;

use async_trait::async_trait;

use ai_core::{ChatCompletion, CompletionRequest, GenerationError};
use application::ApplicationError;
use application::ports::{GenerationPort, GenerationRequest};

/// Bridges `GenerationPort` to any `ChatCompletion` implementation
pub struct GenerationAdapter {
    client: Arc<dyn ChatCompletion>,
}

impl GenerationAdapter {
    /// Create a new adapter over a chat-completion client
    pub fn new(client: Arc<dyn ChatCompletion>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GenerationPort for GenerationAdapter {
    async fn generate(&self, request: GenerationRequest) -> Result<String, ApplicationError> {
        let completion_request = CompletionRequest::new(request.system, request.user)
            .with_temperature(request.temperature)
            .with_max_tokens(request.max_tokens);

        let response = self
            .client
            .complete(completion_request)
            .await
            .map_err(map_generation_error)?;

        Ok(response.content)
    }
}

fn map_generation_error(err: GenerationError) -> ApplicationError {
    match err {
        GenerationError::Configuration(msg) => ApplicationError::Configuration(msg),
        GenerationError::InvalidResponse(msg) => ApplicationError::Parse(msg),
        GenerationError::ConnectionFailed(_)
        | GenerationError::RequestFailed(_)
        | GenerationError::ServerError(_)
        | GenerationError::Timeout => ApplicationError::Upstream(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai_core::CompletionResponse;

    struct StubCompletion {
        result: Result<String, GenerationError>,
    }

    #[async_trait]
    impl ChatCompletion for StubCompletion {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, GenerationError> {
            match &self.result {
                Ok(content) => Ok(CompletionResponse {
                    content: content.clone(),
                    model: "gpt-4".to_string(),
                }),
                Err(GenerationError::Configuration(msg)) => {
                    Err(GenerationError::Configuration(msg.clone()))
                },
                Err(GenerationError::ServerError(msg)) => {
                    Err(GenerationError::ServerError(msg.clone()))
                },
                Err(_) => Err(GenerationError::RequestFailed("stub".to_string())),
            }
        }

        fn model_name(&self) -> &str {
            "gpt-4"
        }
    }

    #[tokio::test]
    async fn generate_returns_content() {
        let adapter = GenerationAdapter::new(Arc::new(StubCompletion {
            result: Ok("hello".to_string()),
        }));

        let request = GenerationRequest::new("system", "user", 0.7, 100);
        let content = adapter.generate(request).await.unwrap();

        assert_eq!(content, "hello");
    }

    #[tokio::test]
    async fn configuration_error_maps_to_configuration() {
        let adapter = GenerationAdapter::new(Arc::new(StubCompletion {
            result: Err(GenerationError::Configuration("no key".to_string())),
        }));

        let request = GenerationRequest::new("s", "u", 0.7, 100);
        let result = adapter.generate(request).await;

        assert!(matches!(result, Err(ApplicationError::Configuration(_))));
    }

    #[tokio::test]
    async fn server_error_maps_to_upstream() {
        let adapter = GenerationAdapter::new(Arc::new(StubCompletion {
            result: Err(GenerationError::ServerError("Status 500".to_string())),
        }));

        let request = GenerationRequest::new("s", "u", 0.7, 100);
        let result = adapter.generate(request).await;

        assert!(matches!(result, Err(ApplicationError::Upstream(_))));
    }
}
