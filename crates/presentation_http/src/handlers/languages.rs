//! Supported-language listing handler

use axum::Json;
use domain::language;
use serde::Serialize;

/// One supported language
#[derive(Debug, Serialize)]
pub struct LanguageEntry {
    /// ISO 639-1 code
    pub code: &'static str,
    /// English display name
    pub name: &'static str,
}

/// Supported-language listing response
#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    /// All supported languages
    pub languages: Vec<LanguageEntry>,
    /// Number of supported languages
    pub count: usize,
}

/// List the languages available for practice
pub async fn list_languages() -> Json<LanguagesResponse> {
    let languages: Vec<LanguageEntry> = language::all()
        .map(|(code, name)| LanguageEntry { code, name })
        .collect();

    let count = languages.len();
    Json(LanguagesResponse { languages, count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_all_supported_languages() {
        let response = list_languages().await;

        assert_eq!(response.count, response.languages.len());
        assert!(response.languages.iter().any(|l| l.code == "en"));
        assert!(response.languages.iter().any(|l| l.code == "zh"));
    }
}
