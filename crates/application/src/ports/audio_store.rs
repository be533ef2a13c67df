//! Audio store port - Interface for persisting synthesized audio

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for storing synthesized audio clips
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AudioStore: Send + Sync {
    /// Persist audio bytes under a fresh unique name with the given file
    /// extension, returning the public URL path clients can fetch it from
    /// (e.g. "/static/audio/<uuid>.mp3")
    async fn save(&self, data: Vec<u8>, extension: &str) -> Result<String, ApplicationError>;
}
