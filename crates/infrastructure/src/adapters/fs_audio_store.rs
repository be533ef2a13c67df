//! Filesystem audio store
//!
//! Writes synthesized clips under the configured audio directory using
//! fresh UUID names and returns the public path they are served from.
//! There is no retention policy; files accumulate until cleaned up
//! externally.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use application::ApplicationError;
use application::ports::AudioStore;

/// Audio store backed by a local directory
pub struct FsAudioStore {
    dir: PathBuf,
    public_prefix: String,
}

impl FsAudioStore {
    /// Create a store writing into `dir`, served under `public_prefix`
    pub fn new(dir: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            public_prefix: public_prefix.into(),
        }
    }
}

#[async_trait]
impl AudioStore for FsAudioStore {
    async fn save(&self, data: Vec<u8>, extension: &str) -> Result<String, ApplicationError> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            ApplicationError::Storage(format!("Failed to create audio directory: {e}"))
        })?;

        let filename = format!("{}.{extension}", Uuid::new_v4());
        let path = self.dir.join(&filename);

        tokio::fs::write(&path, data)
            .await
            .map_err(|e| ApplicationError::Storage(format!("Failed to write audio file: {e}")))?;

        debug!(path = %path.display(), "Stored synthesized audio");

        Ok(format!("{}/{filename}", self.public_prefix))
    }
}
