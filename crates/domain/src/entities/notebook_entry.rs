//! Notebook entry entity
//!
//! One persisted practice submission together with its AI-generated
//! feedback. Entries are immutable once created: the store only ever
//! appends, never updates or deletes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::EntryId;

/// A single correction found in the submitted text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorItem {
    /// Original phrase or word as written by the learner
    pub original: String,
    /// Corrected phrase or word
    pub corrected: String,
    /// Short explanation in the learner's native language
    pub explanation: String,
}

/// A word the learner may find difficult, with a definition and example
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultWord {
    /// Word in the practice language
    pub word: String,
    /// Simple definition in the native language
    pub definition: String,
    /// Example sentence in the practice language
    pub example: String,
}

/// A practice notebook entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookEntry {
    /// Unique identifier, assigned at creation
    pub id: EntryId,
    /// Creation time, fixed once set (ISO-8601 on the wire)
    pub timestamp: DateTime<Utc>,
    /// Text as submitted by the learner
    pub original_text: String,
    /// Improved/corrected version of the text
    pub improved_text: String,
    /// Corrections, in the order the analysis produced them
    pub errors: Vec<ErrorItem>,
    /// Difficult words, in the order the analysis produced them
    pub difficult_words: Vec<DifficultWord>,
    /// Optional practice topic
    #[serde(default)]
    pub topic: Option<String>,
    /// Language being practiced
    #[serde(default = "default_language")]
    pub practice_language: String,
    /// Learner's native language, used for explanations
    #[serde(default = "default_language")]
    pub native_language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl NotebookEntry {
    /// Create a new entry with a fresh timestamp
    #[must_use]
    pub fn new(
        id: EntryId,
        original_text: impl Into<String>,
        improved_text: impl Into<String>,
        errors: Vec<ErrorItem>,
        difficult_words: Vec<DifficultWord>,
    ) -> Self {
        Self {
            id,
            timestamp: Utc::now(),
            original_text: original_text.into(),
            improved_text: improved_text.into(),
            errors,
            difficult_words,
            topic: None,
            practice_language: default_language(),
            native_language: default_language(),
        }
    }

    /// Set the practice topic
    #[must_use]
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// Set the practice and native languages
    #[must_use]
    pub fn with_languages(
        mut self,
        practice_language: impl Into<String>,
        native_language: impl Into<String>,
    ) -> Self {
        self.practice_language = practice_language.into();
        self.native_language = native_language.into();
        self
    }
}
