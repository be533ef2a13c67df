//! Application state shared across handlers

use std::sync::Arc;

use application::{PracticeService, ScenarioService};
use application::ports::NotebookStore;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// The practice pipeline (analyze, persist, synthesize)
    pub practice: Arc<PracticeService>,
    /// Scenario generation
    pub scenario: Arc<ScenarioService>,
    /// Notebook storage, read directly by the notes handlers
    pub store: Arc<dyn NotebookStore>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
