//! Application services - Business logic orchestration

pub mod analysis_service;
pub mod practice_service;
pub mod scenario_service;

pub use analysis_service::{Analysis, AnalysisService};
pub use practice_service::{PracticeOutcome, PracticeService, PracticeSubmission};
pub use scenario_service::ScenarioService;
