//! Scenario service - practice scenario generation
//!
//! Scenario generation is supplementary: any failure degrades to `None`
//! instead of surfacing an error, so a flaky upstream never blocks the
//! practice flow.

use std::sync::Arc;

use domain::PracticeScenario;
use tracing::{instrument, warn};

use crate::ports::{GenerationPort, GenerationRequest};
use crate::prompts;

const SCENARIO_TEMPERATURE: f32 = 0.9;
const SCENARIO_MAX_TOKENS: u32 = 200;

const SCENARIO_PREFIX: &str = "SCENARIO:";
const TASK_PREFIX: &str = "TASK:";

/// Service for generating practice scenarios via the generation port
pub struct ScenarioService {
    generation: Arc<dyn GenerationPort>,
}

impl ScenarioService {
    /// Create a new scenario service
    pub fn new(generation: Arc<dyn GenerationPort>) -> Self {
        Self { generation }
    }

    /// Generate a practice scenario for the topic, or `None` on failure
    #[instrument(skip(self), fields(topic = %topic))]
    pub async fn generate(
        &self,
        topic: &str,
        practice_language: &str,
        native_language: &str,
    ) -> Option<PracticeScenario> {
        let prompts = prompts::scenario_prompts(topic, practice_language, native_language);
        let request = GenerationRequest::new(
            prompts.system,
            prompts.user,
            SCENARIO_TEMPERATURE,
            SCENARIO_MAX_TOKENS,
        );

        match self.generation.generate(request).await {
            Ok(content) => Some(parse_scenario(&content, practice_language)),
            Err(e) => {
                warn!(error = %e, "Scenario generation failed");
                None
            },
        }
    }
}

/// Parse a `SCENARIO:` / `TASK:` reply, falling back to the whole reply
/// as the scenario when the format was not followed
fn parse_scenario(content: &str, practice_language: &str) -> PracticeScenario {
    let mut scenario = String::new();
    let mut task = String::new();

    for line in content.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix(SCENARIO_PREFIX) {
            scenario = rest.trim().to_string();
        } else if let Some(rest) = line.strip_prefix(TASK_PREFIX) {
            task = rest.trim().to_string();
        }
    }

    if scenario.is_empty() {
        return PracticeScenario::from_unstructured(content.trim(), practice_language);
    }

    PracticeScenario::new(scenario, task, practice_language)
}
