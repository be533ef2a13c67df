//! Practice scenario entity

use serde::{Deserialize, Serialize};

/// An AI-generated practice scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeScenario {
    /// Situation description in the practice language
    pub scenario_text: String,
    /// What the learner should say or do, in their native language
    pub task_instructions: String,
    /// Language the scenario is written in
    pub practice_language: String,
}

impl PracticeScenario {
    /// Create a scenario from already-structured parts
    #[must_use]
    pub fn new(
        scenario_text: impl Into<String>,
        task_instructions: impl Into<String>,
        practice_language: impl Into<String>,
    ) -> Self {
        Self {
            scenario_text: scenario_text.into(),
            task_instructions: task_instructions.into(),
            practice_language: practice_language.into(),
        }
    }

    /// Wrap an unstructured model reply as a scenario with a generic task.
    ///
    /// Used when the reply did not follow the expected two-line format;
    /// formatting variance alone never discards a generated scenario.
    #[must_use]
    pub fn from_unstructured(content: &str, practice_language: impl Into<String>) -> Self {
        let practice_language = practice_language.into();
        let task = format!("Practice speaking about this topic in {practice_language}.");
        Self {
            scenario_text: content.trim().to_string(),
            task_instructions: task,
            practice_language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_scenario() {
        let scenario = PracticeScenario::new(
            "You are at a bakery in Paris.",
            "Order two croissants.",
            "fr",
        );

        assert_eq!(scenario.scenario_text, "You are at a bakery in Paris.");
        assert_eq!(scenario.task_instructions, "Order two croissants.");
        assert_eq!(scenario.practice_language, "fr");
    }

    #[test]
    fn from_unstructured_trims_and_adds_generic_task() {
        let scenario = PracticeScenario::from_unstructured("  Some raw reply.  ", "es");

        assert_eq!(scenario.scenario_text, "Some raw reply.");
        assert_eq!(
            scenario.task_instructions,
            "Practice speaking about this topic in es."
        );
        assert_eq!(scenario.practice_language, "es");
    }

    #[test]
    fn roundtrips_through_json() {
        let scenario = PracticeScenario::new("A", "B", "en");
        let json = serde_json::to_string(&scenario).unwrap();
        let parsed: PracticeScenario = serde_json::from_str(&json).unwrap();
        assert_eq!(scenario, parsed);
    }
}
