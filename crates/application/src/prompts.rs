//! Prompt templates for analysis and scenario generation
//!
//! Pure functions from inputs to prompt strings, kept free of I/O so the
//! exact wording can be asserted in tests.

use domain::language;

/// System and user prompt pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    /// System prompt framing the model's role
    pub system: String,
    /// User message
    pub user: String,
}

/// Resolve a language code to its display name, falling back to the raw code
fn language_name(code: &str) -> &str {
    language::lookup(code).unwrap_or(code)
}

/// Build the text-analysis prompt pair
///
/// Asks for an improved version, error corrections, and difficult words,
/// with all explanations in the learner's native language, as a strict
/// JSON object.
#[must_use]
pub fn analysis_prompts(text: &str, practice_language: &str, native_language: &str) -> PromptPair {
    let practice = language_name(practice_language);
    let native = language_name(native_language);

    let system = format!(
        "You are a helpful {practice} language teacher. Always respond with valid JSON only. \
         Explanations should be in {native}."
    );

    let user = format!(
        r#"You are a helpful language coach for {practice} learners.
Analyze the following text written by a beginner {practice} learner (native language: {native}) and provide:

1. An improved/corrected version of the text in {practice} (keep the same meaning and style)
2. A list of errors with explanations in {native} (only if there are errors)
3. A list of difficult words with simple definitions in {native} and examples in {practice}
4. Keep all explanations short, simple, and beginner-friendly in {native}

User's text in {practice}:
"{text}"

Please respond in the following JSON format:
{{
    "improved_text": "the corrected version in {practice}",
    "errors": [
        {{
            "original": "original phrase/word",
            "corrected": "corrected phrase/word",
            "explanation": "simple explanation in {native}"
        }}
    ],
    "difficult_words": [
        {{
            "word": "word in {practice}",
            "definition": "simple definition in {native}",
            "example": "example sentence in {practice}"
        }}
    ]
}}

If there are no errors, return an empty errors array. Focus on words that might be challenging for beginners. All explanations and definitions should be in {native}."#
    );

    PromptPair { system, user }
}

/// Build the scenario-generation prompt pair
///
/// Asks for a `SCENARIO:` line in the practice language and a `TASK:` line
/// in the native language.
#[must_use]
pub fn scenario_prompts(topic: &str, practice_language: &str, native_language: &str) -> PromptPair {
    let system = format!(
        "You are a language learning assistant. Generate creative and realistic practice scenarios.\n\
         The scenario should be in {practice_language}.\n\
         Provide brief instructions in {native_language} explaining what the user should do.\n\
         Keep scenarios conversational and practical for language learners."
    );

    let user = format!(
        r#"Create a practice scenario about: {topic}

Return your response in this exact format:
SCENARIO: [A realistic situation description in {practice_language}, 2-3 sentences]
TASK: [What the user should say or do, in {native_language}, 1 sentence]

Example for "ordering food at restaurant":
SCENARIO: You are at a restaurant in Paris. The waiter comes to your table and asks what you would like to order.
TASK: Order a meal and ask about recommendations.

Now generate a unique scenario for: {topic}"#
    );

    PromptPair { system, user }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_prompts_use_language_names() {
        let prompts = analysis_prompts("Hola, como estas", "es", "en");

        assert!(prompts.system.contains("Spanish language teacher"));
        assert!(prompts.system.contains("Explanations should be in English"));
        assert!(prompts.user.contains("beginner Spanish learner"));
        assert!(prompts.user.contains("(native language: English)"));
        assert!(prompts.user.contains("\"Hola, como estas\""));
    }

    #[test]
    fn analysis_prompts_fall_back_to_raw_code() {
        let prompts = analysis_prompts("text", "xx", "en");

        assert!(prompts.system.contains("helpful xx language teacher"));
    }

    #[test]
    fn analysis_user_prompt_requests_json_shape() {
        let prompts = analysis_prompts("text", "en", "en");

        assert!(prompts.user.contains("\"improved_text\""));
        assert!(prompts.user.contains("\"errors\""));
        assert!(prompts.user.contains("\"difficult_words\""));
        assert!(prompts.user.contains("return an empty errors array"));
    }

    #[test]
    fn scenario_prompts_embed_topic() {
        let prompts = scenario_prompts("ordering coffee", "fr", "en");

        assert!(prompts.user.contains("Create a practice scenario about: ordering coffee"));
        assert!(prompts.user.contains("SCENARIO:"));
        assert!(prompts.user.contains("TASK:"));
        assert!(prompts.system.contains("The scenario should be in fr."));
    }
}
