//! Prompt templates for the answer/compare flow

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instructions prepended to every question before it reaches a backend
    pub fn multiple_choice_instructions() -> &'static str {
        r#"If this is a multiple choice question, please:
1. Analyze each option carefully
2. Provide a clear "Yes" or "No" for each option
3. Explain the reasoning for each option
4. At the end, summarize which options are correct"#
    }

    /// Decorate a raw question with multiple-choice analysis instructions.
    ///
    /// The question is appended verbatim; both backends receive the same text.
    pub fn enhance(question: &str) -> String {
        format!(
            "{}\n\nHere's the question:\n{}",
            Self::multiple_choice_instructions(),
            question
        )
    }

    /// Prompt asking the judge whether two answers mean the same thing.
    ///
    /// Both answers are embedded verbatim. The judge is told to reply with
    /// only `true` or `false`.
    pub fn comparison(first: &str, second: &str) -> String {
        format!(
            r#"Compare these two responses and determine if they convey the same meaning.
Only respond with "true" if they are semantically equivalent, or "false" if they differ significantly in meaning.

Response 1:
{}

Response 2:
{}"#,
            first, second
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhance_contains_question_verbatim() {
        let question = "2+2=? A) 3 B) 4";
        let prompt = PromptTemplate::enhance(question);
        assert!(prompt.contains(question));
        assert!(prompt.ends_with(question));
        assert!(prompt.starts_with("If this is a multiple choice question"));
    }

    #[test]
    fn test_enhance_preserves_multiline_and_symbols() {
        let question = "Which are prime?\n  A) 2\n  B) {4}\n  C) 5 %s";
        let prompt = PromptTemplate::enhance(question);
        assert!(prompt.contains(question));
    }

    #[test]
    fn test_enhance_is_deterministic() {
        assert_eq!(
            PromptTemplate::enhance("What is Rust?"),
            PromptTemplate::enhance("What is Rust?")
        );
    }

    #[test]
    fn test_enhance_lists_all_instructions() {
        let prompt = PromptTemplate::enhance("Q");
        assert!(prompt.contains("Analyze each option"));
        assert!(prompt.contains("\"Yes\" or \"No\""));
        assert!(prompt.contains("reasoning"));
        assert!(prompt.contains("summarize which options are correct"));
    }

    #[test]
    fn test_comparison_embeds_both_answers() {
        let prompt = PromptTemplate::comparison("B is correct", "B) 4 is correct");
        assert!(prompt.contains("Response 1:\nB is correct"));
        assert!(prompt.contains("Response 2:\nB) 4 is correct"));
        assert!(prompt.contains("\"true\""));
        assert!(prompt.contains("\"false\""));
    }
}
