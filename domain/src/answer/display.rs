//! Display helpers for multiple-choice answers.

/// Add visual separation between the sections of a multiple-choice analysis.
///
/// Inserts a line break before every `Option` and a blank line before every
/// `Summary`, so per-option reasoning and the closing summary stand apart when
/// two answers are printed one after the other. Matching is case-sensitive.
pub fn spread_sections(answer: &str) -> String {
    answer
        .replace("Option", "\nOption")
        .replace("Summary", "\n\nSummary")
}
