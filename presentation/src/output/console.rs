//! Console output formatter for consensus results

use colored::Colorize;
use duet_application::{BackendError, ConsensusOutcome};
use duet_domain::{AnsweredResponse, spread_sections};

/// Formats consensus outcomes and session chrome for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Session banner, printed once
    pub fn banner() -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}\n",
            "Interactive AI Question Answering System".cyan().bold()
        ));
        output.push_str("Enter your questions (type 'exit' to quit)\n");
        output.push_str(
            "Type your question and press Ctrl+D (Unix) or Ctrl+Z (Windows) on a new line to finish\n",
        );
        output.push_str(&Self::separator());
        output.push('\n');
        output
    }

    /// Prompt printed before every question
    pub fn prompt() -> String {
        format!("\n{}\n", "Enter your question:".bold())
    }

    /// Format the terminal state of a consensus run
    pub fn format_outcome(outcome: &ConsensusOutcome) -> String {
        match outcome {
            ConsensusOutcome::Agreed { answer, .. } => Self::format_agreed(answer),
            ConsensusOutcome::ExhaustedWithAnswers {
                primary,
                secondary,
                attempts,
            } => Self::format_side_by_side(primary, secondary, *attempts),
            ConsensusOutcome::ExhaustedNoAnswers {
                primary_error,
                secondary_error,
                attempts,
            } => Self::format_no_answers(
                primary_error.as_ref(),
                secondary_error.as_ref(),
                *attempts,
            ),
        }
    }

    fn format_agreed(answer: &AnsweredResponse) -> String {
        format!("\n{}\n{}\n", "Response:".green().bold(), answer.content())
    }

    fn format_side_by_side(
        primary: &AnsweredResponse,
        secondary: &AnsweredResponse,
        attempts: u32,
    ) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "\n{}\n",
            format!("Responses after {} attempts:", attempts).yellow().bold()
        ));
        for answer in [primary, secondary] {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("{} Response:", answer.source.display_name()).cyan().bold(),
                spread_sections(answer.content())
            ));
        }
        output
    }

    fn format_no_answers(
        primary_error: Option<&BackendError>,
        secondary_error: Option<&BackendError>,
        attempts: u32,
    ) -> String {
        let describe = |e: Option<&BackendError>| {
            e.map(ToString::to_string)
                .unwrap_or_else(|| "none".to_string())
        };
        format!(
            "\n{} failed to get responses after {} attempts. Gemini error: {}, Groq error: {}\n",
            "Error:".red().bold(),
            attempts,
            describe(primary_error),
            describe(secondary_error)
        )
    }

    /// Farewell line
    pub fn goodbye() -> &'static str {
        "Goodbye!"
    }

    fn separator() -> String {
        "-".repeat(40)
    }
}
