//! Console output formatter for duel outcomes

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use duel_domain::{AttemptOutcome, DuelOutcome, DuelRound, RoundFailure};

/// Formats duel outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete outcome
    pub fn format(outcome: &DuelOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("AI Duel Results"));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Generator:".cyan().bold(),
            outcome.generator
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Solver:".cyan().bold(),
            outcome.solver
        ));

        for round in outcome.history.rounds() {
            output.push_str(&Self::format_round(round));
        }

        output.push_str(&Self::section_header("Result"));
        match &outcome.validated {
            Some(question) => {
                output.push_str(&format!(
                    "\n{} after {} round(s)\n\n",
                    "Validated".green().bold(),
                    outcome.rounds_played()
                ));
                output.push_str(&format!("{} {}\n", "Q:".bold(), question.text()));
                output.push_str(&format!(
                    "{} {}\n",
                    "A:".bold(),
                    question.answer().unwrap_or_default()
                ));
            }
            None => {
                output.push_str(&format!(
                    "\n{} after {} round(s)\n",
                    "No question validated".red().bold(),
                    outcome.rounds_played()
                ));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &DuelOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the validated question only, in reply grammar
    pub fn format_question_only(outcome: &DuelOutcome) -> String {
        match &outcome.validated {
            Some(question) => format!(
                "Question: {}\nAnswer: [{}]\n",
                question.text(),
                question.answer().unwrap_or_default()
            ),
            None => format!(
                "{} after {} round(s)\n",
                "No question validated".red(),
                outcome.rounds_played()
            ),
        }
    }

    fn format_round(round: &DuelRound) -> String {
        let mut output = Self::section_header(&format!("Round {}", round.round));

        if let Some(question) = &round.question {
            output.push_str(&format!(
                "\n{}\n{}\n",
                "── Question ──".yellow().bold(),
                Self::indent(question.text(), "  ")
            ));
            output.push_str(&format!(
                "{} {}\n",
                "Expected:".cyan(),
                question.answer().unwrap_or_default()
            ));
        }
        if let Some(pattern) = &round.verification_pattern {
            output.push_str(&format!("{} {}\n", "Regex:".dimmed(), pattern));
        }

        if let Some(report) = &round.report {
            output.push_str(&format!(
                "\n{} {}/{} correct\n",
                "── Validation ──".yellow().bold(),
                report.correct_count(),
                report.attempts_configured
            ));
            for attempt in &report.outcomes {
                output.push_str(&Self::format_attempt(attempt));
            }
        }

        match &round.failure {
            None => output.push_str(&format!("\n{}\n", "Consistent".green().bold())),
            Some(RoundFailure::Inconsistent) => {
                output.push_str(&format!("\n{}\n", "Inconsistent".red().bold()))
            }
            Some(failure @ RoundFailure::Extraction(_)) => {
                output.push_str(&format!("\n{} {}\n", "x".red(), failure))
            }
        }

        output
    }

    fn format_attempt(attempt: &AttemptOutcome) -> String {
        let mark = if attempt.matched {
            "v".green()
        } else {
            "x".red()
        };
        let answer = attempt.answer.as_deref().unwrap_or("(no answer)");
        let pattern = match attempt.pattern_matched {
            Some(true) => " [regex ok]".dimmed().to_string(),
            Some(false) => " [regex miss]".dimmed().to_string(),
            None => String::new(),
        };
        format!("  {} #{} {}{}\n", mark, attempt.attempt, answer, pattern)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &DuelOutcome) -> String {
        Self::format(outcome)
    }

    fn format_json(&self, outcome: &DuelOutcome) -> String {
        Self::format_json(outcome)
    }

    fn format_question_only(&self, outcome: &DuelOutcome) -> String {
        Self::format_question_only(outcome)
    }
}
