//! Progress reporting for duel execution

use colored::Colorize;
use duel_application::ports::progress::DuelProgressNotifier;
use duel_domain::{AttemptOutcome, DuelRound, ExtractionError, Question, preview};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress during a duel with spinners and progress bars
pub struct ProgressReporter {
    multi: MultiProgress,
    round_bar: Mutex<Option<ProgressBar>>,
    round_label: Mutex<String>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            round_bar: Mutex::new(None),
            round_label: Mutex::new(String::new()),
        }
    }

    fn attempts_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn label(&self) -> String {
        self.round_label
            .lock()
            .map(|l| l.clone())
            .unwrap_or_default()
    }

    /// Replace the current bar, finishing the previous one in place.
    fn replace_bar(&self, bar: ProgressBar) {
        if let Ok(mut slot) = self.round_bar.lock() {
            if let Some(previous) = slot.take() {
                previous.finish();
            }
            *slot = Some(bar);
        }
    }

    fn with_bar(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(slot) = self.round_bar.lock()
            && let Some(bar) = slot.as_ref()
        {
            f(bar);
        }
    }

    fn finish_bar(&self, message: String) {
        if let Ok(mut slot) = self.round_bar.lock()
            && let Some(bar) = slot.take()
        {
            bar.finish_with_message(message);
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DuelProgressNotifier for ProgressReporter {
    fn on_round_start(&self, round: usize, max_rounds: usize) {
        let label = format!("Round {}/{}", round, max_rounds);
        if let Ok(mut current) = self.round_label.lock() {
            *current = label.clone();
        }

        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(label);
        pb.set_message("Generating question...");
        pb.enable_steady_tick(Duration::from_millis(100));
        self.replace_bar(pb);
    }

    fn on_question_generated(&self, _round: usize, question: &Question) {
        self.with_bar(|pb| pb.set_message(preview(question.text(), 50)));
    }

    fn on_generation_failed(&self, _round: usize, error: &ExtractionError) {
        self.finish_bar(format!("{} {}", "x".red(), error));
    }

    fn on_validation_start(&self, attempts: usize) {
        let pb = self.multi.add(ProgressBar::new(attempts as u64));
        pb.set_style(Self::attempts_style());
        pb.set_prefix(self.label());
        pb.set_message("Validating...");
        self.replace_bar(pb);
    }

    fn on_attempt_complete(&self, outcome: &AttemptOutcome) {
        self.with_bar(|pb| {
            let answer = outcome.answer.as_deref().unwrap_or("(no answer)");
            let status = if outcome.matched {
                format!("{} {}", "v".green(), answer)
            } else {
                format!("{} {}", "x".red(), answer)
            };
            pb.set_message(status);
            pb.inc(1);
        });
    }

    fn on_round_complete(&self, round: &DuelRound) {
        // Unparseable rounds already finished their bar
        if round.report.is_none() {
            return;
        }
        let message = if round.is_success() {
            "consistent!".green().to_string()
        } else {
            "inconsistent".red().to_string()
        };
        self.finish_bar(message);
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl DuelProgressNotifier for SimpleProgress {
    fn on_round_start(&self, round: usize, max_rounds: usize) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            format!("Round {}/{}", round, max_rounds).bold()
        );
    }

    fn on_question_generated(&self, _round: usize, question: &Question) {
        eprintln!("  {} {}", "Q:".bold(), preview(question.text(), 70));
    }

    fn on_generation_failed(&self, _round: usize, error: &ExtractionError) {
        eprintln!("  {} unparseable reply: {}", "x".red(), error);
    }

    fn on_validation_start(&self, attempts: usize) {
        eprintln!("  validating ({} attempts)", attempts);
    }

    fn on_attempt_complete(&self, outcome: &AttemptOutcome) {
        let answer = outcome.answer.as_deref().unwrap_or("(no answer)");
        if outcome.matched {
            eprintln!("  {} #{} {}", "v".green(), outcome.attempt, answer);
        } else {
            eprintln!("  {} #{} {}", "x".red(), outcome.attempt, answer);
        }
    }

    fn on_round_complete(&self, _round: &DuelRound) {
        eprintln!();
    }
}
