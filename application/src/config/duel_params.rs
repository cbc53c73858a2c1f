//! Duel parameters: use case loop control.
//!
//! These are application-layer concerns: they bound the loops in
//! [`ValidateQuestionUseCase`](crate::use_cases::validate_question::ValidateQuestionUseCase)
//! and [`RunDuelUseCase`](crate::use_cases::run_duel::RunDuelUseCase).

use duel_domain::AnswerGrammar;

/// Validator loop control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationParams {
    /// Number of times the solver is asked the question.
    pub attempts: usize,
    /// Stop at the first wrong or unparseable answer. When false every
    /// attempt is made, which is useful to see how often a question fails.
    pub stop_on_first_mismatch: bool,
}

impl Default for ValidationParams {
    fn default() -> Self {
        Self {
            attempts: 5,
            stop_on_first_mismatch: true,
        }
    }
}

impl ValidationParams {
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts = attempts;
        self
    }

    /// Collect every attempt regardless of mismatches.
    pub fn collect_all(mut self) -> Self {
        self.stop_on_first_mismatch = false;
        self
    }
}

/// Driver loop control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuelParams {
    /// Maximum number of generate → validate rounds.
    pub max_rounds: usize,
    /// Grammar used for both the generator and solver replies.
    pub grammar: AnswerGrammar,
    pub validation: ValidationParams,
}

impl Default for DuelParams {
    fn default() -> Self {
        Self {
            max_rounds: 3,
            grammar: AnswerGrammar::default(),
            validation: ValidationParams::default(),
        }
    }
}

impl DuelParams {
    pub fn with_max_rounds(mut self, max: usize) -> Self {
        self.max_rounds = max;
        self
    }

    pub fn with_grammar(mut self, grammar: AnswerGrammar) -> Self {
        self.grammar = grammar;
        self
    }

    pub fn with_validation(mut self, validation: ValidationParams) -> Self {
        self.validation = validation;
        self
    }
}
