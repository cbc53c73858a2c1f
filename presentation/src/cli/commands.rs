//! CLI command definitions

use clap::{Parser, ValueEnum};
use duel_domain::AnswerGrammar;
use std::path::PathBuf;

/// Output format for duel results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every round with its validation attempts
    Full,
    /// Only the validated question and answer
    Question,
    /// JSON output
    Json,
}

impl From<OutputFormat> for duel_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => duel_domain::OutputFormat::Full,
            OutputFormat::Question => duel_domain::OutputFormat::Question,
            OutputFormat::Json => duel_domain::OutputFormat::Json,
        }
    }
}

/// Answer grammar accepted in model replies
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GrammarArg {
    /// `Answer: [X]`, brackets required
    Bracketed,
    /// Brackets optional
    Lenient,
    /// Rest of the line, verbatim
    Plain,
}

impl From<GrammarArg> for AnswerGrammar {
    fn from(arg: GrammarArg) -> Self {
        match arg {
            GrammarArg::Bracketed => AnswerGrammar::Bracketed,
            GrammarArg::Lenient => AnswerGrammar::Lenient,
            GrammarArg::Plain => AnswerGrammar::Plain,
        }
    }
}

/// CLI arguments for ai-duel
#[derive(Parser, Debug)]
#[command(name = "ai-duel")]
#[command(author, version, about = "AI Duel - A model writes a question it can answer reliably")]
#[command(long_about = r#"
AI Duel asks a generator model for a hard question together with its answer,
then checks that the question has one reproducible answer by putting it to a
solver model several times.

Each round has two steps:
1. Generation: the generator replies with 'Question: ...' and 'Answer: [...]'
2. Validation: the solver answers the question N times; every answer must match

Rounds repeat until a question validates or the round limit is reached.

Configuration files are loaded from (in priority order):
1. AI_DUEL_* environment variables (e.g. AI_DUEL_DUEL__MAX_ROUNDS=5)
2. --config <path>     Explicit config file
3. ./duel.toml         Project-level config
4. ~/.config/ai-duel/config.toml   Global config

Example:
  ai-duel
  ai-duel -g gpt-4o -s gpt-4o-mini -n 10 --collect-all
  ai-duel --fixture replies.txt --output json
"#)]
pub struct Cli {
    /// Model that writes the question
    #[arg(short, long, value_name = "MODEL")]
    pub generator: Option<String>,

    /// Model that answers the question (defaults to the generator)
    #[arg(short, long, value_name = "MODEL")]
    pub solver: Option<String>,

    /// Number of validation attempts per question
    #[arg(short = 'n', long, value_name = "N")]
    pub attempts: Option<usize>,

    /// Maximum number of generate → validate rounds
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<usize>,

    /// Make every validation attempt instead of stopping at the first mismatch
    #[arg(long)]
    pub collect_all: bool,

    /// Answer grammar for parsing replies
    #[arg(long, value_enum)]
    pub grammar: Option<GrammarArg>,

    /// Replay replies from a fixture file instead of calling a model
    /// (replies separated by lines containing only `---`)
    #[arg(long, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Print the generation prompt and exit
    #[arg(long)]
    pub print_prompt: bool,
}
