//! CLI entrypoint for AI Duel
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use duel_application::{
    CompletionClient, DuelParams, DuelProgressNotifier, NoProgress, RunDuelUseCase,
};
use duel_domain::{ConfigIssue, DuelPromptTemplate, Model, OutputFormat};
use duel_infrastructure::{
    ConfigLoader, FileConfig, OpenAiCompletionClient, ScriptedCompletionClient,
};
use duel_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    report_config_issues(&config.validate())?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let params = duel_params(&cli, &config);

    if cli.print_prompt {
        println!("{}", DuelPromptTemplate::generation(params.grammar));
        return Ok(());
    }

    if params.max_rounds == 0 {
        bail!("--rounds must be at least 1");
    }
    if params.validation.attempts == 0 {
        bail!("--attempts must be at least 1");
    }

    let generator_model = select_model("generator", cli.generator.as_ref(), &config)?
        .unwrap_or_default();
    let solver_model = select_model("solver", cli.solver.as_ref(), &config)?
        .unwrap_or_else(|| generator_model.clone());

    info!("Starting AI Duel");

    // === Dependency Injection ===
    let (generator, solver) = build_clients(&cli, &config, generator_model, solver_model)?;
    let use_case = RunDuelUseCase::new(generator, solver);

    let progress: Box<dyn DuelProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let outcome = use_case
        .execute_with_progress(params, &*progress)
        .await
        .context("Duel aborted")?;

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();
    let output = match format {
        OutputFormat::Full => ConsoleFormatter::format(&outcome),
        OutputFormat::Question => ConsoleFormatter::format_question_only(&outcome),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
    };
    println!("{}", output);

    if !outcome.is_success() {
        bail!(
            "No question validated after {} round(s)",
            outcome.rounds_played()
        );
    }

    Ok(())
}

/// Print every issue; fail if any is an error.
fn report_config_issues(issues: &[ConfigIssue]) -> Result<()> {
    for issue in issues {
        if issue.is_error() {
            eprintln!("config error: {}", issue.message);
        } else {
            warn!("{}", issue.message);
        }
    }

    let errors = issues.iter().filter(|i| i.is_error()).count();
    if errors > 0 {
        bail!("Invalid configuration ({} error(s))", errors);
    }
    Ok(())
}

/// Config file values with CLI flags layered on top.
fn duel_params(cli: &Cli, config: &FileConfig) -> DuelParams {
    let (mut params, _) = config.duel.to_params();

    if let Some(rounds) = cli.rounds {
        params.max_rounds = rounds;
    }
    if let Some(attempts) = cli.attempts {
        params.validation.attempts = attempts;
    }
    if cli.collect_all {
        params.validation = params.validation.collect_all();
    }
    if let Some(grammar) = cli.grammar {
        params.grammar = grammar.into();
    }

    params
}

/// CLI flag first, then `[models]`; `None` when neither is set.
fn select_model(role: &str, flag: Option<&String>, config: &FileConfig) -> Result<Option<Model>> {
    if let Some(name) = flag {
        if name.trim().is_empty() {
            bail!("--{} needs a model name", role);
        }
        let Ok(model) = name.trim().parse::<Model>();
        return Ok(Some(model));
    }

    let (model, _) = match role {
        "generator" => config.models.parse_generator(),
        _ => config.models.parse_solver(),
    };
    Ok(model)
}

fn build_clients(
    cli: &Cli,
    config: &FileConfig,
    generator_model: Model,
    solver_model: Model,
) -> Result<(Arc<dyn CompletionClient>, Arc<dyn CompletionClient>)> {
    if let Some(path) = &cli.fixture {
        info!("Replaying replies from {}", path.display());
        let generator = ScriptedCompletionClient::from_file(generator_model, path)?;
        let solver = generator.for_model(solver_model);
        return Ok((Arc::new(generator), Arc::new(solver)));
    }

    let generator = OpenAiCompletionClient::new(generator_model, &config.provider)?;
    let solver = generator.for_model(solver_model);
    Ok((Arc::new(generator), Arc::new(solver)))
}
