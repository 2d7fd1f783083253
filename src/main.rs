//! examscore - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use examscore::{
    cli::{Args, Commands, Verbosity},
    config::Config,
    doctor::Doctor,
    repl::{DisplayManager, ReplSession},
    session::{ModelStatus, ScoringSession, SubmissionOutcome},
    telemetry::{TelemetryCollector, TelemetryDisplay},
    types::StudentInputs,
    validation::validate,
};
use serde_json::json;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    let args = Args::parse();
    let verbosity = args.verbosity();

    init_tracing(verbosity)?;

    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(model) = &args.model {
        config.set_model_path(model.clone());
    }
    config.validate()?;

    if args.no_color || !config.display.color {
        colored::control::set_override(false);
    }

    debug!(model = %config.model_path().display(), verbosity = verbosity.as_str(), "Starting");

    match &args.command {
        Some(Commands::Predict { inputs, json }) => {
            run_predict(&config, verbosity, StudentInputs::from(inputs), *json)
        }
        Some(Commands::Validate { inputs }) => {
            run_validate(StudentInputs::from(inputs));
            Ok(())
        }
        Some(Commands::Doctor) => run_doctor(&args, &config),
        Some(Commands::Config) => run_config(&args, &config),
        Some(Commands::Interactive) | None => run_interactive(&config, verbosity),
    }
}

/// Install the tracing subscriber; RUST_LOG wins over -v/-q
fn init_tracing(verbosity: Verbosity) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("warn").add_directive(verbosity.log_directive().parse()?),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

/// One explicit submission from command-line inputs
fn run_predict(config: &Config, verbosity: Verbosity, inputs: StudentInputs, as_json: bool) -> Result<()> {
    let session = ScoringSession::start(config.model_path(), TelemetryCollector::new());
    let display = DisplayManager::new(config.display.clone(), verbosity.show_progress() && !as_json);

    if let ModelStatus::Unavailable { reason } = session.status() {
        if !as_json {
            display.show_warning(reason);
        }
    }

    let spinner = display.start_prediction();
    let outcome = session.submit(inputs);
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if as_json {
        let value = match &outcome {
            SubmissionOutcome::Scored(scored) => serde_json::to_value(scored.to_record())?,
            SubmissionOutcome::Rejected(errors) => json!({ "errors": errors }),
            SubmissionOutcome::Unavailable(err) => json!({ "error": err.to_string() }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        display.show_outcome(&outcome);
    }

    Ok(())
}

/// Validation only; never loads the model
fn run_validate(inputs: StudentInputs) {
    let errors = validate(&inputs);
    let display = DisplayManager::new(Default::default(), false);
    if errors.is_empty() {
        display.show_info("All inputs are valid.");
    } else {
        display.show_validation_errors(&errors);
    }
}

fn run_interactive(config: &Config, verbosity: Verbosity) -> Result<()> {
    let telemetry = TelemetryCollector::new();
    let session = ScoringSession::start(config.model_path(), telemetry.clone());
    let display = DisplayManager::new(config.display.clone(), verbosity.show_progress());

    if let ModelStatus::Unavailable { reason } = session.status() {
        display.show_error(reason);
        display.show_warning("Predictions are unavailable; inputs will still be validated.");
    }

    ReplSession::new(&session, display)?.run()?;

    TelemetryDisplay::new(telemetry, verbosity).display_summary();
    Ok(())
}

fn run_doctor(args: &Args, config: &Config) -> Result<()> {
    let doctor = Doctor::new(args.config.clone(), config.model_path().to_path_buf());
    let checks = doctor.run_diagnostics();
    Doctor::display_results(&checks);

    if !Doctor::overall_status(&checks) {
        anyhow::bail!("One or more health checks failed");
    }
    Ok(())
}

fn run_config(args: &Args, config: &Config) -> Result<()> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };
    println!("# {}", path.display());
    println!(
        "{}",
        toml::to_string_pretty(config).context("Failed to serialize config")?
    );
    Ok(())
}
