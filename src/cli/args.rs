//! Command-line argument parsing for examscore
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use crate::types::StudentInputs;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// examscore - Predict an exam score from study and lifestyle habits
#[derive(Parser, Debug)]
#[command(name = "examscore")]
#[command(version)]
#[command(about = "Predict a student's exam score and suggest improvements", long_about = None)]
pub struct Args {
    /// Model artifact path (overrides config)
    #[arg(short, long, global = true)]
    pub model: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress everything except results)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand (interactive mode if omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict an exam score and show recommendations
    Predict {
        #[command(flatten)]
        inputs: InputArgs,

        /// Print the prediction record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check inputs without predicting
    Validate {
        #[command(flatten)]
        inputs: InputArgs,
    },

    /// Fill in the form interactively and predict repeatedly
    Interactive,

    /// Run model and configuration health checks
    Doctor,

    /// Display current configuration
    Config,
}

/// The five prediction inputs
#[derive(ClapArgs, Debug, Clone)]
pub struct InputArgs {
    /// Average hours spent studying per day
    #[arg(long, allow_negative_numbers = true)]
    pub study_hours: f64,

    /// Percentage of classes attended
    #[arg(long, allow_negative_numbers = true)]
    pub attendance: f64,

    /// Mental health rating (1=poor, 10=excellent)
    #[arg(long, allow_negative_numbers = true)]
    pub mental_health: i32,

    /// Average hours of sleep per night
    #[arg(long, allow_negative_numbers = true)]
    pub sleep_hours: f64,

    /// Student has a part-time job
    #[arg(long)]
    pub part_time_job: bool,
}

impl From<&InputArgs> for StudentInputs {
    fn from(args: &InputArgs) -> Self {
        StudentInputs::new(
            args.study_hours,
            args.attendance,
            args.mental_health,
            args.sleep_hours,
            args.part_time_job,
        )
    }
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Default tracing filter directive for this level
    pub fn log_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "examscore=error",
            Verbosity::Normal => "examscore=info",
            Verbosity::Verbose => "examscore=debug",
            Verbosity::VeryVerbose => "examscore=trace",
        }
    }

    /// Check if should show spinners and summaries
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should show detailed events
    pub fn show_events(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }
}
