//! CLI module for examscore
//!
//! Handles command-line argument parsing and log filter setup.

pub mod args;

pub use args::{Args, Commands, InputArgs, Verbosity};
