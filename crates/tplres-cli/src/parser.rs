//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the template resolution tool.
#[derive(Parser)]
#[command(name = "tplres")]
#[command(about = "Pick the template to invoke from pre-matched candidates")]
#[command(version)]
pub struct Cli {
    /// Override the default language for this invocation
    #[arg(long = "default-language", global = true)]
    pub default_language: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
