//! Main commands enum.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Choose the template to invoke from a manifest of matched templates
    Resolve {
        /// JSON manifest produced by the template matcher
        manifest: PathBuf,
        /// Language requested by the user (e.g. "C#", "F#")
        #[arg(short, long)]
        language: Option<String>,
        /// Show the templates to describe instead of the one to invoke
        #[arg(long)]
        detailed_help: bool,
        /// Print a machine-readable report
        #[arg(long)]
        json: bool,
    },

    /// Show how the matched templates group together
    Groups {
        /// JSON manifest produced by the template matcher
        manifest: PathBuf,
        /// Language requested by the user
        #[arg(short, long)]
        language: Option<String>,
    },

    /// List the files inside a template package
    Contents {
        /// Path to the package (zip container)
        package: PathBuf,
    },
}
