//! CLI adapter for tplres.
//!
//! Loads pre-matched templates, runs the core resolver and turns its verdict
//! into output and an exit code. No resolution decisions are made here.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod manifest;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, init_tracing};
pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
