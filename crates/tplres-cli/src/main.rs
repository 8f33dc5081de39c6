//! CLI entry point - the composition root.
//!
//! Parses arguments, installs logging, loads configuration and dispatches to
//! a handler. The handler's exit code becomes the process exit code.

use clap::{CommandFactory, Parser};

use tplres_cli::error::exit_code_for;
use tplres_cli::handlers::{self, resolve::ResolveArgs};
use tplres_cli::{Cli, CliConfig, Commands, init_tracing};

fn run(cli: Cli) -> anyhow::Result<i32> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(0);
    };

    let config = CliConfig::load(cli.default_language.as_deref())?;

    match command {
        Commands::Resolve {
            manifest,
            language,
            detailed_help,
            json,
        } => {
            let args = ResolveArgs {
                manifest,
                language,
                detailed_help,
                json,
            };
            handlers::resolve::execute(&config, &args)
        }
        Commands::Groups { manifest, language } => {
            handlers::groups::execute(&config, &manifest, language.as_deref())
        }
        Commands::Contents { package } => handlers::contents::execute(&package),
    }
}

fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            exit_code_for(&err)
        }
    };

    std::process::exit(code);
}
