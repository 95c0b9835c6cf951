//! esqlwalk CLI
//!
//! Loads the JSON form of an ES|QL AST and inspects it with the esqlwalk
//! tree walker.

mod cli;
mod config;
mod error;
mod input;
mod output;
mod report;
mod trace;

use std::process::ExitCode;

use clap::Parser;
use esqlwalk_ast::{AstArena, commands, find_function, has_function, params, walker::walk};
use miette::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::config::WalkConfig;
use crate::error::CliError;
use crate::input::{load_ast, read_source};
use crate::report::Report;
use crate::trace::TraceVisitor;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(2)
        }
    }
}

/// Runs the selected subcommand. Returns `false` when a lookup found nothing.
fn run(cli: &Cli) -> Result<bool> {
    let config = load_config(cli)?;
    let format = cli.format.unwrap_or(config.format);

    let path = cli.command.file();
    let source = read_source(path)?;
    let arena = AstArena::with_capacity(source.len());
    let root = load_ast(&arena, &source, path)?;

    match &cli.command {
        Commands::Commands { .. } => {
            output::output_commands(&commands(root), format)?;
            Ok(true)
        }
        Commands::Params { .. } => {
            output::output_params(&params(root), format)?;
            Ok(true)
        }
        Commands::FindFunction { name, .. } => {
            match find_function(root, |function| function.name == name.as_str()) {
                Some(function) => {
                    output::output_function(function)?;
                    Ok(true)
                }
                None => {
                    info!("No function named {:?}", name);
                    Ok(false)
                }
            }
        }
        Commands::HasFunction { name, .. } => {
            let found = has_function(root, name);
            output::output_has_function(found, format)?;
            Ok(found)
        }
        Commands::Trace { .. } => {
            let events = walk(root, TraceVisitor::default()).into_visitor().events;
            output::output_trace(&events, format)?;
            Ok(true)
        }
        Commands::Report { .. } => {
            let report = Report::build(root, &config.functions);
            output::output_report(&report, format)?;
            Ok(true)
        }
    }
}

fn load_config(cli: &Cli) -> Result<WalkConfig, CliError> {
    if let Some(ref path) = cli.config {
        return Ok(WalkConfig::from_file(path)?);
    }

    if let Some(path) = WalkConfig::discover(".") {
        info!("Using config: {}", path.display());
        return Ok(WalkConfig::from_file(&path)?);
    }

    Ok(WalkConfig::default())
}
