//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// esqlwalk - Inspect ES|QL ASTs with a single-pass tree walker
#[derive(Parser)]
#[command(name = "esqlwalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (defaults to the configured format, then text)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every command in the tree
    Commands {
        /// JSON AST file, or `-` for stdin
        file: PathBuf,
    },

    /// List every parameter literal in the tree
    Params {
        /// JSON AST file, or `-` for stdin
        file: PathBuf,
    },

    /// Print the first function with the given name
    FindFunction {
        /// JSON AST file, or `-` for stdin
        file: PathBuf,

        /// Function name (case-sensitive)
        name: String,
    },

    /// Check whether a function with the given name exists
    HasFunction {
        /// JSON AST file, or `-` for stdin
        file: PathBuf,

        /// Function name (case-sensitive)
        name: String,
    },

    /// Print every visitor hook call in traversal order
    Trace {
        /// JSON AST file, or `-` for stdin
        file: PathBuf,
    },

    /// Summarize commands, parameters and configured functions
    Report {
        /// JSON AST file, or `-` for stdin
        file: PathBuf,
    },
}

impl Commands {
    /// The input file of the subcommand.
    pub fn file(&self) -> &PathBuf {
        match self {
            Commands::Commands { file }
            | Commands::Params { file }
            | Commands::FindFunction { file, .. }
            | Commands::HasFunction { file, .. }
            | Commands::Trace { file }
            | Commands::Report { file } => file,
        }
    }
}
