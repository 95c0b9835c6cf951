//! CLI error types

use std::path::PathBuf;

use esqlwalk_ast::LoadError;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CliError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load AST from {}: {source}", path.display())]
    #[diagnostic(help("the input must be the JSON form of an ES|QL AST"))]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}
