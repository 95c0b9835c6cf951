//! AST input loading

use std::io::Read;
use std::path::{Path, PathBuf};

use esqlwalk_ast::{AstArena, AstNode, JsonLoader};
use tracing::debug;

use crate::error::CliError;

/// Reads the AST source from `path`, or from stdin when `path` is `-`.
pub fn read_source(path: &Path) -> Result<String, CliError> {
    let read_error = |source| CliError::Read {
        path: path.to_path_buf(),
        source,
    };

    if path == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(read_error)?;
        Ok(source)
    } else {
        std::fs::read_to_string(path).map_err(read_error)
    }
}

/// Loads `source`, read from `path`, into `arena`.
pub fn load_ast<'a>(
    arena: &'a AstArena,
    source: &str,
    path: &Path,
) -> Result<Option<AstNode<'a>>, CliError> {
    debug!("Loading {} bytes from {}", source.len(), path.display());

    JsonLoader::new(arena)
        .load_str(source)
        .map_err(|source| CliError::Load {
            path: PathBuf::from(path),
            source,
        })
}
