//! AST loading error types.

use thiserror::Error;

/// Errors that can occur while materializing an AST from JSON.
///
/// `path` is a JSONPath-like pointer to the offending node, e.g.
/// `$.args[0].args[1]`.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input is not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A node position holds something other than an object or array.
    #[error("Expected a node object or array at {path}, found {found}")]
    NotANode { path: String, found: &'static str },

    /// A node object has no string `type` tag.
    #[error("Node at {path} has no \"type\" tag")]
    MissingType { path: String },

    /// A field the node kind requires is absent.
    #[error("{node_type} node at {path} is missing required field \"{field}\"")]
    MissingField {
        path: String,
        node_type: &'static str,
        field: &'static str,
    },

    /// A field is present but has the wrong shape.
    #[error("Field \"{field}\" of node at {path} must be {expected}")]
    InvalidField {
        path: String,
        field: &'static str,
        expected: &'static str,
    },
}

impl LoadError {
    /// Returns the path of the offending node, if the error has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            LoadError::Json(_) => None,
            LoadError::NotANode { path, .. }
            | LoadError::MissingType { path }
            | LoadError::MissingField { path, .. }
            | LoadError::InvalidField { path, .. } => Some(path),
        }
    }
}
