//! # esqlwalk_ast
//!
//! ES|QL AST definitions and the tree walker for esqlwalk.
//!
//! This crate provides the node types produced by an ES|QL parser, rendered
//! as Rust sum types, and a single-pass, pre-order walker that dispatches
//! every reachable node to a per-kind visitor hook.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for Arena allocation
//! - All AST nodes of one query live in a single arena and are `Copy`
//! - The tree is read-only once built; the walker never mutates it
//! - Trees arrive either hand-built or through [`JsonLoader`]
//!
//! ## Example
//!
//! ```rust
//! use esqlwalk_ast::{AstArena, AstNode, Column, Command, Function, Literal};
//!
//! let arena = AstArena::new();
//! let cpu = arena.alloc(Column::new("cpu"));
//! let avg = arena.alloc(Function::new("avg", arena.alloc_slice_copy(&[cpu.into()])));
//! let param = arena.alloc(Literal::param("?1"));
//! let stats = arena.alloc(Command::new(
//!     "STATS",
//!     arena.alloc_slice_copy(&[avg.into(), param.into()]),
//! ));
//! let root = AstNode::from(stats);
//!
//! assert_eq!(esqlwalk_ast::commands(root).len(), 1);
//! assert_eq!(esqlwalk_ast::params(root).len(), 1);
//! assert!(esqlwalk_ast::has_function(root, "avg"));
//! assert!(!esqlwalk_ast::has_function(root, "sum"));
//! ```

mod arena;
mod error;
mod item;
mod json;
mod location;
mod node;
mod node_type;
pub mod walker;

pub use arena::AstArena;
pub use error::LoadError;
pub use item::{AstItem, AstNode, SingleAstItem};
pub use json::JsonLoader;
pub use location::Location;
pub use node::{
    Column, Command, CommandMode, CommandOption, Function, FunctionSubtype, InlineCast,
    ListLiteral, Literal, LiteralType, LiteralValue, OtherItem, ParamKind, Source, SourceType,
    TimeInterval, UnknownItem,
};
pub use node_type::NodeType;

// Re-export commonly used walker items for convenience
pub use walker::{
    VisitResult, Visitor, Walker, WalkerOptions, commands, find_function, has_function, params,
    try_walk, walk,
};
