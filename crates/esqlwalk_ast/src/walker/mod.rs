//! Tree walker for the ES|QL AST.
//!
//! The walker performs one depth-first, pre-order, left-to-right pass over a
//! tree and calls the visitor hook matching each node's kind.
//!
//! # Overview
//!
//! - [`Visitor`] - Read-only hooks, one per node kind, plus a catch-all
//! - [`WalkerOptions`] - Optional-callback bag implementing [`Visitor`]
//! - [`Walker`] - The traversal engine
//! - [`walk`] / [`try_walk`] - One-shot traversal entry points
//! - [`commands`], [`params`], [`find_function`], [`has_function`] - Extraction
//!   utilities built on a single traversal
//!
//! # Examples
//!
//! ## Counting Columns
//!
//! ```rust
//! use esqlwalk_ast::{AstArena, AstNode, Column, Command, Function};
//! use esqlwalk_ast::walker::{WalkerOptions, walk};
//!
//! let arena = AstArena::new();
//! let a = arena.alloc(Column::new("a"));
//! let b = arena.alloc(Column::new("b"));
//! let sum = arena.alloc(Function::new("+", arena.alloc_slice_copy(&[a.into(), b.into()])));
//! let eval = arena.alloc(Command::new("eval", arena.alloc_slice_copy(&[sum.into()])));
//!
//! let mut columns = 0;
//! walk(AstNode::from(eval), WalkerOptions::new().on_column(|_| columns += 1));
//! assert_eq!(columns, 2);
//! ```
//!
//! ## Early Termination
//!
//! ```rust
//! use esqlwalk_ast::{Function, VisitResult, Visitor};
//! use std::ops::ControlFlow;
//!
//! struct FirstOperator<'a> {
//!     found: Option<&'a Function<'a>>,
//! }
//!
//! impl<'a> Visitor<'a> for FirstOperator<'a> {
//!     fn visit_function(&mut self, node: &'a Function<'a>) -> VisitResult {
//!         if node.is_operator() {
//!             self.found = Some(node);
//!             return ControlFlow::Break(()); // Stop traversal
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//! ```

mod options;
mod query;
mod visit;
mod walk;

pub use options::WalkerOptions;
pub use query::{commands, find_function, has_function, params};
pub use visit::{VisitResult, Visitor};
pub use walk::{CommandWalker, Walker, try_walk, walk};
