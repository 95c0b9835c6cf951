//! Extraction utilities. Each runs a single traversal over the tree.

use std::ops::ControlFlow;

use crate::{AstNode, Command, Function, Literal};

use super::options::WalkerOptions;
use super::visit::{VisitResult, Visitor};
use super::walk::walk;

/// Collects every command reachable from `root`, in traversal order.
///
/// Nested commands (a command inside another command's arguments) are
/// included.
pub fn commands<'a>(root: impl Into<Option<AstNode<'a>>>) -> Vec<&'a Command<'a>> {
    let mut found = Vec::new();
    walk(root, WalkerOptions::new().on_command(|node| found.push(node)));
    found
}

/// Collects every parameter literal reachable from `root`, in traversal
/// order.
pub fn params<'a>(root: impl Into<Option<AstNode<'a>>>) -> Vec<&'a Literal<'a>> {
    let mut found = Vec::new();
    walk(
        root,
        WalkerOptions::new().on_literal(|node| {
            if node.is_param() {
                found.push(node);
            }
        }),
    );
    found
}

struct FunctionFinder<'a, P> {
    predicate: P,
    found: Option<&'a Function<'a>>,
}

impl<'a, P> Visitor<'a> for FunctionFinder<'a, P>
where
    P: FnMut(&Function<'a>) -> bool,
{
    fn visit_function(&mut self, node: &'a Function<'a>) -> VisitResult {
        if (self.predicate)(node) {
            self.found = Some(node);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }
}

/// Returns the first function, in traversal order, that satisfies
/// `predicate`.
///
/// The walk stops at the first match, so a function is always found before
/// any function nested inside its arguments.
pub fn find_function<'a, P>(
    root: impl Into<Option<AstNode<'a>>>,
    predicate: P,
) -> Option<&'a Function<'a>>
where
    P: FnMut(&Function<'a>) -> bool,
{
    let finder = FunctionFinder {
        predicate,
        found: None,
    };
    walk(root, finder).into_visitor().found
}

/// Returns whether any function named exactly `name` is reachable from
/// `root`. The comparison is case-sensitive.
pub fn has_function<'a>(root: impl Into<Option<AstNode<'a>>>, name: &str) -> bool {
    find_function(root, |function| function.name == name).is_some()
}
