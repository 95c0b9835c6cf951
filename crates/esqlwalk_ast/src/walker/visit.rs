//! Visitor trait for traversing ES|QL AST nodes.
//!
//! Hooks only observe nodes: descending into children is the walker's job,
//! so a hook never has to call back into the traversal.

use std::ops::ControlFlow;

use crate::{
    Column, Command, CommandMode, CommandOption, Function, InlineCast, ListLiteral, Literal,
    SingleAstItem, Source, TimeInterval, UnknownItem,
};

/// Result type for visitor hooks to control traversal.
///
/// - `ControlFlow::Continue(())` - keep walking
/// - `ControlFlow::Break(())` - abort the remaining traversal
pub type VisitResult = ControlFlow<()>;

/// Read-only hooks invoked by the [`Walker`](super::Walker).
///
/// Every hook defaults to `Continue`, so implementors override only the node
/// kinds they care about. Node references carry the arena lifetime `'a`, so a
/// visitor may keep them beyond the traversal.
///
/// # Control Flow
///
/// Returning `Break` from any hook stops the walk at once; no further hook is
/// called and the `Break` is handed back to the caller of the walk.
pub trait Visitor<'a> {
    /// Called for every command, before its arguments are walked.
    fn visit_command(&mut self, _node: &'a Command<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called for every option, before its arguments are walked.
    fn visit_command_option(&mut self, _node: &'a CommandOption<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    fn visit_command_mode(&mut self, _node: &'a CommandMode<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Catch-all hook, called for every non-command node before its
    /// kind-specific hook. Unrecognized nodes reach only this hook.
    fn visit_single_ast_item(&mut self, _node: SingleAstItem<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    fn visit_source(&mut self, _node: &'a Source<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called for every function, before its arguments are walked.
    fn visit_function(&mut self, _node: &'a Function<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    fn visit_column(&mut self, _node: &'a Column<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called for scalar literals and parameter placeholders alike; inspect
    /// [`Literal::literal_type`] to tell them apart.
    fn visit_literal(&mut self, _node: &'a Literal<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called for every list literal, before its values are walked.
    fn visit_list_literal(&mut self, _node: &'a ListLiteral<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    fn visit_time_interval_literal(&mut self, _node: &'a TimeInterval<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called for inline casts. The cast operand is not walked.
    fn visit_inline_cast(&mut self, _node: &'a InlineCast<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    fn visit_unknown(&mut self, _node: &'a UnknownItem<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }
}

impl<'a, V: Visitor<'a> + ?Sized> Visitor<'a> for &mut V {
    #[inline]
    fn visit_command(&mut self, node: &'a Command<'a>) -> VisitResult {
        (**self).visit_command(node)
    }

    #[inline]
    fn visit_command_option(&mut self, node: &'a CommandOption<'a>) -> VisitResult {
        (**self).visit_command_option(node)
    }

    #[inline]
    fn visit_command_mode(&mut self, node: &'a CommandMode<'a>) -> VisitResult {
        (**self).visit_command_mode(node)
    }

    #[inline]
    fn visit_single_ast_item(&mut self, node: SingleAstItem<'a>) -> VisitResult {
        (**self).visit_single_ast_item(node)
    }

    #[inline]
    fn visit_source(&mut self, node: &'a Source<'a>) -> VisitResult {
        (**self).visit_source(node)
    }

    #[inline]
    fn visit_function(&mut self, node: &'a Function<'a>) -> VisitResult {
        (**self).visit_function(node)
    }

    #[inline]
    fn visit_column(&mut self, node: &'a Column<'a>) -> VisitResult {
        (**self).visit_column(node)
    }

    #[inline]
    fn visit_literal(&mut self, node: &'a Literal<'a>) -> VisitResult {
        (**self).visit_literal(node)
    }

    #[inline]
    fn visit_list_literal(&mut self, node: &'a ListLiteral<'a>) -> VisitResult {
        (**self).visit_list_literal(node)
    }

    #[inline]
    fn visit_time_interval_literal(&mut self, node: &'a TimeInterval<'a>) -> VisitResult {
        (**self).visit_time_interval_literal(node)
    }

    #[inline]
    fn visit_inline_cast(&mut self, node: &'a InlineCast<'a>) -> VisitResult {
        (**self).visit_inline_cast(node)
    }

    #[inline]
    fn visit_unknown(&mut self, node: &'a UnknownItem<'a>) -> VisitResult {
        (**self).visit_unknown(node)
    }
}
