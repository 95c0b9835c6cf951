//! Optional-callback visitor.
//!
//! [`WalkerOptions`] is a bag of optional closures, one per node kind. Unset
//! callbacks are no-ops. Callbacks cannot stop the walk; a panicking callback
//! unwinds out of the traversal and nothing after it is visited.

use std::fmt;
use std::ops::ControlFlow;

use crate::{
    Column, Command, CommandMode, CommandOption, Function, InlineCast, ListLiteral, Literal,
    SingleAstItem, Source, TimeInterval, UnknownItem,
};

use super::visit::{VisitResult, Visitor};

type Hook<'o, T> = Option<Box<dyn FnMut(T) + 'o>>;

/// Callbacks for a walk, keyed by node kind.
///
/// `'a` is the lifetime of the tree, `'o` the lifetime of whatever the
/// closures borrow.
#[derive(Default)]
pub struct WalkerOptions<'a, 'o> {
    pub visit_command: Hook<'o, &'a Command<'a>>,
    pub visit_command_option: Hook<'o, &'a CommandOption<'a>>,
    pub visit_command_mode: Hook<'o, &'a CommandMode<'a>>,
    pub visit_single_ast_item: Hook<'o, SingleAstItem<'a>>,
    pub visit_source: Hook<'o, &'a Source<'a>>,
    pub visit_function: Hook<'o, &'a Function<'a>>,
    pub visit_column: Hook<'o, &'a Column<'a>>,
    pub visit_literal: Hook<'o, &'a Literal<'a>>,
    pub visit_list_literal: Hook<'o, &'a ListLiteral<'a>>,
    pub visit_time_interval_literal: Hook<'o, &'a TimeInterval<'a>>,
    pub visit_inline_cast: Hook<'o, &'a InlineCast<'a>>,
    pub visit_unknown: Hook<'o, &'a UnknownItem<'a>>,
}

macro_rules! builders {
    ($($(#[$doc:meta])* $method:ident => $field:ident: $arg:ty),* $(,)?) => {
        impl<'a, 'o> WalkerOptions<'a, 'o> {
            /// Creates options with no callbacks set.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$doc])*
                pub fn $method(mut self, hook: impl FnMut($arg) + 'o) -> Self {
                    self.$field = Some(Box::new(hook));
                    self
                }
            )*
        }

        impl fmt::Debug for WalkerOptions<'_, '_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let mut list = f.debug_list();
                $(
                    if self.$field.is_some() {
                        list.entry(&stringify!($field));
                    }
                )*
                list.finish()
            }
        }
    };
}

builders!(
    on_command => visit_command: &'a Command<'a>,
    on_command_option => visit_command_option: &'a CommandOption<'a>,
    on_command_mode => visit_command_mode: &'a CommandMode<'a>,
    /// Sets the catch-all callback, fired for every non-command node.
    on_single_ast_item => visit_single_ast_item: SingleAstItem<'a>,
    on_source => visit_source: &'a Source<'a>,
    on_function => visit_function: &'a Function<'a>,
    on_column => visit_column: &'a Column<'a>,
    on_literal => visit_literal: &'a Literal<'a>,
    on_list_literal => visit_list_literal: &'a ListLiteral<'a>,
    on_time_interval_literal => visit_time_interval_literal: &'a TimeInterval<'a>,
    on_inline_cast => visit_inline_cast: &'a InlineCast<'a>,
    on_unknown => visit_unknown: &'a UnknownItem<'a>,
);

fn fire<T>(hook: &mut Hook<'_, T>, node: T) -> VisitResult {
    if let Some(hook) = hook {
        hook(node);
    }
    ControlFlow::Continue(())
}

impl<'a> Visitor<'a> for WalkerOptions<'a, '_> {
    fn visit_command(&mut self, node: &'a Command<'a>) -> VisitResult {
        fire(&mut self.visit_command, node)
    }

    fn visit_command_option(&mut self, node: &'a CommandOption<'a>) -> VisitResult {
        fire(&mut self.visit_command_option, node)
    }

    fn visit_command_mode(&mut self, node: &'a CommandMode<'a>) -> VisitResult {
        fire(&mut self.visit_command_mode, node)
    }

    fn visit_single_ast_item(&mut self, node: SingleAstItem<'a>) -> VisitResult {
        fire(&mut self.visit_single_ast_item, node)
    }

    fn visit_source(&mut self, node: &'a Source<'a>) -> VisitResult {
        fire(&mut self.visit_source, node)
    }

    fn visit_function(&mut self, node: &'a Function<'a>) -> VisitResult {
        fire(&mut self.visit_function, node)
    }

    fn visit_column(&mut self, node: &'a Column<'a>) -> VisitResult {
        fire(&mut self.visit_column, node)
    }

    fn visit_literal(&mut self, node: &'a Literal<'a>) -> VisitResult {
        fire(&mut self.visit_literal, node)
    }

    fn visit_list_literal(&mut self, node: &'a ListLiteral<'a>) -> VisitResult {
        fire(&mut self.visit_list_literal, node)
    }

    fn visit_time_interval_literal(&mut self, node: &'a TimeInterval<'a>) -> VisitResult {
        fire(&mut self.visit_time_interval_literal, node)
    }

    fn visit_inline_cast(&mut self, node: &'a InlineCast<'a>) -> VisitResult {
        fire(&mut self.visit_inline_cast, node)
    }

    fn visit_unknown(&mut self, node: &'a UnknownItem<'a>) -> VisitResult {
        fire(&mut self.visit_unknown, node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::walk;
    use crate::{AstArena, AstNode, LiteralType};
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn where_clause(arena: &AstArena) -> AstNode<'_> {
        // WHERE a > 1
        let a = arena.alloc(Column::new("a"));
        let one = arena.alloc(Literal::new(LiteralType::Integer, "1"));
        let gt = arena.alloc(Function::new(">", arena.alloc_slice_copy(&[a.into(), one.into()])));
        let command = arena.alloc(Command::new("where", arena.alloc_slice_copy(&[gt.into()])));
        AstNode::from(command)
    }

    #[test]
    fn unset_callbacks_are_no_ops() {
        let arena = AstArena::new();
        let walker = walk(where_clause(&arena), WalkerOptions::new());

        assert_eq!(format!("{:?}", walker.visitor()), "[]");
    }

    #[test]
    fn callbacks_fire_in_traversal_order() {
        let arena = AstArena::new();
        let events = RefCell::new(Vec::new());
        let options = WalkerOptions::new()
            .on_command(|node| events.borrow_mut().push(format!("command {}", node.name)))
            .on_single_ast_item(|node| {
                events.borrow_mut().push(format!("single {}", node.type_tag()));
            })
            .on_function(|node| events.borrow_mut().push(format!("function {}", node.name)))
            .on_column(|node| events.borrow_mut().push(format!("column {}", node.name)))
            .on_literal(|node| events.borrow_mut().push(format!("literal {}", node.value)));
        walk(where_clause(&arena), options);

        assert_eq!(
            events.into_inner(),
            vec![
                "command where",
                "single function",
                "function >",
                "single column",
                "column a",
                "single literal",
                "literal 1",
            ]
        );
    }

    #[test]
    fn debug_lists_set_callbacks() {
        let options = WalkerOptions::new().on_column(|_| {}).on_unknown(|_| {});

        assert_eq!(format!("{options:?}"), r#"["visit_column", "visit_unknown"]"#);
    }

    #[test]
    #[should_panic(expected = "stop at column")]
    fn panicking_callback_aborts_the_walk() {
        let arena = AstArena::new();
        walk(
            where_clause(&arena),
            WalkerOptions::new().on_column(|_| panic!("stop at column")),
        );
    }
}
