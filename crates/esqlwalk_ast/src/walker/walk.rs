//! Traversal engine.
//!
//! [`Walker`] dispatches every reachable node to its [`Visitor`]. Sequences
//! are unwound structurally by recursion, at any nesting depth. Recursion
//! depth is bounded by the nesting depth of the tree.

use std::collections::HashMap;
use std::ops::ControlFlow;

use crate::{
    AstItem, AstNode, Command, CommandMode, CommandOption, Function, ListLiteral, SingleAstItem,
};

use super::visit::{VisitResult, Visitor};

/// Custom traversal for the arguments of one command name.
///
/// Called after `visit_command` has fired for the command. It decides how
/// (and whether) the command's arguments are walked.
pub type CommandWalker<'a, V> = fn(&mut Walker<'a, V>, &'a Command<'a>) -> VisitResult;

/// Transient traversal engine bound to one visitor.
///
/// Holds no state between walks other than what the visitor accumulates.
pub struct Walker<'a, V> {
    visitor: V,
    command_walkers: HashMap<String, CommandWalker<'a, V>>,
}

impl<'a, V: Visitor<'a>> Walker<'a, V> {
    /// Creates a walker for `visitor`.
    pub fn new(visitor: V) -> Self {
        Self {
            visitor,
            command_walkers: HashMap::new(),
        }
    }

    /// Registers a custom argument traversal for commands named `name`
    /// (ASCII case-insensitive). Commands without one recurse into their
    /// arguments.
    pub fn with_command_walker(mut self, name: &str, walker: CommandWalker<'a, V>) -> Self {
        self.command_walkers
            .insert(name.to_ascii_lowercase(), walker);
        self
    }

    /// Returns the bound visitor.
    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    /// Consumes the walker and returns its visitor.
    pub fn into_visitor(self) -> V {
        self.visitor
    }

    /// Walks a root that may be absent. `None` visits nothing.
    pub fn walk_root(&mut self, root: impl Into<Option<AstNode<'a>>>) -> VisitResult {
        match root.into() {
            Some(node) => self.walk(node),
            None => ControlFlow::Continue(()),
        }
    }

    /// Walks a node, a command, or a (nested) sequence of nodes.
    pub fn walk(&mut self, node: AstNode<'a>) -> VisitResult {
        match node {
            AstNode::Seq(nodes) => self.walk_all(nodes),
            AstNode::Command(command) => self.walk_command(command),
            AstNode::Single(item) => self.walk_single_ast_item(item),
        }
    }

    /// Walks each node of a sequence in order.
    pub fn walk_all(&mut self, nodes: &'a [AstNode<'a>]) -> VisitResult {
        for node in nodes {
            self.walk(*node)?;
        }
        ControlFlow::Continue(())
    }

    /// Visits a command, then walks its arguments.
    pub fn walk_command(&mut self, node: &'a Command<'a>) -> VisitResult {
        self.visitor.visit_command(node)?;
        match self.command_walker(node.name) {
            Some(custom) => custom(self, node),
            None => self.walk_command_args(node),
        }
    }

    /// Default argument traversal of a command: recurse into `args`.
    pub fn walk_command_args(&mut self, node: &'a Command<'a>) -> VisitResult {
        self.walk_all(node.args)
    }

    /// Visits an option, then walks its arguments.
    pub fn walk_option(&mut self, node: &'a CommandOption<'a>) -> VisitResult {
        self.visitor.visit_command_option(node)?;
        for arg in node.args {
            self.walk_ast_item(*arg)?;
        }
        ControlFlow::Continue(())
    }

    /// Visits a mode. Modes have no children.
    pub fn walk_mode(&mut self, node: &'a CommandMode<'a>) -> VisitResult {
        self.visitor.visit_command_mode(node)
    }

    /// Walks an argument slot: a single item, or a sequence unwound
    /// element by element.
    pub fn walk_ast_item(&mut self, item: AstItem<'a>) -> VisitResult {
        match item {
            AstItem::Seq(items) => {
                for item in items {
                    self.walk_ast_item(*item)?;
                }
                ControlFlow::Continue(())
            }
            AstItem::Single(item) => self.walk_single_ast_item(item),
        }
    }

    /// Visits a list literal, then walks its values.
    pub fn walk_list_literal(&mut self, node: &'a ListLiteral<'a>) -> VisitResult {
        self.visitor.visit_list_literal(node)?;
        for value in node.values {
            self.walk_ast_item(*value)?;
        }
        ControlFlow::Continue(())
    }

    /// Fires the catch-all hook, then dispatches on the node kind.
    pub fn walk_single_ast_item(&mut self, node: SingleAstItem<'a>) -> VisitResult {
        self.visitor.visit_single_ast_item(node)?;
        match node {
            SingleAstItem::Function(function) => self.walk_function(function),
            SingleAstItem::Option(option) => self.walk_option(option),
            SingleAstItem::Mode(mode) => self.walk_mode(mode),
            SingleAstItem::Source(source) => self.visitor.visit_source(source),
            SingleAstItem::Column(column) => self.visitor.visit_column(column),
            SingleAstItem::Literal(literal) => self.visitor.visit_literal(literal),
            SingleAstItem::List(list) => self.walk_list_literal(list),
            SingleAstItem::TimeInterval(interval) => {
                self.visitor.visit_time_interval_literal(interval)
            }
            SingleAstItem::InlineCast(cast) => self.visitor.visit_inline_cast(cast),
            SingleAstItem::Unknown(unknown) => self.visitor.visit_unknown(unknown),
            SingleAstItem::Other(_) => ControlFlow::Continue(()),
        }
    }

    /// Visits a function, then walks its arguments in index order.
    pub fn walk_function(&mut self, node: &'a Function<'a>) -> VisitResult {
        self.visitor.visit_function(node)?;
        for arg in node.args {
            self.walk_ast_item(*arg)?;
        }
        ControlFlow::Continue(())
    }

    fn command_walker(&self, name: &str) -> Option<CommandWalker<'a, V>> {
        if self.command_walkers.is_empty() {
            return None;
        }
        self.command_walkers
            .get(&name.to_ascii_lowercase())
            .copied()
    }
}

/// Walks `root` with `visitor` and returns the walker.
///
/// An absent root or an empty sequence visits nothing. If a hook breaks, the
/// rest of the tree is skipped; use [`try_walk`] to learn whether that
/// happened.
pub fn walk<'a, V: Visitor<'a>>(root: impl Into<Option<AstNode<'a>>>, visitor: V) -> Walker<'a, V> {
    try_walk(root, visitor).0
}

/// Walks `root` with `visitor`, returning the walker and the traversal result.
pub fn try_walk<'a, V: Visitor<'a>>(
    root: impl Into<Option<AstNode<'a>>>,
    visitor: V,
) -> (Walker<'a, V>, VisitResult) {
    let mut walker = Walker::new(visitor);
    let result = walker.walk_root(root);
    (walker, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AstArena, Column, Literal, LiteralType, OtherItem, Source, TimeInterval};
    use pretty_assertions::assert_eq;

    /// Records every hook call as `<kind> <name>`.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
    }

    impl<'a> Visitor<'a> for Recorder {
        fn visit_command(&mut self, node: &'a Command<'a>) -> VisitResult {
            self.events.push(format!("command {}", node.name));
            ControlFlow::Continue(())
        }

        fn visit_command_option(&mut self, node: &'a CommandOption<'a>) -> VisitResult {
            self.events.push(format!("option {}", node.name));
            ControlFlow::Continue(())
        }

        fn visit_single_ast_item(&mut self, node: SingleAstItem<'a>) -> VisitResult {
            self.events.push(format!("single {}", node.type_tag()));
            ControlFlow::Continue(())
        }

        fn visit_function(&mut self, node: &'a Function<'a>) -> VisitResult {
            self.events.push(format!("function {}", node.name));
            ControlFlow::Continue(())
        }

        fn visit_column(&mut self, node: &'a Column<'a>) -> VisitResult {
            self.events.push(format!("column {}", node.name));
            ControlFlow::Continue(())
        }

        fn visit_literal(&mut self, node: &'a Literal<'a>) -> VisitResult {
            self.events.push(format!("literal {}", node.value));
            ControlFlow::Continue(())
        }

        fn visit_list_literal(&mut self, node: &'a ListLiteral<'a>) -> VisitResult {
            self.events.push(format!("list {}", node.name));
            ControlFlow::Continue(())
        }
    }

    #[test]
    fn walk_visits_function_args_in_pre_order() {
        // STATS f(x, y), b
        let arena = AstArena::new();
        let x = arena.alloc(Column::new("x"));
        let y = arena.alloc(Column::new("y"));
        let b = arena.alloc(Column::new("b"));
        let f = arena.alloc(Function::new("f", arena.alloc_slice_copy(&[x.into(), y.into()])));
        let stats = arena.alloc(Command::new(
            "stats",
            arena.alloc_slice_copy(&[f.into(), b.into()]),
        ));

        let walker = walk(AstNode::from(stats), Recorder::default());

        assert_eq!(
            walker.into_visitor().events,
            vec![
                "command stats",
                "single function",
                "function f",
                "single column",
                "column x",
                "single column",
                "column y",
                "single column",
                "column b",
            ]
        );
    }

    #[test]
    fn walk_absent_or_empty_root_visits_nothing() {
        let walker = walk(None::<AstNode<'_>>, Recorder::default());
        assert!(walker.visitor().events.is_empty());

        let walker = walk(AstNode::Seq(&[]), Recorder::default());
        assert!(walker.visitor().events.is_empty());
    }

    #[test]
    fn walk_unwinds_nested_sequences() {
        let arena = AstArena::new();
        let a = arena.alloc(Column::new("a"));
        let b = arena.alloc(Column::new("b"));
        let c = arena.alloc(Column::new("c"));
        let innermost = arena.alloc_slice_copy(&[AstItem::from(b)]);
        let inner = arena.alloc_slice_copy(&[AstItem::Seq(innermost), AstItem::from(c)]);
        let f = arena.alloc(Function::new(
            "f",
            arena.alloc_slice_copy(&[a.into(), AstItem::Seq(inner)]),
        ));
        let roots = arena.alloc_slice_copy(&[AstNode::Seq(
            arena.alloc_slice_copy(&[AstNode::from(f)]),
        )]);

        let walker = walk(AstNode::Seq(roots), Recorder::default());

        let columns: Vec<_> = walker
            .visitor()
            .events
            .iter()
            .filter(|event| event.starts_with("column"))
            .cloned()
            .collect();
        assert_eq!(columns, vec!["column a", "column b", "column c"]);
    }

    #[test]
    fn walk_list_values_and_option_args() {
        let arena = AstArena::new();
        let one = arena.alloc(Literal::new(LiteralType::Integer, "1"));
        let param = arena.alloc(Literal::param("?p"));
        let list = arena.alloc(ListLiteral::new(
            "(1, ?p)",
            arena.alloc_slice_copy(&[one.into(), param.into()]),
        ));
        let host = arena.alloc(Column::new("host"));
        let by = arena.alloc(CommandOption::new("by", arena.alloc_slice_copy(&[host.into()])));
        let roots = arena.alloc_slice_copy(&[AstNode::from(list), AstNode::from(by)]);

        let walker = walk(AstNode::Seq(roots), Recorder::default());

        assert_eq!(
            walker.into_visitor().events,
            vec![
                "single list",
                "list (1, ?p)",
                "single literal",
                "literal 1",
                "single literal",
                "literal ?p",
                "single option",
                "option by",
                "single column",
                "column host",
            ]
        );
    }

    #[test]
    fn walk_leaf_kinds_reach_their_hooks() {
        #[derive(Default)]
        struct LeafCounter {
            sources: usize,
            modes: usize,
            intervals: usize,
        }

        impl<'a> Visitor<'a> for LeafCounter {
            fn visit_source(&mut self, _node: &'a Source<'a>) -> VisitResult {
                self.sources += 1;
                ControlFlow::Continue(())
            }

            fn visit_command_mode(&mut self, _node: &'a CommandMode<'a>) -> VisitResult {
                self.modes += 1;
                ControlFlow::Continue(())
            }

            fn visit_time_interval_literal(&mut self, _node: &'a TimeInterval<'a>) -> VisitResult {
                self.intervals += 1;
                ControlFlow::Continue(())
            }
        }

        let arena = AstArena::new();
        let mode = arena.alloc(CommandMode::new("_any"));
        let source = arena.alloc(Source::policy("hosts"));
        let hour = arena.alloc(TimeInterval::new("1 hour", 1, "hour"));
        let args = arena.alloc_slice_copy(&[mode.into(), source.into(), hour.into()]);
        let enrich = arena.alloc(Command::new("enrich", args));

        let counter = walk(AstNode::from(enrich), LeafCounter::default()).into_visitor();

        assert_eq!((counter.sources, counter.modes, counter.intervals), (1, 1, 1));
    }

    #[test]
    fn walk_other_items_reach_only_the_catch_all() {
        let arena = AstArena::new();
        let other = arena.alloc(OtherItem::new("identifier", "x"));

        let walker = walk(AstNode::from(other), Recorder::default());

        assert_eq!(walker.into_visitor().events, vec!["single identifier"]);
    }

    #[test]
    fn walk_command_in_command_args_is_dispatched_as_command() {
        let arena = AstArena::new();
        let inner = arena.alloc(Command::new("row", &[]));
        let outer = arena.alloc(Command::new("fork", arena.alloc_slice_copy(&[inner.into()])));

        let walker = walk(AstNode::from(outer), Recorder::default());

        assert_eq!(walker.into_visitor().events, vec!["command fork", "command row"]);
    }

    #[test]
    fn break_aborts_remaining_traversal() {
        struct StopAtColumn {
            seen: Vec<String>,
        }

        impl<'a> Visitor<'a> for StopAtColumn {
            fn visit_single_ast_item(&mut self, node: SingleAstItem<'a>) -> VisitResult {
                self.seen.push(node.name().to_string());
                if node.name() == "stop" {
                    return ControlFlow::Break(());
                }
                ControlFlow::Continue(())
            }
        }

        let arena = AstArena::new();
        let before = arena.alloc(Column::new("before"));
        let stop = arena.alloc(Column::new("stop"));
        let after = arena.alloc(Column::new("after"));
        let args = arena.alloc_slice_copy(&[before.into(), stop.into(), after.into()]);
        let keep = arena.alloc(Command::new("keep", args));

        let (walker, result) = try_walk(AstNode::from(keep), StopAtColumn { seen: Vec::new() });

        assert!(result.is_break());
        assert_eq!(walker.into_visitor().seen, vec!["before", "stop"]);
    }

    #[test]
    fn command_walker_overrides_default_traversal() {
        fn skip_args<'a, V: Visitor<'a>>(
            _walker: &mut Walker<'a, V>,
            _node: &'a Command<'a>,
        ) -> VisitResult {
            ControlFlow::Continue(())
        }

        let arena = AstArena::new();
        let a = arena.alloc(Column::new("a"));
        let b = arena.alloc(Column::new("b"));
        let keep = arena.alloc(Command::new("keep", arena.alloc_slice_copy(&[a.into()])));
        let drop = arena.alloc(Command::new("drop", arena.alloc_slice_copy(&[b.into()])));
        let roots = arena.alloc_slice_copy(&[AstNode::from(keep), AstNode::from(drop)]);

        let mut walker = Walker::new(Recorder::default()).with_command_walker("DROP", skip_args);
        let result = walker.walk(AstNode::Seq(roots));

        assert!(result.is_continue());
        assert_eq!(
            walker.into_visitor().events,
            vec!["command keep", "single column", "column a", "command drop"]
        );
    }

    #[test]
    fn walk_borrowed_visitor_keeps_ownership() {
        let arena = AstArena::new();
        let column = arena.alloc(Column::new("cpu"));
        let mut recorder = Recorder::default();

        walk(AstNode::from(column), &mut recorder);
        walk(AstNode::from(column), &mut recorder);

        assert_eq!(recorder.events.len(), 4);
    }
}
