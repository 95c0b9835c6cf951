//! Visitation trace recorder

use std::fmt;
use std::ops::ControlFlow;

use esqlwalk_ast::{
    Column, Command, CommandMode, CommandOption, Function, InlineCast, ListLiteral, Literal,
    Location, SingleAstItem, Source, TimeInterval, UnknownItem, VisitResult, Visitor,
};
use serde::Serialize;

/// One visitor hook call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceEvent<'a> {
    /// Name of the hook that fired.
    pub hook: &'static str,
    #[serde(rename = "type")]
    pub node_type: &'a str,
    pub name: &'a str,
    pub location: Location,
}

impl TraceEvent<'_> {
    fn is_catch_all(&self) -> bool {
        self.hook == "visit_single_ast_item"
    }
}

impl fmt::Display for TraceEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_catch_all() {
            write!(f, "single {}", self.node_type)
        } else {
            write!(f, "{} {}", self.node_type, self.name)
        }
    }
}

/// Records every hook call of a walk, in order.
#[derive(Debug, Default)]
pub struct TraceVisitor<'a> {
    pub events: Vec<TraceEvent<'a>>,
}

impl<'a> TraceVisitor<'a> {
    fn record(
        &mut self,
        hook: &'static str,
        node_type: &'a str,
        name: &'a str,
        location: Location,
    ) -> VisitResult {
        self.events.push(TraceEvent {
            hook,
            node_type,
            name,
            location,
        });
        ControlFlow::Continue(())
    }
}

impl<'a> Visitor<'a> for TraceVisitor<'a> {
    fn visit_command(&mut self, node: &'a Command<'a>) -> VisitResult {
        self.record("visit_command", "command", node.name, node.location)
    }

    fn visit_command_option(&mut self, node: &'a CommandOption<'a>) -> VisitResult {
        self.record("visit_command_option", "option", node.name, node.location)
    }

    fn visit_command_mode(&mut self, node: &'a CommandMode<'a>) -> VisitResult {
        self.record("visit_command_mode", "mode", node.name, node.location)
    }

    fn visit_single_ast_item(&mut self, node: SingleAstItem<'a>) -> VisitResult {
        self.record(
            "visit_single_ast_item",
            node.type_tag(),
            node.name(),
            node.location(),
        )
    }

    fn visit_source(&mut self, node: &'a Source<'a>) -> VisitResult {
        self.record("visit_source", "source", node.name, node.location)
    }

    fn visit_function(&mut self, node: &'a Function<'a>) -> VisitResult {
        self.record("visit_function", "function", node.name, node.location)
    }

    fn visit_column(&mut self, node: &'a Column<'a>) -> VisitResult {
        self.record("visit_column", "column", node.name, node.location)
    }

    fn visit_literal(&mut self, node: &'a Literal<'a>) -> VisitResult {
        self.record("visit_literal", "literal", node.name, node.location)
    }

    fn visit_list_literal(&mut self, node: &'a ListLiteral<'a>) -> VisitResult {
        self.record("visit_list_literal", "list", node.name, node.location)
    }

    fn visit_time_interval_literal(&mut self, node: &'a TimeInterval<'a>) -> VisitResult {
        self.record(
            "visit_time_interval_literal",
            "timeInterval",
            node.name,
            node.location,
        )
    }

    fn visit_inline_cast(&mut self, node: &'a InlineCast<'a>) -> VisitResult {
        self.record("visit_inline_cast", "inlineCast", node.name, node.location)
    }

    fn visit_unknown(&mut self, node: &'a UnknownItem<'a>) -> VisitResult {
        self.record("visit_unknown", "unknown", node.name, node.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use esqlwalk_ast::{AstArena, AstNode, OtherItem, walker::walk};
    use pretty_assertions::assert_eq;

    #[test]
    fn records_catch_all_before_specific_hook() {
        let arena = AstArena::new();
        let x = arena.alloc(Column::new("x"));
        let f = arena.alloc(Function::new("f", arena.alloc_slice_copy(&[x.into()])));
        let other = arena.alloc(OtherItem::new("identifier", "y"));
        let args = arena.alloc_slice_copy(&[AstNode::from(f), AstNode::from(other)]);
        let eval = arena.alloc(Command::new("eval", args));

        let events = walk(AstNode::from(eval), TraceVisitor::default())
            .into_visitor()
            .events;
        let lines: Vec<_> = events.iter().map(ToString::to_string).collect();

        assert_eq!(
            lines,
            vec![
                "command eval",
                "single function",
                "function f",
                "single column",
                "column x",
                "single identifier",
            ]
        );
        assert_eq!(events[1].hook, "visit_single_ast_item");
        assert_eq!(events[2].hook, "visit_function");
    }

    #[test]
    fn serializes_with_type_tag() {
        let event = TraceEvent {
            hook: "visit_column",
            node_type: "column",
            name: "x",
            location: Location::new(3, 3),
        };

        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            serde_json::json!({
                "hook": "visit_column",
                "type": "column",
                "name": "x",
                "location": { "min": 3, "max": 3 },
            })
        );
    }
}
