//! Sum types tying the node kinds together.
//!
//! - [`SingleAstItem`] is any concrete non-command node.
//! - [`AstItem`] is an argument slot of a function, option or list: a single
//!   item or a (possibly nested) sequence of items. A raw command cannot be
//!   placed in an argument slot.
//! - [`AstNode`] is what the walker accepts and what command arguments hold:
//!   a command, a single item, or a nested sequence of either.

use serde::Serialize;

use crate::{
    Column, Command, CommandMode, CommandOption, Function, InlineCast, ListLiteral, Literal,
    Location, NodeType, OtherItem, Source, TimeInterval, UnknownItem,
};

/// Any concrete node other than a command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SingleAstItem<'a> {
    Function(&'a Function<'a>),
    Option(&'a CommandOption<'a>),
    Mode(&'a CommandMode<'a>),
    Source(&'a Source<'a>),
    Column(&'a Column<'a>),
    Literal(&'a Literal<'a>),
    List(&'a ListLiteral<'a>),
    TimeInterval(&'a TimeInterval<'a>),
    InlineCast(&'a InlineCast<'a>),
    Unknown(&'a UnknownItem<'a>),
    /// A node with an unrecognized `type` tag.
    Other(&'a OtherItem<'a>),
}

/// An argument slot: one item or an ordered sequence of slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AstItem<'a> {
    Single(SingleAstItem<'a>),
    Seq(&'a [AstItem<'a>]),
}

/// A walkable node: a command, a single item, or an ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AstNode<'a> {
    Command(&'a Command<'a>),
    Single(SingleAstItem<'a>),
    Seq(&'a [AstNode<'a>]),
}

impl<'a> SingleAstItem<'a> {
    /// Returns the node kind, or `None` for an unrecognized node.
    pub fn node_type(&self) -> Option<NodeType> {
        Some(match self {
            SingleAstItem::Function(_) => NodeType::Function,
            SingleAstItem::Option(_) => NodeType::Option,
            SingleAstItem::Mode(_) => NodeType::Mode,
            SingleAstItem::Source(_) => NodeType::Source,
            SingleAstItem::Column(_) => NodeType::Column,
            SingleAstItem::Literal(_) => NodeType::Literal,
            SingleAstItem::List(_) => NodeType::List,
            SingleAstItem::TimeInterval(_) => NodeType::TimeInterval,
            SingleAstItem::InlineCast(_) => NodeType::InlineCast,
            SingleAstItem::Unknown(_) => NodeType::Unknown,
            SingleAstItem::Other(_) => return None,
        })
    }

    /// Returns the wire `type` tag, including the tag of an unrecognized node.
    pub fn type_tag(&self) -> &'a str {
        match self {
            SingleAstItem::Other(other) => other.node_type,
            _ => self.node_type().map_or("", |node_type| node_type.as_str()),
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            SingleAstItem::Function(node) => node.name,
            SingleAstItem::Option(node) => node.name,
            SingleAstItem::Mode(node) => node.name,
            SingleAstItem::Source(node) => node.name,
            SingleAstItem::Column(node) => node.name,
            SingleAstItem::Literal(node) => node.name,
            SingleAstItem::List(node) => node.name,
            SingleAstItem::TimeInterval(node) => node.name,
            SingleAstItem::InlineCast(node) => node.name,
            SingleAstItem::Unknown(node) => node.name,
            SingleAstItem::Other(node) => node.name,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            SingleAstItem::Function(node) => node.location,
            SingleAstItem::Option(node) => node.location,
            SingleAstItem::Mode(node) => node.location,
            SingleAstItem::Source(node) => node.location,
            SingleAstItem::Column(node) => node.location,
            SingleAstItem::Literal(node) => node.location,
            SingleAstItem::List(node) => node.location,
            SingleAstItem::TimeInterval(node) => node.location,
            SingleAstItem::InlineCast(node) => node.location,
            SingleAstItem::Unknown(node) => node.location,
            SingleAstItem::Other(node) => node.location,
        }
    }
}

impl AstNode<'_> {
    /// Returns the node kind; `None` for sequences and unrecognized nodes.
    pub fn node_type(&self) -> Option<NodeType> {
        match self {
            AstNode::Command(_) => Some(NodeType::Command),
            AstNode::Single(item) => item.node_type(),
            AstNode::Seq(_) => None,
        }
    }

    /// Returns true for an empty sequence.
    pub fn is_empty(&self) -> bool {
        matches!(self, AstNode::Seq(nodes) if nodes.is_empty())
    }
}

impl<'a> From<SingleAstItem<'a>> for AstItem<'a> {
    fn from(item: SingleAstItem<'a>) -> Self {
        AstItem::Single(item)
    }
}

impl<'a> From<SingleAstItem<'a>> for AstNode<'a> {
    fn from(item: SingleAstItem<'a>) -> Self {
        AstNode::Single(item)
    }
}

impl<'a> From<&'a [AstItem<'a>]> for AstItem<'a> {
    fn from(items: &'a [AstItem<'a>]) -> Self {
        AstItem::Seq(items)
    }
}

impl<'a> From<&'a [AstNode<'a>]> for AstNode<'a> {
    fn from(nodes: &'a [AstNode<'a>]) -> Self {
        AstNode::Seq(nodes)
    }
}

impl<'a> From<&'a Command<'a>> for AstNode<'a> {
    fn from(command: &'a Command<'a>) -> Self {
        AstNode::Command(command)
    }
}

/// Lifts a node reference into every sum type that can hold it.
macro_rules! impl_from_single {
    ($($ty:ident => $variant:ident),* $(,)?) => {$(
        impl<'a> From<&'a $ty<'a>> for SingleAstItem<'a> {
            fn from(node: &'a $ty<'a>) -> Self {
                SingleAstItem::$variant(node)
            }
        }

        impl<'a> From<&'a $ty<'a>> for AstItem<'a> {
            fn from(node: &'a $ty<'a>) -> Self {
                AstItem::Single(SingleAstItem::$variant(node))
            }
        }

        impl<'a> From<&'a $ty<'a>> for AstNode<'a> {
            fn from(node: &'a $ty<'a>) -> Self {
                AstNode::Single(SingleAstItem::$variant(node))
            }
        }
    )*};
}

impl_from_single!(
    Function => Function,
    CommandOption => Option,
    CommandMode => Mode,
    Source => Source,
    Column => Column,
    Literal => Literal,
    ListLiteral => List,
    TimeInterval => TimeInterval,
    InlineCast => InlineCast,
    UnknownItem => Unknown,
    OtherItem => Other,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AstArena, LiteralType};

    #[test]
    fn test_single_item_node_type_and_tag() {
        let column = Column::new("cpu");
        let item = SingleAstItem::from(&column);
        assert_eq!(item.node_type(), Some(NodeType::Column));
        assert_eq!(item.type_tag(), "column");
        assert_eq!(item.name(), "cpu");

        let other = OtherItem::new("identifier", "x");
        let item = SingleAstItem::from(&other);
        assert_eq!(item.node_type(), None);
        assert_eq!(item.type_tag(), "identifier");
    }

    #[test]
    fn test_ast_node_node_type() {
        let command = Command::new("from", &[]);
        assert_eq!(AstNode::from(&command).node_type(), Some(NodeType::Command));

        let literal = Literal::new(LiteralType::Integer, "1");
        assert_eq!(AstNode::from(&literal).node_type(), Some(NodeType::Literal));

        assert_eq!(AstNode::Seq(&[]).node_type(), None);
        assert!(AstNode::Seq(&[]).is_empty());
        assert!(!AstNode::from(&command).is_empty());
    }

    #[test]
    fn test_nested_sequence_serializes_as_nested_array() {
        let arena = AstArena::new();
        let a = arena.alloc(Column::new("a"));
        let b = arena.alloc(Column::new("b"));
        let inner = arena.alloc_slice_copy(&[AstItem::from(b)]);
        let outer = arena.alloc_slice_copy(&[AstItem::from(a), AstItem::Seq(inner)]);

        let value = serde_json::to_value(AstItem::Seq(outer)).unwrap();

        assert_eq!(value[0]["name"], "a");
        assert!(value[1].is_array());
        assert_eq!(value[1][0]["name"], "b");
    }
}
