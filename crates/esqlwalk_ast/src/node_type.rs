//! Node kind discriminator for the ES|QL AST.
//!
//! The wire tags match the `type` field emitted by the ES|QL parser.

use serde::{Deserialize, Serialize};

/// Node kinds of the ES|QL AST.
///
/// Every concrete node carries exactly one of these kinds. Nodes whose tag is
/// not listed here are still representable (see [`crate::OtherItem`]) but
/// have no `NodeType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum NodeType {
    /// A pipeline command (`FROM`, `WHERE`, `STATS`, ...).
    Command,
    /// A command option (`METADATA`, `BY`, `ON`, `WITH`, ...).
    Option,
    /// A command mode (e.g. the `_coordinator` of `ENRICH _coordinator:policy`).
    Mode,
    /// A function call or operator expression.
    Function,
    /// An index or enrich policy source.
    Source,
    /// A column reference.
    Column,
    /// A scalar literal or parameter placeholder.
    Literal,
    /// A list literal such as `(1, 2, 3)`.
    List,
    /// A time span literal such as `1 hour`.
    TimeInterval,
    /// An inline cast such as `bytes::long`.
    InlineCast,
    /// A fragment the parser could not classify.
    Unknown,
}

impl NodeType {
    /// All node kinds, in declaration order.
    pub const ALL: [NodeType; 11] = [
        NodeType::Command,
        NodeType::Option,
        NodeType::Mode,
        NodeType::Function,
        NodeType::Source,
        NodeType::Column,
        NodeType::Literal,
        NodeType::List,
        NodeType::TimeInterval,
        NodeType::InlineCast,
        NodeType::Unknown,
    ];

    /// Returns the wire tag of this node kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeType::Command => "command",
            NodeType::Option => "option",
            NodeType::Mode => "mode",
            NodeType::Function => "function",
            NodeType::Source => "source",
            NodeType::Column => "column",
            NodeType::Literal => "literal",
            NodeType::List => "list",
            NodeType::TimeInterval => "timeInterval",
            NodeType::InlineCast => "inlineCast",
            NodeType::Unknown => "unknown",
        }
    }

    /// Parses a wire tag. Returns `None` for tags this crate does not know.
    pub fn from_tag(tag: &str) -> Option<Self> {
        NodeType::ALL.into_iter().find(|node_type| node_type.as_str() == tag)
    }

    /// Returns true if the walker never descends below nodes of this kind.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeType::Mode
                | NodeType::Source
                | NodeType::Column
                | NodeType::Literal
                | NodeType::TimeInterval
                | NodeType::InlineCast
                | NodeType::Unknown
        )
    }
}

impl std::fmt::Display for NodeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
