//! Node definitions for the ES|QL AST.
//!
//! One struct per node kind. Every node shares the parser-provided base
//! fields (`name`, `text`, `location`, `incomplete`) and borrows its children
//! and strings from an [`AstArena`](crate::AstArena).
//!
//! Nodes serialize back to the parser's JSON shape: a `type` tag followed by
//! camelCase fields.

use std::fmt;

use serde::Serialize;

use crate::{AstItem, AstNode, Location};

/// A pipeline command such as `FROM`, `WHERE` or `STATS`.
///
/// Command arguments are walked through the general entry point, so a slot
/// may hold a single item, a nested sequence, or (structurally) another
/// command.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "command")]
pub struct Command<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub location: Location,
    pub incomplete: bool,
    pub args: &'a [AstNode<'a>],
}

/// A command option such as `METADATA`, `BY` or `ON`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "option")]
pub struct CommandOption<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub location: Location,
    pub incomplete: bool,
    pub args: &'a [AstItem<'a>],
}

/// A command mode, e.g. `_coordinator` in `ENRICH _coordinator:policy`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "mode")]
pub struct CommandMode<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub location: Location,
    pub incomplete: bool,
}

/// Syntactic shape a function node was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FunctionSubtype {
    /// `name(arg, ...)`
    VariadicCall,
    /// `NOT x`, `-x`
    UnaryExpression,
    /// `x IS NULL`
    PostfixUnaryExpression,
    /// `a + b`, `a AND b`, `x = expr`
    BinaryExpression,
}

impl FunctionSubtype {
    /// Parses the wire form (`variadic-call`, `binary-expression`, ...).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "variadic-call" => Some(Self::VariadicCall),
            "unary-expression" => Some(Self::UnaryExpression),
            "postfix-unary-expression" => Some(Self::PostfixUnaryExpression),
            "binary-expression" => Some(Self::BinaryExpression),
            _ => None,
        }
    }
}

/// A function call or an operator expression.
///
/// Operators are functions too: `a > b` is a function named `>` with two
/// arguments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "function")]
pub struct Function<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub location: Location,
    pub incomplete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtype: Option<FunctionSubtype>,
    pub args: &'a [AstItem<'a>],
}

/// What a [`Source`] names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Index,
    Policy,
}

/// An index pattern (`FROM logs-*`) or an enrich policy (`ENRICH hosts`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "source", rename_all = "camelCase")]
pub struct Source<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub location: Location,
    pub incomplete: bool,
    pub source_type: SourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<&'a str>,
}

/// A column reference. `parts` holds the dotted path segments when the
/// parser provides them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "column")]
pub struct Column<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub location: Location,
    pub incomplete: bool,
    pub parts: &'a [&'a str],
    pub quoted: bool,
}

/// Sub-kind of a [`Literal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralType {
    Integer,
    Decimal,
    Boolean,
    Null,
    Keyword,
    /// Legacy tag for string literals, kept as written.
    String,
    /// A bound query parameter placeholder (`?`, `?1`, `?name`).
    Param,
}

impl LiteralType {
    /// Parses the wire form.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "integer" => Some(Self::Integer),
            "decimal" => Some(Self::Decimal),
            "boolean" => Some(Self::Boolean),
            "null" => Some(Self::Null),
            "keyword" => Some(Self::Keyword),
            "string" => Some(Self::String),
            "param" => Some(Self::Param),
            _ => None,
        }
    }
}

/// The scalar value of a [`Literal`], kept in its JSON form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LiteralValue<'a> {
    Str(&'a str),
    Integer(i64),
    /// Integers above `i64::MAX`.
    Unsigned(u64),
    Decimal(f64),
    Bool(bool),
    Null,
}

impl<'a> LiteralValue<'a> {
    /// Parses source text according to `literal_type`. Text that does not
    /// parse as the type stays a string.
    pub fn parse(literal_type: LiteralType, text: &'a str) -> Self {
        let parsed = match literal_type {
            LiteralType::Integer => text
                .parse()
                .map(Self::Integer)
                .or_else(|_| text.parse().map(Self::Unsigned))
                .ok(),
            LiteralType::Decimal => text.parse().map(Self::Decimal).ok(),
            LiteralType::Boolean => text.to_ascii_lowercase().parse().map(Self::Bool).ok(),
            LiteralType::Null => Some(Self::Null),
            LiteralType::Keyword | LiteralType::String | LiteralType::Param => None,
        };
        parsed.unwrap_or(Self::Str(text))
    }

    /// Returns the string value, if this is one.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Self::Str(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for LiteralValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Null => f.write_str("null"),
        }
    }
}

/// How a parameter placeholder refers to its bound value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    /// `?`
    Unnamed,
    /// `?name`
    Named,
    /// `?1`
    Positional,
}

impl ParamKind {
    /// Parses the wire form (`unnamed`, `named`, `positional`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "unnamed" => Some(Self::Unnamed),
            "named" => Some(Self::Named),
            "positional" => Some(Self::Positional),
            _ => None,
        }
    }

    /// Classifies a placeholder by its source text.
    pub fn from_placeholder(placeholder: &str) -> Self {
        let rest = placeholder.strip_prefix('?').unwrap_or(placeholder);
        if rest.is_empty() {
            Self::Unnamed
        } else if rest.bytes().all(|b| b.is_ascii_digit()) {
            Self::Positional
        } else {
            Self::Named
        }
    }
}

/// A scalar literal or a parameter placeholder.
///
/// `value` keeps the scalar as the parser reported it, so numbers, booleans
/// and `null` serialize back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "literal", rename_all = "camelCase")]
pub struct Literal<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub location: Location,
    pub incomplete: bool,
    pub literal_type: LiteralType,
    pub value: LiteralValue<'a>,
    #[serde(rename = "paramType", skip_serializing_if = "Option::is_none")]
    pub param_kind: Option<ParamKind>,
}

/// A list literal such as `(200, 201, ?code)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "list")]
pub struct ListLiteral<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub location: Location,
    pub incomplete: bool,
    pub values: &'a [AstItem<'a>],
}

/// A time span literal such as `1 hour`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "timeInterval")]
pub struct TimeInterval<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub location: Location,
    pub incomplete: bool,
    pub quantity: i64,
    pub unit: &'a str,
}

/// An inline cast such as `bytes::long`.
///
/// The walker does not descend into `value`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "inlineCast", rename_all = "camelCase")]
pub struct InlineCast<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub location: Location,
    pub incomplete: bool,
    pub value: AstItem<'a>,
    pub cast_type: &'a str,
}

/// A fragment the parser could not classify.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "unknown")]
pub struct UnknownItem<'a> {
    pub name: &'a str,
    pub text: &'a str,
    pub location: Location,
    pub incomplete: bool,
}

/// A node whose `type` tag this crate does not recognize.
///
/// Such nodes stay inert during traversal: only the catch-all
/// `visit_single_ast_item` hook sees them. Only the base fields survive
/// loading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OtherItem<'a> {
    #[serde(rename = "type")]
    pub node_type: &'a str,
    pub name: &'a str,
    pub text: &'a str,
    pub location: Location,
    pub incomplete: bool,
}

/// Builder methods for the fields every node kind shares.
macro_rules! impl_base_fields {
    ($($ty:ident),* $(,)?) => {$(
        impl<'a> $ty<'a> {
            /// Replaces the source text of this node.
            #[inline]
            pub fn with_text(mut self, text: &'a str) -> Self {
                self.text = text;
                self
            }

            /// Replaces the location of this node.
            #[inline]
            pub fn with_location(mut self, location: Location) -> Self {
                self.location = location;
                self
            }

            /// Marks this node as produced by parser error recovery.
            #[inline]
            pub fn with_incomplete(mut self, incomplete: bool) -> Self {
                self.incomplete = incomplete;
                self
            }
        }
    )*};
}

impl_base_fields!(
    Command,
    CommandOption,
    CommandMode,
    Function,
    Source,
    Column,
    Literal,
    ListLiteral,
    TimeInterval,
    InlineCast,
    UnknownItem,
    OtherItem,
);

impl<'a> Command<'a> {
    /// Creates a command; `text` starts out equal to `name`.
    #[inline]
    pub const fn new(name: &'a str, args: &'a [AstNode<'a>]) -> Self {
        Self {
            name,
            text: name,
            location: Location::new(0, 0),
            incomplete: false,
            args,
        }
    }
}

impl<'a> CommandOption<'a> {
    #[inline]
    pub const fn new(name: &'a str, args: &'a [AstItem<'a>]) -> Self {
        Self {
            name,
            text: name,
            location: Location::new(0, 0),
            incomplete: false,
            args,
        }
    }
}

impl<'a> CommandMode<'a> {
    #[inline]
    pub const fn new(name: &'a str) -> Self {
        Self {
            name,
            text: name,
            location: Location::new(0, 0),
            incomplete: false,
        }
    }
}

impl<'a> Function<'a> {
    /// Creates a function call with no recorded subtype.
    #[inline]
    pub const fn new(name: &'a str, args: &'a [AstItem<'a>]) -> Self {
        Self {
            name,
            text: name,
            location: Location::new(0, 0),
            incomplete: false,
            subtype: None,
            args,
        }
    }

    /// Sets the syntactic subtype.
    #[inline]
    pub fn with_subtype(mut self, subtype: FunctionSubtype) -> Self {
        self.subtype = Some(subtype);
        self
    }

    /// Returns true if this function was written as an operator.
    #[inline]
    pub fn is_operator(&self) -> bool {
        matches!(
            self.subtype,
            Some(
                FunctionSubtype::UnaryExpression
                    | FunctionSubtype::PostfixUnaryExpression
                    | FunctionSubtype::BinaryExpression
            )
        )
    }
}

impl<'a> Source<'a> {
    /// Creates an index source.
    #[inline]
    pub const fn index(name: &'a str) -> Self {
        Self {
            name,
            text: name,
            location: Location::new(0, 0),
            incomplete: false,
            source_type: SourceType::Index,
            cluster: None,
            index: None,
        }
    }

    /// Creates an enrich policy source.
    #[inline]
    pub const fn policy(name: &'a str) -> Self {
        Self {
            name,
            text: name,
            location: Location::new(0, 0),
            incomplete: false,
            source_type: SourceType::Policy,
            cluster: None,
            index: None,
        }
    }
}

impl<'a> Column<'a> {
    /// Creates an unquoted column reference without path segments.
    #[inline]
    pub const fn new(name: &'a str) -> Self {
        Self {
            name,
            text: name,
            location: Location::new(0, 0),
            incomplete: false,
            parts: &[],
            quoted: false,
        }
    }

    /// Sets the dotted path segments.
    #[inline]
    pub fn with_parts(mut self, parts: &'a [&'a str]) -> Self {
        self.parts = parts;
        self
    }
}

impl<'a> Literal<'a> {
    /// Creates a literal from its source text, which also becomes its name.
    /// The value is parsed from the text according to `literal_type`.
    #[inline]
    pub fn new(literal_type: LiteralType, text: &'a str) -> Self {
        Self {
            name: text,
            text,
            location: Location::new(0, 0),
            incomplete: false,
            literal_type,
            value: LiteralValue::parse(literal_type, text),
            param_kind: None,
        }
    }

    /// Replaces the value.
    #[inline]
    pub fn with_value(mut self, value: LiteralValue<'a>) -> Self {
        self.value = value;
        self
    }

    /// Creates a parameter placeholder, classifying it from its text.
    #[inline]
    pub fn param(placeholder: &'a str) -> Self {
        Self {
            param_kind: Some(ParamKind::from_placeholder(placeholder)),
            ..Self::new(LiteralType::Param, placeholder)
        }
    }

    /// Returns true if this literal is a parameter placeholder.
    #[inline]
    pub fn is_param(&self) -> bool {
        self.literal_type == LiteralType::Param
    }
}

impl<'a> ListLiteral<'a> {
    #[inline]
    pub const fn new(name: &'a str, values: &'a [AstItem<'a>]) -> Self {
        Self {
            name,
            text: name,
            location: Location::new(0, 0),
            incomplete: false,
            values,
        }
    }
}

impl<'a> TimeInterval<'a> {
    #[inline]
    pub const fn new(name: &'a str, quantity: i64, unit: &'a str) -> Self {
        Self {
            name,
            text: name,
            location: Location::new(0, 0),
            incomplete: false,
            quantity,
            unit,
        }
    }
}

impl<'a> InlineCast<'a> {
    #[inline]
    pub const fn new(name: &'a str, value: AstItem<'a>, cast_type: &'a str) -> Self {
        Self {
            name,
            text: name,
            location: Location::new(0, 0),
            incomplete: false,
            value,
            cast_type,
        }
    }
}

impl<'a> UnknownItem<'a> {
    #[inline]
    pub const fn new(name: &'a str) -> Self {
        Self {
            name,
            text: name,
            location: Location::new(0, 0),
            incomplete: false,
        }
    }
}

impl<'a> OtherItem<'a> {
    #[inline]
    pub const fn new(node_type: &'a str, name: &'a str) -> Self {
        Self {
            node_type,
            name,
            text: name,
            location: Location::new(0, 0),
            incomplete: false,
        }
    }
}
