//! JSON loader for ES|QL ASTs.
//!
//! Materializes a tree that an ES|QL parser has already produced, in its JSON
//! form, into an [`AstArena`]. The loader checks shape only (required fields
//! and their JSON types); it does no semantic validation.

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::{
    AstArena, AstItem, AstNode, Column, Command, CommandMode, CommandOption, Function,
    FunctionSubtype, InlineCast, ListLiteral, Literal, LiteralType, LiteralValue, LoadError,
    Location, NodeType, OtherItem, ParamKind, SingleAstItem, Source, SourceType, TimeInterval,
    UnknownItem,
};

type Object = Map<String, Value>;

/// Loads JSON ASTs into an arena.
///
/// # Example
///
/// ```rust
/// use esqlwalk_ast::{AstArena, JsonLoader};
///
/// let arena = AstArena::new();
/// let mut loader = JsonLoader::new(&arena);
/// let root = loader
///     .load_str(r#"[{ "type": "command", "name": "from", "args": [] }]"#)
///     .unwrap();
///
/// assert_eq!(esqlwalk_ast::commands(root)[0].name, "from");
/// ```
pub struct JsonLoader<'a> {
    arena: &'a AstArena,
    loaded: usize,
}

/// Base fields shared by every node kind.
struct Base<'a> {
    name: &'a str,
    text: &'a str,
    location: Location,
    incomplete: bool,
}

impl<'a> JsonLoader<'a> {
    /// Creates a loader that allocates into `arena`.
    pub fn new(arena: &'a AstArena) -> Self {
        Self { arena, loaded: 0 }
    }

    /// Parses `source` as JSON and loads it.
    pub fn load_str(&mut self, source: &str) -> Result<Option<AstNode<'a>>, LoadError> {
        let value: Value = serde_json::from_str(source)?;
        self.load_value(&value)
    }

    /// Loads an already parsed JSON value.
    ///
    /// `null` is an absent root and loads as `None`. An array loads as a
    /// sequence, recursively.
    pub fn load_value(&mut self, value: &Value) -> Result<Option<AstNode<'a>>, LoadError> {
        if value.is_null() {
            debug!("AST root is null, nothing to load");
            return Ok(None);
        }

        self.loaded = 0;
        let root = self.node(value, "$")?;
        debug!(
            nodes = self.loaded,
            bytes = self.arena.allocated_bytes(),
            "Loaded AST"
        );
        Ok(Some(root))
    }

    fn node(&mut self, value: &Value, path: &str) -> Result<AstNode<'a>, LoadError> {
        match value {
            Value::Array(values) => Ok(AstNode::Seq(self.nodes(values, path)?)),
            Value::Object(obj) => {
                let tag = type_tag(obj, path)?;
                if tag == NodeType::Command.as_str() {
                    Ok(AstNode::Command(self.command(obj, path)?))
                } else {
                    Ok(AstNode::Single(self.single(obj, tag, path)?))
                }
            }
            other => Err(not_a_node(other, path)),
        }
    }

    fn nodes(&mut self, values: &[Value], path: &str) -> Result<&'a [AstNode<'a>], LoadError> {
        let mut nodes = Vec::with_capacity(values.len());
        for (i, value) in values.iter().enumerate() {
            nodes.push(self.node(value, &format!("{path}[{i}]"))?);
        }
        Ok(self.arena.alloc_slice_copy(&nodes))
    }

    fn item(&mut self, value: &Value, path: &str) -> Result<AstItem<'a>, LoadError> {
        match value {
            Value::Array(values) => Ok(AstItem::Seq(self.items(values, path)?)),
            Value::Object(obj) => {
                let tag = type_tag(obj, path)?;
                Ok(AstItem::Single(self.single(obj, tag, path)?))
            }
            other => Err(not_a_node(other, path)),
        }
    }

    fn items(&mut self, values: &[Value], path: &str) -> Result<&'a [AstItem<'a>], LoadError> {
        let mut items = Vec::with_capacity(values.len());
        for (i, value) in values.iter().enumerate() {
            items.push(self.item(value, &format!("{path}[{i}]"))?);
        }
        Ok(self.arena.alloc_slice_copy(&items))
    }

    fn command(&mut self, obj: &Object, path: &str) -> Result<&'a Command<'a>, LoadError> {
        self.loaded += 1;
        let Base {
            name,
            text,
            location,
            incomplete,
        } = self.base(obj, path)?;
        let args = required_array(obj, "args", NodeType::Command, path)?;
        let args = self.nodes(args, &format!("{path}.args"))?;

        Ok(self.arena.alloc(Command {
            name,
            text,
            location,
            incomplete,
            args,
        }))
    }

    fn single(
        &mut self,
        obj: &Object,
        tag: &str,
        path: &str,
    ) -> Result<SingleAstItem<'a>, LoadError> {
        self.loaded += 1;
        let arena = self.arena;
        let Base {
            name,
            text,
            location,
            incomplete,
        } = self.base(obj, path)?;

        let item = match NodeType::from_tag(tag) {
            Some(NodeType::Function) => {
                let subtype = match optional_str(obj, "subtype", path)? {
                    Some(subtype) => Some(
                        FunctionSubtype::from_tag(subtype)
                            .ok_or_else(|| invalid(path, "subtype", "a function subtype"))?,
                    ),
                    None => None,
                };
                let args = required_array(obj, "args", NodeType::Function, path)?;
                let args = self.items(args, &format!("{path}.args"))?;
                SingleAstItem::Function(arena.alloc(Function {
                    name,
                    text,
                    location,
                    incomplete,
                    subtype,
                    args,
                }))
            }
            Some(NodeType::Option) => {
                let args = required_array(obj, "args", NodeType::Option, path)?;
                let args = self.items(args, &format!("{path}.args"))?;
                SingleAstItem::Option(arena.alloc(CommandOption {
                    name,
                    text,
                    location,
                    incomplete,
                    args,
                }))
            }
            Some(NodeType::Mode) => SingleAstItem::Mode(arena.alloc(CommandMode {
                name,
                text,
                location,
                incomplete,
            })),
            Some(NodeType::Source) => {
                let source_type = match optional_str(obj, "sourceType", path)? {
                    None | Some("index") => SourceType::Index,
                    Some("policy") => SourceType::Policy,
                    Some(_) => {
                        return Err(invalid(path, "sourceType", "\"index\" or \"policy\""));
                    }
                };
                let cluster = optional_str(obj, "cluster", path)?.map(|s| arena.alloc_str(s));
                let index = optional_str(obj, "index", path)?.map(|s| arena.alloc_str(s));
                SingleAstItem::Source(arena.alloc(Source {
                    name,
                    text,
                    location,
                    incomplete,
                    source_type,
                    cluster,
                    index,
                }))
            }
            Some(NodeType::Column) => {
                let parts: &'a [&'a str] = match obj.get("parts") {
                    None | Some(Value::Null) => &[],
                    Some(Value::Array(parts)) => {
                        let mut segments = Vec::with_capacity(parts.len());
                        for part in parts {
                            let part = part
                                .as_str()
                                .ok_or_else(|| invalid(path, "parts", "an array of strings"))?;
                            segments.push(arena.alloc_str(part));
                        }
                        arena.alloc_slice_copy(&segments)
                    }
                    Some(_) => return Err(invalid(path, "parts", "an array of strings")),
                };
                let quoted = optional_bool(obj, "quoted", path)?.unwrap_or(false);
                SingleAstItem::Column(arena.alloc(Column {
                    name,
                    text,
                    location,
                    incomplete,
                    parts,
                    quoted,
                }))
            }
            Some(NodeType::Literal) => {
                let literal_type = required_str(obj, "literalType", NodeType::Literal, path)?;
                let literal_type = LiteralType::from_tag(literal_type)
                    .ok_or_else(|| invalid(path, "literalType", "a literal type"))?;
                let value = match obj.get("value") {
                    None => LiteralValue::parse(literal_type, text),
                    Some(Value::String(value)) => LiteralValue::Str(arena.alloc_str(value)),
                    Some(Value::Null) => LiteralValue::Null,
                    Some(Value::Bool(value)) => LiteralValue::Bool(*value),
                    Some(Value::Number(number)) => number_value(number)
                        .ok_or_else(|| invalid(path, "value", "a finite number"))?,
                    Some(_) => return Err(invalid(path, "value", "a scalar")),
                };
                let param_kind = match optional_str(obj, "paramType", path)? {
                    Some(kind) => Some(
                        ParamKind::from_tag(kind)
                            .ok_or_else(|| invalid(path, "paramType", "a parameter type"))?,
                    ),
                    None if literal_type == LiteralType::Param => {
                        Some(ParamKind::from_placeholder(text))
                    }
                    None => None,
                };
                SingleAstItem::Literal(arena.alloc(Literal {
                    name,
                    text,
                    location,
                    incomplete,
                    literal_type,
                    value,
                    param_kind,
                }))
            }
            Some(NodeType::List) => {
                let values = required_array(obj, "values", NodeType::List, path)?;
                let values = self.items(values, &format!("{path}.values"))?;
                SingleAstItem::List(arena.alloc(ListLiteral {
                    name,
                    text,
                    location,
                    incomplete,
                    values,
                }))
            }
            Some(NodeType::TimeInterval) => {
                let quantity = required(obj, "quantity", NodeType::TimeInterval, path)?
                    .as_i64()
                    .ok_or_else(|| invalid(path, "quantity", "an integer"))?;
                let unit = required_str(obj, "unit", NodeType::TimeInterval, path)?;
                SingleAstItem::TimeInterval(arena.alloc(TimeInterval {
                    name,
                    text,
                    location,
                    incomplete,
                    quantity,
                    unit: arena.alloc_str(unit),
                }))
            }
            Some(NodeType::InlineCast) => {
                let value = required(obj, "value", NodeType::InlineCast, path)?;
                let value = self.item(value, &format!("{path}.value"))?;
                let cast_type = required_str(obj, "castType", NodeType::InlineCast, path)?;
                SingleAstItem::InlineCast(arena.alloc(InlineCast {
                    name,
                    text,
                    location,
                    incomplete,
                    value,
                    cast_type: arena.alloc_str(cast_type),
                }))
            }
            Some(NodeType::Unknown) => SingleAstItem::Unknown(arena.alloc(UnknownItem {
                name,
                text,
                location,
                incomplete,
            })),
            // A command in an argument slot is as inert as an unknown tag.
            Some(NodeType::Command) | None => {
                trace!(path, tag, "Keeping unrecognized node as an inert item");
                SingleAstItem::Other(arena.alloc(OtherItem {
                    node_type: arena.alloc_str(tag),
                    name,
                    text,
                    location,
                    incomplete,
                }))
            }
        };

        Ok(item)
    }

    fn base(&self, obj: &Object, path: &str) -> Result<Base<'a>, LoadError> {
        let name: &'a str = self
            .arena
            .alloc_str(optional_str(obj, "name", path)?.unwrap_or(""));
        let text = match optional_str(obj, "text", path)? {
            Some(text) => self.arena.alloc_str(text),
            None => name,
        };
        let location = match obj.get("location") {
            None | Some(Value::Null) => Location::default(),
            Some(Value::Object(location)) => {
                Location::new(offset(location, "min", path)?, offset(location, "max", path)?)
            }
            Some(_) => return Err(invalid(path, "location", LOCATION_SHAPE)),
        };
        let incomplete = optional_bool(obj, "incomplete", path)?.unwrap_or(false);

        Ok(Base {
            name,
            text,
            location,
            incomplete,
        })
    }
}

const LOCATION_SHAPE: &str = "an object with integer \"min\" and \"max\"";

fn type_tag<'v>(obj: &'v Object, path: &str) -> Result<&'v str, LoadError> {
    obj.get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| LoadError::MissingType {
            path: path.to_string(),
        })
}

fn offset(location: &Object, key: &str, path: &str) -> Result<u32, LoadError> {
    location
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|offset| u32::try_from(offset).ok())
        .ok_or_else(|| invalid(path, "location", LOCATION_SHAPE))
}

fn required<'v>(
    obj: &'v Object,
    field: &'static str,
    node_type: NodeType,
    path: &str,
) -> Result<&'v Value, LoadError> {
    obj.get(field).ok_or_else(|| LoadError::MissingField {
        path: path.to_string(),
        node_type: node_type.as_str(),
        field,
    })
}

fn required_array<'v>(
    obj: &'v Object,
    field: &'static str,
    node_type: NodeType,
    path: &str,
) -> Result<&'v [Value], LoadError> {
    required(obj, field, node_type, path)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| invalid(path, field, "an array"))
}

fn required_str<'v>(
    obj: &'v Object,
    field: &'static str,
    node_type: NodeType,
    path: &str,
) -> Result<&'v str, LoadError> {
    required(obj, field, node_type, path)?
        .as_str()
        .ok_or_else(|| invalid(path, field, "a string"))
}

fn optional_str<'v>(
    obj: &'v Object,
    field: &'static str,
    path: &str,
) -> Result<Option<&'v str>, LoadError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(invalid(path, field, "a string")),
    }
}

fn optional_bool(obj: &Object, field: &'static str, path: &str) -> Result<Option<bool>, LoadError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(_) => Err(invalid(path, field, "a boolean")),
    }
}

/// Keeps integers integral so they serialize back unchanged.
fn number_value(number: &serde_json::Number) -> Option<LiteralValue<'static>> {
    if let Some(value) = number.as_i64() {
        Some(LiteralValue::Integer(value))
    } else if let Some(value) = number.as_u64() {
        Some(LiteralValue::Unsigned(value))
    } else {
        number.as_f64().map(LiteralValue::Decimal)
    }
}

fn invalid(path: &str, field: &'static str, expected: &'static str) -> LoadError {
    LoadError::InvalidField {
        path: path.to_string(),
        field,
        expected,
    }
}

fn not_a_node(value: &Value, path: &str) -> LoadError {
    let found = match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };
    LoadError::NotANode {
        path: path.to_string(),
        found,
    }
}
