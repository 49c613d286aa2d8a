use crate::error::EditError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal value carried by a constant leaf node.
///
/// Mirrors the JSON value space so that deserializing any wire payload is
/// total: whatever the backend puts in `constant` has a representation here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstantValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<ConstantValue>),
    Object(AHashMap<String, ConstantValue>),
}

// Manual implementation to handle f64
impl Eq for ConstantValue {}

impl ConstantValue {
    pub fn is_number(&self) -> bool {
        matches!(self, ConstantValue::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, ConstantValue::String(_))
    }

    /// The string content, if this value is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstantValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Null => write!(f, "null"),
            ConstantValue::Bool(b) => write!(f, "{}", b),
            ConstantValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            ConstantValue::String(s) => write!(f, "{}", s),
            ConstantValue::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            ConstantValue::Object(_) => write!(f, "{{..}}"),
        }
    }
}

impl From<bool> for ConstantValue {
    fn from(value: bool) -> Self {
        ConstantValue::Bool(value)
    }
}

impl From<f64> for ConstantValue {
    fn from(value: f64) -> Self {
        ConstantValue::Number(value)
    }
}

impl From<i64> for ConstantValue {
    fn from(value: i64) -> Self {
        ConstantValue::Number(value as f64)
    }
}

impl From<&str> for ConstantValue {
    fn from(value: &str) -> Self {
        ConstantValue::String(value.to_string())
    }
}

impl From<String> for ConstantValue {
    fn from(value: String) -> Self {
        ConstantValue::String(value)
    }
}

impl From<Vec<ConstantValue>> for ConstantValue {
    fn from(value: Vec<ConstantValue>) -> Self {
        ConstantValue::Array(value)
    }
}

impl From<serde_json::Value> for ConstantValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => ConstantValue::Null,
            serde_json::Value::Bool(b) => ConstantValue::Bool(b),
            serde_json::Value::Number(n) => ConstantValue::Number(n.as_f64().unwrap_or_default()),
            serde_json::Value::String(s) => ConstantValue::String(s),
            serde_json::Value::Array(items) => {
                ConstantValue::Array(items.into_iter().map(Into::into).collect())
            }
            serde_json::Value::Object(map) => {
                ConstantValue::Object(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<ConstantValue> for serde_json::Value {
    fn from(value: ConstantValue) -> Self {
        match value {
            ConstantValue::Null => serde_json::Value::Null,
            ConstantValue::Bool(b) => serde_json::Value::Bool(b),
            ConstantValue::Number(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            ConstantValue::String(s) => serde_json::Value::String(s),
            ConstantValue::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(Into::into).collect())
            }
            ConstantValue::Object(map) => serde_json::Value::Object(
                map.into_iter().map(|(k, v)| (k, v.into())).collect(),
            ),
        }
    }
}

/// One step on the way from the root to a node: either a positional child
/// index or a named-argument key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Child(usize),
    Named(String),
}

/// Locates a node inside a rule tree, starting from the root.
///
/// Paths key the validation side-table and address structural edits. The
/// wire encoding of named segments belongs to the transport adapter, not to
/// this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodePath {
    segments: Vec<PathSegment>,
}

impl NodePath {
    /// The path of the root node itself.
    pub fn root() -> Self {
        Self::default()
    }

    /// Extends the path by a positional child index.
    pub fn child(mut self, index: usize) -> Self {
        self.segments.push(PathSegment::Child(index));
        self
    }

    /// Extends the path by a named-argument key.
    pub fn named(mut self, key: impl Into<String>) -> Self {
        self.segments.push(PathSegment::Named(key.into()));
        self
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "root")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Child(index) => write!(f, ".{}", index)?,
                PathSegment::Named(key) => write!(f, ".{}", key)?,
            }
        }
        Ok(())
    }
}

/// The recursive value representing one rule fragment.
///
/// A node is either a constant leaf (`constant` set, no children) or an
/// operator node identified by `name`, carrying positional children for
/// list-like operators and named children for operators with semantically
/// distinct arguments. Trees are never mutated in place; every edit builds a
/// fresh tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AstNode {
    pub name: Option<String>,
    pub constant: Option<ConstantValue>,
    pub children: Vec<AstNode>,
    pub named_children: AHashMap<String, AstNode>,
}

impl AstNode {
    /// A constant leaf carrying the given literal value.
    pub fn constant(value: impl Into<ConstantValue>) -> Self {
        Self {
            name: None,
            constant: Some(value.into()),
            children: Vec::new(),
            named_children: AHashMap::new(),
        }
    }

    /// An operator node with the given name and no children yet.
    pub fn operator(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            constant: None,
            children: Vec::new(),
            named_children: AHashMap::new(),
        }
    }

    /// The designated "not yet filled in" sentinel node.
    pub fn undefined() -> Self {
        Self::operator("Undefined")
    }

    /// Appends a positional child, returning the extended node.
    pub fn with_child(mut self, child: AstNode) -> Self {
        self.children.push(child);
        self
    }

    /// Appends several positional children, returning the extended node.
    pub fn with_children(mut self, children: impl IntoIterator<Item = AstNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Attaches a named child, returning the extended node.
    pub fn with_named_child(mut self, key: impl Into<String>, child: AstNode) -> Self {
        self.named_children.insert(key.into(), child);
        self
    }

    /// True iff this node is a constant leaf: a literal value and nothing else.
    pub fn is_constant(&self) -> bool {
        self.constant.is_some() && self.children.is_empty() && self.named_children.is_empty()
    }

    /// True iff this node is an operator node with exactly the given name.
    pub fn is_operator(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// True iff this node is the "not yet filled in" sentinel.
    pub fn is_undefined(&self) -> bool {
        self.is_operator("Undefined")
    }

    pub fn named_child(&self, key: &str) -> Option<&AstNode> {
        self.named_children.get(key)
    }

    /// Walks the tree along `path`, returning the node it locates.
    pub fn node_at(&self, path: &NodePath) -> Option<&AstNode> {
        let mut current = self;
        for segment in path.segments() {
            current = match segment {
                PathSegment::Child(index) => current.children.get(*index)?,
                PathSegment::Named(key) => current.named_children.get(key.as_str())?,
            };
        }
        Some(current)
    }

    /// Builds a fresh tree in which the subtree at `path` is replaced by
    /// `replacement`. Untouched siblings are carried over by clone; the tree
    /// held by the caller is left intact.
    pub fn replace_at(&self, path: &NodePath, replacement: AstNode) -> Result<AstNode, EditError> {
        fn rebuild(node: &AstNode, segments: &[PathSegment], replacement: AstNode) -> Option<AstNode> {
            let Some((first, rest)) = segments.split_first() else {
                return Some(replacement);
            };
            let mut next = node.clone();
            match first {
                PathSegment::Child(index) => {
                    let slot = next.children.get_mut(*index)?;
                    let rebuilt = rebuild(slot, rest, replacement)?;
                    *slot = rebuilt;
                }
                PathSegment::Named(key) => {
                    let slot = next.named_children.get_mut(key.as_str())?;
                    let rebuilt = rebuild(slot, rest, replacement)?;
                    *slot = rebuilt;
                }
            }
            Some(next)
        }

        rebuild(self, path.segments(), replacement).ok_or_else(|| EditError::PathNotFound {
            path: path.clone(),
        })
    }
}
