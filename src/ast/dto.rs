use super::node::{AstNode, ConstantValue};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// The wire shape of a rule fragment, as exchanged with the backend.
///
/// Every field is defaulted so that a partial payload still deserializes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AstNodeDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub constant: Option<ConstantValue>,
    #[serde(default)]
    pub children: Vec<AstNodeDto>,
    #[serde(default)]
    pub named_children: AHashMap<String, AstNodeDto>,
}

/// Converts a wire DTO into the in-memory tree. Never fails.
pub fn parse(dto: AstNodeDto) -> AstNode {
    AstNode {
        name: dto.name,
        constant: dto.constant,
        children: dto.children.into_iter().map(parse).collect(),
        named_children: dto
            .named_children
            .into_iter()
            .map(|(key, child)| (key, parse(child)))
            .collect(),
    }
}

/// Lenient parse straight from a JSON document.
///
/// Fields of the wrong shape (a numeric `name`, a scalar `children`, ...)
/// default to the empty form instead of erroring, so a payload produced by an
/// older or broken peer still yields a usable tree.
pub fn parse_json(value: &serde_json::Value) -> AstNode {
    AstNode {
        name: value
            .get("name")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string),
        constant: value
            .get("constant")
            .filter(|constant| !constant.is_null())
            .cloned()
            .map(ConstantValue::from),
        children: value
            .get("children")
            .and_then(serde_json::Value::as_array)
            .map(|children| children.iter().map(parse_json).collect())
            .unwrap_or_default(),
        named_children: value
            .get("named_children")
            .and_then(serde_json::Value::as_object)
            .map(|named| {
                named
                    .iter()
                    .map(|(key, child)| (key.clone(), parse_json(child)))
                    .collect()
            })
            .unwrap_or_default(),
    }
}

/// Converts an in-memory tree back into its wire shape.
///
/// Exact inverse of [`parse`] for any tree this crate produces:
/// `parse(serialize(&t)) == t`.
pub fn serialize(node: &AstNode) -> AstNodeDto {
    AstNodeDto {
        name: node.name.clone(),
        constant: node.constant.clone(),
        children: node.children.iter().map(serialize).collect(),
        named_children: node
            .named_children
            .iter()
            .map(|(key, child)| (key.clone(), serialize(child)))
            .collect(),
    }
}
