use crate::ast::AstNode;
use crate::data::FieldRef;

/// A transient, render-only view of one node: a display label, a secondary
/// tooltip and the underlying node itself.
///
/// Produced by the identifier resolver and the literal coercion engine,
/// regenerated from the node and its context on every render, and never
/// persisted. The optional `data_model_field` is a lookup key into the
/// externally-owned schema, not an owning reference.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledAst {
    pub label: String,
    pub tooltip: String,
    pub node: AstNode,
    pub data_model_field: Option<FieldRef>,
}

impl LabelledAst {
    /// A view with a label and tooltip but no schema association.
    pub fn new(label: impl Into<String>, tooltip: impl Into<String>, node: AstNode) -> Self {
        Self {
            label: label.into(),
            tooltip: tooltip.into(),
            node,
            data_model_field: None,
        }
    }

    /// Attaches the schema field this view originated from.
    pub fn with_field(mut self, field_ref: FieldRef) -> Self {
        self.data_model_field = Some(field_ref);
        self
    }
}
