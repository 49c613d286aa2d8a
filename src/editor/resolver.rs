//! Display labels for data-accessor nodes.
//!
//! A database accessor reads a field at the end of a chain of table hops;
//! its label is the dotted join of the hops and the field name. A payload
//! accessor reads a field off the triggering object and is labelled with the
//! field name alone. The resolver declines any other node shape; callers
//! drop declined nodes from the identifier list instead of showing a broken
//! entry.

use super::labelled::LabelledAst;
use crate::ast::{AstNode, ConstantValue};
use crate::data::{DataModel, FieldRef};
use crate::operators::OperatorKind;
use itertools::Itertools;

/// Produces labelled views for a fixed set of accessor nodes supplied by the
/// caller; the resolver does not discover accessors itself.
#[derive(Debug, Clone)]
pub struct IdentifierResolver<'a> {
    accessors: Vec<AstNode>,
    model: Option<&'a DataModel>,
}

impl<'a> IdentifierResolver<'a> {
    pub fn new(accessors: Vec<AstNode>) -> Self {
        Self {
            accessors,
            model: None,
        }
    }

    /// Associates the schema table so labels carry field types and a
    /// resolvable [`FieldRef`].
    pub fn with_data_model(mut self, model: &'a DataModel) -> Self {
        self.model = Some(model);
        self
    }

    /// Labelled views for every accessor the resolver can label; declined
    /// nodes are filtered out.
    pub fn identifiers(&self) -> Vec<LabelledAst> {
        self.accessors
            .iter()
            .filter_map(|node| self.label_of(node))
            .collect()
    }

    /// The labelled view of one node, or `None` if the resolver declines.
    pub fn label_of(&self, node: &AstNode) -> Option<LabelledAst> {
        match OperatorKind::of(node)? {
            OperatorKind::DatabaseAccess => self.database_access_label(node),
            OperatorKind::Payload => self.payload_label(node),
            _ => None,
        }
    }

    fn database_access_label(&self, node: &AstNode) -> Option<LabelledAst> {
        let ConstantValue::Array(hops) = node.named_child("path")?.constant.as_ref()? else {
            return None;
        };
        let hops: Vec<&str> = hops
            .iter()
            .map(|hop| hop.as_str())
            .collect::<Option<Vec<_>>>()?;
        let field_name = node.named_child("fieldName")?.constant.as_ref()?.as_str()?;

        let label = hops
            .iter()
            .copied()
            .chain(std::iter::once(field_name))
            .join(".");
        let field_ref = hops.last().map(|table| FieldRef {
            table: (*table).to_string(),
            field: field_name.to_string(),
        });

        Some(self.assemble(label, node, field_ref))
    }

    fn payload_label(&self, node: &AstNode) -> Option<LabelledAst> {
        let field_name = node.children.first()?.constant.as_ref()?.as_str()?;

        let field_ref = self
            .model
            .and_then(DataModel::trigger_table)
            .map(|table| FieldRef {
                table: table.to_string(),
                field: field_name.to_string(),
            });

        Some(self.assemble(field_name.to_string(), node, field_ref))
    }

    fn assemble(
        &self,
        label: String,
        node: &AstNode,
        field_ref: Option<FieldRef>,
    ) -> LabelledAst {
        let tooltip = field_ref
            .as_ref()
            .and_then(|field_ref| self.model?.field(field_ref))
            .map(|field| field.data_type.to_string())
            .unwrap_or_default();

        let mut labelled = LabelledAst::new(label, tooltip, node.clone());
        if let Some(field_ref) = field_ref {
            labelled = labelled.with_field(field_ref);
        }
        labelled
    }
}
