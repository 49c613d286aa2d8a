//! Operand classification.
//!
//! The coarse kind of a node decides which editing affordance the builder
//! offers for it. Classification is a pure function of the node and its
//! enum-option context; it is re-derived on every render because the context
//! varies per field and operator slot. It never fails: `Unknown` is a
//! legitimate terminal classification, not an error.

use crate::ast::{AstNode, ConstantValue};
use crate::operators::OperatorKind;

/// The coarse classification driving which editing widget applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Constant,
    CustomList,
    Enum,
    Field,
    Function,
    Undefined,
    Unknown,
}

/// Per-slot context for classification: the enum values allowed in the slot
/// being edited, if any.
#[derive(Debug, Clone, Default)]
pub struct OperandContext {
    pub enum_options: Vec<ConstantValue>,
}

impl OperandContext {
    pub fn with_enum_options(enum_options: Vec<ConstantValue>) -> Self {
        Self { enum_options }
    }
}

/// Classifies a node for editing. First match wins:
/// enum constant, constant, custom list, data field, function, undefined
/// sentinel, then `Unknown` for everything else.
pub fn classify(node: &AstNode, context: &OperandContext) -> OperandKind {
    if let Some(constant) = node.constant.as_ref() {
        if node.is_constant() {
            if (constant.is_number() || constant.is_string())
                && context.enum_options.contains(constant)
            {
                return OperandKind::Enum;
            }
            return OperandKind::Constant;
        }
    }

    match OperatorKind::of(node) {
        Some(kind) => match kind {
            OperatorKind::CustomListAccess => OperandKind::CustomList,
            OperatorKind::DatabaseAccess | OperatorKind::Payload => OperandKind::Field,
            OperatorKind::And
            | OperatorKind::Or
            | OperatorKind::Not
            | OperatorKind::Equal
            | OperatorKind::NotEqual
            | OperatorKind::Greater
            | OperatorKind::GreaterOrEqual
            | OperatorKind::Less
            | OperatorKind::LessOrEqual
            | OperatorKind::Add
            | OperatorKind::Subtract
            | OperatorKind::Multiply
            | OperatorKind::Divide
            | OperatorKind::IsInList
            | OperatorKind::IsNotInList
            | OperatorKind::StringContains
            | OperatorKind::StringStartsWith => OperandKind::Function,
            OperatorKind::Undefined => OperandKind::Undefined,
            OperatorKind::Unknown(_) => OperandKind::Unknown,
        },
        None => OperandKind::Unknown,
    }
}
