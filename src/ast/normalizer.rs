//! Canonicalization into "OR of ANDs" form.
//!
//! The visual builder only renders disjunctions of conjunctions, so every
//! rule surfaced to it must have the shape `OR(AND(..), AND(..), ..)`. Both
//! functions here are total: any tree is classifiable as group-or-not, and
//! any tree can be wrapped.

use super::node::AstNode;
use crate::operators::OperatorKind;

/// True iff `node` is an `OR` whose direct children are all `AND` nodes.
///
/// Conservative on purpose: an `OR` with zero children, or with any child
/// that is not exactly an `AND`, is not a valid group.
pub fn is_or_and_group(node: &AstNode) -> bool {
    if !matches!(OperatorKind::of(node), Some(OperatorKind::Or)) {
        return false;
    }
    if node.children.is_empty() {
        return false;
    }
    node.children
        .iter()
        .all(|child| matches!(OperatorKind::of(child), Some(OperatorKind::And)))
}

/// Wraps an arbitrary node into a single-disjunct, single-conjunct group:
/// `OR(AND(node))`. The original node is carried unchanged.
pub fn wrap_in_or_and_groups(node: AstNode) -> AstNode {
    AstNode::operator(OperatorKind::Or.as_name())
        .with_child(AstNode::operator(OperatorKind::And.as_name()).with_child(node))
}

/// Top-level policy: a root that already is a group is used unchanged,
/// anything else is wrapped. Idempotent by construction.
pub fn normalize(node: AstNode) -> AstNode {
    if is_or_and_group(&node) {
        node
    } else {
        wrap_in_or_and_groups(node)
    }
}
