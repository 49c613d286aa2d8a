//! Common test utilities for building rule trees and schema tables.
use shinsa::prelude::*;

/// A database accessor reading `user.account.balance`.
#[allow(dead_code)]
pub fn database_accessor() -> AstNode {
    AstNode::operator("DatabaseAccess")
        .with_named_child(
            "path",
            AstNode::constant(vec![
                ConstantValue::String("user".to_string()),
                ConstantValue::String("account".to_string()),
            ]),
        )
        .with_named_child("fieldName", AstNode::constant("balance"))
}

/// A payload accessor reading a field off the triggering object.
#[allow(dead_code)]
pub fn payload_accessor(field: &str) -> AstNode {
    AstNode::operator("Payload").with_child(AstNode::constant(field))
}

/// `amount > threshold` against the triggering object.
#[allow(dead_code)]
pub fn amount_rule(threshold: f64) -> AstNode {
    AstNode::operator("GREATER")
        .with_child(payload_accessor("amount"))
        .with_child(AstNode::constant(threshold))
}

/// The canonical form of [`amount_rule`]: `OR(AND(amount > threshold))`.
#[allow(dead_code)]
pub fn canonical_amount_rule(threshold: f64) -> AstNode {
    AstNode::operator("OR")
        .with_child(AstNode::operator("AND").with_child(amount_rule(threshold)))
}

/// A schema with a `transactions` trigger table and a linked `account`
/// table.
#[allow(dead_code)]
pub fn sample_data_model() -> DataModel {
    DataModel::new()
        .with_trigger_table("transactions")
        .with_table(
            "transactions",
            vec![
                DataModelField::new("amount", DataType::Number),
                DataModelField::new("country", DataType::String),
            ],
        )
        .with_table(
            "account",
            vec![DataModelField::new("balance", DataType::Number)],
        )
}
