use crate::ast::NodePath;
use thiserror::Error;

/// Errors that can occur while assembling the operator registry.
#[derive(Error, Debug, Clone)]
pub enum RegistryError {
    #[error(
        "Operator '{name}' is declared by both the '{first_family}' and '{second_family}' families"
    )]
    DuplicateOperator {
        name: String,
        first_family: &'static str,
        second_family: &'static str,
    },
}

/// Errors that can occur when applying a structural edit to a rule tree.
#[derive(Error, Debug, Clone)]
pub enum EditError {
    #[error("No node exists at path '{path}' in the current tree")]
    PathNotFound { path: NodePath },
}

/// Errors that can occur during a remote validation call.
#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Validation call failed: {0}")]
    Rpc(String),
}
