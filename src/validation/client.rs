use crate::ast::{AstNodeDto, NodePath};
use crate::error::ValidationError;
use async_trait::async_trait;
use serde::Serialize;

/// One validation request: the scenario being edited and the full tree
/// snapshot it carried at the moment of the triggering edit. The
/// cancellation signal travels out of band, not in the payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationRequest {
    pub scenario_id: String,
    pub ast_node: AstNodeDto,
}

/// One finding returned by the remote type-checker, locating the offending
/// node from the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFinding {
    pub path: NodePath,
    pub message: String,
}

/// The remote rule-execution engine's validation endpoint.
///
/// The transport adapter implementing this trait owns the JSON encoding of
/// finding paths; the core traffics in typed [`NodePath`]s only.
#[async_trait]
pub trait ValidationClient: Send + Sync {
    async fn validate(
        &self,
        request: ValidationRequest,
    ) -> Result<Vec<ValidationFinding>, ValidationError>;
}
