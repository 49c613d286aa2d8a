//! Tests for the validation orchestrator: cancellation, stale-result
//! discarding and failure handling.
mod common;
use async_trait::async_trait;
use common::*;
use shinsa::prelude::*;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Answers every call with a finding that echoes the threshold constant of
/// the submitted tree, so tests can tell which snapshot a result belongs to.
struct EchoClient;

impl EchoClient {
    fn new() -> Arc<Self> {
        Arc::new(Self)
    }
}

#[async_trait]
impl ValidationClient for EchoClient {
    async fn validate(
        &self,
        request: ValidationRequest,
    ) -> Result<Vec<ValidationFinding>, ValidationError> {
        let threshold = request.ast_node.children[0].children[0].children[1]
            .constant
            .clone()
            .map(|constant| format!("{:?}", constant))
            .unwrap_or_default();
        Ok(vec![ValidationFinding {
            path: NodePath::root(),
            message: format!("threshold {}", threshold),
        }])
    }
}

/// Plays back a scripted sequence of responses, one per call.
struct ScriptedClient {
    script: Mutex<VecDeque<Result<Vec<ValidationFinding>, ValidationError>>>,
}

impl ScriptedClient {
    fn new(
        script: impl IntoIterator<Item = Result<Vec<ValidationFinding>, ValidationError>>,
    ) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into_iter().collect()),
        })
    }
}

#[async_trait]
impl ValidationClient for ScriptedClient {
    async fn validate(
        &self,
        _request: ValidationRequest,
    ) -> Result<Vec<ValidationFinding>, ValidationError> {
        self.script
            .lock()
            .expect("script lock")
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[tokio::test]
async fn test_only_the_latest_edit_result_is_applied() {
    let client = EchoClient::new();
    let mut orchestrator = ValidationOrchestrator::new(client, "scenario-1");

    // Three rapid edits; each cancels the previous request.
    orchestrator.submit(&canonical_amount_rule(1.0));
    orchestrator.submit(&canonical_amount_rule(2.0));
    orchestrator.submit(&canonical_amount_rule(3.0));
    assert_eq!(orchestrator.generation(), 3);

    assert!(orchestrator.apply_next_completion().await);
    assert_eq!(
        orchestrator.results().root_errors(),
        ["threshold Number(3.0)"]
    );

    // Nothing from the cancelled requests ever arrives.
    orchestrator.apply_completions();
    assert_eq!(orchestrator.results().len(), 1);
    assert_eq!(orchestrator.state(), RequestState::Completed);
}

#[tokio::test]
async fn test_stale_results_are_discarded_even_when_already_delivered() {
    let client = EchoClient::new();
    let mut orchestrator = ValidationOrchestrator::new(client, "scenario-1");

    // Let the first request complete and deliver its outcome...
    orchestrator.submit(&canonical_amount_rule(1.0));
    for _ in 0..4 {
        tokio::task::yield_now().await;
    }

    // ...then edit again before the outcome was applied. The delivered
    // result belongs to a superseded snapshot and must not surface.
    orchestrator.submit(&canonical_amount_rule(2.0));
    orchestrator.apply_completions();
    assert!(orchestrator.results().is_empty());
    assert_eq!(orchestrator.state(), RequestState::Requested);

    assert!(orchestrator.apply_next_completion().await);
    assert_eq!(
        orchestrator.results().root_errors(),
        ["threshold Number(2.0)"]
    );
}

#[tokio::test]
async fn test_identical_trees_still_get_distinct_generations() {
    let client = EchoClient::new();
    let mut orchestrator = ValidationOrchestrator::new(client, "scenario-1");

    let tree = canonical_amount_rule(1.0);
    orchestrator.submit(&tree);
    orchestrator.submit(&tree);

    // Structural equality of the snapshots does not merge the requests.
    assert_eq!(orchestrator.generation(), 2);

    assert!(orchestrator.apply_next_completion().await);
    assert_eq!(orchestrator.results().len(), 1);
}

#[tokio::test]
async fn test_cancellation_is_idempotent() {
    let client = EchoClient::new();
    let mut orchestrator = ValidationOrchestrator::new(client, "scenario-1");
    assert_eq!(orchestrator.state(), RequestState::Idle);

    orchestrator.submit(&canonical_amount_rule(1.0));
    assert_eq!(orchestrator.state(), RequestState::Requested);

    orchestrator.cancel_in_flight();
    orchestrator.cancel_in_flight();
    assert_eq!(orchestrator.state(), RequestState::Cancelled);

    // The cancelled request never surfaces a result.
    orchestrator.apply_completions();
    assert!(orchestrator.results().is_empty());

    // A new request proceeds normally afterwards.
    orchestrator.submit(&canonical_amount_rule(2.0));
    assert!(orchestrator.apply_next_completion().await);
    assert_eq!(orchestrator.state(), RequestState::Completed);

    // Cancelling after completion is a no-op.
    orchestrator.cancel_in_flight();
    assert_eq!(orchestrator.state(), RequestState::Completed);
}

#[tokio::test]
async fn test_rpc_failure_is_recorded_at_the_root_without_clearing_siblings() {
    let clause_path = NodePath::root().child(0).child(0);
    let client = ScriptedClient::new([
        Ok(vec![ValidationFinding {
            path: clause_path.clone(),
            message: "operand types do not match".to_string(),
        }]),
        Err(ValidationError::Rpc("connection reset".to_string())),
    ]);
    let mut orchestrator = ValidationOrchestrator::new(client, "scenario-1");

    orchestrator.submit(&canonical_amount_rule(1.0));
    assert!(orchestrator.apply_next_completion().await);
    assert_eq!(
        orchestrator.results().errors_at(&clause_path),
        ["operand types do not match"]
    );
    assert!(orchestrator.results().root_errors().is_empty());

    orchestrator.submit(&canonical_amount_rule(2.0));
    assert!(orchestrator.apply_next_completion().await);

    // The failure surfaces at the root; the per-node entry survives.
    assert_eq!(orchestrator.results().root_errors().len(), 1);
    assert!(orchestrator.results().root_errors()[0].contains("connection reset"));
    assert_eq!(
        orchestrator.results().errors_at(&clause_path),
        ["operand types do not match"]
    );
    assert_eq!(orchestrator.results().len(), 2);
}

#[tokio::test]
async fn test_successful_validation_replaces_previous_findings() {
    let clause_path = NodePath::root().child(0).child(0);
    let client = ScriptedClient::new([
        Ok(vec![ValidationFinding {
            path: clause_path.clone(),
            message: "operand types do not match".to_string(),
        }]),
        Ok(Vec::new()),
    ]);
    let mut orchestrator = ValidationOrchestrator::new(client, "scenario-1");

    orchestrator.submit(&canonical_amount_rule(1.0));
    assert!(orchestrator.apply_next_completion().await);
    assert_eq!(orchestrator.results().len(), 1);

    // The corrected tree validates cleanly and the old finding is gone.
    orchestrator.submit(&canonical_amount_rule(2.0));
    assert!(orchestrator.apply_next_completion().await);
    assert!(orchestrator.results().is_empty());
}
