//! Cancellable remote validation, driven by edits.
//!
//! Every structural edit cancels whatever request is in flight and issues a
//! new one carrying the current tree snapshot. A completed call's findings
//! are applied only if its request is still the current one; a cancelled
//! request's result is discarded unconditionally, even when the underlying
//! network call completes later. Applicability is decided by a per-request
//! generation number, not a boolean "latest" flag, so two edits that happen
//! to produce structurally identical trees still cannot resurrect a stale
//! result.

use super::client::{ValidationClient, ValidationFinding, ValidationRequest};
use crate::ast::{AstNode, NodePath, dto};
use crate::error::ValidationError;
use ahash::AHashMap;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Lifecycle of the most recent validation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Requested,
    Completed,
    Cancelled,
}

/// Per-node-path findings from the last applicable validation, kept beside
/// the tree rather than on it so a stale result can never overwrite a newer
/// tree.
#[derive(Debug, Clone, Default)]
pub struct ValidationTable {
    entries: AHashMap<NodePath, Vec<String>>,
}

impl ValidationTable {
    /// The error messages recorded for a node, empty if the node is clean.
    pub fn errors_at(&self, path: &NodePath) -> &[String] {
        self.entries.get(path).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn root_errors(&self) -> &[String] {
        self.errors_at(&NodePath::root())
    }

    /// Number of node paths that currently carry at least one error.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn replace_with(&mut self, findings: Vec<ValidationFinding>) {
        self.entries.clear();
        for finding in findings {
            self.entries
                .entry(finding.path)
                .or_default()
                .push(finding.message);
        }
    }

    /// A transport failure surfaces at the root without clearing the
    /// per-node entries from the last successful validation.
    fn record_failure(&mut self, message: String) {
        self.entries
            .entry(NodePath::root())
            .or_default()
            .push(message);
    }
}

struct InFlight {
    generation: u64,
    token: CancellationToken,
}

struct Outcome {
    generation: u64,
    result: Result<Vec<ValidationFinding>, ValidationError>,
}

/// Drives asynchronous validation as the tree is edited.
///
/// The orchestrator is owned by a single editor session and used from its
/// event loop; the only asynchronous work is the network call itself.
pub struct ValidationOrchestrator {
    client: Arc<dyn ValidationClient>,
    scenario_id: String,
    generation: u64,
    in_flight: Option<InFlight>,
    state: RequestState,
    outcome_tx: UnboundedSender<Outcome>,
    outcome_rx: UnboundedReceiver<Outcome>,
    results: ValidationTable,
}

impl ValidationOrchestrator {
    pub fn new(client: Arc<dyn ValidationClient>, scenario_id: impl Into<String>) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            client,
            scenario_id: scenario_id.into(),
            generation: 0,
            in_flight: None,
            state: RequestState::Idle,
            outcome_tx,
            outcome_rx,
            results: ValidationTable::default(),
        }
    }

    /// Called on every structural edit: cancels the in-flight request, if
    /// any, and issues a new one carrying the current full tree snapshot.
    pub fn submit(&mut self, tree: &AstNode) {
        self.cancel_in_flight();

        self.generation += 1;
        let generation = self.generation;
        let token = CancellationToken::new();
        let request = ValidationRequest {
            scenario_id: self.scenario_id.clone(),
            ast_node: dto::serialize(tree),
        };

        let client = Arc::clone(&self.client);
        let outcome_tx = self.outcome_tx.clone();
        let task_token = token.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {
                    debug!(generation, "validation request cancelled in flight");
                }
                result = client.validate(request) => {
                    // The select can pick a ready response over an already
                    // cancelled token; the guard keeps the outcome out of
                    // the channel either way.
                    if !task_token.is_cancelled() {
                        let _ = outcome_tx.send(Outcome { generation, result });
                    }
                }
            }
        });

        self.in_flight = Some(InFlight { generation, token });
        self.state = RequestState::Requested;
        debug!(generation, scenario = %self.scenario_id, "validation requested");
    }

    /// Cancels the in-flight request. Idempotent: cancelling an
    /// already-completed or already-cancelled request is a no-op.
    pub fn cancel_in_flight(&mut self) {
        if let Some(in_flight) = &self.in_flight {
            in_flight.token.cancel();
            if self.state == RequestState::Requested {
                self.state = RequestState::Cancelled;
                debug!(generation = in_flight.generation, "validation cancelled");
            }
        }
    }

    /// Drains completed calls and applies those that are still applicable.
    /// Stale outcomes are discarded unconditionally.
    pub fn apply_completions(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
        }
    }

    /// Awaits the next completed call and applies it if still applicable.
    /// Returns whether a result was applied.
    pub async fn apply_next_completion(&mut self) -> bool {
        match self.outcome_rx.recv().await {
            Some(outcome) => self.apply_outcome(outcome),
            None => false,
        }
    }

    fn apply_outcome(&mut self, outcome: Outcome) -> bool {
        let applicable = self.in_flight.as_ref().is_some_and(|in_flight| {
            in_flight.generation == outcome.generation && !in_flight.token.is_cancelled()
        });
        if !applicable {
            debug!(
                generation = outcome.generation,
                "discarding validation result for a superseded tree"
            );
            return false;
        }

        match outcome.result {
            Ok(findings) => {
                debug!(
                    generation = outcome.generation,
                    findings = findings.len(),
                    "validation completed"
                );
                self.results.replace_with(findings);
            }
            Err(error) => {
                debug!(generation = outcome.generation, %error, "validation failed");
                self.results.record_failure(error.to_string());
            }
        }
        self.state = RequestState::Completed;
        true
    }

    /// Lifecycle state of the most recent request.
    pub fn state(&self) -> RequestState {
        self.state
    }

    /// The generation number of the most recent request. Strictly
    /// increasing; unique per request even when two edits produce equal
    /// trees.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn results(&self) -> &ValidationTable {
        &self.results
    }
}
