//! # Shinsa - Rule Expression Tree Core
//!
//! **Shinsa** is the expression-tree core of a scenario editor for
//! fraud-detection rules. It owns the recursive node model and its wire
//! format, canonicalization into the "OR of ANDs" shape the visual builder
//! renders, the operator declaration registry, operand classification,
//! literal coercion of free text into typed constants, identifier
//! resolution for data accessors, and a cancellable validation pipeline
//! against the remote rule engine.
//!
//! ## Core Workflow
//!
//! 1.  **Parse**: A rule arrives from the backend as an [`ast::AstNodeDto`]
//!     and becomes an [`ast::AstNode`] tree. Parsing is total: malformed
//!     payloads yield a degraded tree, never an error.
//! 2.  **Normalize**: [`ast::normalize`] guarantees the root is a
//!     disjunction of conjunctions before the builder renders it.
//! 3.  **Edit**: Every edit replaces a subtree at a path and produces a
//!     fresh tree; [`editor::classify`] and
//!     [`editor::IdentifierResolver`] decide how each node is presented.
//! 4.  **Validate**: Each edit hands the new snapshot to the
//!     [`validation::ValidationOrchestrator`], which cancels the previous
//!     in-flight call and merges findings back by node path.
//! 5.  **Serialize**: On save, [`ast::dto::serialize`] reproduces the wire
//!     shape exactly.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shinsa::prelude::*;
//!
//! fn main() {
//!     // A bare comparison arriving from the backend...
//!     let rule = AstNode::operator("GREATER")
//!         .with_child(AstNode::operator("Payload").with_child(AstNode::constant("amount")))
//!         .with_child(AstNode::constant(1000.0));
//!
//!     // ...is canonicalized before the builder renders it.
//!     let canonical = normalize(rule);
//!     assert!(is_or_and_group(&canonical));
//!
//!     // Free text typed into an operand box becomes typed candidates.
//!     let candidates = coerce_to_constants("42");
//!     assert_eq!(candidates.len(), 2);
//!     assert_eq!(candidates[0].tooltip, "(number)");
//!     assert_eq!(candidates[1].tooltip, "(string)");
//! }
//! ```

pub mod ast;
pub mod data;
pub mod editor;
pub mod error;
pub mod operators;
pub mod prelude;
pub mod validation;
