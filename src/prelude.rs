//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so a consumer can
//! bring the core API into scope with a single `use`.

// Node model and canonical form
pub use crate::ast::{
    AstNode, AstNodeDto, ConstantValue, DisplayAstNode, NodePath, PathSegment, is_or_and_group,
    normalize, wrap_in_or_and_groups,
};

// Operator vocabulary and declarations
pub use crate::operators::{
    DataType, OperatorDeclaration, OperatorKind, OperatorRegistry, OperatorSignature,
    RegistryBuilder,
};

// Editor-facing views
pub use crate::editor::{
    IdentifierResolver, LabelledAst, OperandContext, OperandKind, classify, coerce_to_constants,
};

// Schema lookups
pub use crate::data::{DataModel, DataModelField, FieldRef};

// Validation pipeline
pub use crate::validation::{
    RequestState, ValidationClient, ValidationFinding, ValidationOrchestrator, ValidationRequest,
    ValidationTable,
};

// Error types
pub use crate::error::{EditError, RegistryError, ValidationError};
