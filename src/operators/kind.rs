use crate::ast::AstNode;
use std::fmt;

/// The closed vocabulary of operator names, plus an `Unknown` absorber.
///
/// Every consumer (classifier, normalizer, registry, serializer) matches on
/// this enum exhaustively, so adding a variant forces each call site to
/// decide how to handle it. Names the backend sends that are not in the
/// vocabulary land in `Unknown` instead of crashing the editor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    // Logical
    And,
    Or,
    Not,

    // Comparison
    Equal,
    NotEqual,
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,

    // Arithmetic
    Add,
    Subtract,
    Multiply,
    Divide,

    // Membership
    IsInList,
    IsNotInList,

    // String functions
    StringContains,
    StringStartsWith,

    // Data accessors
    DatabaseAccess,
    Payload,
    CustomListAccess,

    // Sentinel for a slot the user has not filled in yet
    Undefined,

    Unknown(String),
}

impl OperatorKind {
    /// Maps a wire operator name onto the vocabulary.
    ///
    /// Unrecognized names are a non-fatal signal: they classify as `Unknown`
    /// and, in debug builds, log a warning so an out-of-date vocabulary is
    /// noticed during development.
    pub fn from_name(name: &str) -> Self {
        match name {
            "AND" => OperatorKind::And,
            "OR" => OperatorKind::Or,
            "NOT" => OperatorKind::Not,
            "EQUAL" => OperatorKind::Equal,
            "NOT_EQUAL" => OperatorKind::NotEqual,
            "GREATER" => OperatorKind::Greater,
            "GREATER_OR_EQUAL" => OperatorKind::GreaterOrEqual,
            "LESS" => OperatorKind::Less,
            "LESS_OR_EQUAL" => OperatorKind::LessOrEqual,
            "ADD" => OperatorKind::Add,
            "SUBTRACT" => OperatorKind::Subtract,
            "MULTIPLY" => OperatorKind::Multiply,
            "DIVIDE" => OperatorKind::Divide,
            "IS_IN_LIST" => OperatorKind::IsInList,
            "IS_NOT_IN_LIST" => OperatorKind::IsNotInList,
            "STRING_CONTAINS" => OperatorKind::StringContains,
            "STRING_STARTS_WITH" => OperatorKind::StringStartsWith,
            "DatabaseAccess" => OperatorKind::DatabaseAccess,
            "Payload" => OperatorKind::Payload,
            "CustomListAccess" => OperatorKind::CustomListAccess,
            "Undefined" => OperatorKind::Undefined,
            other => {
                #[cfg(debug_assertions)]
                tracing::warn!(operator = other, "unrecognized operator name");
                OperatorKind::Unknown(other.to_string())
            }
        }
    }

    /// The wire name for this kind. Inverse of [`from_name`](Self::from_name)
    /// for every variant except `Unknown`, which echoes the original name.
    pub fn as_name(&self) -> &str {
        match self {
            OperatorKind::And => "AND",
            OperatorKind::Or => "OR",
            OperatorKind::Not => "NOT",
            OperatorKind::Equal => "EQUAL",
            OperatorKind::NotEqual => "NOT_EQUAL",
            OperatorKind::Greater => "GREATER",
            OperatorKind::GreaterOrEqual => "GREATER_OR_EQUAL",
            OperatorKind::Less => "LESS",
            OperatorKind::LessOrEqual => "LESS_OR_EQUAL",
            OperatorKind::Add => "ADD",
            OperatorKind::Subtract => "SUBTRACT",
            OperatorKind::Multiply => "MULTIPLY",
            OperatorKind::Divide => "DIVIDE",
            OperatorKind::IsInList => "IS_IN_LIST",
            OperatorKind::IsNotInList => "IS_NOT_IN_LIST",
            OperatorKind::StringContains => "STRING_CONTAINS",
            OperatorKind::StringStartsWith => "STRING_STARTS_WITH",
            OperatorKind::DatabaseAccess => "DatabaseAccess",
            OperatorKind::Payload => "Payload",
            OperatorKind::CustomListAccess => "CustomListAccess",
            OperatorKind::Undefined => "Undefined",
            OperatorKind::Unknown(name) => name,
        }
    }

    /// The kind of an operator node; `None` for bare constants.
    pub fn of(node: &AstNode) -> Option<OperatorKind> {
        node.name.as_deref().map(Self::from_name)
    }

    /// True for kinds that read data rather than compute over it.
    pub fn is_accessor(&self) -> bool {
        matches!(self, OperatorKind::DatabaseAccess | OperatorKind::Payload)
    }

    /// True for kinds that compute a value from their arguments.
    pub fn is_function(&self) -> bool {
        match self {
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
            | OperatorKind::StringStartsWith => true,
            OperatorKind::DatabaseAccess
            | OperatorKind::Payload
            | OperatorKind::CustomListAccess
            | OperatorKind::Undefined
            | OperatorKind::Unknown(_) => false,
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_name())
    }
}
