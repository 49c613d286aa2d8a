use ahash::AHashMap;
use std::fmt;

/// The type vocabulary used by operator contracts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    String,
    Number,
    Bool,
    Timestamp,
    Array(Box<DataType>),
    /// Operators that are generic over their operand type (equality, data
    /// accessors) declare `Any`.
    Any,
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataType::String => write!(f, "string"),
            DataType::Number => write!(f, "number"),
            DataType::Bool => write!(f, "boolean"),
            DataType::Timestamp => write!(f, "timestamp"),
            DataType::Array(element) => write!(f, "array<{}>", element),
            DataType::Any => write!(f, "any"),
        }
    }
}

/// How an operator takes its arguments.
#[derive(Debug, Clone, PartialEq)]
pub enum OperatorSignature {
    /// A fixed sequence of positional arguments.
    Positional(Vec<DataType>),
    /// Any number of positional arguments of one type (logical AND/OR).
    Variadic(DataType),
    /// Semantically distinct arguments addressed by name.
    Named(AHashMap<String, DataType>),
}

/// The static contract for one operator name: how it is called and what it
/// returns. Declarations are immutable; the registry owns them.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatorDeclaration {
    pub name: String,
    pub signature: OperatorSignature,
    pub return_type: DataType,
}

impl OperatorDeclaration {
    pub fn positional(
        name: impl Into<String>,
        args: Vec<DataType>,
        return_type: DataType,
    ) -> Self {
        Self {
            name: name.into(),
            signature: OperatorSignature::Positional(args),
            return_type,
        }
    }

    pub fn variadic(name: impl Into<String>, element: DataType, return_type: DataType) -> Self {
        Self {
            name: name.into(),
            signature: OperatorSignature::Variadic(element),
            return_type,
        }
    }

    pub fn named(
        name: impl Into<String>,
        args: impl IntoIterator<Item = (&'static str, DataType)>,
        return_type: DataType,
    ) -> Self {
        Self {
            name: name.into(),
            signature: OperatorSignature::Named(
                args.into_iter()
                    .map(|(key, data_type)| (key.to_string(), data_type))
                    .collect(),
            ),
            return_type,
        }
    }

    /// Whether `key` is one of this operator's declared named arguments.
    ///
    /// Used to validate that a node's `named_children` keys are a subset of
    /// the declaration; the tree structure itself does not enforce this.
    pub fn declares_named_argument(&self, key: &str) -> bool {
        match &self.signature {
            OperatorSignature::Named(args) => args.contains_key(key),
            OperatorSignature::Positional(_) | OperatorSignature::Variadic(_) => false,
        }
    }
}
