use super::declaration::{DataType, OperatorDeclaration};
use super::kind::OperatorKind;
use crate::error::RegistryError;
use ahash::AHashMap;

/// Name-keyed table of operator declarations, assembled once at start-up
/// from ordered family contributions.
#[derive(Debug, Clone)]
pub struct OperatorRegistry {
    table: AHashMap<String, OperatorDeclaration>,
}

/// Collects per-family declaration lists and checks for collisions when the
/// registry is built. A collision between families is a programming error in
/// the family tables, not a runtime case.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    families: Vec<(&'static str, Vec<OperatorDeclaration>)>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one family's declarations. Families are merged in the order they
    /// were added.
    pub fn family(
        mut self,
        family: &'static str,
        declarations: Vec<OperatorDeclaration>,
    ) -> Self {
        self.families.push((family, declarations));
        self
    }

    pub fn build(self) -> Result<OperatorRegistry, RegistryError> {
        let mut table = AHashMap::new();
        let mut origins: AHashMap<String, &'static str> = AHashMap::new();

        for (family, declarations) in self.families {
            for declaration in declarations {
                if let Some(first_family) = origins.get(&declaration.name).copied() {
                    return Err(RegistryError::DuplicateOperator {
                        name: declaration.name,
                        first_family,
                        second_family: family,
                    });
                }
                origins.insert(declaration.name.clone(), family);
                table.insert(declaration.name.clone(), declaration);
            }
        }

        Ok(OperatorRegistry { table })
    }
}

impl OperatorRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// The registry with the standard operator families merged in.
    ///
    /// Panics if the family tables declare overlapping names; the standard
    /// families are disjoint, so hitting this means the tables were edited
    /// incorrectly.
    pub fn standard() -> Self {
        Self::builder()
            .family("logical", logical_family())
            .family("comparison", comparison_family())
            .family("arithmetic", arithmetic_family())
            .family("string", string_family())
            .family("membership", membership_family())
            .family("data-access", access_family())
            .family("constants", constant_family())
            .build()
            .expect("standard operator families declare disjoint names")
    }

    pub fn lookup(&self, name: &str) -> Option<&OperatorDeclaration> {
        self.table.get(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Declaration for "is in list" over a concrete element type: the
    /// `value` argument is `element`, the `list` argument is
    /// `array<element>`, the result is boolean.
    ///
    /// Some declarations are generated per type parameter rather than
    /// hard-coded; this is the pattern's canonical instance.
    pub fn is_in_list_declaration(element: DataType) -> OperatorDeclaration {
        OperatorDeclaration::named(
            OperatorKind::IsInList.as_name(),
            [
                ("value", element.clone()),
                ("list", DataType::Array(Box::new(element))),
            ],
            DataType::Bool,
        )
    }

    /// The negated counterpart of
    /// [`is_in_list_declaration`](Self::is_in_list_declaration).
    pub fn is_not_in_list_declaration(element: DataType) -> OperatorDeclaration {
        OperatorDeclaration::named(
            OperatorKind::IsNotInList.as_name(),
            [
                ("value", element.clone()),
                ("list", DataType::Array(Box::new(element))),
            ],
            DataType::Bool,
        )
    }
}

fn logical_family() -> Vec<OperatorDeclaration> {
    vec![
        OperatorDeclaration::variadic(OperatorKind::And.as_name(), DataType::Bool, DataType::Bool),
        OperatorDeclaration::variadic(OperatorKind::Or.as_name(), DataType::Bool, DataType::Bool),
        OperatorDeclaration::positional(
            OperatorKind::Not.as_name(),
            vec![DataType::Bool],
            DataType::Bool,
        ),
    ]
}

fn comparison_family() -> Vec<OperatorDeclaration> {
    vec![
        OperatorDeclaration::positional(
            OperatorKind::Equal.as_name(),
            vec![DataType::Any, DataType::Any],
            DataType::Bool,
        ),
        OperatorDeclaration::positional(
            OperatorKind::NotEqual.as_name(),
            vec![DataType::Any, DataType::Any],
            DataType::Bool,
        ),
        OperatorDeclaration::positional(
            OperatorKind::Greater.as_name(),
            vec![DataType::Number, DataType::Number],
            DataType::Bool,
        ),
        OperatorDeclaration::positional(
            OperatorKind::GreaterOrEqual.as_name(),
            vec![DataType::Number, DataType::Number],
            DataType::Bool,
        ),
        OperatorDeclaration::positional(
            OperatorKind::Less.as_name(),
            vec![DataType::Number, DataType::Number],
            DataType::Bool,
        ),
        OperatorDeclaration::positional(
            OperatorKind::LessOrEqual.as_name(),
            vec![DataType::Number, DataType::Number],
            DataType::Bool,
        ),
    ]
}

fn arithmetic_family() -> Vec<OperatorDeclaration> {
    [
        OperatorKind::Add,
        OperatorKind::Subtract,
        OperatorKind::Multiply,
        OperatorKind::Divide,
    ]
    .into_iter()
    .map(|kind| {
        OperatorDeclaration::positional(
            kind.as_name(),
            vec![DataType::Number, DataType::Number],
            DataType::Number,
        )
    })
    .collect()
}

fn string_family() -> Vec<OperatorDeclaration> {
    [OperatorKind::StringContains, OperatorKind::StringStartsWith]
        .into_iter()
        .map(|kind| {
            OperatorDeclaration::positional(
                kind.as_name(),
                vec![DataType::String, DataType::String],
                DataType::Bool,
            )
        })
        .collect()
}

fn membership_family() -> Vec<OperatorDeclaration> {
    vec![
        OperatorRegistry::is_in_list_declaration(DataType::String),
        OperatorRegistry::is_not_in_list_declaration(DataType::String),
    ]
}

fn access_family() -> Vec<OperatorDeclaration> {
    vec![
        OperatorDeclaration::named(
            OperatorKind::DatabaseAccess.as_name(),
            [
                ("path", DataType::Array(Box::new(DataType::String))),
                ("fieldName", DataType::String),
            ],
            DataType::Any,
        ),
        OperatorDeclaration::positional(
            OperatorKind::Payload.as_name(),
            vec![DataType::String],
            DataType::Any,
        ),
        OperatorDeclaration::named(
            OperatorKind::CustomListAccess.as_name(),
            [("customListId", DataType::String)],
            DataType::Array(Box::new(DataType::Any)),
        ),
    ]
}

fn constant_family() -> Vec<OperatorDeclaration> {
    vec![OperatorDeclaration::positional(
        OperatorKind::Undefined.as_name(),
        Vec::new(),
        DataType::Any,
    )]
}
