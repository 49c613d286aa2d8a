use crate::operators::DataType;
use ahash::AHashMap;

/// A key into the externally-owned schema table: which table a field lives
/// on and the field's name. Held by view models instead of a pointer, since
/// the schema's lifetime is independent of any rule tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldRef {
    pub table: String,
    pub field: String,
}

/// One field of a schema table.
#[derive(Debug, Clone, PartialEq)]
pub struct DataModelField {
    pub name: String,
    pub data_type: DataType,
}

/// One table of the scenario's data model.
#[derive(Debug, Clone, Default)]
pub struct TableModel {
    pub fields: AHashMap<String, DataModelField>,
}

/// The schema the scenario's rules read from: the triggering object's table
/// plus any linked tables. Owned by the editor session, consulted by lookup
/// only.
#[derive(Debug, Clone, Default)]
pub struct DataModel {
    trigger_table: Option<String>,
    tables: AHashMap<String, TableModel>,
}

impl DataModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares which table holds the triggering object.
    pub fn with_trigger_table(mut self, name: impl Into<String>) -> Self {
        self.trigger_table = Some(name.into());
        self
    }

    /// Adds a table with the given fields.
    pub fn with_table(
        mut self,
        name: impl Into<String>,
        fields: impl IntoIterator<Item = DataModelField>,
    ) -> Self {
        let table = TableModel {
            fields: fields
                .into_iter()
                .map(|field| (field.name.clone(), field))
                .collect(),
        };
        self.tables.insert(name.into(), table);
        self
    }

    pub fn trigger_table(&self) -> Option<&str> {
        self.trigger_table.as_deref()
    }

    /// Resolves a field reference against the schema.
    pub fn field(&self, field_ref: &FieldRef) -> Option<&DataModelField> {
        self.tables
            .get(&field_ref.table)?
            .fields
            .get(&field_ref.field)
    }
}

impl DataModelField {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}
