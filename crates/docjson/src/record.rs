use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Emitted documentation of one class-like declaration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationRecord {
    pub comment: String,
    pub fields: IndexMap<String, PropertyRecord>,
    pub methods: IndexMap<String, FunctionRecord>,
}

/// Emitted documentation of a property. `tags` is always empty.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub comment: String,
    pub tags: IndexMap<String, String>,
}

/// Emitted documentation of a function.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub comment: String,
    /// Parameter name to its documentation text.
    pub parameters: IndexMap<String, String>,
    pub tags: IndexMap<String, String>,
}
