use indexmap::IndexMap;
use serde::Deserialize;

/// The `type` field can be a single type or an array of types.
///
/// Type names are kept as written so that documents using non-standard
/// values (`file`, vendor types) still load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    Single(String),
    Multiple(Vec<String>),
}

impl TypeSet {
    /// Render the type the way it appears in a doc comment, e.g. `string` or `string|null`.
    pub fn display(&self) -> String {
        match self {
            TypeSet::Single(t) => t.clone(),
            TypeSet::Multiple(types) => types.join("|"),
        }
    }
}

/// A reference or inline schema.
///
/// Nodes that fit neither shape (a bare `true`, a mistyped keyword) are kept
/// as `Other` so one odd schema cannot fail the whole document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
    Other(serde_json::Value),
}

/// The subset of a JSON Schema object the generator reads.
///
/// Composition keywords (`allOf`, `oneOf`, `anyOf`) are not modelled.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", default)]
    pub schema_type: Option<TypeSet>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub properties: IndexMap<String, SchemaOrRef>,

    #[serde(default)]
    pub items: Option<Box<SchemaOrRef>>,
}
