use indexmap::IndexMap;
use serde::Deserialize;

use super::components::Components;
use super::operation::PathItem;
use super::schema::SchemaOrRef;

/// Info object describing the API.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Info {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub version: String,
}

/// Tag definition. The description doubles as the source of the output file name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The fetched API document. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub info: Info,

    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    #[serde(default)]
    pub components: Option<Components>,

    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Document {
    /// Path keys in ascending byte order, the order every walk over the document uses.
    pub fn sorted_paths(&self) -> Vec<(&str, &PathItem)> {
        let mut paths: Vec<(&str, &PathItem)> = self
            .paths
            .iter()
            .map(|(path, item)| (path.as_str(), item))
            .collect();
        paths.sort_by(|a, b| a.0.cmp(b.0));
        paths
    }

    /// The `components.schemas` section, empty when the document has none.
    pub fn schemas(&self) -> Option<&IndexMap<String, SchemaOrRef>> {
        self.components.as_ref().map(|c| &c.schemas)
    }
}
