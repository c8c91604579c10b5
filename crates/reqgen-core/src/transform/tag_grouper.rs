use std::collections::HashMap;

use log::{debug, warn};

use crate::ir::Diagnostic;
use crate::parse::operation::{HttpMethod, Operation, PathItem};
use crate::parse::spec::{Document, Tag};

/// An operation together with the method and path it was declared under.
#[derive(Debug, Clone, Copy)]
pub struct TaggedOperation<'a> {
    pub method: HttpMethod,
    pub path: &'a str,
    pub path_item: &'a PathItem,
    pub operation: &'a Operation,
}

/// The operations that landed on one tag declaration.
#[derive(Debug, Clone)]
pub struct TagGroup<'a> {
    pub tag: &'a Tag,
    pub operations: Vec<TaggedOperation<'a>>,
}

/// Result of grouping: one group per tag declaration, in declaration order,
/// plus the operations that matched no tag.
#[derive(Debug, Clone)]
pub struct Grouping<'a> {
    pub groups: Vec<TagGroup<'a>>,
    pub misses: Vec<Diagnostic>,
}

/// Bucket every operation under the tag named by its first `tags` entry.
///
/// Paths are visited in ascending byte order and methods in declaration
/// order; that walk alone fixes the order of operations inside a group.
/// When several tag declarations share a name only the first receives
/// operations. The document is only read.
pub fn group_by_tag(doc: &Document) -> Grouping<'_> {
    let mut groups: Vec<TagGroup<'_>> = doc
        .tags
        .iter()
        .map(|tag| TagGroup {
            tag,
            operations: Vec::new(),
        })
        .collect();

    let mut first_by_name: HashMap<&str, usize> = HashMap::new();
    for (i, tag) in doc.tags.iter().enumerate() {
        first_by_name.entry(tag.name.as_str()).or_insert(i);
    }

    let mut misses = Vec::new();
    for (path, path_item) in doc.sorted_paths() {
        for (&method, operation) in &path_item.operations {
            let key = operation.tags.first().map(String::as_str);
            match key.and_then(|name| first_by_name.get(name)) {
                Some(&index) => {
                    debug!("{method} {path} -> tag '{}'", groups[index].tag.name);
                    groups[index].operations.push(TaggedOperation {
                        method,
                        path,
                        path_item,
                        operation,
                    });
                }
                None => {
                    warn!("skipping {method} {path}: no matching tag for {key:?}");
                    misses.push(Diagnostic::TagMatchMiss {
                        method,
                        path: path.to_string(),
                        tag: key.map(String::from),
                    });
                }
            }
        }
    }

    Grouping { groups, misses }
}
