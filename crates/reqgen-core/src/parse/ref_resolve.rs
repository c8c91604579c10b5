use std::collections::HashSet;

use super::components::Components;
use super::parameter::{Parameter, ParameterOrRef};
use super::request_body::{RequestBody, RequestBodyOrRef};
use super::schema::{Schema, SchemaOrRef};
use super::spec::Document;
use crate::error::ResolveError;

/// Read-only lookups of `$ref` targets in the document's `components` section.
///
/// Nothing is cached or rewritten: every lookup walks the document afresh, so
/// the result for one operation never depends on what was resolved before it.
#[derive(Debug, Clone, Copy)]
pub struct RefResolver<'a> {
    components: Option<&'a Components>,
}

impl<'a> RefResolver<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self {
            components: doc.components.as_ref(),
        }
    }

    /// Look up a schema by the trailing segment of its `$ref`, following
    /// schema-to-schema references until an inline schema is reached.
    pub fn lookup_schema(&self, ref_path: &str) -> Result<&'a Schema, ResolveError> {
        let mut visited = HashSet::new();
        let mut current = ref_path;
        loop {
            if !visited.insert(current) {
                return Err(ResolveError::CircularRef(ref_path.to_string()));
            }
            let name = ref_name(current)?;
            match self.components.and_then(|c| c.schemas.get(name)) {
                Some(SchemaOrRef::Schema(schema)) => return Ok(schema.as_ref()),
                Some(SchemaOrRef::Ref { ref_path: inner }) => current = inner,
                Some(SchemaOrRef::Other(node)) => {
                    return Err(ResolveError::malformed("schema", node));
                }
                None => return Err(ResolveError::RefTargetNotFound(current.to_string())),
            }
        }
    }

    /// Resolve a schema that may itself be a reference.
    pub fn schema(&self, schema_or_ref: &'a SchemaOrRef) -> Result<&'a Schema, ResolveError> {
        match schema_or_ref {
            SchemaOrRef::Ref { ref_path } => self.lookup_schema(ref_path),
            SchemaOrRef::Schema(schema) => Ok(schema.as_ref()),
            SchemaOrRef::Other(node) => Err(ResolveError::malformed("schema", node)),
        }
    }

    pub fn parameter(&self, param: &'a ParameterOrRef) -> Result<&'a Parameter, ResolveError> {
        match param {
            ParameterOrRef::Parameter(p) => Ok(p),
            ParameterOrRef::Other(node) => Err(ResolveError::malformed("parameter", node)),
            ParameterOrRef::Ref { ref_path } => {
                let name = parse_ref_name(ref_path, "parameters")?;
                match self.components.and_then(|c| c.parameters.get(name)) {
                    Some(ParameterOrRef::Parameter(param)) => Ok(param),
                    Some(ParameterOrRef::Other(node)) => {
                        Err(ResolveError::malformed("parameter", node))
                    }
                    Some(ParameterOrRef::Ref { .. }) | None => {
                        Err(ResolveError::RefTargetNotFound(ref_path.clone()))
                    }
                }
            }
        }
    }

    pub fn request_body(
        &self,
        body: &'a RequestBodyOrRef,
    ) -> Result<&'a RequestBody, ResolveError> {
        match body {
            RequestBodyOrRef::RequestBody(rb) => Ok(rb),
            RequestBodyOrRef::Other(node) => Err(ResolveError::malformed("request body", node)),
            RequestBodyOrRef::Ref { ref_path } => {
                let name = parse_ref_name(ref_path, "requestBodies")?;
                match self.components.and_then(|c| c.request_bodies.get(name)) {
                    Some(RequestBodyOrRef::RequestBody(body)) => Ok(body),
                    Some(RequestBodyOrRef::Other(node)) => {
                        Err(ResolveError::malformed("request body", node))
                    }
                    Some(RequestBodyOrRef::Ref { .. }) | None => {
                        Err(ResolveError::RefTargetNotFound(ref_path.clone()))
                    }
                }
            }
        }
    }
}

/// The trailing segment of a `$ref`, e.g. `OrderCreate` for
/// `#/components/schemas/OrderCreate`.
pub fn ref_name(ref_path: &str) -> Result<&str, ResolveError> {
    match ref_path.rsplit('/').next() {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(ResolveError::InvalidRefFormat(ref_path.to_string())),
    }
}

/// Parse a `$ref` path like `#/components/parameters/Foo` and extract the name.
fn parse_ref_name<'a>(ref_path: &'a str, expected_section: &str) -> Result<&'a str, ResolveError> {
    let stripped = ref_path
        .strip_prefix("#/components/")
        .ok_or_else(|| ResolveError::InvalidRefFormat(ref_path.to_string()))?;
    let (section, name) = stripped
        .split_once('/')
        .ok_or_else(|| ResolveError::InvalidRefFormat(ref_path.to_string()))?;
    if section != expected_section {
        return Err(ResolveError::InvalidRefFormat(format!(
            "expected section '{expected_section}', got '{section}' in {ref_path}"
        )));
    }
    Ok(name)
}
