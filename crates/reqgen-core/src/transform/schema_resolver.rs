use indexmap::IndexMap;

use crate::error::ResolveError;
use crate::ir::{ApiField, FieldMap};
use crate::parse::media_type::{APPLICATION_JSON, FORM_URLENCODED, MULTIPART_FORM_DATA};
use crate::parse::ref_resolve::{RefResolver, ref_name};
use crate::parse::request_body::RequestBodyOrRef;
use crate::parse::schema::{Schema, SchemaOrRef};

/// Type name used when a schema declares no `type`.
pub const UNKNOWN_TYPE: &str = "any";

/// Resolve an operation's request body to its flat field list.
///
/// Content types are tried in a fixed order and the first one present wins:
/// `application/json`, then `multipart/form-data`, then
/// `application/x-www-form-urlencoded`. Any other content type, or no body
/// at all, yields an empty map.
pub fn resolve_request_fields<'a>(
    body: Option<&'a RequestBodyOrRef>,
    resolver: &RefResolver<'a>,
) -> Result<FieldMap, ResolveError> {
    let Some(body) = body else {
        return Ok(FieldMap::new());
    };
    let body = resolver.request_body(body)?;

    if let Some(media) = body.content.get(APPLICATION_JSON) {
        return match &media.schema {
            Some(schema) => json_body_fields(schema, resolver),
            None => Ok(FieldMap::new()),
        };
    }

    for content_type in [MULTIPART_FORM_DATA, FORM_URLENCODED] {
        if let Some(media) = body.content.get(content_type) {
            return match &media.schema {
                Some(schema) => Ok(fields_of(&resolver.schema(schema)?.properties)),
                None => Ok(FieldMap::new()),
            };
        }
    }

    Ok(FieldMap::new())
}

/// JSON bodies normally point at a named schema; arrays of a named schema
/// resolve to the item's fields. A JSON schema with nothing to list is an
/// error so the gap shows up in the diagnostics.
fn json_body_fields<'a>(
    schema_or_ref: &'a SchemaOrRef,
    resolver: &RefResolver<'a>,
) -> Result<FieldMap, ResolveError> {
    let schema = resolver.schema(schema_or_ref)?;
    if !schema.properties.is_empty() {
        return Ok(fields_of(&schema.properties));
    }
    let Some(items) = &schema.items else {
        return Err(ResolveError::MissingProperties(label(schema_or_ref)));
    };
    let item = resolver.schema(items)?;
    if item.properties.is_empty() {
        return Err(ResolveError::MissingProperties(label(items)));
    }
    Ok(fields_of(&item.properties))
}

fn label(schema_or_ref: &SchemaOrRef) -> String {
    match schema_or_ref {
        SchemaOrRef::Ref { ref_path } => ref_path.clone(),
        _ => "inline schema".to_string(),
    }
}

fn fields_of(properties: &IndexMap<String, SchemaOrRef>) -> FieldMap {
    properties
        .iter()
        .map(|(name, prop)| {
            let field = ApiField {
                type_name: type_name(prop),
                description: description(prop),
            };
            (name.clone(), field)
        })
        .collect()
}

/// The type shown for a field or parameter: the `type` keyword, or the
/// referenced schema's name for a `$ref`.
pub fn type_name(schema_or_ref: &SchemaOrRef) -> String {
    match schema_or_ref {
        SchemaOrRef::Ref { ref_path } => ref_name(ref_path).unwrap_or(UNKNOWN_TYPE).to_string(),
        SchemaOrRef::Schema(schema) => schema_type_name(schema),
        SchemaOrRef::Other(_) => UNKNOWN_TYPE.to_string(),
    }
}

fn schema_type_name(schema: &Schema) -> String {
    match &schema.schema_type {
        Some(types) => types.display(),
        None if !schema.properties.is_empty() => "object".to_string(),
        None if schema.items.is_some() => "array".to_string(),
        None => UNKNOWN_TYPE.to_string(),
    }
}

fn description(schema_or_ref: &SchemaOrRef) -> String {
    match schema_or_ref {
        SchemaOrRef::Schema(schema) => schema.description.clone().unwrap_or_default(),
        SchemaOrRef::Ref { .. } | SchemaOrRef::Other(_) => String::new(),
    }
}
