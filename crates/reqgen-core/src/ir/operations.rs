use indexmap::IndexMap;

use crate::parse::operation::HttpMethod;

/// A normalized operation, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiOperation {
    pub method: HttpMethod,
    /// The path template as declared, e.g. `/users/{id}`.
    pub raw_url: String,
    /// The path with its trailing placeholder segment and trailing slash removed.
    pub cleaned_url: String,
    pub function_name: String,
    pub summary: String,
    pub parameters: Vec<ApiParameter>,
    /// Request body fields in schema declaration order; empty without a body.
    pub request_fields: FieldMap,
}

/// A declared parameter with its schema type.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiParameter {
    pub name: String,
    pub type_name: String,
    pub description: String,
}

/// A request body field.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiField {
    pub type_name: String,
    pub description: String,
}

pub type FieldMap = IndexMap<String, ApiField>;
