pub mod components;
pub mod media_type;
pub mod operation;
pub mod parameter;
pub mod ref_resolve;
pub mod request_body;
pub mod schema;
pub mod spec;

use crate::error::ParseError;
use spec::Document;

/// Parse an API document from its JSON text.
///
/// Only the sections the generator reads are modelled; anything else in the
/// document is ignored rather than validated.
pub fn from_json(input: &str) -> Result<Document, ParseError> {
    let doc: Document = serde_json::from_str(input)?;
    Ok(doc)
}
