use std::fmt;

use crate::error::ResolveError;
use crate::parse::operation::HttpMethod;

/// A non-fatal condition observed while building the modules.
///
/// None of these change the generated output; they exist so callers can
/// report what was left out.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The operation's first tag has no matching tag declaration (or it has
    /// no tags at all); it appears in no module.
    TagMatchMiss {
        method: HttpMethod,
        path: String,
        tag: Option<String>,
    },
    /// A request body or parameter could not be resolved; the affected part
    /// of the operation was left empty.
    SchemaResolutionGap {
        method: HttpMethod,
        path: String,
        error: ResolveError,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::TagMatchMiss {
                method,
                path,
                tag: Some(tag),
            } => write!(f, "{method} {path}: no tag declaration named '{tag}'"),
            Diagnostic::TagMatchMiss {
                method,
                path,
                tag: None,
            } => write!(f, "{method} {path}: operation has no tags"),
            Diagnostic::SchemaResolutionGap {
                method,
                path,
                error,
            } => write!(f, "{method} {path}: {error}"),
        }
    }
}
