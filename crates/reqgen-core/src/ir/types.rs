use super::diagnostics::Diagnostic;
use super::operations::ApiOperation;

/// Generator-ready view of an API document: one module per declared tag.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiSpec {
    pub info: ApiInfo,
    pub modules: Vec<ApiModule>,
    /// Operations that were skipped or degraded while building the modules.
    pub diagnostics: Vec<Diagnostic>,
}

/// API metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiInfo {
    pub title: String,
    pub version: String,
}

/// The operations collected under one tag, in path-then-method walk order.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiModule {
    pub tag: String,
    pub description: Option<String>,
    pub operations: Vec<ApiOperation>,
}

impl ApiSpec {
    /// Total number of operations across all modules.
    pub fn operation_count(&self) -> usize {
        self.modules.iter().map(|m| m.operations.len()).sum()
    }
}
