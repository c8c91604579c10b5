use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConfigError, ParseError};

/// Endpoint the API document is fetched from when no config overrides it.
pub const DEFAULT_INPUT: &str = "http://localhost:8081/v3/api-docs";

/// Directory generated modules are written to by default.
pub const DEFAULT_OUTPUT: &str = "src/api";

/// First line of every generated module.
pub const DEFAULT_IMPORT_LINE: &str = "import request from '@/utils/request'";

/// Top-level project configuration loaded from `.reqgen.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReqgenConfig {
    pub input: String,
    pub output: String,
    pub client: ClientConfig,
}

impl Default for ReqgenConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            client: ClientConfig::default(),
        }
    }
}

/// Options for the generated request modules.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Preamble placed at the top of each module.
    pub import_line: String,
    /// Also write modules for tags that received no operations.
    pub emit_empty_modules: bool,
    /// Omit the doc comment above each function.
    pub no_jsdoc: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            import_line: DEFAULT_IMPORT_LINE.to_string(),
            emit_empty_modules: false,
            no_jsdoc: false,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".reqgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ReqgenConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ReqgenConfig =
        serde_yaml_ng::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: ParseError::Yaml(e),
        })?;
    Ok(Some(config))
}
