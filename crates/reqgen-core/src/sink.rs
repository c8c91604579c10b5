use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::GeneratedFile;
use crate::error::SinkError;

/// Destination for generated files.
pub trait OutputSink {
    /// Persist one file. An error ends the run; files already persisted stay.
    fn persist(&mut self, file: &GeneratedFile) -> Result<(), SinkError>;
}

/// Writes files under a base directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    base: PathBuf,
}

impl DirectorySink {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl OutputSink for DirectorySink {
    fn persist(&mut self, file: &GeneratedFile) -> Result<(), SinkError> {
        let path = self.base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| SinkError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &file.content).map_err(|source| SinkError::Write {
            path: path.clone(),
            source,
        })?;
        info!("wrote {}", path.display());
        Ok(())
    }
}

/// Persist files in order, stopping at the first failure.
pub fn persist_all(sink: &mut impl OutputSink, files: &[GeneratedFile]) -> Result<(), SinkError> {
    for file in files {
        sink.persist(file)?;
    }
    Ok(())
}
