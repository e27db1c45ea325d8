use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::foundation::error::StudioResult;

/// Body served when the file is missing or unreadable.
pub const EMPTY_LIST: &str = "[]";

/// A single JSON file holding the saved prototypes.
///
/// Contents are opaque: nothing is parsed or validated, and the last write wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrototypeStore {
    path: PathBuf,
}

impl PrototypeStore {
    /// Store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents, or `[]` when the file cannot be read.
    pub fn read(&self) -> String {
        match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) => {
                tracing::debug!(
                    path = %self.path.display(),
                    error = %e,
                    "serving empty prototype list"
                );
                EMPTY_LIST.to_owned()
            }
        }
    }

    /// Replace the file with `body`.
    pub fn write(&self, body: &[u8]) -> StudioResult<()> {
        ensure_parent_dir(&self.path)?;
        std::fs::write(&self.path, body)
            .with_context(|| format!("write prototypes '{}'", self.path.display()))?;
        tracing::info!(path = %self.path.display(), bytes = body.len(), "prototypes saved");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/prototypes/store.rs"]
mod tests;
