use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::StudioResult;
use crate::render::backend::RenderSettings;
use crate::render::pipeline::RenderThreading;

/// Default prototypes file, relative to the working directory.
pub const DEFAULT_PROTOTYPES_FILE: &str = "prototypes.json";
/// Default listen address of the prototypes endpoint.
pub const DEFAULT_SERVER_ADDR: &str = "127.0.0.1:5173";

/// Settings read from a JSON file; every field falls back to its default when omitted.
///
/// Command-line flags take precedence over anything set here.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StudioConfig {
    /// Extra fonts loaded next to the system fonts.
    pub fonts_dir: Option<PathBuf>,
    /// Backing file of `/api/prototypes`.
    pub prototypes_file: PathBuf,
    /// Listen address of `serve`.
    pub server_addr: String,
    /// Defaults for multi-frame renders.
    pub threading: RenderThreading,
    /// Background that MP4 output is flattened over.
    pub bg_rgba: [u8; 4],
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            fonts_dir: None,
            prototypes_file: PathBuf::from(DEFAULT_PROTOTYPES_FILE),
            server_addr: DEFAULT_SERVER_ADDR.to_owned(),
            threading: RenderThreading::default(),
            bg_rgba: [0, 0, 0, 255],
        }
    }
}

impl StudioConfig {
    /// Parse a config file.
    pub fn load(path: &Path) -> StudioResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        let cfg = Self::from_json(&text)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    /// Parse config JSON.
    pub fn from_json(text: &str) -> StudioResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// [`StudioConfig::load`] when a path is given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> StudioResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Backend settings for a render at `scale`.
    pub fn render_settings(&self, scale: f64) -> RenderSettings {
        RenderSettings {
            clear_rgba: None,
            scale,
            fonts_dir: self.fonts_dir.clone(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
