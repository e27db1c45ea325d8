use std::collections::BTreeMap;
use std::sync::Arc;

use crate::compositions::hero_bg::HeroBg;
use crate::compositions::integration_nodes::IntegrationNodes;
use crate::compositions::integration_terminal::IntegrationTerminal;
use crate::compositions::performance::PerformanceBento;
use crate::compositions::{Composition, VideoConfig};
use crate::foundation::error::{StudioError, StudioResult};

/// Compositions keyed by id, listed in id order.
#[derive(Clone, Default)]
pub struct CompositionRegistry {
    entries: BTreeMap<String, Arc<dyn Composition>>,
}

impl std::fmt::Debug for CompositionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.entries.keys()).finish()
    }
}

impl CompositionRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every built-in composition.
    pub fn builtin() -> Self {
        let mut reg = Self::new();
        let all: [Arc<dyn Composition>; 4] = [
            Arc::new(PerformanceBento::new()),
            Arc::new(HeroBg::new()),
            Arc::new(IntegrationNodes::new()),
            Arc::new(IntegrationTerminal::new()),
        ];
        for comp in all {
            // Ids above are distinct constants.
            let id = comp.id().to_owned();
            reg.entries.entry(id).or_insert(comp);
        }
        reg
    }

    /// Add `comp`; its id must be unique and its video config valid.
    pub fn register(&mut self, comp: Arc<dyn Composition>) -> StudioResult<()> {
        let id = comp.id().to_owned();
        if id.is_empty() {
            return Err(StudioError::validation("composition id must be non-empty"));
        }
        if self.entries.contains_key(&id) {
            return Err(StudioError::validation(format!(
                "duplicate composition id '{id}'"
            )));
        }
        let cfg = comp.video_config();
        VideoConfig::new(cfg.canvas.width, cfg.canvas.height, cfg.fps, cfg.duration)?;
        self.entries.insert(id, comp);
        Ok(())
    }

    /// Composition registered under `id`.
    pub fn get(&self, id: &str) -> Option<Arc<dyn Composition>> {
        self.entries.get(id).cloned()
    }

    /// Like [`CompositionRegistry::get`], with an error naming the known ids.
    pub fn require(&self, id: &str) -> StudioResult<Arc<dyn Composition>> {
        self.get(id).ok_or_else(|| {
            let known: Vec<&str> = self.ids().collect();
            StudioError::validation(format!(
                "unknown composition '{id}' (known: {})",
                known.join(", ")
            ))
        })
    }

    /// Registered ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(id, config)` pairs in id order.
    pub fn configs(&self) -> impl Iterator<Item = (&str, VideoConfig)> {
        self.entries
            .iter()
            .map(|(id, c)| (id.as_str(), c.video_config()))
    }

    /// Number of registered compositions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/registry.rs"]
mod tests;
