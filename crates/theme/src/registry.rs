//! Theme registry.
//!
//! The registry owns two caches:
//!
//! - shared definitions, one [`DefinitionSlot`] per theme id, built from the
//!   [`ThemeSource`] on first use and rebuilt on reload notifications
//! - theme instances, one per theme id and font override, each with its own
//!   style cache and a reference to the shared slot
//!
//! A registry is created once by the host and passed to whoever needs
//! themes; separate registries share nothing.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use scope_style::ThemeDocument;

use crate::context::ThemeContext;
use crate::definition::{ThemeDefinition, ThemeId};
use crate::font::{DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE};
use crate::theme::{DefinitionSlot, Theme};

/// Storage that can look up theme documents by id.
pub trait ThemeSource: Send + Sync {
    /// The JSON document of theme `id`, if it exists.
    fn lookup(&self, id: &ThemeId) -> Option<String>;
}

/// A [`ThemeSource`] backed by an in-memory map.
#[derive(Debug, Default)]
pub struct MemoryThemeSource {
    documents: RwLock<HashMap<ThemeId, String>>,
}

impl MemoryThemeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, id: impl Into<ThemeId>, document: impl Into<String>) {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.into(), document.into());
    }

    pub fn remove(&self, id: &ThemeId) -> Option<String> {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
    }
}

impl ThemeSource for MemoryThemeSource {
    fn lookup(&self, id: &ThemeId) -> Option<String> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }
}

/// Cache key for theme instances.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct InstanceKey {
    id: ThemeId,
    font_name: String,
    font_size_bits: u64,
}

impl InstanceKey {
    fn new(id: &ThemeId, font_name: &str, font_size: f64) -> Self {
        Self {
            id: id.clone(),
            font_name: font_name.to_string(),
            font_size_bits: font_size.to_bits(),
        }
    }
}

pub struct ThemeRegistry {
    source: Arc<dyn ThemeSource>,
    context: ThemeContext,
    definitions: RwLock<HashMap<ThemeId, Arc<DefinitionSlot>>>,
    instances: RwLock<HashMap<InstanceKey, Arc<Theme>>>,
}

impl ThemeRegistry {
    pub fn new(source: Arc<dyn ThemeSource>, context: ThemeContext) -> Self {
        Self {
            source,
            context,
            definitions: RwLock::new(HashMap::new()),
            instances: RwLock::new(HashMap::new()),
        }
    }

    /// The instance of theme `id` with the default font.
    pub fn theme(&self, id: &ThemeId) -> Arc<Theme> {
        self.theme_with_font(id, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE)
    }

    /// The instance of theme `id` with the given font override.
    ///
    /// Equal overrides share one instance; different overrides get sibling
    /// instances over the same definition.
    pub fn theme_with_font(&self, id: &ThemeId, font_name: &str, font_size: f64) -> Arc<Theme> {
        let key = InstanceKey::new(id, font_name, font_size);

        // Try read lock first
        {
            let instances = self.instances.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(theme) = instances.get(&key) {
                return Arc::clone(theme);
            }
        }

        let slot = self.slot(id);
        let mut instances = self.instances.write().unwrap_or_else(PoisonError::into_inner);
        let theme = instances.entry(key).or_insert_with(|| {
            Arc::new(Theme::new(
                slot,
                self.context.clone(),
                font_name,
                font_size,
            ))
        });
        Arc::clone(theme)
    }

    /// The same theme as `theme` with another font override.
    pub fn with_font_override(&self, theme: &Theme, font_name: &str, font_size: f64) -> Arc<Theme> {
        self.theme_with_font(theme.slot().key(), font_name, font_size)
    }

    /// The current shared definition of theme `id`.
    pub fn definition(&self, id: &ThemeId) -> Arc<ThemeDefinition> {
        self.slot(id).current()
    }

    /// Rebuilds the definition of theme `id` from the source.
    ///
    /// When the document is gone or no longer decodes, the current
    /// definition stays in place.
    pub fn reload(&self, id: &ThemeId) {
        let slot = {
            let definitions = self.definitions.read().unwrap_or_else(PoisonError::into_inner);
            match definitions.get(id) {
                Some(slot) => Arc::clone(slot),
                None => return,
            }
        };
        self.rebuild(&slot);
    }

    /// Reload notification: rebuilds every definition loaded so far.
    pub fn bundles_did_change(&self) {
        let slots: Vec<Arc<DefinitionSlot>> = self
            .definitions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();

        log::debug!("Reloading {} theme definitions", slots.len());
        for slot in slots {
            self.rebuild(&slot);
        }
    }

    fn slot(&self, id: &ThemeId) -> Arc<DefinitionSlot> {
        {
            let definitions = self.definitions.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(slot) = definitions.get(id) {
                return Arc::clone(slot);
            }
        }

        let mut definitions = self.definitions.write().unwrap_or_else(PoisonError::into_inner);
        let slot = definitions.entry(id.clone()).or_insert_with(|| {
            let definition = self
                .load(id)
                .unwrap_or_else(ThemeDefinition::default_theme);
            Arc::new(DefinitionSlot::new(id.clone(), definition))
        });
        Arc::clone(slot)
    }

    fn rebuild(&self, slot: &DefinitionSlot) {
        if let Some(definition) = self.load(slot.key()) {
            let previous = slot.replace(definition);
            log::debug!(
                "Rebuilt theme '{}' (revision {} replaced)",
                slot.key(),
                previous.revision()
            );
        }
    }

    /// Looks up and decodes theme `id`.
    fn load(&self, id: &ThemeId) -> Option<ThemeDefinition> {
        let Some(text) = self.source.lookup(id) else {
            log::debug!("Theme '{id}' not found in source");
            return None;
        };

        match ThemeDocument::from_json(&text) {
            Ok(doc) => {
                let definition = ThemeDefinition::from_document(id.clone(), &doc);
                log::debug!(
                    "Built theme '{id}' with {} rules",
                    definition.rules().len()
                );
                Some(definition)
            }
            Err(err) => {
                log::warn!("Theme '{id}' could not be decoded: {err}");
                None
            }
        }
    }
}

impl std::fmt::Debug for ThemeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeRegistry")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
