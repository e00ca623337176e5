//! Theme instances.
//!
//! A [`Theme`] pairs a shared definition with a font override and owns the
//! style cache for that combination. The definition lives in a
//! [`DefinitionSlot`] shared by all instances of the same theme id, so a
//! reload reaches every instance at once.

use std::sync::{Arc, PoisonError, RwLock};

use scope_style::{Color, Scope};

use crate::cache::StyleCache;
use crate::context::ThemeContext;
use crate::definition::{ThemeDefinition, ThemeId};
use crate::gutter::GutterStyles;
use crate::resolver::{ResolvedStyle, resolve};

/// Holder of the current definition for one theme id.
#[derive(Debug)]
pub struct DefinitionSlot {
    key: ThemeId,
    current: RwLock<Arc<ThemeDefinition>>,
}

impl DefinitionSlot {
    pub fn new(key: ThemeId, definition: ThemeDefinition) -> Self {
        Self {
            key,
            current: RwLock::new(Arc::new(definition)),
        }
    }

    /// The id this slot is registered under. For themes that could not be
    /// loaded this differs from the definition's generated id.
    pub fn key(&self) -> &ThemeId {
        &self.key
    }

    pub fn current(&self) -> Arc<ThemeDefinition> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Swaps in a new definition, returning the previous one.
    pub fn replace(&self, definition: ThemeDefinition) -> Arc<ThemeDefinition> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, Arc::new(definition))
    }
}

#[derive(Debug)]
pub struct Theme {
    slot: Arc<DefinitionSlot>,
    context: ThemeContext,
    font_name: String,
    font_size: f64,
    cache: StyleCache,
}

impl Theme {
    pub fn new(
        slot: Arc<DefinitionSlot>,
        context: ThemeContext,
        font_name: impl Into<String>,
        font_size: f64,
    ) -> Self {
        Self {
            slot,
            context,
            font_name: font_name.into(),
            font_size,
            cache: StyleCache::new(),
        }
    }

    /// Identity of the current definition.
    pub fn id(&self) -> ThemeId {
        self.definition().id().clone()
    }

    pub(crate) fn slot(&self) -> &Arc<DefinitionSlot> {
        &self.slot
    }

    pub fn definition(&self) -> Arc<ThemeDefinition> {
        self.slot.current()
    }

    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Resolves the style of `scope`, memoized per scope.
    pub fn styles_for_scope(&self, scope: &Scope) -> Arc<ResolvedStyle> {
        let definition = self.definition();
        self.cache.get_or_insert_with(&definition, scope, || {
            resolve(
                &definition,
                &self.context,
                &self.font_name,
                self.font_size,
                scope,
            )
        })
    }

    /// The background of `scope`, or the theme's baseline background.
    pub fn background(&self, scope: Option<&Scope>) -> Color {
        match scope {
            Some(scope) => self.styles_for_scope(scope).background,
            None => self.definition().background(),
        }
    }

    pub fn foreground(&self) -> Color {
        self.definition().foreground()
    }

    pub fn is_dark(&self) -> bool {
        self.definition().is_dark()
    }

    pub fn is_transparent(&self) -> bool {
        self.definition().is_transparent()
    }

    pub fn gutter_styles(&self) -> GutterStyles {
        *self.definition().gutter_styles()
    }

    /// Number of scopes resolved and cached so far.
    pub fn cached_styles(&self) -> usize {
        self.cache.len()
    }
}
