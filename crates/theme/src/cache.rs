//! Per-instance memo of resolved styles.
//!
//! The cache maps exact scope values to shared [`ResolvedStyle`]s and grows
//! for the lifetime of its theme instance. It remembers which definition
//! its entries were resolved against: when a newer definition shows up the
//! map starts over, while styles already handed out stay untouched.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use scope_style::Scope;

use crate::definition::ThemeDefinition;
use crate::resolver::ResolvedStyle;

#[derive(Debug)]
struct CacheState {
    revision: u64,
    styles: HashMap<Scope, Arc<ResolvedStyle>>,
}

#[derive(Debug)]
pub struct StyleCache {
    state: RwLock<CacheState>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CacheState {
                revision: 0,
                styles: HashMap::new(),
            }),
        }
    }

    /// Returns the cached style for `scope` under `definition`, resolving
    /// and storing it on a miss.
    ///
    /// Lookups share a read lock; only inserts take the write lock. When two
    /// callers race on the same miss, the first insert wins and both get the
    /// same `Arc`.
    pub fn get_or_insert_with(
        &self,
        definition: &ThemeDefinition,
        scope: &Scope,
        resolve: impl FnOnce() -> ResolvedStyle,
    ) -> Arc<ResolvedStyle> {
        let revision = definition.revision();

        // Try read lock first
        {
            let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
            if state.revision == revision {
                if let Some(style) = state.styles.get(scope) {
                    return Arc::clone(style);
                }
            }
        }

        let style = Arc::new(resolve());

        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if revision > state.revision {
            state.revision = revision;
            state.styles.clear();
        } else if revision < state.revision {
            // Resolved against a definition that has since been replaced.
            return style;
        }
        Arc::clone(state.styles.entry(scope.clone()).or_insert(style))
    }

    /// Number of cached scopes.
    pub fn len(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .styles
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StyleCache {
    fn default() -> Self {
        Self::new()
    }
}
