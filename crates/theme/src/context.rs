use std::fmt;
use std::sync::Arc;

use scope_style::{PathMatcher, ScopeMatcher};

use crate::font::{DescriptorFontFactory, FontFactory};
use crate::settings::{NoSettings, SettingsSource};

/// The collaborators a theme needs to resolve styles.
///
/// Built once by the host and shared by every theme instance of a registry.
#[derive(Clone)]
pub struct ThemeContext {
    pub matcher: Arc<dyn ScopeMatcher>,
    pub settings: Arc<dyn SettingsSource>,
    pub fonts: Arc<dyn FontFactory>,
}

impl ThemeContext {
    pub fn new(matcher: Arc<dyn ScopeMatcher>) -> Self {
        Self {
            matcher,
            settings: Arc::new(NoSettings),
            fonts: Arc::new(DescriptorFontFactory),
        }
    }

    pub fn with_settings(mut self, settings: Arc<dyn SettingsSource>) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_fonts(mut self, fonts: Arc<dyn FontFactory>) -> Self {
        self.fonts = fonts;
        self
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new(Arc::new(PathMatcher))
    }
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext").finish_non_exhaustive()
    }
}
