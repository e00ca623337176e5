//! Scope-based theme styling for text editors.
//!
//! - [`scope_style`]: style rules, their merge operator and the document codecs
//! - [`theme`]: the cascade, per-instance caches and the theme registry

pub use scope_style;
pub use theme;

pub use scope_style::{Color, FontSize, Scope, ScopeSelector, StyleError, StyleRule, TriBool};
pub use theme::{
    GutterColor, GutterStyles, MemoryThemeSource, ResolvedStyle, Theme, ThemeContext,
    ThemeDefinition, ThemeId, ThemeRegistry, ThemeSource,
};
