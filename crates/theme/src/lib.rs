//! # theme
//!
//! Resolves the concrete style of a scope from a scope-based editor theme.
//!
//! - **Definitions**: [`ThemeDefinition`] is the immutable, shared form of a
//!   theme document
//! - **Cascade**: [`resolve`] ranks and folds every matching rule into a
//!   [`ResolvedStyle`]
//! - **Instances**: [`Theme`] adds a font override and a per-scope cache
//! - **Registry**: [`ThemeRegistry`] shares definitions and instances and
//!   handles reloads
//! - **Gutter**: [`GutterStyles`] derives the gutter palette
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use theme::{MemoryThemeSource, ThemeContext, ThemeId, ThemeRegistry};
//! use scope_style::{Color, Scope};
//!
//! let source = Arc::new(MemoryThemeSource::new());
//! source.insert("mono", r##"{
//!     "settings": [
//!         { "settings": { "foreground": "#000000", "background": "#FFFFFF" } },
//!         { "scope": "comment", "settings": { "foreground": "#808080", "fontStyle": "italic" } }
//!     ]
//! }"##);
//!
//! let registry = ThemeRegistry::new(source, ThemeContext::default());
//! let theme = registry.theme(&ThemeId::new("mono"));
//! let style = theme.styles_for_scope(&Scope::new("source.rust comment.line"));
//!
//! assert_eq!(style.background, Color::white());
//! assert!(style.italic);
//! assert!(!theme.is_dark());
//! ```

pub mod cache;
pub mod context;
pub mod definition;
pub mod font;
pub mod gutter;
pub mod registry;
pub mod resolver;
pub mod settings;
pub mod theme;

pub use cache::StyleCache;
pub use context::ThemeContext;
pub use definition::{ThemeDefinition, ThemeId};
pub use font::{
    DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE, DescriptorFontFactory, FontDescriptor, FontFactory,
    FontHandle, FontTraits, PlatformFont,
};
pub use gutter::{GutterColor, GutterOverrides, GutterStyles};
pub use registry::{MemoryThemeSource, ThemeRegistry, ThemeSource};
pub use resolver::{ResolvedStyle, cascade, resolve};
pub use settings::{NoSettings, SettingMatch, SettingValue, SettingsSource, SettingsTable};
pub use theme::{DefinitionSlot, Theme};
