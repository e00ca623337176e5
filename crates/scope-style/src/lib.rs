//! # scope-style
//!
//! Data model and codecs for scope-based editor themes.
//!
//! A theme is an ordered list of partial style rules, each bound to a scope
//! selector. This crate provides:
//!
//! - **Values**: [`Color`] (with blank colors as `None`), [`FontSize`]
//!   (absolute or relative) and [`TriBool`]
//! - **Rules**: [`StyleRule`] and the cascade merge operator
//! - **Documents**: [`ThemeDocument`], the raw JSON theme shape
//! - **Matching**: the [`ScopeMatcher`] seam and a basic [`PathMatcher`]
//!
//! ## Quick Start
//!
//! ```rust
//! use scope_style::{Color, StyleRule, ThemeDocument};
//!
//! let doc = ThemeDocument::from_json(r##"{
//!     "settings": [
//!         { "settings": { "foreground": "#000000", "background": "#FFFFFF" } },
//!         { "scope": "comment", "settings": { "foreground": "#808080", "fontStyle": "italic" } }
//!     ]
//! }"##).expect("valid theme");
//!
//! let rules: Vec<StyleRule> = doc.rules().map(|r| r.to_style_rule()).collect();
//! let comment = rules[0].clone().merged(&rules[1]);
//! assert_eq!(comment.background, Some(Color::white()));
//! assert!(comment.italic.is_true());
//! ```
//!
//! ## Modules
//!
//! - [`color`]: hex color decoding, blending and softening
//! - [`font_size`]: font size units
//! - [`rule`]: style rules and merging
//! - [`document`]: theme document schema
//! - [`matcher`]: selector matching
//! - [`error`]: decode errors

pub mod color;
pub mod document;
pub mod error;
pub mod font_size;
pub mod matcher;
pub mod rule;
pub mod scope;
pub mod tribool;

pub use color::{Color, ColorSpace, ThemeColor};
pub use document::{RawEntry, RawRule, RawSettings, ThemeDocument};
pub use error::{Result, StyleError};
pub use font_size::{FontSize, UNSET_FONT_SIZE};
pub use matcher::{PathMatcher, ScopeMatcher};
pub use rule::{INVISIBLES_SCOPE, StyleRule};
pub use scope::{Scope, ScopeSelector};
pub use tribool::TriBool;
