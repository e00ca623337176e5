//! Error types for decoding theme documents and style values.
//!
//! Most decode failures never reach the caller: colors silently decode to
//! blank and font sizes fall back to unset after a warning. These errors
//! surface from the strict entry points ([`FontSize::parse`] and
//! [`ThemeDocument::from_json`]).
//!
//! [`FontSize::parse`]: crate::FontSize::parse
//! [`ThemeDocument::from_json`]: crate::ThemeDocument::from_json

use thiserror::Error;

/// Errors that can occur while decoding theme data.
///
/// # Examples
///
/// ```rust
/// use scope_style::{FontSize, StyleError};
///
/// let result = FontSize::parse("12px");
/// assert!(matches!(result, Err(StyleError::UnsupportedFontSizeUnit { .. })));
/// ```
#[derive(Error, Debug)]
pub enum StyleError {
    /// The font size does not start with a numeric literal.
    #[error("unsupported font size format: {0}")]
    UnsupportedFontSizeFormat(String),

    /// The font size has a numeric literal followed by an unknown unit.
    #[error("unsupported font size unit: {unit} ({input})")]
    UnsupportedFontSizeUnit { unit: String, input: String },

    /// The theme document is not valid JSON or has the wrong shape.
    #[error("invalid theme document")]
    InvalidDocument(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StyleError>;
