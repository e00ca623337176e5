//! Integration tests for value decoding.
//!
//! - Colors: `#RRGGBBAA`, `#RRGGBB`, `#RGBA`, `#RGB` (odd lengths read
//!   channels greedily), blank on anything else
//! - Font sizes: points, `em`, `%`, unset on malformed text

use scope_style::{Color, FontSize, StyleError, UNSET_FONT_SIZE};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ============================================================================
// COLORS
// ============================================================================

#[test]
fn test_color_with_alpha_pair() {
    let color = Color::parse("#FF000080").unwrap();
    assert_eq!((color.red, color.green, color.blue), (1.0, 0.0, 0.0));
    assert!(approx(color.alpha, 128.0 / 255.0));
}

#[test]
fn test_color_with_alpha_digit() {
    let color = Color::parse("#F008").unwrap();
    assert_eq!((color.red, color.green, color.blue), (1.0, 0.0, 0.0));
    assert!(approx(color.alpha, 8.0 / 15.0));
}

#[test]
fn test_color_lowercase_hex() {
    assert_eq!(Color::parse("#ffffff"), Some(Color::white()));
    assert_eq!(Color::parse("#000"), Some(Color::black()));
}

#[test]
fn test_color_garbage_is_blank() {
    assert_eq!(Color::parse("garbage"), None);
    assert_eq!(Color::parse("red"), None);
    assert_eq!(Color::parse("#12"), None);
}

// ============================================================================
// FONT SIZES
// ============================================================================

#[test]
fn test_font_size_points() {
    assert_eq!(FontSize::parse("12pt").unwrap().raw(), 12.0);
}

#[test]
fn test_font_size_em() {
    assert_eq!(FontSize::parse("1.5em").unwrap().raw(), -1.5);
}

#[test]
fn test_font_size_percent() {
    assert!(approx(FontSize::parse("110%").unwrap().raw(), -1.1));
    assert!(approx(FontSize::parse("50 %").unwrap().raw(), -0.5));
}

#[test]
fn test_font_size_garbage() {
    assert!(matches!(
        FontSize::parse("xyz"),
        Err(StyleError::UnsupportedFontSizeFormat(_))
    ));
    assert_eq!(FontSize::parse_lossy(Some("xyz")).raw(), UNSET_FONT_SIZE);
}

#[test]
fn test_font_size_error_message() {
    let err = FontSize::parse("10px").unwrap_err();
    assert_eq!(err.to_string(), "unsupported font size unit: px (10px)");
}
