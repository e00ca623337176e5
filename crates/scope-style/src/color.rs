//! RGBA theme colors and their text encoding.
//!
//! Theme documents spell colors as hex strings. Two widths are understood:
//!
//! - **Two digits per channel**: `#RRGGBB`, `#RRGGBBAA` (values / 255)
//! - **One digit per channel**: `#RGB`, `#RGBA` (values / 15)
//!
//! The wide form is tried first and reads each channel greedily as one or
//! two digits, so odd lengths such as `#12345` (`12 34 05`) or `#FFFFFF8`
//! (alpha `08`) decode as wide. It must yield at least three channels;
//! otherwise the narrow form applies.
//!
//! Alpha defaults to fully opaque. Any other text decodes to a *blank*
//! color, which is represented as `None` in a [`ThemeColor`] and means
//! "not specified" during the cascade.
//!
//! ```
//! use scope_style::Color;
//!
//! let red = Color::parse("#FF000080").unwrap();
//! assert_eq!(red.red, 1.0);
//! assert!(Color::parse("garbage").is_none());
//! ```

use nom::{
    IResult,
    branch::alt,
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{map_res, opt},
    sequence::{preceded, tuple},
};

/// A color that may be blank (unset).
pub type ThemeColor = Option<Color>;

/// The color space a theme asks its colors to be interpreted in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    #[default]
    GenericRgb,
    Srgb,
}

impl ColorSpace {
    /// Maps a document's `colorSpaceName` to a color space.
    ///
    /// Only `"sRGB"` selects [`ColorSpace::Srgb`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("sRGB") => ColorSpace::Srgb,
            _ => ColorSpace::GenericRgb,
        }
    }
}

/// An RGBA color with channels in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Opaque 50% gray, the fallback selection color.
    pub const fn gray() -> Self {
        Self::rgb(0.5, 0.5, 0.5)
    }

    /// Decodes a hex color, returning `None` (blank) for anything malformed.
    pub fn parse(input: &str) -> ThemeColor {
        hex_color(input).ok().map(|(_, color)| color)
    }

    /// Perceived brightness: `0.30·r + 0.59·g + 0.11·b`.
    pub fn luma(&self) -> f64 {
        0.30 * self.red + 0.59 * self.green + 0.11 * self.blue
    }

    /// A color is dark when its luma is below one half.
    pub fn is_dark(&self) -> bool {
        self.luma() < 0.5
    }

    pub fn is_transparent(&self) -> bool {
        self.alpha < 1.0
    }

    /// Composites this color over `base`.
    ///
    /// Channels mix by this color's alpha; the result keeps `base`'s alpha.
    pub fn blend_over(&self, base: &Color) -> Color {
        let a = self.alpha;
        let ia = 1.0 - a;
        Color::new(
            ia * base.red + a * self.red,
            ia * base.green + a * self.green,
            ia * base.blue + a * self.blue,
            base.alpha,
        )
    }

    /// Pulls the color toward the opposite end of the brightness scale.
    ///
    /// Dark colors move toward white (`1 - f·(1 - c)`), light colors toward
    /// black (`f·c`). Alpha is untouched.
    pub fn soften(&self, factor: f64) -> Color {
        let channel = |c: f64| {
            if self.is_dark() {
                1.0 - factor * (1.0 - c)
            } else {
                factor * c
            }
        };
        Color::new(
            channel(self.red),
            channel(self.green),
            channel(self.blue),
            self.alpha,
        )
    }
}

fn is_hex(c: char) -> bool {
    c.is_ascii_hexdigit()
}

fn from_hex(digits: &str) -> Result<u32, std::num::ParseIntError> {
    u32::from_str_radix(digits, 16)
}

/// One or two hex digits, one channel of the wide form.
fn hex_pair(input: &str) -> IResult<&str, u32> {
    map_res(take_while_m_n(1, 2, is_hex), from_hex)(input)
}

/// One hex digit, one channel of the narrow form.
fn hex_digit(input: &str) -> IResult<&str, u32> {
    map_res(take_while_m_n(1, 1, is_hex), from_hex)(input)
}

/// `RRGGBB[AA]`
fn wide_color(input: &str) -> IResult<&str, Color> {
    let (input, (r, g, b, a)) = tuple((
        hex_pair,
        hex_pair,
        hex_pair,
        opt(hex_pair),
    ))(input)?;
    let scale = |v: u32| f64::from(v) / 255.0;
    Ok((
        input,
        Color::new(scale(r), scale(g), scale(b), scale(a.unwrap_or(0xFF))),
    ))
}

/// `RGB[A]`
fn narrow_color(input: &str) -> IResult<&str, Color> {
    let (input, (r, g, b, a)) = tuple((
        hex_digit,
        hex_digit,
        hex_digit,
        opt(hex_digit),
    ))(input)?;
    let scale = |v: u32| f64::from(v) / 15.0;
    Ok((
        input,
        Color::new(scale(r), scale(g), scale(b), scale(a.unwrap_or(0xF))),
    ))
}

fn hex_color(input: &str) -> IResult<&str, Color> {
    preceded(char('#'), alt((wide_color, narrow_color)))(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_eight_digit_hex() {
        let color = Color::parse("#FF000080").unwrap();
        assert_eq!(color.red, 1.0);
        assert_eq!(color.green, 0.0);
        assert_eq!(color.blue, 0.0);
        assert!(approx(color.alpha, 128.0 / 255.0));
    }

    #[test]
    fn test_six_digit_hex_is_opaque() {
        let color = Color::parse("#336699").unwrap();
        assert!(approx(color.red, 0x33 as f64 / 255.0));
        assert!(approx(color.blue, 0x99 as f64 / 255.0));
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn test_four_digit_hex() {
        let color = Color::parse("#F008").unwrap();
        assert_eq!(color.red, 1.0);
        assert_eq!(color.green, 0.0);
        assert!(approx(color.alpha, 8.0 / 15.0));
    }

    #[test]
    fn test_three_digit_hex_is_opaque() {
        let color = Color::parse("#0f0").unwrap();
        assert_eq!(color, Color::rgb(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_odd_lengths_read_channels_greedily() {
        let color = Color::parse("#12345").unwrap();
        assert!(approx(color.red, 0x12 as f64 / 255.0));
        assert!(approx(color.green, 0x34 as f64 / 255.0));
        assert!(approx(color.blue, 0x05 as f64 / 255.0));
        assert_eq!(color.alpha, 1.0);

        let color = Color::parse("#FFFFFF8").unwrap();
        assert_eq!(color.red, 1.0);
        assert!(approx(color.alpha, 8.0 / 255.0));
    }

    #[test]
    fn test_too_short_for_wide_form_is_narrow() {
        // `#F00` splits as `F0 0`, two channels, so it falls back.
        assert_eq!(Color::parse("#F00"), Some(Color::rgb(1.0, 0.0, 0.0)));
        assert!(Color::parse("#12").is_none());
    }

    #[test]
    fn test_trailing_text_is_ignored() {
        assert_eq!(Color::parse("#FFFFFF junk"), Some(Color::white()));
    }

    #[test]
    fn test_malformed_is_blank() {
        assert!(Color::parse("garbage").is_none());
        assert!(Color::parse("").is_none());
        assert!(Color::parse("#").is_none());
        assert!(Color::parse("#GG0000").is_none());
        assert!(Color::parse("FF0000").is_none());
    }

    #[test]
    fn test_blend_keeps_base_alpha() {
        let base = Color::new(0.0, 0.0, 0.0, 1.0);
        let over = Color::new(1.0, 1.0, 1.0, 0.5);
        assert_eq!(over.blend_over(&base), Color::new(0.5, 0.5, 0.5, 1.0));

        let translucent = Color::new(0.0, 0.0, 0.0, 0.25);
        assert_eq!(over.blend_over(&translucent).alpha, 0.25);
    }

    #[test]
    fn test_darkness() {
        assert!(Color::black().is_dark());
        assert!(!Color::white().is_dark());
        // 0.59 * 0.8 = 0.472
        assert!(Color::rgb(0.0, 0.8, 0.0).is_dark());
    }

    #[test]
    fn test_soften_dark_lightens() {
        let softened = Color::black().soften(0.4);
        assert!(approx(softened.red, 0.6));
        assert!(approx(softened.green, 0.6));
        assert_eq!(softened.alpha, 1.0);
    }

    #[test]
    fn test_soften_light_darkens() {
        let softened = Color::white().soften(0.87);
        assert!(approx(softened.red, 0.87));
        assert!(approx(softened.blue, 0.87));
    }

    #[test]
    fn test_color_space_from_name() {
        assert_eq!(ColorSpace::from_name(Some("sRGB")), ColorSpace::Srgb);
        assert_eq!(ColorSpace::from_name(Some("srgb")), ColorSpace::GenericRgb);
        assert_eq!(ColorSpace::from_name(None), ColorSpace::GenericRgb);
    }
}
