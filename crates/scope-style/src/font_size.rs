//! Font size values and their text encoding.
//!
//! A font size is either absolute (points) or relative (a multiplier of the
//! inherited size). Documents write them as a number followed by a unit:
//!
//! | Text      | Value                     |
//! |-----------|---------------------------|
//! | `12`      | `Absolute(12.0)`          |
//! | `12pt`    | `Absolute(12.0)`          |
//! | `1.5em`   | `Relative(1.5)`           |
//! | `110%`    | `Relative(1.1)`           |
//!
//! The numeric literal always uses `.` as decimal point, independent of
//! locale. Themes historically stored sizes as a single signed number
//! (positive absolute, negative relative, `-1` for unset); [`FontSize::raw`]
//! and [`FontSize::from_raw`] convert to and from that encoding.

use nom::{IResult, bytes::complete::take_while1, combinator::map_res};

use crate::error::{Result, StyleError};

/// The signed encoding of an unset font size.
pub const UNSET_FONT_SIZE: f64 = -1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum FontSize {
    /// No rule set a size; the inherited size stays.
    #[default]
    Unset,
    /// A size in points.
    Absolute(f64),
    /// A multiplier applied to the inherited size.
    Relative(f64),
}

impl FontSize {
    /// An absolute size. Non-positive sizes are treated as unset.
    pub fn absolute(points: f64) -> Self {
        if points > 0.0 {
            FontSize::Absolute(points)
        } else {
            FontSize::Unset
        }
    }

    pub fn relative(multiplier: f64) -> Self {
        FontSize::Relative(multiplier)
    }

    /// Decodes the signed encoding.
    pub fn from_raw(raw: f64) -> Self {
        if raw > 0.0 {
            FontSize::Absolute(raw)
        } else if raw == 0.0 || raw == UNSET_FONT_SIZE {
            FontSize::Unset
        } else {
            FontSize::Relative(-raw)
        }
    }

    /// Encodes as a signed number: positive absolute, negated multiplier
    /// for relative, `-1` when unset.
    pub fn raw(self) -> f64 {
        match self {
            FontSize::Unset => UNSET_FONT_SIZE,
            FontSize::Absolute(points) => points,
            FontSize::Relative(multiplier) => -multiplier,
        }
    }

    pub fn is_unset(self) -> bool {
        self == FontSize::Unset
    }

    /// Parses font size text strictly.
    ///
    /// # Examples
    ///
    /// ```
    /// use scope_style::FontSize;
    ///
    /// assert_eq!(FontSize::parse("12pt").unwrap(), FontSize::Absolute(12.0));
    /// assert_eq!(FontSize::parse("1.5 em").unwrap(), FontSize::Relative(1.5));
    /// assert!(FontSize::parse("xyz").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let (rest, size) = parse_number(input)
            .map_err(|_| StyleError::UnsupportedFontSizeFormat(input.to_string()))?;

        match rest.trim_start_matches(' ') {
            "" | "pt" => Ok(FontSize::absolute(size)),
            "em" => Ok(FontSize::relative(size)),
            "%" => Ok(FontSize::relative(size / 100.0)),
            unit => Err(StyleError::UnsupportedFontSizeUnit {
                unit: unit.to_string(),
                input: input.to_string(),
            }),
        }
    }

    /// Parses an optional font size, absorbing failures.
    ///
    /// A missing value is silently unset. A malformed value is logged as a
    /// warning and treated as unset.
    pub fn parse_lossy(input: Option<&str>) -> Self {
        match input {
            None => FontSize::Unset,
            Some(text) => FontSize::parse(text).unwrap_or_else(|err| {
                log::warn!("{err}");
                FontSize::Unset
            }),
        }
    }

    /// Folds a more specific size on top of this one.
    ///
    /// Absolute sizes replace, relative sizes scale, unset leaves this size
    /// unchanged.
    pub fn then(self, rhs: FontSize) -> FontSize {
        match (self, rhs) {
            (lhs, FontSize::Unset) => lhs,
            (_, FontSize::Absolute(points)) => FontSize::Absolute(points),
            (FontSize::Absolute(points), FontSize::Relative(m)) => FontSize::Absolute(points * m),
            (FontSize::Relative(base), FontSize::Relative(m)) => FontSize::Relative(base * m),
            (FontSize::Unset, FontSize::Relative(m)) => FontSize::Relative(m),
        }
    }

    /// The size in points, if this size is absolute.
    pub fn points(self) -> Option<f64> {
        match self {
            FontSize::Absolute(points) => Some(points),
            _ => None,
        }
    }
}

/// Parse a run of digits and decimal points (no sign, no exponent).
fn parse_number(input: &str) -> IResult<&str, f64> {
    map_res(
        take_while1(|c: char| c.is_ascii_digit() || c == '.'),
        |s: &str| s.parse::<f64>(),
    )(input)
}
