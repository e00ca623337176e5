//! Partial style rules and the cascade merge operator.
//!
//! A [`StyleRule`] is a style fragment bound to a selector: every field may
//! be left unspecified. The cascade folds matching rules from least to most
//! specific with [`StyleRule::merge`]:
//!
//! - `font_name`, `foreground`, `caret`, `selection`, `invisibles` and the
//!   tri-state flags are replaced when the more specific rule sets them.
//! - `font_size` is replaced by absolute sizes and scaled by relative ones.
//! - `background` is alpha-composited over the inherited background.
//!
//! The operator is not commutative; fold order decides the result.

use std::ops::AddAssign;

use crate::color::ThemeColor;
use crate::font_size::FontSize;
use crate::scope::ScopeSelector;
use crate::tribool::TriBool;

/// The pseudo-scope used to style invisible characters.
pub const INVISIBLES_SCOPE: &str = "deco.invisible";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleRule {
    pub selector: ScopeSelector,
    pub font_name: Option<String>,
    pub font_size: FontSize,
    pub foreground: ThemeColor,
    pub background: ThemeColor,
    pub caret: ThemeColor,
    pub selection: ThemeColor,
    pub invisibles: ThemeColor,
    pub bold: TriBool,
    pub italic: TriBool,
    pub underlined: TriBool,
    pub misspelled: TriBool,
}

impl StyleRule {
    /// An empty rule bound to `selector`.
    pub fn new(selector: impl Into<ScopeSelector>) -> Self {
        Self {
            selector: selector.into(),
            ..Default::default()
        }
    }

    /// The seed of a cascade: root selector, the given font, all colors blank.
    pub fn root(font_name: impl Into<String>, font_size: f64) -> Self {
        Self {
            font_name: Some(font_name.into()),
            font_size: FontSize::absolute(font_size),
            ..Default::default()
        }
    }

    /// Folds the more specific `rhs` on top of this rule.
    pub fn merge(&mut self, rhs: &StyleRule) {
        if let Some(name) = &rhs.font_name {
            self.font_name = Some(name.clone());
        }
        self.font_size = self.font_size.then(rhs.font_size);

        self.foreground = rhs.foreground.or(self.foreground);
        self.background = match (self.background, rhs.background) {
            (_, None) => self.background,
            (None, over) => over,
            (Some(base), Some(over)) => Some(over.blend_over(&base)),
        };
        self.caret = rhs.caret.or(self.caret);
        self.selection = rhs.selection.or(self.selection);
        self.invisibles = rhs.invisibles.or(self.invisibles);

        self.bold = rhs.bold.or(self.bold);
        self.italic = rhs.italic.or(self.italic);
        self.underlined = rhs.underlined.or(self.underlined);
        self.misspelled = rhs.misspelled.or(self.misspelled);
    }

    /// Owned form of [`merge`](Self::merge), convenient in folds.
    pub fn merged(mut self, rhs: &StyleRule) -> Self {
        self.merge(rhs);
        self
    }

    /// Applies a `fontStyle` word list.
    ///
    /// `plain` forces bold, italic and underline to explicit false and wins
    /// over any other word. Otherwise each of `bold`, `italic`, `underline`
    /// that appears is set; the rest stay unset.
    pub fn apply_font_style(&mut self, font_style: &str) {
        if font_style.contains("plain") {
            self.bold = TriBool::False;
            self.italic = TriBool::False;
            self.underlined = TriBool::False;
            return;
        }

        let flag = |word: &str| {
            if font_style.contains(word) {
                TriBool::True
            } else {
                TriBool::Unset
            }
        };
        self.bold = flag("bold");
        self.italic = flag("italic");
        self.underlined = flag("underline");
    }

    /// The companion rule that paints invisible characters, if this rule
    /// sets an invisibles color.
    pub fn invisibles_rule(&self) -> Option<StyleRule> {
        self.invisibles.map(|color| StyleRule {
            foreground: Some(color),
            ..StyleRule::new(INVISIBLES_SCOPE)
        })
    }
}

impl AddAssign<&StyleRule> for StyleRule {
    fn add_assign(&mut self, rhs: &StyleRule) {
        self.merge(rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn red() -> Color {
        Color::rgb(1.0, 0.0, 0.0)
    }

    fn blue() -> Color {
        Color::rgb(0.0, 0.0, 1.0)
    }

    #[test]
    fn test_merge_is_order_sensitive() {
        let a = StyleRule {
            foreground: Some(red()),
            ..StyleRule::new("a")
        };
        let b = StyleRule {
            foreground: Some(blue()),
            ..StyleRule::new("b")
        };
        let base = StyleRule::root("Menlo", 12.0);

        assert_eq!(base.clone().merged(&a).merged(&b).foreground, Some(blue()));
        assert_eq!(base.merged(&b).merged(&a).foreground, Some(red()));
    }

    #[test]
    fn test_blank_fields_inherit() {
        let mut base = StyleRule {
            foreground: Some(red()),
            caret: Some(blue()),
            bold: TriBool::True,
            ..StyleRule::root("Menlo", 12.0)
        };
        base += &StyleRule::new("x");

        assert_eq!(base.foreground, Some(red()));
        assert_eq!(base.caret, Some(blue()));
        assert_eq!(base.bold, TriBool::True);
        assert_eq!(base.font_name.as_deref(), Some("Menlo"));
        assert_eq!(base.font_size, FontSize::Absolute(12.0));
    }

    #[test]
    fn test_explicit_false_overrides_true() {
        let mut base = StyleRule {
            italic: TriBool::True,
            ..Default::default()
        };
        base += &StyleRule {
            italic: TriBool::False,
            ..Default::default()
        };
        assert_eq!(base.italic, TriBool::False);
    }

    #[test]
    fn test_background_blends() {
        let mut base = StyleRule {
            background: Some(Color::black()),
            ..Default::default()
        };
        base += &StyleRule {
            background: Some(Color::new(1.0, 1.0, 1.0, 0.5)),
            ..Default::default()
        };
        assert_eq!(base.background, Some(Color::new(0.5, 0.5, 0.5, 1.0)));
    }

    #[test]
    fn test_background_over_blank_is_taken_as_is() {
        let over = Color::new(0.2, 0.4, 0.6, 0.5);
        let mut base = StyleRule::default();
        base += &StyleRule {
            background: Some(over),
            ..Default::default()
        };
        assert_eq!(base.background, Some(over));
    }

    #[test]
    fn test_font_size_scales() {
        let mut base = StyleRule::root("Menlo", 12.0);
        base += &StyleRule {
            font_size: FontSize::Relative(1.5),
            ..Default::default()
        };
        assert_eq!(base.font_size, FontSize::Absolute(18.0));

        base += &StyleRule {
            font_size: FontSize::Absolute(10.0),
            ..Default::default()
        };
        assert_eq!(base.font_size, FontSize::Absolute(10.0));
    }

    #[test]
    fn test_font_style_words() {
        let mut rule = StyleRule::new("x");
        rule.apply_font_style("bold underline");
        assert_eq!(rule.bold, TriBool::True);
        assert_eq!(rule.italic, TriBool::Unset);
        assert_eq!(rule.underlined, TriBool::True);
    }

    #[test]
    fn test_plain_wins() {
        let mut rule = StyleRule::new("x");
        rule.apply_font_style("bold plain italic");
        assert_eq!(rule.bold, TriBool::False);
        assert_eq!(rule.italic, TriBool::False);
        assert_eq!(rule.underlined, TriBool::False);
    }

    #[test]
    fn test_invisibles_rule() {
        let rule = StyleRule {
            invisibles: Some(red()),
            ..StyleRule::new("source")
        };
        let deco = rule.invisibles_rule().unwrap();
        assert_eq!(deco.selector.as_str(), INVISIBLES_SCOPE);
        assert_eq!(deco.foreground, Some(red()));
        assert!(deco.invisibles.is_none());

        assert!(StyleRule::new("source").invisibles_rule().is_none());
    }
}
