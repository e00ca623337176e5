//! Style cascade for scopes.
//!
//! This module implements the cascade that turns the partial rules of a
//! theme into one concrete style for a scope:
//!
//! - [`cascade`]: ranks and folds candidate rules into a partial style
//! - [`resolve`]: full resolution including fonts and color defaults
//! - [`ResolvedStyle`]: the concrete result
//!
//! ## Cascade Algorithm
//!
//! 1. Collect candidates: global setting rules first, then the theme's rules
//! 2. Rank each candidate with the scope matcher, dropping non-matches
//! 3. Sort by rank; equal ranks keep candidate order
//! 4. Fold onto a root seed carrying the instance font
//! 5. Build the font and fill blank colors with fixed defaults

use std::fmt;

use scope_style::{Color, FontSize, Scope, ScopeMatcher, StyleRule};

use crate::context::ThemeContext;
use crate::definition::ThemeDefinition;
use crate::font::{DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE, FontHandle, FontTraits, create_font};
use crate::settings::global_rules;

/// A fully resolved style. Every field is concrete.
#[derive(Clone)]
pub struct ResolvedStyle {
    pub foreground: Color,
    pub background: Color,
    pub caret: Color,
    pub selection: Color,
    pub font: FontHandle,
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    pub misspelled: bool,
}

impl PartialEq for ResolvedStyle {
    fn eq(&self, other: &Self) -> bool {
        self.foreground == other.foreground
            && self.background == other.background
            && self.caret == other.caret
            && self.selection == other.selection
            && self.font.name() == other.font.name()
            && self.font.size() == other.font.size()
            && self.font.traits() == other.font.traits()
            && self.bold == other.bold
            && self.italic == other.italic
            && self.underlined == other.underlined
            && self.misspelled == other.misspelled
    }
}

impl fmt::Debug for ResolvedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedStyle")
            .field("foreground", &self.foreground)
            .field("background", &self.background)
            .field("caret", &self.caret)
            .field("selection", &self.selection)
            .field("font", &self.font)
            .field("underlined", &self.underlined)
            .field("misspelled", &self.misspelled)
            .finish_non_exhaustive()
    }
}

/// A candidate rule that matched the scope.
#[derive(Debug)]
struct MatchedRule<'a> {
    rank: f64,
    rule: &'a StyleRule,
}

/// Folds every candidate that matches `scope` onto `seed`, least specific
/// first.
///
/// Candidates of equal rank are folded in the order they are given.
pub fn cascade<'a>(
    seed: StyleRule,
    candidates: impl IntoIterator<Item = &'a StyleRule>,
    matcher: &dyn ScopeMatcher,
    scope: &Scope,
) -> StyleRule {
    let mut matched: Vec<MatchedRule<'a>> = candidates
        .into_iter()
        .filter_map(|rule| {
            matcher
                .rank(&rule.selector, scope)
                .map(|rank| MatchedRule { rank, rule })
        })
        .collect();

    // Stable: equal ranks keep candidate order.
    matched.sort_by(|a, b| a.rank.total_cmp(&b.rank));

    matched
        .into_iter()
        .fold(seed, |base, matched| base.merged(matched.rule))
}

/// Resolves the concrete style of `scope`.
///
/// Never fails: anything the rules leave blank gets a fixed default.
pub fn resolve(
    definition: &ThemeDefinition,
    context: &ThemeContext,
    font_name: &str,
    font_size: f64,
    scope: &Scope,
) -> ResolvedStyle {
    let globals = global_rules(context.settings.as_ref(), scope);
    let candidates = globals.iter().chain(definition.rules());

    let base = cascade(
        StyleRule::root(font_name, font_size),
        candidates,
        context.matcher.as_ref(),
        scope,
    );

    let size = match base.font_size {
        FontSize::Absolute(points) => points,
        FontSize::Unset | FontSize::Relative(_) => DEFAULT_FONT_SIZE,
    };
    let font = create_font(
        context.fonts.as_ref(),
        base.font_name.as_deref().unwrap_or(DEFAULT_FONT_NAME),
        size,
        FontTraits::from_style(base.bold, base.italic),
    );

    let style = ResolvedStyle {
        foreground: base.foreground.unwrap_or(Color::black()),
        background: base.background.unwrap_or(Color::white()),
        caret: base.caret.unwrap_or(Color::black()),
        selection: base.selection.unwrap_or(Color::gray()),
        font,
        bold: base.bold.is_true(),
        italic: base.italic.is_true(),
        underlined: base.underlined.is_true(),
        misspelled: base.misspelled.is_true(),
    };

    log::trace!(
        "CASCADE: theme='{}' scope='{}' candidates={} -> fg={:?} bg={:?}",
        definition.id(),
        scope,
        globals.len() + definition.rules().len(),
        style.foreground,
        style.background
    );

    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use scope_style::{PathMatcher, ScopeSelector};

    /// Ranks selectors by a fixed table, ignoring the scope.
    struct FixedRanks(Vec<(&'static str, f64)>);

    impl ScopeMatcher for FixedRanks {
        fn rank(&self, selector: &ScopeSelector, _scope: &Scope) -> Option<f64> {
            self.0
                .iter()
                .find(|(s, _)| *s == selector.as_str())
                .map(|(_, rank)| *rank)
        }
    }

    fn fg(selector: &str, red: f64) -> StyleRule {
        StyleRule {
            foreground: Some(Color::rgb(red, 0.0, 0.0)),
            ..StyleRule::new(selector)
        }
    }

    #[test]
    fn test_higher_rank_wins_regardless_of_declaration() {
        let matcher = FixedRanks(vec![("specific", 2.0), ("general", 1.0)]);
        let rules = [fg("specific", 0.2), fg("general", 0.8)];
        let folded = cascade(StyleRule::default(), &rules, &matcher, &Scope::new("x"));
        assert_eq!(folded.foreground, Some(Color::rgb(0.2, 0.0, 0.0)));
    }

    #[test]
    fn test_equal_rank_keeps_declaration_order() {
        let matcher = FixedRanks(vec![("a", 1.0), ("b", 1.0)]);
        let rules = [fg("a", 0.2), fg("b", 0.8)];
        let folded = cascade(StyleRule::default(), &rules, &matcher, &Scope::new("x"));
        assert_eq!(folded.foreground, Some(Color::rgb(0.8, 0.0, 0.0)));

        let reversed = [fg("b", 0.8), fg("a", 0.2)];
        let folded = cascade(StyleRule::default(), &reversed, &matcher, &Scope::new("x"));
        assert_eq!(folded.foreground, Some(Color::rgb(0.2, 0.0, 0.0)));
    }

    #[test]
    fn test_non_matching_rules_are_skipped() {
        let matcher = FixedRanks(vec![("a", 1.0)]);
        let rules = [fg("a", 0.2), fg("unknown", 0.8)];
        let folded = cascade(StyleRule::default(), &rules, &matcher, &Scope::new("x"));
        assert_eq!(folded.foreground, Some(Color::rgb(0.2, 0.0, 0.0)));
    }

    #[test]
    fn test_resolve_fills_defaults() {
        let def = ThemeDefinition::default_theme();
        let style = resolve(&def, &ThemeContext::default(), "Menlo", 12.0, &Scope::new("source"));
        assert_eq!(style.foreground, Color::black());
        assert_eq!(style.background, Color::white());
        assert_eq!(style.caret, Color::black());
        assert_eq!(style.selection, Color::gray());
        assert_eq!(style.font.name(), "Menlo");
        assert_eq!(style.font.size(), 12.0);
        assert!(!style.underlined);
        assert!(!style.misspelled);
    }

    #[test]
    fn test_path_matcher_cascade() {
        let rules = [fg("string", 0.2), fg("source", 0.8)];
        let folded = cascade(
            StyleRule::default(),
            &rules,
            &PathMatcher,
            &Scope::new("source.rust string.quoted"),
        );
        assert_eq!(folded.foreground, Some(Color::rgb(0.2, 0.0, 0.0)));
    }
}
