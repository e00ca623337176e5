//! Global settings as cascade candidates.
//!
//! Besides the theme's own rules, hosts can attach style settings to scope
//! selectors from elsewhere (bundle preferences, user settings). For each
//! known setting name the [`SettingsSource`] reports the best value for a
//! scope together with the selector it came from; the resolver turns every
//! hit into a single-field [`StyleRule`] and ranks it like any theme rule.

use std::sync::Arc;

use scope_style::{
    Color, FontSize, Scope, ScopeMatcher, ScopeSelector, StyleRule, ThemeColor, TriBool,
};

#[derive(Clone, Debug, PartialEq)]
pub enum SettingValue {
    Text(String),
    Bool(bool),
}

impl SettingValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(text) => Some(text),
            SettingValue::Bool(_) => None,
        }
    }

    /// Booleans are true as `Bool(true)` or as text `1`, `true` or `yes`.
    pub fn is_true(&self) -> bool {
        match self {
            SettingValue::Bool(flag) => *flag,
            SettingValue::Text(text) => {
                let text = text.trim();
                text == "1" || text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("yes")
            }
        }
    }
}

impl From<&str> for SettingValue {
    fn from(text: &str) -> Self {
        SettingValue::Text(text.to_string())
    }
}

impl From<bool> for SettingValue {
    fn from(flag: bool) -> Self {
        SettingValue::Bool(flag)
    }
}

/// A setting value and the selector of the item that provided it.
#[derive(Clone, Debug, PartialEq)]
pub struct SettingMatch {
    pub selector: ScopeSelector,
    pub value: SettingValue,
}

pub trait SettingsSource: Send + Sync {
    /// The value of setting `name` that applies to `scope`, if any.
    fn value_for_setting(&self, name: &str, scope: &Scope) -> Option<SettingMatch>;
}

/// A source without any settings.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoSettings;

impl SettingsSource for NoSettings {
    fn value_for_setting(&self, _name: &str, _scope: &Scope) -> Option<SettingMatch> {
        None
    }
}

/// An in-memory settings source.
///
/// Per setting name, the entry whose selector ranks highest for the scope
/// wins; among equal ranks the first inserted entry wins.
pub struct SettingsTable {
    matcher: Arc<dyn ScopeMatcher>,
    entries: Vec<(ScopeSelector, String, SettingValue)>,
}

impl SettingsTable {
    pub fn new(matcher: Arc<dyn ScopeMatcher>) -> Self {
        Self {
            matcher,
            entries: Vec::new(),
        }
    }

    pub fn insert(
        &mut self,
        selector: impl Into<ScopeSelector>,
        name: &str,
        value: impl Into<SettingValue>,
    ) -> &mut Self {
        self.entries
            .push((selector.into(), name.to_string(), value.into()));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SettingsSource for SettingsTable {
    fn value_for_setting(&self, name: &str, scope: &Scope) -> Option<SettingMatch> {
        let mut best: Option<(f64, &ScopeSelector, &SettingValue)> = None;
        for (selector, _, value) in self.entries.iter().filter(|(_, n, _)| n == name) {
            let Some(rank) = self.matcher.rank(selector, scope) else {
                continue;
            };
            if best.is_none_or(|(best_rank, _, _)| rank > best_rank) {
                best = Some((rank, selector, value));
            }
        }
        best.map(|(_, selector, value)| SettingMatch {
            selector: selector.clone(),
            value: value.clone(),
        })
    }
}

impl std::fmt::Debug for SettingsTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsTable")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

type ColorField = fn(&mut StyleRule) -> &mut ThemeColor;
type FlagField = fn(&mut StyleRule) -> &mut TriBool;

const COLOR_SETTINGS: [(&str, ColorField); 5] = [
    ("foreground", |rule| &mut rule.foreground),
    ("background", |rule| &mut rule.background),
    ("caret", |rule| &mut rule.caret),
    ("selection", |rule| &mut rule.selection),
    ("invisibles", |rule| &mut rule.invisibles),
];

const FLAG_SETTINGS: [(&str, FlagField); 4] = [
    ("misspelled", |rule| &mut rule.misspelled),
    ("bold", |rule| &mut rule.bold),
    ("italic", |rule| &mut rule.italic),
    ("underline", |rule| &mut rule.underlined),
];

/// Synthesizes one single-field rule per setting that has a value for
/// `scope`: colors first, then flags, then font name and size.
pub fn global_rules(source: &dyn SettingsSource, scope: &Scope) -> Vec<StyleRule> {
    let mut rules = Vec::new();

    for (name, field) in COLOR_SETTINGS {
        if let Some(hit) = source.value_for_setting(name, scope) {
            let mut rule = StyleRule::new(hit.selector);
            *field(&mut rule) = hit.value.as_text().and_then(Color::parse);
            rules.push(rule);
        }
    }

    for (name, field) in FLAG_SETTINGS {
        if let Some(hit) = source.value_for_setting(name, scope) {
            let mut rule = StyleRule::new(hit.selector);
            *field(&mut rule) = TriBool::from(hit.value.is_true());
            rules.push(rule);
        }
    }

    if let Some(hit) = source.value_for_setting("fontName", scope) {
        let mut rule = StyleRule::new(hit.selector);
        rule.font_name = hit.value.as_text().map(str::to_string);
        rules.push(rule);
    }

    if let Some(hit) = source.value_for_setting("fontSize", scope) {
        let mut rule = StyleRule::new(hit.selector);
        rule.font_size = FontSize::parse_lossy(hit.value.as_text());
        rules.push(rule);
    }

    rules
}
