//! Raw theme documents.
//!
//! Themes are stored as JSON documents in the TextMate theme shape:
//!
//! ```json
//! {
//!   "uuid": "...",
//!   "name": "Twilight",
//!   "colorSpaceName": "sRGB",
//!   "settings": [
//!     { "settings": { "foreground": "#F8F8F8", "background": "#141414" } },
//!     { "scope": "string", "settings": { "foreground": "#8F9D6A", "fontStyle": "italic" } }
//!   ],
//!   "gutterSettings": { "divider": "#333333" }
//! }
//! ```
//!
//! Decoding is lenient below the top level: entries of `settings` that are
//! not rules are skipped, and values of the wrong type are treated as absent.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::color::{Color, ThemeColor};
use crate::error::Result;
use crate::font_size::FontSize;
use crate::rule::StyleRule;
use crate::scope::ScopeSelector;
use crate::tribool::TriBool;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    #[serde(default, deserialize_with = "lenient_string")]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub color_space_name: Option<String>,
    #[serde(default)]
    pub settings: Vec<RawEntry>,
    #[serde(default)]
    pub gutter_settings: Option<Map<String, Value>>,
}

/// One entry of the document's `settings` list.
///
/// Only JSON objects are rules; every other value is kept as `Other` and
/// skipped.
#[derive(Clone, Debug)]
pub enum RawEntry {
    Rule(RawRule),
    Other(Value),
}

impl<'de> Deserialize<'de> for RawEntry {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if !value.is_object() {
            return Ok(RawEntry::Other(value));
        }
        Ok(match RawRule::deserialize(&value) {
            Ok(rule) => RawEntry::Rule(rule),
            Err(_) => RawEntry::Other(value),
        })
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawRule {
    #[serde(default, deserialize_with = "lenient_string")]
    pub scope: Option<String>,
    #[serde(default, deserialize_with = "lenient_settings")]
    pub settings: RawSettings,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSettings {
    #[serde(default, deserialize_with = "lenient_string")]
    pub font_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_font_size")]
    pub font_size: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub foreground: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub background: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub caret: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub selection: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub invisibles: Option<String>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub misspelled: Option<bool>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub font_style: Option<String>,
}

impl ThemeDocument {
    /// Decodes a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// The rule entries in declaration order.
    pub fn rules(&self) -> impl Iterator<Item = &RawRule> {
        self.settings.iter().filter_map(|entry| match entry {
            RawEntry::Rule(rule) => Some(rule),
            RawEntry::Other(_) => None,
        })
    }

    /// Looks up a gutter color override by key.
    ///
    /// Returns `None` when the key is absent and `Some(None)` when it is
    /// present but does not decode to a color.
    pub fn gutter_color(&self, key: &str) -> Option<ThemeColor> {
        let value = self.gutter_settings.as_ref()?.get(key)?;
        Some(value.as_str().and_then(Color::parse))
    }
}

impl RawRule {
    /// Decodes this entry into a style rule.
    pub fn to_style_rule(&self) -> StyleRule {
        let settings = &self.settings;
        let color = |text: &Option<String>| text.as_deref().and_then(Color::parse);

        let mut rule = StyleRule {
            selector: self
                .scope
                .as_deref()
                .map(ScopeSelector::new)
                .unwrap_or_default(),
            font_name: settings.font_name.clone(),
            font_size: FontSize::parse_lossy(settings.font_size.as_deref()),
            foreground: color(&settings.foreground),
            background: color(&settings.background),
            caret: color(&settings.caret),
            selection: color(&settings.selection),
            invisibles: color(&settings.invisibles),
            misspelled: settings.misspelled.map(TriBool::from).unwrap_or_default(),
            ..Default::default()
        };
        if let Some(font_style) = &settings.font_style {
            rule.apply_font_style(font_style);
        }
        rule
    }
}

/// A `settings` value that is missing or not an object reads as empty, so
/// the entry still counts as a (selector-only) rule.
fn lenient_settings<'de, D>(deserializer: D) -> std::result::Result<RawSettings, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => RawSettings::deserialize(value).unwrap_or_default(),
        _ => RawSettings::default(),
    })
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        _ => None,
    })
}

/// Font sizes may be written as text (`"12pt"`) or as a bare number.
fn lenient_font_size<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    })
}

fn lenient_bool<'de, D>(deserializer: D) -> std::result::Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(flag)) => Some(flag),
        _ => None,
    })
}
