//! Immutable theme definitions.
//!
//! A [`ThemeDefinition`] is built once from a [`ThemeDocument`] and never
//! changes afterwards. Reloading a theme builds a new definition; anything
//! resolved against the old one stays valid.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use scope_style::{Color, ColorSpace, RawRule, StyleRule, ThemeDocument};

use crate::gutter::{GutterOverrides, GutterStyles};

static GENERATED_IDS: AtomicU64 = AtomicU64::new(1);
static REVISIONS: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a theme.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemeId(String);

impl ThemeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh identity, unique within the process.
    pub fn generate() -> Self {
        let n = GENERATED_IDS.fetch_add(1, Ordering::Relaxed);
        Self(format!("generated-theme-{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ThemeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug)]
pub struct ThemeDefinition {
    id: ThemeId,
    name: Option<String>,
    revision: u64,
    color_space: ColorSpace,
    rules: Vec<StyleRule>,
    foreground: Color,
    background: Color,
    is_dark: bool,
    is_transparent: bool,
    gutter: GutterStyles,
}

impl ThemeDefinition {
    /// Builds a definition from a decoded document.
    ///
    /// The first rule of the document is taken as the unscoped root style,
    /// whatever its selector says; its foreground and background (white on
    /// black when absent) are the theme's baseline colors.
    pub fn from_document(id: ThemeId, doc: &ThemeDocument) -> Self {
        let rules = expand_rules(doc.rules());

        let root = rules.first();
        let foreground = root.and_then(|r| r.foreground).unwrap_or(Color::white());
        let background = root.and_then(|r| r.background).unwrap_or(Color::black());

        let gutter =
            GutterStyles::derive(foreground, background, &GutterOverrides::from_document(doc));

        Self {
            id,
            name: doc.name.clone(),
            revision: REVISIONS.fetch_add(1, Ordering::Relaxed),
            color_space: ColorSpace::from_name(doc.color_space_name.as_deref()),
            rules,
            foreground,
            background,
            is_dark: background.is_dark(),
            is_transparent: background.is_transparent(),
            gutter,
        }
    }

    /// The theme used when no theme document is available: no rules,
    /// baseline colors only, under a generated identity.
    pub fn default_theme() -> Self {
        Self::from_document(ThemeId::generate(), &ThemeDocument::default())
    }

    pub fn id(&self) -> &ThemeId {
        &self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Build order of this definition. A definition built later always has
    /// a higher revision.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// The static rules in declaration order, invisibles rules included.
    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    pub fn is_transparent(&self) -> bool {
        self.is_transparent
    }

    pub fn gutter_styles(&self) -> &GutterStyles {
        &self.gutter
    }
}

/// Decodes raw rules, following every rule that sets an invisibles color
/// with its `deco.invisible` companion.
fn expand_rules<'a>(raw: impl Iterator<Item = &'a RawRule>) -> Vec<StyleRule> {
    let mut rules = Vec::new();
    for rule in raw.map(RawRule::to_style_rule) {
        let invisibles = rule.invisibles_rule();
        rules.push(rule);
        rules.extend(invisibles);
    }
    rules
}
