//! Gutter colors.
//!
//! The gutter is styled separately from text. Its twelve colors are derived
//! from the theme's baseline foreground and background unless the theme
//! document overrides them under `gutterSettings`. Resolution order per
//! color: explicit override, then computed default, then the color it
//! inherits from.

use scope_style::{Color, ThemeDocument};

/// The named gutter colors, in document key order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GutterColor {
    Divider,
    SelectionBorder,
    Foreground,
    Background,
    Icons,
    IconsHover,
    IconsPressed,
    SelectionForeground,
    SelectionBackground,
    SelectionIcons,
    SelectionIconsHover,
    SelectionIconsPressed,
}

impl GutterColor {
    pub const ALL: [GutterColor; 12] = [
        GutterColor::Divider,
        GutterColor::SelectionBorder,
        GutterColor::Foreground,
        GutterColor::Background,
        GutterColor::Icons,
        GutterColor::IconsHover,
        GutterColor::IconsPressed,
        GutterColor::SelectionForeground,
        GutterColor::SelectionBackground,
        GutterColor::SelectionIcons,
        GutterColor::SelectionIconsHover,
        GutterColor::SelectionIconsPressed,
    ];

    /// The key used in a theme document's `gutterSettings`.
    pub fn key(self) -> &'static str {
        match self {
            GutterColor::Divider => "divider",
            GutterColor::SelectionBorder => "selectionBorder",
            GutterColor::Foreground => "foreground",
            GutterColor::Background => "background",
            GutterColor::Icons => "icons",
            GutterColor::IconsHover => "iconsHover",
            GutterColor::IconsPressed => "iconsPressed",
            GutterColor::SelectionForeground => "selectionForeground",
            GutterColor::SelectionBackground => "selectionBackground",
            GutterColor::SelectionIcons => "selectionIcons",
            GutterColor::SelectionIconsHover => "selectionIconsHover",
            GutterColor::SelectionIconsPressed => "selectionIconsPressed",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|color| color.key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Explicit gutter colors from a theme document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GutterOverrides {
    colors: [Option<Color>; 12],
}

impl GutterOverrides {
    /// Reads the overrides of a document. Keys whose value does not decode
    /// to a color are ignored.
    pub fn from_document(doc: &ThemeDocument) -> Self {
        let mut overrides = Self::default();
        for color in GutterColor::ALL {
            if let Some(Some(value)) = doc.gutter_color(color.key()) {
                overrides.set(color, value);
            }
        }
        overrides
    }

    pub fn get(&self, color: GutterColor) -> Option<Color> {
        self.colors[color.index()]
    }

    pub fn set(&mut self, color: GutterColor, value: Color) -> &mut Self {
        self.colors[color.index()] = Some(value);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GutterStyles {
    pub divider: Color,
    pub selection_border: Color,
    pub foreground: Color,
    pub background: Color,
    pub icons: Color,
    pub icons_hover: Color,
    pub icons_pressed: Color,
    pub selection_foreground: Color,
    pub selection_background: Color,
    pub selection_icons: Color,
    pub selection_icons_hover: Color,
    pub selection_icons_pressed: Color,
}

impl GutterStyles {
    /// Derives the gutter palette from the theme's baseline colors.
    pub fn derive(foreground: Color, background: Color, overrides: &GutterOverrides) -> Self {
        let explicit = |color: GutterColor| overrides.get(color);

        let divider = explicit(GutterColor::Divider).unwrap_or_else(|| foreground.soften(0.4));
        let gutter_foreground =
            explicit(GutterColor::Foreground).unwrap_or_else(|| foreground.soften(0.5));
        let gutter_background =
            explicit(GutterColor::Background).unwrap_or_else(|| background.soften(0.87));
        let selection_foreground =
            explicit(GutterColor::SelectionForeground).unwrap_or_else(|| foreground.soften(0.95));
        let selection_background =
            explicit(GutterColor::SelectionBackground).unwrap_or_else(|| background.soften(0.95));

        let selection_border = explicit(GutterColor::SelectionBorder).unwrap_or(divider);
        let icons = explicit(GutterColor::Icons).unwrap_or(gutter_foreground);
        let selection_icons = explicit(GutterColor::SelectionIcons).unwrap_or(selection_foreground);

        Self {
            divider,
            selection_border,
            foreground: gutter_foreground,
            background: gutter_background,
            icons,
            icons_hover: explicit(GutterColor::IconsHover).unwrap_or(icons),
            icons_pressed: explicit(GutterColor::IconsPressed).unwrap_or(icons),
            selection_foreground,
            selection_background,
            selection_icons,
            selection_icons_hover: explicit(GutterColor::SelectionIconsHover)
                .unwrap_or(selection_icons),
            selection_icons_pressed: explicit(GutterColor::SelectionIconsPressed)
                .unwrap_or(selection_icons),
        }
    }

    pub fn get(&self, color: GutterColor) -> Color {
        match color {
            GutterColor::Divider => self.divider,
            GutterColor::SelectionBorder => self.selection_border,
            GutterColor::Foreground => self.foreground,
            GutterColor::Background => self.background,
            GutterColor::Icons => self.icons,
            GutterColor::IconsHover => self.icons_hover,
            GutterColor::IconsPressed => self.icons_pressed,
            GutterColor::SelectionForeground => self.selection_foreground,
            GutterColor::SelectionBackground => self.selection_background,
            GutterColor::SelectionIcons => self.selection_icons,
            GutterColor::SelectionIconsHover => self.selection_icons_hover,
            GutterColor::SelectionIconsPressed => self.selection_icons_pressed,
        }
    }
}
