//! Font handles and the factory that creates them.
//!
//! The engine never builds platform fonts itself. It asks a [`FontFactory`]
//! for a font of a given name and size, then for a variant with symbolic
//! traits, and keeps the returned [`FontHandle`]. Handles are reference
//! counted; the platform resource is released when the last one drops.

use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;
use scope_style::TriBool;

/// Font used when an instance is created without an override.
pub const DEFAULT_FONT_NAME: &str = "Menlo-Regular";
/// Size used when an instance is created without an override, and when a
/// cascade folds down to a non-positive size.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

bitflags! {
    /// Symbolic traits requested from the font factory.
    ///
    /// ```
    /// use theme::FontTraits;
    /// use scope_style::TriBool;
    ///
    /// let traits = FontTraits::from_style(TriBool::True, TriBool::False);
    /// assert_eq!(traits, FontTraits::BOLD);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct FontTraits: u8 {
        const BOLD   = 0b01;
        const ITALIC = 0b10;
    }
}

impl FontTraits {
    pub fn from_style(bold: TriBool, italic: TriBool) -> Self {
        let mut traits = FontTraits::empty();
        traits.set(FontTraits::BOLD, bold.is_true());
        traits.set(FontTraits::ITALIC, italic.is_true());
        traits
    }
}

/// A font created by a [`FontFactory`].
pub trait PlatformFont: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;
    fn size(&self) -> f64;
    fn traits(&self) -> FontTraits;
}

pub type FontHandle = Arc<dyn PlatformFont>;

pub trait FontFactory: Send + Sync {
    /// Creates a plain font.
    fn create(&self, name: &str, size: f64) -> FontHandle;

    /// Creates a variant of `font` with `traits`, or `None` when the family
    /// has no such face.
    fn with_traits(&self, font: &FontHandle, traits: FontTraits) -> Option<FontHandle>;
}

/// A font described by value, without any platform resource behind it.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    pub name: String,
    pub size: f64,
    pub traits: FontTraits,
}

impl PlatformFont for FontDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> f64 {
        self.size
    }

    fn traits(&self) -> FontTraits {
        self.traits
    }
}

/// Produces [`FontDescriptor`]s; every trait combination exists.
#[derive(Clone, Copy, Debug, Default)]
pub struct DescriptorFontFactory;

impl FontFactory for DescriptorFontFactory {
    fn create(&self, name: &str, size: f64) -> FontHandle {
        Arc::new(FontDescriptor {
            name: name.to_string(),
            size,
            traits: FontTraits::empty(),
        })
    }

    fn with_traits(&self, font: &FontHandle, traits: FontTraits) -> Option<FontHandle> {
        Some(Arc::new(FontDescriptor {
            name: font.name().to_string(),
            size: font.size(),
            traits,
        }))
    }
}

/// Builds the concrete font for a folded style.
///
/// The size is rounded to whole points. Traits are only requested when at
/// least one is set; a factory that cannot provide them leaves the plain
/// font in place.
pub(crate) fn create_font(
    factory: &dyn FontFactory,
    name: &str,
    size: f64,
    traits: FontTraits,
) -> FontHandle {
    let points = match size.round() {
        points if points > 0.0 => points,
        _ => DEFAULT_FONT_SIZE,
    };

    let font = factory.create(name, points);
    if traits.is_empty() {
        return font;
    }
    factory.with_traits(&font, traits).unwrap_or(font)
}
