//! Title bar glyphs with their pixel-density variants.

use std::fmt::Write;

pub(crate) const APP_ICON_DATA: &[u8] =
    include_bytes!("../assets/logo/frameless.png");

/// Number of density steps every glyph set carries.
pub(crate) const DENSITY_STEPS: usize = 9;

/// A single raster of a glyph matched to a display pixel density.
#[derive(Debug, PartialEq)]
pub(crate) struct GlyphVariant {
    pub(crate) path: &'static str,
    pub(crate) bytes: &'static [u8],
    pub(crate) density: f32,
}

/// A glyph with one raster per density step, ordered by density.
///
/// The ladder intentionally reuses a raster for neighbouring steps
/// (1.5x/1.75x, 2x/2.25x and 3x/3.5x share an image).
#[derive(Debug, PartialEq)]
pub(crate) struct GlyphSet {
    name: &'static str,
    variants: [GlyphVariant; DENSITY_STEPS],
}

macro_rules! glyph_variant {
    ($name:literal, $px:literal, $density:literal) => {
        GlyphVariant {
            path: concat!("icons/", $name, "-", $px, ".png"),
            bytes: include_bytes!(concat!(
                "../assets/icons/",
                $name,
                "-",
                $px,
                ".png"
            )),
            density: $density,
        }
    };
}

macro_rules! glyph_set {
    ($name:literal) => {
        GlyphSet {
            name: $name,
            variants: [
                glyph_variant!($name, "10", 1.0),
                glyph_variant!($name, "12", 1.25),
                glyph_variant!($name, "15", 1.5),
                glyph_variant!($name, "15", 1.75),
                glyph_variant!($name, "20", 2.0),
                glyph_variant!($name, "20", 2.25),
                glyph_variant!($name, "24", 2.5),
                glyph_variant!($name, "30", 3.0),
                glyph_variant!($name, "30", 3.5),
            ],
        }
    };
}

pub(crate) static CLOSE_GLYPH: GlyphSet = glyph_set!("close-w");
pub(crate) static MINIMIZE_GLYPH: GlyphSet = glyph_set!("min-w");
pub(crate) static MAXIMIZE_GLYPH: GlyphSet = glyph_set!("max-w");
pub(crate) static RESTORE_GLYPH: GlyphSet = glyph_set!("restore-w");

pub(crate) static ALL_GLYPH_SETS: [&GlyphSet; 4] =
    [&CLOSE_GLYPH, &MINIMIZE_GLYPH, &MAXIMIZE_GLYPH, &RESTORE_GLYPH];

impl GlyphSet {
    /// Return the glyph name shared by all variants.
    pub(crate) fn name(&self) -> &'static str {
        self.name
    }

    /// Return every variant, lowest density first.
    pub(crate) fn variants(&self) -> &[GlyphVariant] {
        &self.variants
    }

    /// Render the set as a `srcset`-style source list.
    pub(crate) fn srcset(&self) -> String {
        let mut srcset = String::new();
        for (index, variant) in self.variants.iter().enumerate() {
            if index > 0 {
                srcset.push_str(", ");
            }
            let _ = write!(srcset, "{} {}x", variant.path, variant.density);
        }
        srcset
    }

    /// Pick the variant that best matches a display scale factor.
    ///
    /// The lowest density at or above the scale factor wins; displays denser
    /// than the ladder get the densest raster.
    pub(crate) fn select(&self, scale_factor: f32) -> &GlyphVariant {
        self.variants
            .iter()
            .find(|variant| variant.density >= scale_factor)
            .unwrap_or(&self.variants[DENSITY_STEPS - 1])
    }
}
