use std::collections::HashMap;

use iced::widget::image;

use crate::icons::{ALL_GLYPH_SETS, GlyphVariant};

/// A glyph raster together with the image handle used to draw it.
#[derive(Debug, Clone)]
pub(crate) struct Glyph {
    pub(crate) variant: &'static GlyphVariant,
    pub(crate) handle: image::Handle,
}

/// Image handles for every glyph raster, created once.
///
/// iced caches decoded images per handle, so handles must outlive a single
/// view pass.
#[derive(Debug)]
pub(crate) struct GlyphCache {
    handles: HashMap<&'static str, image::Handle>,
}

impl GlyphCache {
    pub(crate) fn new() -> Self {
        let mut handles = HashMap::new();
        for set in ALL_GLYPH_SETS {
            for variant in set.variants() {
                handles.entry(variant.path).or_insert_with(|| {
                    image::Handle::from_bytes(variant.bytes)
                });
            }
        }
        Self { handles }
    }

    /// Return the glyph for a variant.
    pub(crate) fn glyph(&self, variant: &'static GlyphVariant) -> Glyph {
        let handle = match self.handles.get(variant.path) {
            Some(handle) => handle.clone(),
            None => image::Handle::from_bytes(variant.bytes),
        };
        Glyph { variant, handle }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.handles.len()
    }
}
