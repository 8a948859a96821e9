use super::glyphs::Glyph;
use super::state::IconState;

/// View model for the chrome widget.
#[derive(Debug, Clone)]
pub(crate) struct ChromeViewModel {
    pub(crate) icon: IconState,
    pub(crate) close_glyph: Glyph,
    pub(crate) minimize_glyph: Glyph,
    pub(crate) maximize_restore_glyph: Glyph,
}
