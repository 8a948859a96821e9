pub(crate) mod event;
pub(crate) mod glyphs;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use iced::Task;

pub(crate) use self::event::{ChromeEffect, ChromeEvent};
use self::glyphs::GlyphCache;
use self::model::ChromeViewModel;
#[cfg(test)]
pub(crate) use self::state::IconState;
use self::state::ChromeState;
use crate::icons::{CLOSE_GLYPH, MINIMIZE_GLYPH};

/// Chrome widget rendering the custom title bar.
pub(crate) struct ChromeWidget {
    state: ChromeState,
    glyphs: GlyphCache,
}

impl ChromeWidget {
    /// Create the chrome widget with default state.
    pub(crate) fn new() -> Self {
        Self {
            state: ChromeState::default(),
            glyphs: GlyphCache::new(),
        }
    }

    /// Apply an event and return the effect it produced, if any.
    pub(crate) fn apply(&mut self, event: ChromeEvent) -> Option<ChromeEffect> {
        let rescaled = matches!(event, ChromeEvent::ScaleFactorChanged(_));
        let effect = reducer::reduce(&mut self.state, event);
        if rescaled {
            let glyph = self.vm().maximize_restore_glyph;
            log::debug!(
                "scale factor {}: using {}",
                self.state.scale_factor(),
                glyph.variant.path
            );
        }
        effect
    }

    /// Reduce a chrome event into state updates and effect tasks.
    pub(crate) fn reduce(&mut self, event: ChromeEvent) -> Task<ChromeEffect> {
        match self.apply(event) {
            Some(effect) => Task::done(effect),
            None => Task::none(),
        }
    }

    /// Produce the chrome view model for rendering.
    pub(crate) fn vm(&self) -> ChromeViewModel {
        let scale_factor = self.state.scale_factor();
        let icon = self.state.icon();

        ChromeViewModel {
            icon,
            close_glyph: self.glyphs.glyph(CLOSE_GLYPH.select(scale_factor)),
            minimize_glyph: self
                .glyphs
                .glyph(MINIMIZE_GLYPH.select(scale_factor)),
            maximize_restore_glyph: self
                .glyphs
                .glyph(icon.glyph().select(scale_factor)),
        }
    }
}
