use crate::bridge::Notification;
use crate::icons::{GlyphSet, MAXIMIZE_GLYPH, RESTORE_GLYPH};

/// Which glyph the maximize/restore control shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum IconState {
    #[default]
    ShowingMaximizeGlyph,
    ShowingRestoreGlyph,
}

impl IconState {
    /// Derive the icon from the last notification; the previous state is
    /// irrelevant.
    pub(crate) fn from_notification(notification: Notification) -> Self {
        match notification {
            Notification::IconMaximize => IconState::ShowingRestoreGlyph,
            Notification::IconRestore => IconState::ShowingMaximizeGlyph,
        }
    }

    /// Return the glyph set rendered for this state.
    pub(crate) fn glyph(self) -> &'static GlyphSet {
        match self {
            IconState::ShowingMaximizeGlyph => &MAXIMIZE_GLYPH,
            IconState::ShowingRestoreGlyph => &RESTORE_GLYPH,
        }
    }
}

/// Chrome widget state.
#[derive(Debug)]
pub(crate) struct ChromeState {
    icon: IconState,
    scale_factor: f32,
}

impl Default for ChromeState {
    fn default() -> Self {
        Self {
            icon: IconState::default(),
            scale_factor: 1.0,
        }
    }
}

impl ChromeState {
    pub(crate) fn icon(&self) -> IconState {
        self.icon
    }

    pub(crate) fn set_icon(&mut self, icon: IconState) {
        self.icon = icon;
    }

    pub(crate) fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    pub(crate) fn set_scale_factor(&mut self, scale_factor: f32) {
        self.scale_factor = scale_factor;
    }
}
