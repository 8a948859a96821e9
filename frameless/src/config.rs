use iced::{Color, Size, window};
use image::ImageFormat;

use crate::icons::APP_ICON_DATA;

pub(crate) const APP_NAME: &str = "Frameless";

pub(crate) const WINDOW_WIDTH: f32 = 800.0;
pub(crate) const WINDOW_HEIGHT: f32 = 600.0;

/// Fixed construction parameters for the controlled window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WindowConfig {
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) decorations: bool,
    pub(crate) resizable: bool,
    pub(crate) background: Color,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            decorations: false,
            resizable: true,
            background: Color::WHITE,
        }
    }
}

impl WindowConfig {
    /// Build iced window settings from the configuration.
    pub(crate) fn to_settings(&self) -> window::Settings {
        window::Settings {
            size: Size::new(self.width, self.height),
            decorations: self.decorations,
            resizable: self.resizable,
            icon: app_icon(),
            ..window::Settings::default()
        }
    }
}

fn app_icon() -> Option<window::Icon> {
    match window::icon::from_file_data(APP_ICON_DATA, Some(ImageFormat::Png)) {
        Ok(icon) => Some(icon),
        Err(err) => {
            log::warn!("window icon load failed: {err}");
            None
        },
    }
}

/// What happens to the process once its last window has closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QuitPolicy {
    /// Terminate the application.
    QuitOnLastWindowClosed,
    /// Keep running with zero windows until explicitly quit (macOS).
    StayResident,
}

impl QuitPolicy {
    /// Return the convention of the platform the binary was built for.
    pub(crate) fn for_current_platform() -> Self {
        if cfg!(target_os = "macos") {
            QuitPolicy::StayResident
        } else {
            QuitPolicy::QuitOnLastWindowClosed
        }
    }
}
