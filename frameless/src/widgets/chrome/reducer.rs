use super::event::{ChromeEffect, ChromeEvent};
use super::state::{ChromeState, IconState};
use crate::bridge::Command;

/// Reduce a chrome event into state mutation and an optional effect.
///
/// Control clicks never touch local state: the glyph only changes when the
/// controller reports back.
pub(crate) fn reduce(
    state: &mut ChromeState,
    event: ChromeEvent,
) -> Option<ChromeEffect> {
    match event {
        ChromeEvent::CloseClicked => Some(ChromeEffect::Send(Command::Close)),
        ChromeEvent::MinimizeClicked => {
            Some(ChromeEffect::Send(Command::Minimize))
        },
        ChromeEvent::MaximizeRestoreClicked
        | ChromeEvent::TitleBarDoubleClicked => {
            Some(ChromeEffect::Send(Command::ToggleMaximizeRestore))
        },
        ChromeEvent::TitleBarPressed => Some(ChromeEffect::StartWindowDrag),
        ChromeEvent::WindowOpened => {
            state.set_icon(IconState::default());
            None
        },
        ChromeEvent::ScaleFactorChanged(scale_factor) => {
            state.set_scale_factor(scale_factor);
            None
        },
        ChromeEvent::Notified(notification) => {
            let icon = IconState::from_notification(notification);
            let glyph = icon.glyph();
            log::debug!(
                "{notification}: showing {} ({})",
                glyph.name(),
                glyph.srcset()
            );
            state.set_icon(icon);
            None
        },
    }
}
