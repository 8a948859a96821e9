use iced::{Subscription, window};

use crate::app::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(_app: &App) -> Subscription<AppEvent> {
    window::events().map(|(id, event)| AppEvent::Window(id, event))
}
