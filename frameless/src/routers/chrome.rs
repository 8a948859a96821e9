use iced::Task;

use super::{bridge, window};
use crate::app::{App, AppEvent};
use crate::bridge::BridgeMessage;
use crate::widgets::chrome::{ChromeEffect, ChromeEvent};

/// Route a chrome UI event through the widget reducer and map effects.
pub(crate) fn route_event(app: &mut App, event: ChromeEvent) -> Task<AppEvent> {
    app.widgets
        .chrome
        .reduce(event)
        .map(AppEvent::ChromeEffect)
}

/// Route a chrome effect event to an app-level task.
pub(crate) fn route_effect(app: &App, effect: ChromeEffect) -> Task<AppEvent> {
    match effect {
        ChromeEffect::Send(command) => {
            bridge::send(BridgeMessage::Command(command))
        },
        ChromeEffect::StartWindowDrag => window::start_drag(app),
    }
}
