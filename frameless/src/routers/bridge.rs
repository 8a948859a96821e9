use iced::Task;

use super::{chrome, controller};
use crate::app::{App, AppEvent};
use crate::bridge::BridgeMessage;
use crate::controller::ControllerEvent;
use crate::widgets::chrome::ChromeEvent;

/// Queue a message for delivery across the chrome/controller boundary.
pub(crate) fn send(message: BridgeMessage) -> Task<AppEvent> {
    Task::done(AppEvent::Bridge(message))
}

/// Deliver a bridge message to the side that consumes it.
pub(crate) fn route(app: &mut App, message: BridgeMessage) -> Task<AppEvent> {
    log::debug!("bridge: {message}");

    match message {
        BridgeMessage::Command(command) => {
            controller::route_event(app, ControllerEvent::Command(command))
        },
        BridgeMessage::Notification(notification) => {
            chrome::route_event(app, ChromeEvent::Notified(notification))
        },
    }
}
