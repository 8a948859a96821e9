use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    route(app, event)
}

fn route(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        AppEvent::Activate => routers::controller::activate(app),
        // Chrome widget
        AppEvent::ChromeUi(event) => routers::chrome::route_event(app, event),
        AppEvent::ChromeEffect(effect) => {
            routers::chrome::route_effect(app, effect)
        },
        // Chrome/controller boundary
        AppEvent::Bridge(message) => routers::bridge::route(app, message),
        // Window controller
        AppEvent::Controller(event) => {
            routers::controller::route_event(app, event)
        },
        // Toolkit events
        AppEvent::Window(id, event) => {
            routers::window::route_event(app, id, event)
        },
        AppEvent::ResizeWindow(direction) => {
            routers::window::handle_drag_resize(app, direction)
        },
    }
}
