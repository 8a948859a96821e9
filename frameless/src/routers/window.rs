use iced::{Task, window};

use super::{chrome, controller};
use crate::app::{App, AppEvent};
use crate::controller::ControllerEvent;
use crate::widgets::chrome::ChromeEvent;

/// Toolkit window events the application reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
enum WindowSignal {
    Opened,
    Rescaled(f32),
    Closed,
}

/// Route toolkit window events to the controller and the chrome.
pub(crate) fn route_event(
    app: &mut App,
    id: window::Id,
    event: window::Event,
) -> Task<AppEvent> {
    match signal_for(&event) {
        Some(WindowSignal::Opened) => Task::batch([
            Task::done(AppEvent::ChromeUi(ChromeEvent::WindowOpened)),
            sync_scale_factor(id),
        ]),
        Some(WindowSignal::Rescaled(factor)) => {
            chrome::route_event(app, ChromeEvent::ScaleFactorChanged(factor))
        },
        Some(WindowSignal::Closed) => {
            controller::route_event(app, ControllerEvent::Closed(id))
        },
        None => Task::none(),
    }
}

fn signal_for(event: &window::Event) -> Option<WindowSignal> {
    match event {
        window::Event::Opened { .. } => Some(WindowSignal::Opened),
        window::Event::Rescaled(factor) => {
            Some(WindowSignal::Rescaled(*factor))
        },
        window::Event::Closed => Some(WindowSignal::Closed),
        _ => None,
    }
}

/// Handle window drag-resize from resize grips.
pub(crate) fn handle_drag_resize(
    app: &App,
    dir: window::Direction,
) -> Task<AppEvent> {
    match app.controller.window_id() {
        Some(id) => window::drag_resize(id, dir),
        None => Task::none(),
    }
}

/// Start moving the window with the pointer.
pub(crate) fn start_drag(app: &App) -> Task<AppEvent> {
    match app.controller.window_id() {
        Some(id) => window::drag(id),
        None => Task::none(),
    }
}

/// Read the initial scale factor; later changes arrive as `Rescaled`.
fn sync_scale_factor(id: window::Id) -> Task<AppEvent> {
    window::scale_factor(id).map(|factor| {
        AppEvent::ChromeUi(ChromeEvent::ScaleFactorChanged(factor))
    })
}
