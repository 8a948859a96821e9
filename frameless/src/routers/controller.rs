use iced::{Task, window};

use super::bridge;
use crate::app::{App, AppEvent};
use crate::bridge::BridgeMessage;
use crate::controller::{ControllerEffect, ControllerEvent};

/// Make sure the application has its window.
pub(crate) fn activate(app: &mut App) -> Task<AppEvent> {
    if app.controller.has_window() {
        log::debug!("activated with a window already held");
        return Task::none();
    }
    let effects = app.controller.get_or_create();
    run_effects(app, effects)
}

/// Route a controller event through the reducer and run its effects.
pub(crate) fn route_event(
    app: &mut App,
    event: ControllerEvent,
) -> Task<AppEvent> {
    let effects = app.controller.reduce(event);
    run_effects(app, effects)
}

/// Chain effects so each one starts after the previous one finished.
fn run_effects(
    app: &mut App,
    effects: Vec<ControllerEffect>,
) -> Task<AppEvent> {
    effects
        .into_iter()
        .fold(Task::none(), |task, effect| {
            task.chain(route_effect(app, effect))
        })
}

fn route_effect(app: &mut App, effect: ControllerEffect) -> Task<AppEvent> {
    match effect {
        ControllerEffect::Open(config) => {
            let (id, open) = window::open(config.to_settings());
            app.controller.attach(id);
            open.map(|id| AppEvent::Controller(ControllerEvent::Opened(id)))
        },
        ControllerEffect::Close(id) => window::close(id),
        ControllerEffect::Minimize(id) => window::minimize(id, true),
        ControllerEffect::QueryMinimized(id) => {
            window::is_minimized(id).map(move |minimized| {
                AppEvent::Controller(ControllerEvent::MinimizedResolved {
                    id,
                    minimized,
                })
            })
        },
        ControllerEffect::QueryMaximized(id) => {
            window::is_maximized(id).map(move |maximized| {
                AppEvent::Controller(ControllerEvent::MaximizedResolved {
                    id,
                    maximized,
                })
            })
        },
        ControllerEffect::Notify(notification) => {
            bridge::send(BridgeMessage::Notification(notification))
        },
        ControllerEffect::SetMaximized { id, maximized } => {
            window::maximize(id, maximized)
        },
        ControllerEffect::Exit => iced::exit(),
    }
}
