use iced::window;

use super::event::{ControllerEffect, ControllerEvent};
use super::state::ControllerState;
use crate::bridge::{Command, Notification};
use crate::config::QuitPolicy;

/// Reduce a controller event into state mutation and ordered effects.
pub(crate) fn reduce(
    state: &mut ControllerState,
    event: ControllerEvent,
) -> Vec<ControllerEffect> {
    match event {
        ControllerEvent::Command(command) => handle_command(state, command),
        ControllerEvent::Opened(id) => {
            log::info!("window {id:?} opened");
            Vec::new()
        },
        ControllerEvent::MaximizedResolved { id, maximized } => {
            toggle_maximized(state, id, maximized)
        },
        ControllerEvent::MinimizedResolved { id, minimized } => {
            minimize_unless_minimized(state, id, minimized)
        },
        ControllerEvent::Closed(id) => window_closed(state, id),
    }
}

/// Open the window unless one already exists.
pub(crate) fn get_or_create(
    state: &mut ControllerState,
) -> Vec<ControllerEffect> {
    if !state.begin_open() {
        log::debug!("window already exists, nothing to create");
        return Vec::new();
    }
    vec![ControllerEffect::Open(state.config())]
}

fn handle_command(
    state: &mut ControllerState,
    command: Command,
) -> Vec<ControllerEffect> {
    let id = match state.live_window() {
        Ok(id) => id,
        Err(err) => {
            log::debug!("ignoring {command}: {err}");
            return Vec::new();
        },
    };

    match command {
        Command::Close => {
            state.mark_closing();
            vec![ControllerEffect::Close(id)]
        },
        Command::Minimize => vec![ControllerEffect::QueryMinimized(id)],
        Command::ToggleMaximizeRestore => {
            vec![ControllerEffect::QueryMaximized(id)]
        },
    }
}

/// Notify the chrome first, then flip the native maximized state.
fn toggle_maximized(
    state: &ControllerState,
    id: window::Id,
    maximized: bool,
) -> Vec<ControllerEffect> {
    if let Err(err) = state.ensure_live(id) {
        log::debug!("dropping maximized state of {id:?}: {err}");
        return Vec::new();
    }

    let notification = if maximized {
        Notification::IconRestore
    } else {
        Notification::IconMaximize
    };

    vec![
        ControllerEffect::Notify(notification),
        ControllerEffect::SetMaximized {
            id,
            maximized: !maximized,
        },
    ]
}

/// Minimize unless the toolkit reports the window as already minimized.
fn minimize_unless_minimized(
    state: &ControllerState,
    id: window::Id,
    minimized: Option<bool>,
) -> Vec<ControllerEffect> {
    if let Err(err) = state.ensure_live(id) {
        log::debug!("dropping minimized state of {id:?}: {err}");
        return Vec::new();
    }
    if minimized == Some(true) {
        log::debug!("ignoring minApp: window {id:?} is minimized");
        return Vec::new();
    }
    vec![ControllerEffect::Minimize(id)]
}

fn window_closed(
    state: &mut ControllerState,
    id: window::Id,
) -> Vec<ControllerEffect> {
    let was_closing = state.handle().is_some_and(|handle| handle.is_closing());
    if !state.release(id) {
        log::warn!("closed event for unknown window {id:?}");
        return Vec::new();
    }
    log::info!("window {id:?} closed (requested by chrome: {was_closing})");

    match state.quit_policy() {
        QuitPolicy::QuitOnLastWindowClosed => vec![ControllerEffect::Exit],
        QuitPolicy::StayResident => {
            log::info!("staying resident with no windows");
            Vec::new()
        },
    }
}
