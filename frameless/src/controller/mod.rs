//! Owner of the native window.
//!
//! The controller is the only component allowed to change the window. It
//! consumes [`Command`](crate::bridge::Command)s and toolkit events and
//! answers with an ordered list of [`ControllerEffect`]s which the router
//! turns into iced tasks.

mod errors;
pub(crate) mod event;
mod reducer;
mod state;

use iced::window;

pub(crate) use self::event::{ControllerEffect, ControllerEvent};
use self::state::ControllerState;
use crate::config::{QuitPolicy, WindowConfig};

/// Single-owner handle to the application window.
pub(crate) struct WindowController {
    state: ControllerState,
}

impl WindowController {
    /// Create a controller that has not opened its window yet.
    pub(crate) fn new(config: WindowConfig, quit_policy: QuitPolicy) -> Self {
        Self {
            state: ControllerState::new(config, quit_policy),
        }
    }

    /// Return whether a window exists or is being opened.
    pub(crate) fn has_window(&self) -> bool {
        self.state.has_window()
    }

    /// Return the id of the open window.
    pub(crate) fn window_id(&self) -> Option<window::Id> {
        self.state.handle().map(|handle| handle.id())
    }

    /// Request the window, opening it only if none exists.
    pub(crate) fn get_or_create(&mut self) -> Vec<ControllerEffect> {
        reducer::get_or_create(&mut self.state)
    }

    /// Bind the id the toolkit assigned to the window being opened.
    pub(crate) fn attach(&mut self, id: window::Id) {
        self.state.attach(id);
    }

    /// Reduce an event into ordered effects.
    pub(crate) fn reduce(
        &mut self,
        event: ControllerEvent,
    ) -> Vec<ControllerEffect> {
        reducer::reduce(&mut self.state, event)
    }
}
