use iced::window;

use super::errors::ControllerError;
use crate::config::{QuitPolicy, WindowConfig};

/// The single native window owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WindowHandle {
    id: window::Id,
    closing: bool,
}

impl WindowHandle {
    fn new(id: window::Id) -> Self {
        Self { id, closing: false }
    }

    pub(crate) fn id(&self) -> window::Id {
        self.id
    }

    pub(crate) fn is_closing(&self) -> bool {
        self.closing
    }
}

/// Where the controlled window is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum WindowSlot {
    #[default]
    Empty,
    Opening,
    Open(WindowHandle),
}

/// Window controller state.
#[derive(Debug)]
pub(crate) struct ControllerState {
    config: WindowConfig,
    quit_policy: QuitPolicy,
    slot: WindowSlot,
}

impl ControllerState {
    pub(crate) fn new(config: WindowConfig, quit_policy: QuitPolicy) -> Self {
        Self {
            config,
            quit_policy,
            slot: WindowSlot::Empty,
        }
    }

    pub(crate) fn config(&self) -> WindowConfig {
        self.config
    }

    pub(crate) fn quit_policy(&self) -> QuitPolicy {
        self.quit_policy
    }

    /// Return whether a window exists or is being opened.
    pub(crate) fn has_window(&self) -> bool {
        !matches!(self.slot, WindowSlot::Empty)
    }

    /// Return the handle of the open window, if any.
    pub(crate) fn handle(&self) -> Option<WindowHandle> {
        match self.slot {
            WindowSlot::Open(handle) => Some(handle),
            WindowSlot::Empty | WindowSlot::Opening => None,
        }
    }

    /// Reserve the slot for a window about to be opened.
    ///
    /// Returns `false` when a window already exists or is opening.
    pub(crate) fn begin_open(&mut self) -> bool {
        if self.has_window() {
            return false;
        }
        self.slot = WindowSlot::Opening;
        true
    }

    /// Record the id the toolkit assigned to the opening window.
    pub(crate) fn attach(&mut self, id: window::Id) {
        self.slot = WindowSlot::Open(WindowHandle::new(id));
    }

    /// Return the id of a window that can still accept commands.
    pub(crate) fn live_window(&self) -> Result<window::Id, ControllerError> {
        match self.slot {
            WindowSlot::Empty => Err(ControllerError::NoWindow),
            WindowSlot::Opening => Err(ControllerError::Opening),
            WindowSlot::Open(handle) if handle.closing => {
                Err(ControllerError::Closing(handle.id))
            },
            WindowSlot::Open(handle) => Ok(handle.id),
        }
    }

    /// Check that `id` names the live controlled window.
    pub(crate) fn ensure_live(
        &self,
        id: window::Id,
    ) -> Result<(), ControllerError> {
        let live = self.live_window()?;
        if live == id {
            Ok(())
        } else {
            Err(ControllerError::StaleWindow(id))
        }
    }

    pub(crate) fn mark_closing(&mut self) {
        if let WindowSlot::Open(handle) = &mut self.slot {
            handle.closing = true;
        }
    }

    /// Drop the handle for `id`. Returns `false` if `id` was not held.
    pub(crate) fn release(&mut self, id: window::Id) -> bool {
        match self.slot {
            WindowSlot::Open(handle) if handle.id == id => {
                self.slot = WindowSlot::Empty;
                true
            },
            _ => false,
        }
    }
}
