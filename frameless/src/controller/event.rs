use iced::window;

use crate::bridge::{Command, Notification};
use crate::config::WindowConfig;

/// Inputs reduced by the window controller.
#[derive(Debug, Clone)]
pub(crate) enum ControllerEvent {
    /// A command received over the bridge.
    Command(Command),
    /// The toolkit finished opening a window.
    Opened(window::Id),
    /// The toolkit answered a maximized-state query.
    MaximizedResolved { id: window::Id, maximized: bool },
    /// The toolkit answered a minimized-state query; `None` when the
    /// platform cannot tell.
    MinimizedResolved {
        id: window::Id,
        minimized: Option<bool>,
    },
    /// The window was destroyed.
    Closed(window::Id),
}

/// Effects produced by the controller, executed in order by the router.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ControllerEffect {
    Open(WindowConfig),
    Close(window::Id),
    Minimize(window::Id),
    QueryMinimized(window::Id),
    QueryMaximized(window::Id),
    Notify(Notification),
    SetMaximized { id: window::Id, maximized: bool },
    Exit,
}
