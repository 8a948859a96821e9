use crate::bridge::{Command, Notification};

/// Events handled by the chrome widget.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEvent {
    CloseClicked,
    MinimizeClicked,
    MaximizeRestoreClicked,
    TitleBarPressed,
    TitleBarDoubleClicked,
    /// A new window was opened; its chrome starts from the restored look.
    WindowOpened,
    /// The display scale factor of the window changed.
    ScaleFactorChanged(f32),
    /// A notification delivered by the window controller.
    Notified(Notification),
}

/// Effect events produced by the chrome reducer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ChromeEffect {
    /// Hand a command to the bridge.
    Send(Command),
    /// Let the platform move the window with the pointer.
    StartWindowDrag,
}
