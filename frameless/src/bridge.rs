//! Messages exchanged between the chrome widget and the window controller.
//!
//! The chrome side only ever produces [`Command`]s and the controller side
//! only ever produces [`Notification`]s. Both travel through
//! [`BridgeMessage`] so every crossing is visible to a single router.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Requests sent from the chrome widget to the window controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Command {
    #[serde(rename = "closeApp")]
    Close,
    #[serde(rename = "minApp")]
    Minimize,
    #[serde(rename = "maxApp")]
    ToggleMaximizeRestore,
}

impl Command {
    /// Return the wire name of the command.
    pub(crate) fn wire_name(self) -> &'static str {
        match self {
            Command::Close => "closeApp",
            Command::Minimize => "minApp",
            Command::ToggleMaximizeRestore => "maxApp",
        }
    }
}

/// State changes reported by the window controller to the chrome widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) enum Notification {
    /// The window is being maximized; the restore glyph should be shown.
    #[serde(rename = "changeImx")]
    IconMaximize,
    /// The window is being restored; the maximize glyph should be shown.
    #[serde(rename = "changeIr")]
    IconRestore,
}

impl Notification {
    /// Return the wire name of the notification.
    pub(crate) fn wire_name(self) -> &'static str {
        match self {
            Notification::IconMaximize => "changeImx",
            Notification::IconRestore => "changeIr",
        }
    }
}

/// A single message crossing the chrome/controller boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BridgeMessage {
    Command(Command),
    Notification(Notification),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl fmt::Display for BridgeMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeMessage::Command(command) => write!(f, "ui -> {command}"),
            BridgeMessage::Notification(notification) => {
                write!(f, "controller -> {notification}")
            },
        }
    }
}
