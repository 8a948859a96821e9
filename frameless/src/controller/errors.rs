use iced::window;
use thiserror::Error;

/// Reasons a command could not reach the controlled window.
///
/// These are absorbed by the controller and logged; the chrome widget never
/// sees them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum ControllerError {
    /// No window exists.
    #[error("no window is open")]
    NoWindow,
    /// A window was requested but the toolkit has not handed out its id yet.
    #[error("window is still opening")]
    Opening,
    /// Close was already issued for the window.
    #[error("window {0:?} is already closing")]
    Closing(window::Id),
    /// The toolkit reported a window this controller does not own.
    #[error("window {0:?} is not the controlled window")]
    StaleWindow(window::Id),
}
