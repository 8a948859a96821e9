#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::window::Direction;
use iced::{Element, Subscription, Task, window};

use crate::bridge::BridgeMessage;
use crate::config::{APP_NAME, QuitPolicy, WindowConfig};
use crate::controller::{ControllerEvent, WindowController};
use crate::theme::ChromePalette;
use crate::widgets::chrome::{ChromeEffect, ChromeEvent, ChromeWidget};

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    /// The application is ready or was re-activated.
    Activate,
    // Chrome widget
    ChromeUi(ChromeEvent),
    ChromeEffect(ChromeEffect),
    // Chrome/controller boundary
    Bridge(BridgeMessage),
    // Window controller
    Controller(ControllerEvent),
    // Toolkit events
    Window(window::Id, window::Event),
    ResizeWindow(Direction),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) chrome: ChromeWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) palette: ChromePalette,
    pub(crate) controller: WindowController,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let config = WindowConfig::default();
        let quit_policy = QuitPolicy::for_current_platform();
        log::info!("starting {APP_NAME} with {quit_policy:?}");

        let app = App {
            palette: ChromePalette::new(config.background),
            controller: WindowController::new(config, quit_policy),
            widgets: Widgets {
                chrome: ChromeWidget::new(),
            },
        };

        (app, Task::done(AppEvent::Activate))
    }

    /// Return the window title.
    pub(crate) fn title(&self, _window: window::Id) -> String {
        String::from(APP_NAME)
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the view of a window.
    pub(crate) fn view(&self, window: window::Id) -> Element<'_, AppEvent> {
        view::view(self, window)
    }
}
