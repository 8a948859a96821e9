//! End-to-end walks through the chrome, the bridge and the controller.
//!
//! The harness mirrors the routers: chrome effects cross the bridge as
//! commands, controller effects run in order against a scripted window, and
//! notifications are delivered to the chrome before the next effect runs.
//!
//! Effects are executed here in the order the controller returns them. The
//! iced `Task` chaining in `routers::controller` that preserves this order
//! at runtime is not exercised.

use std::collections::VecDeque;

use iced::window;

use crate::bridge::{BridgeMessage, Command, Notification};
use crate::config::{QuitPolicy, WindowConfig};
use crate::controller::{ControllerEffect, ControllerEvent, WindowController};
use crate::icons::{MAXIMIZE_GLYPH, RESTORE_GLYPH};
use crate::widgets::chrome::{
    ChromeEffect, ChromeEvent, ChromeWidget, IconState,
};

/// Observable side effects, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Trace {
    Sent(BridgeMessage),
    Opened,
    Destroyed,
    Minimized,
    Maximized(bool),
    Exited,
}

#[derive(Debug)]
struct FakeWindow {
    id: window::Id,
    maximized: bool,
    minimized: bool,
}

struct Harness {
    controller: WindowController,
    chrome: ChromeWidget,
    window: Option<FakeWindow>,
    pending: VecDeque<ControllerEvent>,
    trace: Vec<Trace>,
}

impl Harness {
    fn new(policy: QuitPolicy) -> Self {
        Self {
            controller: WindowController::new(
                WindowConfig::default(),
                policy,
            ),
            chrome: ChromeWidget::new(),
            window: None,
            pending: VecDeque::new(),
            trace: Vec::new(),
        }
    }

    fn booted(policy: QuitPolicy) -> Self {
        let mut harness = Self::new(policy);
        harness.activate();
        harness.trace.clear();
        harness
    }

    fn activate(&mut self) {
        let effects = self.controller.get_or_create();
        self.run(effects);
        self.drain();
    }

    fn click(&mut self, event: ChromeEvent) {
        match self.chrome.apply(event) {
            Some(ChromeEffect::Send(command)) => {
                self.send(BridgeMessage::Command(command));
            },
            Some(ChromeEffect::StartWindowDrag) | None => {},
        }
    }

    /// Restore the window from outside the app, without any event.
    fn restore_externally(&mut self) {
        if let Some(window) = self.window.as_mut() {
            window.minimized = false;
        }
    }

    fn send(&mut self, message: BridgeMessage) {
        self.trace.push(Trace::Sent(message));
        match message {
            BridgeMessage::Command(command) => {
                self.controller_event(ControllerEvent::Command(command));
            },
            BridgeMessage::Notification(notification) => {
                let _ = self.chrome.apply(ChromeEvent::Notified(notification));
            },
        }
    }

    fn controller_event(&mut self, event: ControllerEvent) {
        self.pending.push_back(event);
        self.drain();
    }

    fn drain(&mut self) {
        while let Some(event) = self.pending.pop_front() {
            let effects = self.controller.reduce(event);
            self.run(effects);
        }
    }

    fn run(&mut self, effects: Vec<ControllerEffect>) {
        for effect in effects {
            self.execute(effect);
        }
    }

    fn execute(&mut self, effect: ControllerEffect) {
        match effect {
            ControllerEffect::Open(_) => {
                let id = window::Id::unique();
                self.controller.attach(id);
                self.window = Some(FakeWindow {
                    id,
                    maximized: false,
                    minimized: false,
                });
                self.trace.push(Trace::Opened);
                let _ = self.chrome.apply(ChromeEvent::WindowOpened);
                self.pending.push_back(ControllerEvent::Opened(id));
            },
            ControllerEffect::Close(id) => {
                assert_eq!(self.window.as_ref().map(|w| w.id), Some(id));
                self.window = None;
                self.trace.push(Trace::Destroyed);
                self.pending.push_back(ControllerEvent::Closed(id));
            },
            ControllerEffect::Minimize(id) => {
                let window = self.window_mut(id);
                window.minimized = true;
                self.trace.push(Trace::Minimized);
            },
            ControllerEffect::QueryMinimized(id) => {
                let minimized = Some(self.window_mut(id).minimized);
                self.pending.push_back(ControllerEvent::MinimizedResolved {
                    id,
                    minimized,
                });
            },
            ControllerEffect::QueryMaximized(id) => {
                let maximized = self.window_mut(id).maximized;
                self.pending.push_back(ControllerEvent::MaximizedResolved {
                    id,
                    maximized,
                });
            },
            ControllerEffect::Notify(notification) => {
                self.send(BridgeMessage::Notification(notification));
            },
            ControllerEffect::SetMaximized { id, maximized } => {
                let window = self.window_mut(id);
                window.maximized = maximized;
                window.minimized = false;
                self.trace.push(Trace::Maximized(maximized));
            },
            ControllerEffect::Exit => self.trace.push(Trace::Exited),
        }
    }

    fn window_mut(&mut self, id: window::Id) -> &mut FakeWindow {
        let window = self.window.as_mut().expect("window should be open");
        assert_eq!(window.id, id);
        window
    }

    fn window(&self) -> &FakeWindow {
        self.window.as_ref().expect("window should be open")
    }

    fn count(&self, trace: Trace) -> usize {
        self.trace.iter().filter(|entry| **entry == trace).count()
    }
}

const ALL_POLICIES: [QuitPolicy; 2] =
    [QuitPolicy::QuitOnLastWindowClosed, QuitPolicy::StayResident];

fn command(command: Command) -> Trace {
    Trace::Sent(BridgeMessage::Command(command))
}

fn notification(notification: Notification) -> Trace {
    Trace::Sent(BridgeMessage::Notification(notification))
}

#[test]
fn given_application_ready_then_one_restored_window_shows_maximize_glyph() {
    for policy in ALL_POLICIES {
        let mut harness = Harness::new(policy);

        harness.activate();

        assert_eq!(harness.trace, vec![Trace::Opened]);
        assert!(!harness.window().maximized);
        assert_eq!(harness.chrome.vm().icon, IconState::ShowingMaximizeGlyph);
    }
}

#[test]
fn given_quit_policy_when_close_clicked_then_window_is_destroyed_and_app_exits()
{
    let mut harness = Harness::booted(QuitPolicy::QuitOnLastWindowClosed);

    harness.click(ChromeEvent::CloseClicked);

    assert_eq!(
        harness.trace,
        vec![command(Command::Close), Trace::Destroyed, Trace::Exited]
    );
    assert!(harness.window.is_none());
}

#[test]
fn given_close_clicked_twice_then_window_is_destroyed_once() {
    for policy in ALL_POLICIES {
        let mut harness = Harness::booted(policy);

        harness.click(ChromeEvent::CloseClicked);
        harness.click(ChromeEvent::CloseClicked);

        assert_eq!(harness.count(Trace::Destroyed), 1);
        assert!(harness.count(Trace::Exited) <= 1);
    }
}

#[test]
fn given_restored_window_when_maximize_clicked_then_notification_precedes_maximize()
 {
    let mut harness = Harness::booted(QuitPolicy::QuitOnLastWindowClosed);

    harness.click(ChromeEvent::MaximizeRestoreClicked);

    assert_eq!(
        harness.trace,
        vec![
            command(Command::ToggleMaximizeRestore),
            notification(Notification::IconMaximize),
            Trace::Maximized(true),
        ]
    );
    assert!(harness.window().maximized);
    assert_eq!(harness.chrome.vm().icon, IconState::ShowingRestoreGlyph);
}

#[test]
fn given_maximized_window_when_control_clicked_again_then_window_is_restored() {
    let mut harness = Harness::booted(QuitPolicy::QuitOnLastWindowClosed);
    harness.click(ChromeEvent::MaximizeRestoreClicked);
    harness.trace.clear();

    harness.click(ChromeEvent::MaximizeRestoreClicked);

    assert_eq!(
        harness.trace,
        vec![
            command(Command::ToggleMaximizeRestore),
            notification(Notification::IconRestore),
            Trace::Maximized(false),
        ]
    );
    assert!(!harness.window().maximized);
    assert_eq!(harness.chrome.vm().icon, IconState::ShowingMaximizeGlyph);
}

#[test]
fn given_any_number_of_toggles_then_glyph_always_matches_window_state() {
    for clicks in 0..7 {
        let mut harness = Harness::booted(QuitPolicy::StayResident);

        for _ in 0..clicks {
            harness.click(ChromeEvent::MaximizeRestoreClicked);
        }

        let maximized = clicks % 2 == 1;
        let expected = if maximized {
            IconState::ShowingRestoreGlyph
        } else {
            IconState::ShowingMaximizeGlyph
        };
        assert_eq!(harness.window().maximized, maximized, "{clicks} clicks");
        assert_eq!(harness.chrome.vm().icon, expected, "{clicks} clicks");
    }
}

#[test]
fn given_title_bar_double_click_then_it_toggles_like_the_control() {
    let mut harness = Harness::booted(QuitPolicy::QuitOnLastWindowClosed);

    harness.click(ChromeEvent::TitleBarDoubleClicked);

    assert!(harness.window().maximized);
    assert_eq!(harness.chrome.vm().icon, IconState::ShowingRestoreGlyph);
}

#[test]
fn given_minimize_clicked_then_window_minimizes_without_notification() {
    let mut harness = Harness::booted(QuitPolicy::QuitOnLastWindowClosed);

    harness.click(ChromeEvent::MinimizeClicked);

    assert_eq!(
        harness.trace,
        vec![command(Command::Minimize), Trace::Minimized]
    );
    assert!(harness.window().minimized);
    assert_eq!(harness.chrome.vm().icon, IconState::ShowingMaximizeGlyph);
}

#[test]
fn given_minimized_window_when_minimize_clicked_again_then_it_is_a_no_op() {
    let mut harness = Harness::booted(QuitPolicy::QuitOnLastWindowClosed);
    harness.click(ChromeEvent::MinimizeClicked);

    harness.click(ChromeEvent::MinimizeClicked);

    assert_eq!(harness.count(Trace::Minimized), 1);
    assert!(harness.window().minimized);
}

#[test]
fn given_window_restored_outside_the_app_when_minimize_clicked_then_it_minimizes()
 {
    let mut harness = Harness::booted(QuitPolicy::QuitOnLastWindowClosed);
    harness.click(ChromeEvent::MinimizeClicked);

    harness.restore_externally();
    harness.click(ChromeEvent::MinimizeClicked);

    assert_eq!(harness.count(Trace::Minimized), 2);
    assert!(harness.window().minimized);
}

#[test]
fn given_high_density_display_when_toggling_then_matching_rasters_are_shown() {
    let mut harness = Harness::booted(QuitPolicy::QuitOnLastWindowClosed);
    let _ = harness.chrome.apply(ChromeEvent::ScaleFactorChanged(2.0));

    harness.click(ChromeEvent::MaximizeRestoreClicked);
    let maximized = harness.chrome.vm();
    harness.click(ChromeEvent::MaximizeRestoreClicked);
    let restored = harness.chrome.vm();

    assert_eq!(
        maximized.maximize_restore_glyph.variant,
        RESTORE_GLYPH.select(2.0)
    );
    assert_eq!(
        maximized.maximize_restore_glyph.variant.path,
        "icons/restore-w-20.png"
    );
    assert_eq!(
        restored.maximize_restore_glyph.variant,
        MAXIMIZE_GLYPH.select(2.0)
    );
}

#[test]
fn given_resident_policy_when_window_closed_then_activation_reopens_it() {
    let mut harness = Harness::booted(QuitPolicy::StayResident);
    harness.click(ChromeEvent::MaximizeRestoreClicked);

    harness.click(ChromeEvent::CloseClicked);

    assert_eq!(harness.count(Trace::Exited), 0);
    assert!(harness.window.is_none());
    assert!(!harness.controller.has_window());

    harness.activate();
    harness.activate();

    assert_eq!(harness.count(Trace::Opened), 1);
    assert!(!harness.window().maximized);
    assert_eq!(harness.chrome.vm().icon, IconState::ShowingMaximizeGlyph);
}

#[test]
fn given_closed_window_when_commands_arrive_then_they_are_ignored() {
    let mut harness = Harness::booted(QuitPolicy::StayResident);
    harness.click(ChromeEvent::CloseClicked);
    harness.trace.clear();

    harness.click(ChromeEvent::MinimizeClicked);
    harness.click(ChromeEvent::MaximizeRestoreClicked);

    assert_eq!(
        harness.trace,
        vec![
            command(Command::Minimize),
            command(Command::ToggleMaximizeRestore),
        ]
    );
}
