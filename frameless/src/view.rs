use iced::widget::{Space, Stack, column, container};
use iced::{Element, Length, window};

use super::{App, AppEvent};
use crate::components::primitive::resize_grips::{self, ResizeGripEvent};
use crate::config::APP_NAME;
use crate::widgets::chrome::view::action_bar::{self, ActionBarProps};

/// Render the root view of the controlled window.
pub(super) fn view(app: &App, _window: window::Id) -> Element<'_, AppEvent> {
    let palette = app.palette;

    let action_bar = action_bar::view(ActionBarProps {
        title: APP_NAME,
        vm: app.widgets.chrome.vm(),
        palette,
    })
    .map(AppEvent::ChromeUi);

    let body = container(Space::new().width(Length::Fill).height(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.content.into()),
            ..Default::default()
        });

    let grips = resize_grips::view().map(|event| match event {
        ResizeGripEvent::Resize(direction) => AppEvent::ResizeWindow(direction),
    });

    Stack::new()
        .push(column![action_bar, body])
        .push(grips)
        .into()
}
