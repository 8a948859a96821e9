use iced::widget::{MouseArea, Space, Stack, container, row, text, tooltip};
use iced::{Element, Length, alignment};

use super::super::event::ChromeEvent;
use super::super::glyphs::Glyph;
use super::super::model::ChromeViewModel;
use super::super::state::IconState;
use crate::components::primitive::icon_button::{
    IconButtonProps, IconButtonVariant, view as icon_button_view,
};
use crate::theme::ChromePalette;

pub(crate) const ACTION_BAR_HEIGHT: f32 = 32.0;
const ACTION_BAR_TITLE_SIZE: f32 = 12.0;
const ACTION_BAR_TITLE_PADDING: f32 = 12.0;
const ACTION_BAR_CONTROL_WIDTH: f32 = 46.0;
const ACTION_BAR_GLYPH_SIZE: f32 = 10.0;
const TOOLTIP_TEXT_SIZE: f32 = 11.0;
const TOOLTIP_PADDING: f32 = 4.0;

/// Props for rendering the action bar.
#[derive(Debug, Clone)]
pub(crate) struct ActionBarProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) vm: ChromeViewModel,
    pub(crate) palette: ChromePalette,
}

/// Render the draggable title bar with window controls.
pub(crate) fn view<'a>(props: ActionBarProps<'a>) -> Element<'a, ChromeEvent> {
    let palette = props.palette;
    let vm = props.vm;

    let title = container(
        text(props.title)
            .size(ACTION_BAR_TITLE_SIZE)
            .color(palette.foreground),
    )
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center)
    .padding([0.0, ACTION_BAR_TITLE_PADDING]);

    let maximize_label = match vm.icon {
        IconState::ShowingMaximizeGlyph => "Maximize",
        IconState::ShowingRestoreGlyph => "Restore",
    };

    let controls = row![
        control(
            vm.minimize_glyph,
            "Minimize",
            IconButtonVariant::Standard,
            ChromeEvent::MinimizeClicked,
            palette,
        ),
        control(
            vm.maximize_restore_glyph,
            maximize_label,
            IconButtonVariant::Standard,
            ChromeEvent::MaximizeRestoreClicked,
            palette,
        ),
        control(
            vm.close_glyph,
            "Close",
            IconButtonVariant::Danger,
            ChromeEvent::CloseClicked,
            palette,
        ),
    ]
    .height(Length::Fill)
    .align_y(alignment::Vertical::Center);

    let drag_surface = MouseArea::new(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .on_press(ChromeEvent::TitleBarPressed)
    .on_double_click(ChromeEvent::TitleBarDoubleClicked);

    let base_row = row![title, Space::new().width(Length::Fill), controls]
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    let content = Stack::new().push(drag_surface).push(base_row);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ACTION_BAR_HEIGHT))
        .style(move |_| container::Style {
            background: Some(palette.title_bar.into()),
            ..Default::default()
        })
        .into()
}

fn control<'a>(
    glyph: Glyph,
    label: &'a str,
    variant: IconButtonVariant,
    event: ChromeEvent,
    palette: ChromePalette,
) -> Element<'a, ChromeEvent> {
    let props = IconButtonProps {
        glyph: glyph.handle,
        palette,
        width: ACTION_BAR_CONTROL_WIDTH,
        height: ACTION_BAR_HEIGHT,
        glyph_size: ACTION_BAR_GLYPH_SIZE,
        variant,
    };
    let button = icon_button_view(props).map(move |_| event.clone());

    let hint = container(
        text(label)
            .size(TOOLTIP_TEXT_SIZE)
            .color(palette.foreground),
    )
    .padding(TOOLTIP_PADDING)
    .style(move |_| container::Style {
        background: Some(palette.title_bar.into()),
        ..Default::default()
    });

    tooltip(button, hint, tooltip::Position::Bottom).into()
}
