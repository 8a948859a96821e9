use iced::widget::{button, container, image};
use iced::{Background, Color, Element, Length, alignment};

use crate::theme::ChromePalette;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Visual variants for an icon button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IconButtonVariant {
    Standard,
    Danger,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone)]
pub(crate) struct IconButtonProps {
    pub(crate) glyph: image::Handle,
    pub(crate) palette: ChromePalette,
    pub(crate) width: f32,
    pub(crate) height: f32,
    pub(crate) glyph_size: f32,
    pub(crate) variant: IconButtonVariant,
}

const ICON_BUTTON_PADDING: f32 = 0.0;

/// Render a title bar control button showing a raster glyph.
pub(crate) fn view<'a>(props: IconButtonProps) -> Element<'a, IconButtonEvent> {
    let hover_color = resolve_hover_color(props.variant, &props.palette);

    let icon = image(props.glyph)
        .width(Length::Fixed(props.glyph_size))
        .height(Length::Fixed(props.glyph_size));

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press(IconButtonEvent::Pressed)
        .padding(ICON_BUTTON_PADDING)
        .width(Length::Fixed(props.width))
        .height(Length::Fixed(props.height))
        .style(move |_, status| button::Style {
            background: background_for(status, hover_color)
                .map(Background::Color),
            ..button::Style::default()
        })
        .into()
}

fn resolve_hover_color(
    variant: IconButtonVariant,
    palette: &ChromePalette,
) -> Color {
    match variant {
        IconButtonVariant::Standard => palette.hover,
        IconButtonVariant::Danger => palette.danger,
    }
}

fn background_for(status: button::Status, hover_color: Color) -> Option<Color> {
    match status {
        button::Status::Hovered => Some(hover_color),
        button::Status::Pressed => Some(Color {
            a: hover_color.a * 0.8,
            ..hover_color
        }),
        button::Status::Active | button::Status::Disabled => None,
    }
}
