use iced::Color;

/// Colors used by the title bar and the window body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ChromePalette {
    pub(crate) title_bar: Color,
    pub(crate) foreground: Color,
    pub(crate) hover: Color,
    pub(crate) danger: Color,
    pub(crate) content: Color,
}

impl ChromePalette {
    /// Create the palette for a window with the given body color.
    pub(crate) fn new(content: Color) -> Self {
        Self {
            title_bar: Color::from_rgb8(0x20, 0x20, 0x24),
            foreground: Color::from_rgb8(0xd4, 0xd4, 0xd8),
            hover: Color::from_rgba8(0xff, 0xff, 0xff, 0.12),
            danger: Color::from_rgb8(0xe8, 0x11, 0x23),
            content,
        }
    }
}
