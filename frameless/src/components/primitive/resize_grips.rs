use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Space, Stack, container, mouse_area};
use iced::window::Direction;
use iced::{Element, Length, mouse};

const RESIZE_EDGE_THICKNESS: f32 = 5.0;
const RESIZE_CORNER_THICKNESS: f32 = 10.0;

/// Events emitted by the window resize grips.
#[derive(Debug, Clone)]
pub(crate) enum ResizeGripEvent {
    Resize(Direction),
}

/// Render edge and corner grips that start a native drag-resize.
///
/// The window has no native border, so these are the only way to resize it
/// with the pointer.
pub(crate) fn view() -> Element<'static, ResizeGripEvent> {
    Stack::with_children(GRIPS.iter().map(Grip::view)).into()
}

struct Grip {
    direction: Direction,
    width: Length,
    height: Length,
    align_x: Horizontal,
    align_y: Vertical,
}

const fn edge(
    direction: Direction,
    horizontal: bool,
    align_x: Horizontal,
    align_y: Vertical,
) -> Grip {
    let (width, height) = if horizontal {
        (Length::Fill, Length::Fixed(RESIZE_EDGE_THICKNESS))
    } else {
        (Length::Fixed(RESIZE_EDGE_THICKNESS), Length::Fill)
    };
    Grip {
        direction,
        width,
        height,
        align_x,
        align_y,
    }
}

const fn corner(
    direction: Direction,
    align_x: Horizontal,
    align_y: Vertical,
) -> Grip {
    Grip {
        direction,
        width: Length::Fixed(RESIZE_CORNER_THICKNESS),
        height: Length::Fixed(RESIZE_CORNER_THICKNESS),
        align_x,
        align_y,
    }
}

const GRIPS: [Grip; 8] = [
    edge(Direction::North, true, Horizontal::Left, Vertical::Top),
    edge(Direction::South, true, Horizontal::Left, Vertical::Bottom),
    edge(Direction::East, false, Horizontal::Right, Vertical::Top),
    edge(Direction::West, false, Horizontal::Left, Vertical::Top),
    corner(Direction::NorthWest, Horizontal::Left, Vertical::Top),
    corner(Direction::NorthEast, Horizontal::Right, Vertical::Top),
    corner(Direction::SouthWest, Horizontal::Left, Vertical::Bottom),
    corner(Direction::SouthEast, Horizontal::Right, Vertical::Bottom),
];

impl Grip {
    fn view(&self) -> Element<'static, ResizeGripEvent> {
        let area = Space::new().width(self.width).height(self.height);
        let grip = mouse_area(area)
            .on_press(ResizeGripEvent::Resize(self.direction))
            .interaction(interaction_for(self.direction));

        container(grip)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(self.align_x)
            .align_y(self.align_y)
            .into()
    }
}

fn interaction_for(direction: Direction) -> mouse::Interaction {
    match direction {
        Direction::North | Direction::South => {
            mouse::Interaction::ResizingVertically
        },
        Direction::East | Direction::West => {
            mouse::Interaction::ResizingHorizontally
        },
        Direction::NorthWest | Direction::SouthEast => {
            mouse::Interaction::ResizingDiagonallyDown
        },
        Direction::NorthEast | Direction::SouthWest => {
            mouse::Interaction::ResizingDiagonallyUp
        },
    }
}
