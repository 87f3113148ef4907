// src/ui/mod.rs

use iced::alignment::Horizontal;
use iced::widget::image::Handle;
use iced::widget::{button, column, container, text, Button, Image};
use iced::{ContentFit, Element, Length};

use crate::assets::Backdrop;
use crate::config::{CANVAS_HEIGHT, CANVAS_WIDTH, CONTROL_STRIP_HEIGHT};
use crate::messages::Message;
use crate::navigator::Screen;

pub mod styles;

mod birthday;
mod result;
mod tarot;
mod title;

use styles::{BlankCanvasStyle, ControlStripStyle, MysticButtonStyle, CALLIGRAPHY_BOLD};

/// Renders the live screen.
pub fn view(screen: &Screen) -> Element<'_, Message> {
    match screen {
        Screen::Title { backdrop } => title::view(backdrop.as_ref()),
        Screen::BirthdayInput { backdrop, picker } => birthday::view(backdrop, picker),
        Screen::Result { sign, backdrop } => result::view(*sign, backdrop),
        Screen::Tarot { card, backdrop } => tarot::view(*card, backdrop),
    }
}

// --- SHARED PIECES ---

fn canvas(backdrop: Option<&Backdrop>) -> Element<'_, Message> {
    let width = Length::Fixed(CANVAS_WIDTH as f32);
    let height = Length::Fixed(CANVAS_HEIGHT as f32);

    match backdrop {
        Some(backdrop) => Image::<Handle>::new(backdrop.handle().clone())
            .width(width)
            .height(height)
            .content_fit(ContentFit::Fill)
            .into(),
        None => container(text("Zodiac Horoscope").size(28).font(CALLIGRAPHY_BOLD))
            .width(width)
            .height(height)
            .center_x()
            .center_y()
            .style(iced::theme::Container::Custom(Box::new(BlankCanvasStyle)))
            .into(),
    }
}

fn mystic_button(label: &str, width: f32, on_press: Message) -> Button<'_, Message> {
    button(
        text(label)
            .size(16)
            .font(CALLIGRAPHY_BOLD)
            .horizontal_alignment(Horizontal::Center),
    )
    .width(Length::Fixed(width))
    .padding([10, 12])
    .style(iced::theme::Button::Custom(Box::new(MysticButtonStyle)))
    .on_press(on_press)
}

/// Canvas on top, controls in a fixed strip underneath.
fn screen_layout<'a>(
    backdrop: Option<&'a Backdrop>,
    controls: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    column![
        canvas(backdrop),
        container(controls)
            .width(Length::Fill)
            .height(Length::Fixed(CONTROL_STRIP_HEIGHT as f32))
            .center_x()
            .center_y()
            .style(iced::theme::Container::Custom(Box::new(ControlStripStyle))),
    ]
    .into()
}
