use iced::widget::row;
use iced::{Alignment, Element};

use super::{mystic_button, screen_layout};
use crate::assets::Backdrop;
use crate::messages::Message;

pub fn view(backdrop: Option<&Backdrop>) -> Element<'_, Message> {
    let controls = row![
        mystic_button("Tarot", 170.0, Message::ShowTarot),
        mystic_button("Check Your Sign", 200.0, Message::ShowBirthdayInput),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    screen_layout(backdrop, controls)
}
