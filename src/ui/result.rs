use iced::widget::{row, text};
use iced::{Alignment, Element};

use super::styles::{CALLIGRAPHY_BOLD, STAR_TEXT};
use super::{mystic_button, screen_layout};
use crate::assets::Backdrop;
use crate::messages::Message;
use crate::models::Sign;

pub fn view(sign: Sign, backdrop: &Backdrop) -> Element<'_, Message> {
    let controls = row![
        text(sign.display_name())
            .size(20)
            .font(CALLIGRAPHY_BOLD)
            .style(iced::theme::Text::Color(STAR_TEXT)),
        mystic_button("Back", 90.0, Message::Back),
    ]
    .spacing(30)
    .align_items(Alignment::Center);

    screen_layout(Some(backdrop), controls)
}
