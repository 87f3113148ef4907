use iced::widget::{row, text};
use iced::{Alignment, Element};

use super::styles::{CALLIGRAPHY, STAR_TEXT};
use super::{mystic_button, screen_layout};
use crate::assets::Backdrop;
use crate::messages::Message;
use crate::models::{TarotCard, TAROT_CARD_COUNT};

pub fn view(card: TarotCard, backdrop: &Backdrop) -> Element<'_, Message> {
    let controls = row![
        text(format!("Card {} of {}", card.number(), TAROT_CARD_COUNT))
            .size(14)
            .font(CALLIGRAPHY)
            .style(iced::theme::Text::Color(STAR_TEXT)),
        mystic_button("Back", 90.0, Message::Back),
    ]
    .spacing(30)
    .align_items(Alignment::Center);

    screen_layout(Some(backdrop), controls)
}
