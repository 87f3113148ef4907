// src/ui/birthday.rs

use iced::widget::{pick_list, row};
use iced::{Alignment, Element, Length};

use super::styles::CALLIGRAPHY;
use super::{mystic_button, screen_layout};
use crate::assets::Backdrop;
use crate::messages::Message;
use crate::models::Month;
use crate::ui_state::PickerState;

pub fn view<'a>(backdrop: &'a Backdrop, picker: &'a PickerState) -> Element<'a, Message> {
    // Only days that exist in the chosen month are offered
    let day_dropdown = pick_list(picker.day_options(), Some(picker.day), Message::DaySelected)
        .font(CALLIGRAPHY)
        .width(Length::Fixed(70.0));

    let month_dropdown = pick_list(&Month::ALL[..], Some(picker.month), Message::MonthSelected)
        .font(CALLIGRAPHY)
        .width(Length::Fixed(130.0));

    let controls = row![
        day_dropdown,
        month_dropdown,
        mystic_button("Find Your Sign", 160.0, Message::SubmitBirthday),
    ]
    .spacing(10)
    .align_items(Alignment::Center);

    screen_layout(Some(backdrop), controls)
}
