//! Birthday picker state
//!
//! The dropdown values shown on the birthday screen. These live with the
//! screen and are only copied into the navigator's birthday on submit.

use crate::models::{days_in_month, Birthday, Month};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerState {
    pub day: u32,
    pub month: Month,
}

impl PickerState {
    pub fn new() -> Self {
        Self {
            day: 1,
            month: Month::January,
        }
    }

    /// Days offered by the day dropdown for the selected month.
    pub fn day_options(&self) -> Vec<u32> {
        (1..=days_in_month(self.month)).collect()
    }

    pub fn select_day(&mut self, day: u32) {
        self.day = day.clamp(1, days_in_month(self.month));
    }

    /// Changes the month, pulling the day back if the new month is shorter.
    pub fn select_month(&mut self, month: Month) {
        self.month = month;
        self.day = self.day.min(days_in_month(month));
    }

    pub fn birthday(&self) -> Birthday {
        let birthday = Birthday::new(self.day, self.month.number());
        debug_assert!(birthday.is_valid_date(), "picker produced {:?}", birthday);
        birthday
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}
