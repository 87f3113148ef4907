// file: src/models/birthday.rs
use chrono::NaiveDate;

use super::month::Month;

// Any leap year works; 29 February must be selectable.
const LEAP_YEAR: i32 = 2000;

/// Day/month pair as submitted from the birthday screen.
///
/// Values are stored as given. Range checking belongs to the picker, which
/// only offers days that exist in the selected month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday {
    pub day: u32,
    pub month: u32,
}

impl Birthday {
    pub fn new(day: u32, month: u32) -> Self {
        Self { day, month }
    }

    /// True if the pair names a real calendar day, ignoring the year.
    pub fn is_valid_date(&self) -> bool {
        NaiveDate::from_ymd_opt(LEAP_YEAR, self.month, self.day).is_some()
    }
}

impl Default for Birthday {
    fn default() -> Self {
        Self { day: 1, month: 1 }
    }
}

/// Largest day the picker offers for `month`.
pub fn days_in_month(month: Month) -> u32 {
    (28..=31)
        .rev()
        .find(|&day| NaiveDate::from_ymd_opt(LEAP_YEAR, month.number(), day).is_some())
        .unwrap_or(28)
}
