//! Date to sign lookup
//!
//! A static table of day/month boundaries, scanned in order. Capricorn
//! wraps the year end and is therefore stored as two rows.

use crate::models::Sign;

/// One row of the lookup table. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacRange {
    pub sign: Sign,
    pub start_day: u32,
    pub start_month: u32,
    pub end_day: u32,
    pub end_month: u32,
}

impl ZodiacRange {
    const fn new(sign: Sign, start: (u32, u32), end: (u32, u32)) -> Self {
        Self {
            sign,
            start_day: start.1,
            start_month: start.0,
            end_day: end.1,
            end_month: end.0,
        }
    }

    pub fn contains(&self, day: u32, month: u32) -> bool {
        (month == self.start_month && day >= self.start_day)
            || (month == self.end_month && day <= self.end_day)
    }
}

/// Rows as (month, day). First match wins: the capricorn tail row's end
/// bound also covers 1-21 December, which sagittarius claims first.
pub const ZODIAC_RANGES: [ZodiacRange; 13] = [
    ZodiacRange::new(Sign::Capricorn, (12, 22), (1, 19)),
    ZodiacRange::new(Sign::Aquarius, (1, 20), (2, 18)),
    ZodiacRange::new(Sign::Pisces, (2, 19), (3, 20)),
    ZodiacRange::new(Sign::Aries, (3, 21), (4, 19)),
    ZodiacRange::new(Sign::Taurus, (4, 20), (5, 20)),
    ZodiacRange::new(Sign::Gemini, (5, 21), (6, 20)),
    ZodiacRange::new(Sign::Cancer, (6, 21), (7, 22)),
    ZodiacRange::new(Sign::Leo, (7, 23), (8, 22)),
    ZodiacRange::new(Sign::Virgo, (8, 23), (9, 22)),
    ZodiacRange::new(Sign::Libra, (9, 23), (10, 22)),
    ZodiacRange::new(Sign::Scorpio, (10, 23), (11, 21)),
    ZodiacRange::new(Sign::Sagittarius, (11, 22), (12, 21)),
    ZodiacRange::new(Sign::Capricorn, (12, 22), (12, 31)),
];

/// Resolves a birthday to its sign.
///
/// The inputs are not range checked; a pair outside every row yields `None`.
pub fn resolve(day: u32, month: u32) -> Option<Sign> {
    ZODIAC_RANGES
        .iter()
        .find(|range| range.contains(day, month))
        .map(|range| range.sign)
}
