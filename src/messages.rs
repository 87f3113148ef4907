use crate::models::Month;

/// Unified application message type
///
/// Every widget callback produces one of these. The active screen decides
/// which of them it reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ===== Title Screen =====
    /// Draw a tarot card
    ShowTarot,
    /// Open the birthday picker
    ShowBirthdayInput,

    // ===== Birthday Screen =====
    /// Day dropdown changed
    DaySelected(u32),
    /// Month dropdown changed
    MonthSelected(Month),
    /// "Find Your Sign" pressed
    SubmitBirthday,

    // ===== Result / Tarot Screens =====
    /// Return to the title screen
    Back,
}
