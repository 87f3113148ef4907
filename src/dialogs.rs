//! User-visible error reporting.

use log::error;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

use crate::error::AppError;

#[cfg_attr(test, mockall::automock)]
pub trait ErrorReporter {
    /// Shows a modal error and returns once the user dismisses it.
    fn show_error(&self, title: &str, message: &str);
}

/// Native message boxes.
#[derive(Debug, Default)]
pub struct NativeDialogs;

impl ErrorReporter for NativeDialogs {
    fn show_error(&self, title: &str, message: &str) {
        error!("[Dialog] {}: {}", title, message);
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}

pub fn report_error(reporter: &dyn ErrorReporter, err: &AppError) {
    reporter.show_error(err.dialog_title(), &err.user_message());
}
