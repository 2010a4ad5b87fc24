use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Notifications
pub const TOAST_ENTER_MS: u32 = 10;
pub const TOAST_DISMISS_MS: u32 = 5_000;
pub const TOAST_LEAVE_MS: u32 = 300;

// Menu and modal
pub const OVERLAY_CLOSE_MS: u32 = 300;

// Header
pub const HEADER_SCROLLED_AT: f64 = 50.0;
pub const HEADER_HIDE_AFTER: f64 = 400.0;
pub const HEADER_OFFSET: f64 = 80.0;

// Lead forms
pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const PHONE_MIN_DIGITS: usize = 11;
pub const PHONE_ERROR_MESSAGE: &str = "Please enter a valid phone number";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Thank you! We will call you back shortly.";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

// Scroll animations
pub const REVEAL_DURATION_MS: u32 = 800;
pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_FRAME_MS: u32 = 16;
