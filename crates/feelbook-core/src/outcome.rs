use serde_json::Value;
use tracing::{error, info};

use crate::activity::BookableActivity;

/// Localized message the remote returns when a slot disappeared between the
/// catalog fetch and the booking attempt.
pub const SLOT_GONE_MESSAGE: &str = "Denna tid är inte tillgänglig längre.";

/// Classification of one booking response. These are data results, never
/// run-level errors; the caller decides how to log each one.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success,
    AlreadyFull,
    TooEarly,
    AlreadyBooked,
    /// The remote reported an error code this tool does not know about.
    Unhandled { body: Value },
    /// Nothing in the response matched any known shape.
    Unknown { status: u16, body: Value },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success)
    }
}

/// Classify a booking response by status code and JSON body.
///
/// Precedence, first match wins: success, error_code sub-classification,
/// the localized slot-gone message, then the catch-all. Never fails on a
/// well-formed JSON body; non-JSON bodies are the caller's parse error.
pub fn classify(status: u16, body: &Value) -> Outcome {
    if status == 200 && body.get("result").and_then(Value::as_str) == Some("ok") {
        return Outcome::Success;
    }
    if let Some(code) = body.get("error_code") {
        return match code.as_str() {
            Some("ACTIVITY_FULL") => Outcome::AlreadyFull,
            Some("ACTIVITY_BOOKING_TO_EARLY") => Outcome::TooEarly,
            Some("USER_ALREADY_BOOKED") => Outcome::AlreadyBooked,
            _ => Outcome::Unhandled { body: body.clone() },
        };
    }
    if body.get("message").and_then(Value::as_str) == Some(SLOT_GONE_MESSAGE) {
        return Outcome::AlreadyFull;
    }
    Outcome::Unknown {
        status,
        body: body.clone(),
    }
}

/// Emit the log line an outcome maps to.
pub fn log_outcome(outcome: &Outcome, bookable: &BookableActivity) {
    match outcome {
        Outcome::Success => info!(activity = %bookable, "Successfully booked"),
        Outcome::AlreadyFull => error!(activity = %bookable, "Activity is fully booked already"),
        Outcome::TooEarly => error!(activity = %bookable, "You are trying to book too soon"),
        Outcome::AlreadyBooked => error!(activity = %bookable, "You are already booked"),
        Outcome::Unhandled { body } => {
            error!(activity = %bookable, body = %body, "Unhandled response from the booking service")
        }
        Outcome::Unknown { status, body } => {
            error!(activity = %bookable, status, body = %body, "Unexpected response from the booking service")
        }
    }
}
