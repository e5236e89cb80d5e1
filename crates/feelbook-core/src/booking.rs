use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;
use serde_json::Map;
use tracing::{debug, error, info};

use crate::activity::BookableActivity;
use crate::client::FeelgoodClient;
use crate::error::BookingError;
use crate::outcome::{self, Outcome};
use crate::release::{self, Clock, ReleaseTime};

/// Activity-type families whose display name carries this marker are booked
/// with an explicit start instant instead of a pre-scheduled slot.
///
/// TODO: replace the display-name check with an explicit activity-kind
/// attribute once the remote taxonomy confirms one exists.
pub const EXACT_START_MARKER: &str = "Boka";

const EXACT_BOOK_LENGTH: &str = "30";

/// Wire payload for a booking POST. Field names follow the remote contract.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingPayload {
    #[serde(rename = "ActivityBooking")]
    pub activity_booking: ActivityBooking,
    pub send_confirmation: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityBooking {
    pub participants: u32,
    pub resources: Map<String, serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_length: Option<String>,
}

/// Unix epoch for `date` at a local "HH:MM" clock time.
pub fn simple_epoch(date: NaiveDate, hhmm: &str) -> Result<i64, BookingError> {
    let (hour, minute) = hhmm
        .split_once(':')
        .ok_or_else(|| BookingError::MalformedStartTime(hhmm.to_string()))?;
    let hour: u32 = hour
        .trim()
        .parse()
        .map_err(|_| BookingError::MalformedStartTime(hhmm.to_string()))?;
    let minute: u32 = minute
        .trim()
        .parse()
        .map_err(|_| BookingError::MalformedStartTime(hhmm.to_string()))?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| BookingError::MalformedStartTime(hhmm.to_string()))?;
    let local = date
        .and_time(time)
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| BookingError::MalformedStartTime(hhmm.to_string()))?;
    Ok(local.timestamp())
}

/// Build the booking payload for one bookable activity.
///
/// Exact-start activities get `book_start` (epoch of the configured start
/// time on the target date) and a fixed `book_length`; everything else books
/// the pre-scheduled slot as-is.
pub fn build_payload(
    bookable: &BookableActivity,
    target_date: NaiveDate,
) -> Result<BookingPayload, BookingError> {
    let mut activity_booking = ActivityBooking {
        participants: 1,
        resources: Map::new(),
        book_start: None,
        book_length: None,
    };

    if bookable.name.contains(EXACT_START_MARKER) {
        info!(start_time = %bookable.start_time, "Exact-start activity");
        let epoch = simple_epoch(target_date, &bookable.start_time)?;
        activity_booking.book_start = Some(epoch.to_string());
        activity_booking.book_length = Some(EXACT_BOOK_LENGTH.to_string());
    }

    Ok(BookingPayload {
        activity_booking,
        send_confirmation: 1,
    })
}

/// Submit every bookable activity in input order and pair each response with
/// its activity.
///
/// The release wait runs exactly once, before the first real submission. A
/// malformed start time fails only that activity; the loop logs it and moves
/// on. Dry-run mode performs no booking I/O: the would-be url and payload are
/// logged and nothing is collected. Transport errors and non-JSON bodies
/// propagate; remote error responses are classified, never retried.
pub async fn submit_all(
    client: &FeelgoodClient,
    bookables: &[BookableActivity],
    target_date: NaiveDate,
    dry_run: bool,
    clock: &impl Clock,
    release: ReleaseTime,
) -> Result<Vec<(BookableActivity, Outcome)>, BookingError> {
    let mut results = Vec::new();
    let mut waited = false;

    for bookable in bookables {
        let payload = match build_payload(bookable, target_date) {
            Ok(payload) => payload,
            Err(err @ BookingError::MalformedStartTime(_)) => {
                error!(activity = %bookable, %err, "Skipping activity with unusable start time");
                continue;
            }
            Err(err) => return Err(err),
        };

        if dry_run {
            debug!(activity = %bookable, "Would book");
            debug!(url = %bookable.url, "Booking url that would be used");
            debug!(
                payload = %serde_json::to_string(&payload)?,
                "Payload that would be used"
            );
            continue;
        }

        if !waited {
            release::wait_until(clock, release.hour, release.minute, release.second).await?;
            waited = true;
        }

        let (status, body) = client.book(&bookable.url, &payload).await?;
        results.push((bookable.clone(), outcome::classify(status, &body)));
    }

    Ok(results)
}
