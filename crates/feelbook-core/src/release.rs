use chrono::{Local, NaiveDateTime, NaiveTime};
use tracing::info;

use crate::error::BookingError;

/// The remote catalog opens bookable slots for a new date at a fixed daily
/// clock time; one second past the hour keeps the request on the open side.
pub const RELEASE_HOUR: u32 = 8;
pub const RELEASE_MINUTE: u32 = 0;
pub const RELEASE_SECOND: u32 = 1;

/// Wall-clock source, injectable so tests can pin "now".
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Real local-time clock for production use.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// The release instant to wait for, as today's date at a given clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl Default for ReleaseTime {
    fn default() -> Self {
        Self {
            hour: RELEASE_HOUR,
            minute: RELEASE_MINUTE,
            second: RELEASE_SECOND,
        }
    }
}

/// Block until today's date at the given clock time.
///
/// A target already in the past (or exactly now) returns immediately; that is
/// the "release window already open" case and is logged as such, not an
/// error. Otherwise this sleeps for exactly the remaining duration,
/// sub-second precision included. No cancellation, no timeout ceiling.
pub async fn wait_until(
    clock: &impl Clock,
    hour: u32,
    minute: u32,
    second: u32,
) -> Result<(), BookingError> {
    let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
        BookingError::config(format!("invalid release time {hour:02}:{minute:02}:{second:02}"))
    })?;
    let now = clock.now();
    let target = now.date().and_time(time);

    match (target - now).to_std() {
        Ok(remaining) if !remaining.is_zero() => {
            info!(%target, ?remaining, "Waiting for the release window");
            tokio::time::sleep(remaining).await;
        }
        _ => {
            info!("Time difference negative. Booking immediately!");
        }
    }
    Ok(())
}
