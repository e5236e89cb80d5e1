use chrono::{Duration, Local, NaiveDate};

/// The single target booking date for a run: today plus `offset` days.
///
/// `offset` may be negative; no magnitude validation is performed.
pub fn target_date(offset: i64) -> NaiveDate {
    target_date_from(Local::now().date_naive(), offset)
}

/// Offset arithmetic with an explicit `today`, so callers and tests can pin
/// the reference date.
pub fn target_date_from(today: NaiveDate, offset: i64) -> NaiveDate {
    today + Duration::days(offset)
}
