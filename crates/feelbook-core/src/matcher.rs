use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::activity::{BookableActivity, DesiredActivity, RemoteActivity};
use crate::config::Urls;
use crate::day::parse_weekday;
use crate::error::BookingError;

/// Stage A: keep the schedule entries whose weekday matches the target date.
///
/// Preserves input order. An empty result is the valid "nothing to book
/// today" terminal state, not an error.
pub fn filter_by_weekday(
    desired: &[DesiredActivity],
    target: NaiveDate,
) -> Result<Vec<DesiredActivity>, BookingError> {
    let target_weekday = target.weekday().number_from_monday();
    let mut matching = Vec::new();
    for activity in desired {
        if parse_weekday(&activity.day)? == target_weekday {
            info!(
                name = %activity.name,
                time = %activity.time,
                day = %activity.day,
                "Activity day matches, will look for it in the catalog"
            );
            matching.push(activity.clone());
        }
    }
    Ok(matching)
}

/// Stage B: cross-reference the weekday-filtered schedule against the remote
/// catalog.
///
/// A pair matches when the desired name is a substring of the remote activity
/// type name and the desired time is a substring of the remote start
/// timestamp; the remote side carries extra formatting text the schedule need
/// not fully specify. Iteration is catalog-outer / desired-inner and every
/// satisfying pair yields one entry, duplicates included.
pub fn cross_reference(
    urls: &Urls,
    filtered: &[DesiredActivity],
    catalog: &[RemoteActivity],
) -> Vec<BookableActivity> {
    let mut bookables = Vec::new();
    for remote in catalog {
        for desired in filtered {
            if remote.type_name.contains(&desired.name) && remote.start.contains(&desired.time) {
                let bookable = match &desired.start_time {
                    Some(start_time) => BookableActivity::with_start_time(
                        urls.participate_url(&remote.id),
                        remote.type_name.clone(),
                        remote.start.clone(),
                        start_time.clone(),
                    ),
                    None => BookableActivity::new(
                        urls.participate_url(&remote.id),
                        remote.type_name.clone(),
                        remote.start.clone(),
                    ),
                };
                info!(name = %bookable.name, start = %bookable.start, "Found matching activity");
                bookables.push(bookable);
            }
        }
    }
    bookables
}
