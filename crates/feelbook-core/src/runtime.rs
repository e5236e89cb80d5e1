use std::path::PathBuf;

use chrono::Datelike;
use tracing::{debug, info, warn};

use crate::activity::DesiredActivity;
use crate::booking;
use crate::client::FeelgoodClient;
use crate::config::{self, ActivitySchedule};
use crate::date;
use crate::day;
use crate::error::BookingError;
use crate::matcher;
use crate::outcome;
use crate::release::{Clock, ReleaseTime, SystemClock};

/// A single schedule entry supplied on the command line instead of a file.
#[derive(Debug, Clone)]
pub struct ManualActivity {
    pub name: String,
    pub time: String,
    pub day: String,
    pub start_time: Option<String>,
}

/// Everything one run needs. Each run is a fresh, independent pipeline with
/// its own target date and catalog snapshot.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub username: String,
    pub password: String,
    pub activities_file: Option<String>,
    pub manual: Option<ManualActivity>,
    pub dry_run: bool,
    /// Overrides `settings.day_offset` from config.toml when set.
    pub day_offset: Option<i64>,
    /// Explicit config.toml path; the default location otherwise.
    pub config_path: Option<PathBuf>,
}

/// Run the booking pipeline with the real clock and release schedule.
pub async fn run(config: RunConfig) -> Result<(), BookingError> {
    run_with_clock(config, &SystemClock, ReleaseTime::default()).await
}

/// Pipeline entry point with an injectable clock and release instant.
pub async fn run_with_clock(
    run_config: RunConfig,
    clock: &impl Clock,
    release: ReleaseTime,
) -> Result<(), BookingError> {
    let file_config = config::load_config(run_config.config_path.as_deref())?;

    if run_config.dry_run {
        info!("---running as test, no booking will be made---");
    }

    let schedule = resolve_schedule(&run_config)?;

    let day_offset = run_config
        .day_offset
        .unwrap_or(file_config.settings.day_offset);
    let target = date::target_date(day_offset);
    info!(
        %target,
        weekday = day::weekday_name(target.weekday().number_from_monday())?,
        "Resolved target booking date"
    );

    let matching = matcher::filter_by_weekday(&schedule.activities, target)?;
    if matching.is_empty() {
        info!("No activities to book today, bye!");
        return Ok(());
    }

    let client = FeelgoodClient::new(file_config.urls.clone(), file_config.headers.clone())?;
    client
        .login(&run_config.username, &run_config.password)
        .await?;

    let catalog = client
        .fetch_catalog(target, &file_config.settings.facility)
        .await?;
    debug!(count = catalog.len(), "Fetched remote catalog");

    let bookables = matcher::cross_reference(&file_config.urls, &matching, &catalog);
    if bookables.is_empty() {
        warn!("No matching activity was found.");
        return Ok(());
    }

    let results = booking::submit_all(
        &client,
        &bookables,
        target,
        run_config.dry_run,
        clock,
        release,
    )
    .await?;

    for (bookable, outcome) in &results {
        outcome::log_outcome(outcome, bookable);
    }

    Ok(())
}

fn resolve_schedule(run: &RunConfig) -> Result<ActivitySchedule, BookingError> {
    if let Some(manual) = &run.manual {
        info!(name = %manual.name, time = %manual.time, day = %manual.day, "Manual activity");
        return Ok(ActivitySchedule {
            activities: vec![DesiredActivity {
                name: manual.name.clone(),
                time: manual.time.clone(),
                day: manual.day.clone(),
                start_time: manual.start_time.clone(),
            }],
        });
    }
    if let Some(file) = &run.activities_file {
        info!(file = %file, "Loading activity schedule");
        return config::load_activities(file);
    }
    Err(BookingError::config(
        "no activity source: provide an activities file, or a manual name/time/day entry",
    ))
}
