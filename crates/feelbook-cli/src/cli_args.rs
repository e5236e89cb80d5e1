use std::path::PathBuf;

use clap::{ArgAction, Parser};
use feelbook_core::{ManualActivity, RunConfig};

/// Top-level CLI entrypoint.
#[derive(Parser, Debug, Clone)]
#[command(version, about = "Book activities on the Feelgood booking service", long_about = None)]
pub struct Cli {
    /// Login email for the booking service.
    #[arg(short = 'u', long)]
    pub username: String,

    /// Login password; prompted for interactively when omitted.
    #[arg(short = 'p', long)]
    pub password: Option<String>,

    /// Activity schedule: a bare name resolved under the config directory,
    /// or a path to a TOML file.
    #[arg(short = 'a', long)]
    pub activities: Option<String>,

    /// Dry run: authenticate and match, but never submit bookings.
    #[arg(long, action = ArgAction::SetTrue)]
    pub test: bool,

    /// Manual entry in place of a schedule file: activity name fragment.
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Manual entry: "HH:MM" fragment of the remote start timestamp.
    #[arg(short = 't', long)]
    pub time: Option<String>,

    /// Manual entry: weekday name or number 1-7.
    #[arg(short = 'd', long)]
    pub day: Option<String>,

    /// Exact start time ("HH:MM") for exact-start activity families.
    #[arg(long = "start-time")]
    pub start_time: Option<String>,

    /// Override settings.day_offset from config.toml.
    #[arg(long = "day-offset", value_name = "DAYS", allow_hyphen_values = true)]
    pub day_offset: Option<i64>,

    /// Explicit config.toml path (defaults to the config directory).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Convert parsed flags into a pipeline run configuration.
    ///
    /// The manual name/time/day entry must be given all together or not at
    /// all, and at least one activity source has to resolve.
    pub fn to_run_config(&self, password: String) -> Result<RunConfig, String> {
        let manual = match (&self.name, &self.time, &self.day) {
            (Some(name), Some(time), Some(day)) => Some(ManualActivity {
                name: name.clone(),
                time: time.clone(),
                day: day.clone(),
                start_time: self.start_time.clone(),
            }),
            (None, None, None) => None,
            _ => {
                return Err(
                    "To run manually you must at least specify: name, time and day".to_string(),
                );
            }
        };

        if manual.is_none() && self.activities.is_none() {
            return Err(
                "Provide --activities, or a manual --name/--time/--day entry.".to_string(),
            );
        }

        Ok(RunConfig {
            username: self.username.clone(),
            password,
            activities_file: self.activities.clone(),
            manual,
            dry_run: self.test,
            day_offset: self.day_offset,
            config_path: self.config.clone(),
        })
    }
}
