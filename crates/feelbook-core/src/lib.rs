//! Core library crate for the feelbook booking pipeline.

pub mod activity;
pub mod booking;
pub mod client;
pub mod config;
pub mod date;
pub mod day;
pub mod error;
pub mod logging;
pub mod matcher;
pub mod outcome;
pub mod release;
pub mod runtime;

pub use activity::{BookableActivity, DEFAULT_START_TIME, DesiredActivity, RemoteActivity};
pub use booking::{BookingPayload, build_payload, simple_epoch, submit_all};
pub use client::FeelgoodClient;
pub use config::{
    ActivitySchedule, FileConfig, Settings, Urls, config_directory, config_path, load_activities,
    load_config,
};
pub use error::BookingError;
pub use logging::{LoggingDestination, LoggingError, init_logging};
pub use matcher::{cross_reference, filter_by_weekday};
pub use outcome::{Outcome, classify, log_outcome};
pub use release::{Clock, ReleaseTime, SystemClock, wait_until};
pub use runtime::{ManualActivity, RunConfig, run, run_with_clock};
