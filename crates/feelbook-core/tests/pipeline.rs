use std::io::Write;

use chrono::{Datelike, Duration, Local};
use tempfile::NamedTempFile;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use feelbook_core::day::weekday_name;
use feelbook_core::release::ReleaseTime;
use feelbook_core::runtime::{ManualActivity, RunConfig, run_with_clock};
use feelbook_core::{SystemClock, simple_epoch};

const LIST_PATH: &str = "/w_booking/activities/list";
const PARTICIPATE_PATH: &str = "/w_booking/activities/participate/cool_id";

/// A release instant at midnight is always in the past (or exactly now), so
/// tests never actually wait.
fn open_release_window() -> ReleaseTime {
    ReleaseTime {
        hour: 0,
        minute: 0,
        second: 0,
    }
}

fn write_config(server_uri: &str) -> NamedTempFile {
    let mut file = NamedTempFile::with_suffix(".toml").expect("tempfile");
    write!(
        file,
        r#"
[settings]
day_offset = 0
facility = "f1"

[urls]
base_url = "{server_uri}/"
list = "w_booking/activities/list"
participate = "w_booking/activities/participate/"

[headers]
Accept = "application/json"
"#
    )
    .expect("write config");
    file
}

fn todays_weekday() -> String {
    weekday_name(Local::now().date_naive().weekday().number_from_monday())
        .expect("valid weekday")
        .to_string()
}

fn manual_boka() -> ManualActivity {
    ManualActivity {
        name: "Boka".to_string(),
        time: "09:00".to_string(),
        day: todays_weekday(),
        start_time: Some("09:00".to_string()),
    }
}

fn run_config(config_file: &NamedTempFile, manual: ManualActivity, dry_run: bool) -> RunConfig {
    RunConfig {
        username: "user@example.se".to_string(),
        password: "secret".to_string(),
        activities_file: None,
        manual: Some(manual),
        dry_run,
        day_offset: None,
        config_path: Some(config_file.path().to_path_buf()),
    }
}

fn catalog_body(type_name: &str) -> serde_json::Value {
    let start = format!("{} 09:00:00", Local::now().date_naive());
    serde_json::json!({
        "activities": [{
            "ActivityType": { "name": type_name, "bookable_times": true },
            "Activity": { "id": "cool_id", "start": start }
        }]
    })
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn books_an_exact_start_activity_end_to_end() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .and(query_param("facility", "f1"))
        .and(query_param("today", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(catalog_body("Boka sporthallen 30min")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let expected_epoch = simple_epoch(Local::now().date_naive(), "09:00")
        .expect("epoch")
        .to_string();
    Mock::given(method("POST"))
        .and(path(PARTICIPATE_PATH))
        .and(query_param("force", "1"))
        .and(body_partial_json(serde_json::json!({
            "send_confirmation": 1,
            "ActivityBooking": {
                "participants": 1,
                "book_start": expected_epoch,
                "book_length": "30"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let config_file = write_config(&server.uri());
    run_with_clock(
        run_config(&config_file, manual_boka(), false),
        &SystemClock,
        open_release_window(),
    )
    .await
    .expect("pipeline completed");
}

#[tokio::test]
async fn dry_run_suppresses_booking_but_not_catalog_or_login() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(catalog_body("Boka sporthallen 30min")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(PARTICIPATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": "ok"})))
        .expect(0)
        .mount(&server)
        .await;

    let config_file = write_config(&server.uri());
    run_with_clock(
        run_config(&config_file, manual_boka(), true),
        &SystemClock,
        open_release_window(),
    )
    .await
    .expect("dry run completed");
}

#[tokio::test]
async fn halts_before_any_network_call_when_no_day_matches() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let tomorrow = Local::now().date_naive() + Duration::days(1);
    let manual = ManualActivity {
        name: "Boka".to_string(),
        time: "09:00".to_string(),
        day: weekday_name(tomorrow.weekday().number_from_monday())
            .expect("valid weekday")
            .to_string(),
        start_time: None,
    };

    let config_file = write_config(&server.uri());
    run_with_clock(
        run_config(&config_file, manual, false),
        &SystemClock,
        open_release_window(),
    )
    .await
    .expect("clean no-op run");
}

#[tokio::test]
async fn no_catalog_match_ends_the_run_without_booking() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_body("Spinning 45min")))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(PARTICIPATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": "ok"})))
        .expect(0)
        .mount(&server)
        .await;

    let config_file = write_config(&server.uri());
    run_with_clock(
        run_config(&config_file, manual_boka(), false),
        &SystemClock,
        open_release_window(),
    )
    .await
    .expect("clean run with no matches");
}

#[tokio::test]
async fn malformed_start_time_skips_that_booking_only() {
    let server = MockServer::start().await;
    mount_login(&server).await;

    Mock::given(method("GET"))
        .and(path(LIST_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(catalog_body("Boka sporthallen 30min")),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(PARTICIPATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"result": "ok"})))
        .expect(0)
        .mount(&server)
        .await;

    let mut manual = manual_boka();
    manual.start_time = Some("nine-thirty".to_string());

    let config_file = write_config(&server.uri());
    run_with_clock(
        run_config(&config_file, manual, false),
        &SystemClock,
        open_release_window(),
    )
    .await
    .expect("run continues past the unusable entry");
}
