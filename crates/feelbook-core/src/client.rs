use std::collections::HashMap;

use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::activity::RemoteActivity;
use crate::booking::BookingPayload;
use crate::config::Urls;
use crate::error::BookingError;

const USER_AGENT: &str = "feelbook/0.1";

/// Authenticated session against the remote booking service.
///
/// One cookie-jar client per run: opened before the catalog fetch, held
/// through every booking submission, dropped at process exit.
pub struct FeelgoodClient {
    http: Client,
    urls: Urls,
    headers: HashMap<String, String>,
}

impl FeelgoodClient {
    pub fn new(urls: Urls, headers: HashMap<String, String>) -> Result<Self, BookingError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .build()?;
        Ok(Self {
            http,
            urls,
            headers,
        })
    }

    fn apply_headers(&self, mut builder: RequestBuilder) -> RequestBuilder {
        for (name, value) in &self.headers {
            builder = builder.header(name, value);
        }
        builder
    }

    /// Authenticate the session; the server answers with session cookies that
    /// the jar carries into every later call.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), BookingError> {
        let payload = LoginPayload {
            user: UserCredentials { email, password },
        };
        let response = self
            .http
            .post(&self.urls.base_url)
            .json(&payload)
            .send()
            .await?;
        debug!(status = %response.status(), "Login response");
        Ok(())
    }

    /// Fetch the activity catalog for one date at one facility.
    pub async fn fetch_catalog(
        &self,
        date: NaiveDate,
        facility: &str,
    ) -> Result<Vec<RemoteActivity>, BookingError> {
        let date = date.to_string();
        let params = [
            ("from", date.as_str()),
            ("to", date.as_str()),
            ("today", "0"),
            ("mine", "0"),
            ("only_try_it", "0"),
            ("facility", facility),
        ];
        let builder = self.http.get(self.urls.list_url()).query(&params);
        let response = self.apply_headers(builder).send().await?;
        let catalog: CatalogResponse = response.json().await?;
        Ok(catalog
            .activities
            .into_iter()
            .map(|entry| RemoteActivity {
                type_name: entry.activity_type.name,
                id: entry.activity.id,
                start: entry.activity.start,
            })
            .collect())
    }

    /// POST one booking and hand back status plus raw JSON body for
    /// classification. Single attempt, no retry.
    pub async fn book(
        &self,
        url: &str,
        payload: &BookingPayload,
    ) -> Result<(u16, Value), BookingError> {
        let builder = self
            .http
            .post(url)
            .query(&[("force", "1")])
            .json(payload);
        let response = self.apply_headers(builder).send().await?;
        let status = response.status().as_u16();
        let body: Value = response.json().await?;
        debug!(status, body = %body, "Booking response");
        Ok((status, body))
    }
}

#[derive(Serialize)]
struct LoginPayload<'a> {
    #[serde(rename = "User")]
    user: UserCredentials<'a>,
}

#[derive(Serialize)]
struct UserCredentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct CatalogResponse {
    activities: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
struct CatalogEntry {
    #[serde(rename = "ActivityType")]
    activity_type: ActivityTypeInfo,
    #[serde(rename = "Activity")]
    activity: ActivityInfo,
}

#[derive(Deserialize)]
struct ActivityTypeInfo {
    name: String,
}

#[derive(Deserialize)]
struct ActivityInfo {
    id: String,
    start: String,
}
