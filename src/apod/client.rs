use chrono::NaiveDate;
use gloo_net::http::Request;
use serde::Deserialize;
use tracing::{debug, error};

use super::dates::format_iso;
use super::types::ApodPayload;
use crate::config::ApodConfig;
use crate::error::ApodError;

impl From<gloo_net::Error> for ApodError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApodError::Decode(e.to_string()),
            other => ApodError::Network(other.to_string()),
        }
    }
}

/// The two error bodies api.nasa.gov sends back.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Gateway { error: GatewayError },
    Service { msg: String },
}

#[derive(Deserialize)]
struct GatewayError {
    message: String,
}

/// Best human-readable message for a failed response.
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody::Gateway { error }) => error.message,
        Ok(ErrorBody::Service { msg }) => msg,
        Err(_) if !body.trim().is_empty() && body.len() <= 200 => body.trim().to_string(),
        Err(_) => format!("HTTP {}", status),
    }
}

/// First entry of a single-day response, or `Empty` when there is none.
pub fn first_entry(
    mut entries: Vec<ApodPayload>,
    date: NaiveDate,
) -> Result<ApodPayload, ApodError> {
    if entries.is_empty() {
        return Err(ApodError::Empty(format_iso(date)));
    }
    Ok(entries.swap_remove(0))
}

/// Fetch the APOD entry published on `date`.
pub async fn fetch_entry(config: &ApodConfig, date: NaiveDate) -> Result<ApodPayload, ApodError> {
    let url = config.request_url(date);
    debug!("Requesting APOD for {}", format_iso(date));

    let response = Request::get(&url).send().await?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = error_message(status, &body);
        error!("APOD request for {} failed ({}): {}", format_iso(date), status, message);
        return Err(ApodError::Status { status, message });
    }

    let entries: Vec<ApodPayload> = response
        .json()
        .await
        .map_err(|e| ApodError::Decode(e.to_string()))?;

    first_entry(entries, date)
}
