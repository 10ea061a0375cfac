// client.rs
use crate::domain::{Listing, Location};
use crate::source::SourceError;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("automation_site/", env!("CARGO_PKG_VERSION"));

/// Blocking client for the upstream data API.
///
/// Each call returns a complete snapshot; the API has no pagination.
pub struct DataApiClient {
    client: Client,
    base_url: Url,
}

impl DataApiClient {
    pub fn new(base_url: &str) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn fetch_listings(&self) -> Result<Vec<Listing>, SourceError> {
        self.get_json("listings")
    }

    pub fn fetch_locations(&self) -> Result<Vec<Location>, SourceError> {
        self.get_json("locations")
    }

    fn get_json<T: DeserializeOwned>(&self, resource: &str) -> Result<T, SourceError> {
        let url = self
            .base_url
            .join(resource)
            .map_err(|e| SourceError::InvalidUrl(e.to_string()))?;

        tracing::debug!(%url, "fetching from data API");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = resp
            .text()
            .map_err(|e| SourceError::Network(e.to_string()))?;

        parse_collection(&body)
    }
}

/// Normalise the base so `join` appends instead of replacing the last segment.
fn parse_base_url(base_url: &str) -> Result<Url, SourceError> {
    let trimmed = base_url.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash)
        .map_err(|e| SourceError::InvalidUrl(format!("{trimmed}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SourceError::InvalidUrl(format!("unsupported scheme {other}"))),
    }
}

pub(crate) fn parse_collection<T: DeserializeOwned>(body: &str) -> Result<T, SourceError> {
    serde_json::from_str(body).map_err(|e| SourceError::JsonParse(e.to_string()))
}
