//! Civic-information API client.
//!
//! Wraps the upstream representatives endpoint and filters the response
//! down to the Texas Legislature: state lower (`sldl`) and upper (`sldu`)
//! chamber offices only.

pub mod handlers;

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{Chamber, Representative};

#[derive(Debug, Error)]
pub enum CivicError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Deserialize)]
struct RepresentativesResponse {
    #[serde(default)]
    offices: Vec<Office>,
    #[serde(default)]
    officials: Vec<Official>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Office {
    #[serde(default)]
    division_id: String,
    #[serde(default)]
    official_indices: Vec<usize>,
}

#[derive(Debug, Deserialize)]
struct Official {
    #[serde(default)]
    name: String,
    #[serde(default)]
    party: Option<String>,
    #[serde(default)]
    emails: Vec<String>,
    #[serde(default)]
    phones: Vec<String>,
}

#[derive(Clone)]
pub struct CivicClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl CivicClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, CivicError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(CivicClient {
            http,
            base_url,
            api_key,
        })
    }

    /// Looks up the Texas state legislators serving an address (zip code).
    pub async fn state_legislators(&self, zip: &str) -> Result<Vec<Representative>, CivicError> {
        let url = format!(
            "{}/representatives",
            self.base_url.trim_end_matches('/')
        );

        debug!("Civic lookup for {zip}");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("address", zip),
                ("levels", "administrativeArea1"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CivicError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: RepresentativesResponse = response
            .json()
            .await
            .map_err(|e| CivicError::InvalidResponse(e.to_string()))?;

        let mut legislators = Vec::new();
        for office in &body.offices {
            let Some((chamber, district)) = parse_texas_division(&office.division_id) else {
                continue;
            };
            for &index in &office.official_indices {
                let Some(official) = body.officials.get(index) else {
                    continue;
                };
                legislators.push(Representative {
                    name: official.name.clone(),
                    party: official.party.clone(),
                    district: Some(district.clone()),
                    email: official.emails.first().cloned(),
                    phone: official.phones.first().cloned(),
                    chamber: Some(chamber),
                });
            }
        }

        Ok(legislators)
    }
}

/// Parses an OCD division id into (chamber, district) when it names a
/// Texas state legislative district, e.g.
/// `ocd-division/country:us/state:tx/sldl:47` → (House, "47").
fn parse_texas_division(division_id: &str) -> Option<(Chamber, String)> {
    if !division_id.contains("state:tx") {
        return None;
    }

    let last = division_id.rsplit('/').next()?;
    let (kind, district) = last.split_once(':')?;
    if district.is_empty() {
        return None;
    }

    match kind {
        "sldl" => Some((Chamber::House, district.to_string())),
        "sldu" => Some((Chamber::Senate, district.to_string())),
        _ => None,
    }
}
