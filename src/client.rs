//! HTTP access to the video game stats API.
//!
//! [`StatsApi`] is the seam the widget depends on; [`HttpStatsApi`] is the
//! production implementation backed by a blocking `reqwest` client. Each call
//! issues exactly one GET request and never retries.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config;
use crate::error::{Result, StatsError};
use crate::models::{GameRecord, StatsSummary};
use crate::query::StatsQuery;

/// Source of aggregate game statistics.
pub trait StatsApi {
    /// Fetch pre-aggregated counts from the summary endpoint.
    fn summary(&self, query: &StatsQuery) -> Result<StatsSummary>;

    /// Fetch raw records from the listing endpoint.
    fn games(&self, query: &StatsQuery) -> Result<Vec<GameRecord>>;
}

// ---------------------------------------------------------------------------
// HttpStatsApi
// ---------------------------------------------------------------------------

pub struct HttpStatsApi {
    base_url: String,
    client: Client,
}

impl HttpStatsApi {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// With `timeout` set to `None` a request waits for the server
    /// indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        reqwest::Url::parse(base_url).map_err(|e| {
            StatsError::InvalidArgument(format!("invalid base URL '{}': {}", base_url, e))
        })?;
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str, query: &StatsQuery) -> Result<T> {
        let url = config::endpoint_url(&self.base_url, path);
        let pairs = query.pairs();
        debug!(%url, ?pairs, "requesting {}", what);

        let resp = self.client.get(&url).query(&pairs).send()?;
        let status = resp.status();
        if status != StatusCode::OK {
            return Err(StatsError::Request {
                endpoint: what.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl StatsApi for HttpStatsApi {
    fn summary(&self, query: &StatsQuery) -> Result<StatsSummary> {
        self.get_json(config::SUMMARY_PATH, "video games summary", query)
    }

    fn games(&self, query: &StatsQuery) -> Result<Vec<GameRecord>> {
        self.get_json(config::GAMES_PATH, "video games", query)
    }
}

impl<A: StatsApi + ?Sized> StatsApi for &A {
    fn summary(&self, query: &StatsQuery) -> Result<StatsSummary> {
        (**self).summary(query)
    }

    fn games(&self, query: &StatsQuery) -> Result<Vec<GameRecord>> {
        (**self).games(query)
    }
}

impl<A: StatsApi + ?Sized> StatsApi for Box<A> {
    fn summary(&self, query: &StatsQuery) -> Result<StatsSummary> {
        (**self).summary(query)
    }

    fn games(&self, query: &StatsQuery) -> Result<Vec<GameRecord>> {
        (**self).games(query)
    }
}
