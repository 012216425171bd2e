// src/services/wayback.rs

//! Wayback Machine endpoint access.
//!
//! A search issues two GETs at once, one to the availability API and one to
//! the CDX search API, and succeeds only if both bodies parse as JSON.

use async_trait::async_trait;
use futures::future;
use reqwest::Client;
use serde_json::Value;

use crate::error::Result;
use crate::models::{EndpointConfig, HttpConfig, ResultRecord, YearField, YearRange};
use crate::utils::http::create_async_client;

/// The pair of request URLs for one search.
///
/// The search term and both years are interpolated as-is. Nothing is
/// percent-encoded here, so a term containing `&` or `#` changes the shape of
/// the query the archive sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub availability_url: String,
    pub cdx_url: String,
}

impl SearchRequest {
    pub fn new(endpoints: &EndpointConfig, term: &str, range: &YearRange) -> Self {
        let start = range.value(YearField::Start);
        let end = range.value(YearField::End);

        Self {
            availability_url: format!(
                "{}?url={}&timestamp={}&end_timestamp={}",
                endpoints.availability_url, term, start, end
            ),
            cdx_url: format!(
                "{}?url={}&from={}&to={}&output=json",
                endpoints.cdx_url, term, start, end
            ),
        }
    }
}

/// Parsed bodies of a completed search, in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub availability: Value,
    pub cdx: Value,
}

impl SearchOutcome {
    /// Availability body first, CDX body second.
    pub fn into_records(self) -> Vec<ResultRecord> {
        [self.availability, self.cdx]
            .into_iter()
            .map(ResultRecord::from)
            .collect()
    }
}

/// Source of JSON documents for a URL.
#[async_trait]
pub trait ArchiveClient: Send + Sync {
    /// GET `url` and parse the body as JSON.
    async fn fetch_json(&self, url: &str) -> Result<Value>;
}

/// `ArchiveClient` backed by reqwest.
///
/// The status code is not inspected: an error page fails only because its
/// body is not JSON.
#[derive(Debug, Clone)]
pub struct HttpArchiveClient {
    client: Client,
}

impl HttpArchiveClient {
    /// Create a client from HTTP settings.
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self::with_client(create_async_client(config)?))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ArchiveClient for HttpArchiveClient {
    async fn fetch_json(&self, url: &str) -> Result<Value> {
        log::debug!("GET {}", url);
        let body = self.client.get(url).send().await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Fetch both endpoints of `request` concurrently.
///
/// Both requests are always issued and both settle before this returns. If
/// either failed the whole search fails, with the availability error taking
/// precedence when both did.
pub async fn fetch_snapshots<C>(client: &C, request: &SearchRequest) -> Result<SearchOutcome>
where
    C: ArchiveClient + ?Sized,
{
    let (availability, cdx) = future::join(
        client.fetch_json(&request.availability_url),
        client.fetch_json(&request.cdx_url),
    )
    .await;

    Ok(SearchOutcome {
        availability: availability?,
        cdx: cdx?,
    })
}
