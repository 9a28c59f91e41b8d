//! # SRD HTTP Client
//!
//! Fetch-and-decode wrapper around the 5e SRD REST API for use by the MCP
//! server. Every call is a single GET; the body is decoded into the caller's
//! type.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use srd_core::Category;
use srd_core::models::ListResponse;
use srd_core::to_index;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Errors from the HTTP client layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured base URL cannot carry path segments.
    #[error("Invalid API URL '{0}'")]
    InvalidUrl(String),

    /// A path segment that URL normalization would drop or collapse
    /// (empty, `.` or `..`). Rejected before any request is sent.
    #[error("Invalid path segment '{0}'")]
    InvalidSegment(String),

    /// Cannot reach the upstream API, or the connection broke mid-response.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with anything other than 200.
    #[error("API request failed with status {0}")]
    Status(u16),

    /// The body is not the JSON shape the caller asked for.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// HTTP client bound to one upstream API root.
#[derive(Debug, Clone)]
pub struct SrdClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SrdClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base_url =
            Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base_url })
    }

    /// Build `{base}/{segments...}?{query}`. Each segment is percent-encoded
    /// on its own, so an index containing `/` stays one segment.
    fn endpoint(&self, segments: &[&str], query: &str) -> Result<Url, ClientError> {
        if let Some(bad) = segments
            .iter()
            .find(|segment| matches!(**segment, "" | "." | ".."))
        {
            return Err(ClientError::InvalidSegment((*bad).to_string()));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.set_query(Some(query));
        }
        Ok(url)
    }

    /// Send a GET and decode a 200 body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        tracing::debug!(%url, "GET");

        let resp = self.http.get(url.clone()).send().await.map_err(|e| {
            tracing::error!(%url, error = %e, "Upstream request failed");
            ClientError::Request(e)
        })?;

        let status = resp.status();
        if status != StatusCode::OK {
            tracing::error!(%url, status = status.as_u16(), "Upstream returned an error status");
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(%url, error = %e, "Upstream body did not decode");
            ClientError::Decode(e)
        })
    }

    /// GET the API root: category path → list URL.
    pub async fn root(&self) -> Result<BTreeMap<String, String>, ClientError> {
        self.get(&[], "").await
    }

    /// GET `/{category}` with an optional query string.
    pub async fn list<T: DeserializeOwned>(
        &self,
        category: Category,
        query: &str,
    ) -> Result<ListResponse<T>, ClientError> {
        self.get(&[category.path()], query).await
    }

    /// GET `/{category}/{index}`.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        category: Category,
        index: &str,
    ) -> Result<T, ClientError> {
        self.get(&[category.path(), index], "").await
    }

    /// Like [`fetch`](Self::fetch), after turning a display name into an index.
    pub async fn fetch_by_name<T: DeserializeOwned>(
        &self,
        category: Category,
        name: &str,
    ) -> Result<T, ClientError> {
        self.fetch(category, &to_index(name)).await
    }

    /// GET an arbitrary path below the API root.
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &str,
    ) -> Result<T, ClientError> {
        let url = self.endpoint(segments, query)?;
        self.get_json(url).await
    }
}
