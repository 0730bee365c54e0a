// src/client.rs
//! HTTP client for the XIVAPI search endpoint

use crate::error::FetchError;
use anyhow::{Context, Result};
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

/// One search response: the `Results` array plus the pagination marker used
/// to flag truncated result sets.
#[derive(Debug, Clone)]
pub struct SearchResults {
    pub results: Vec<Value>,
    pub next_page: Option<u64>,
}

/// Seam over "execute one search request" so tests can swap in an in-memory
/// source instead of the network.
#[allow(async_fn_in_trait)]
pub trait SearchSource {
    async fn search(&self, url: &Url) -> Result<SearchResults, FetchError>;
}

pub struct XivApiClient {
    client: reqwest::Client,
}

impl XivApiClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}

impl SearchSource for XivApiClient {
    async fn search(&self, url: &Url) -> Result<SearchResults, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                source: e,
            })?;

        let response = response
            .error_for_status()
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                source: e,
            })?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| FetchError::MalformedResponse {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        parse_search_body(url, body)
    }
}

/// Extract the `Results` array and the `Pagination.PageNext` marker.
pub(crate) fn parse_search_body(url: &Url, body: Value) -> Result<SearchResults, FetchError> {
    let results = body
        .get("Results")
        .ok_or_else(|| FetchError::MalformedResponse {
            url: url.to_string(),
            reason: "missing Results field".to_string(),
        })?;

    let results = results
        .as_array()
        .ok_or_else(|| FetchError::MalformedResponse {
            url: url.to_string(),
            reason: "Results is not an array".to_string(),
        })?
        .clone();

    let next_page = body.pointer("/Pagination/PageNext").and_then(Value::as_u64);

    Ok(SearchResults { results, next_page })
}
