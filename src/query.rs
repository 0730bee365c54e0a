// src/query.rs
//! Search query construction for the XIVAPI `/search` endpoint

use crate::error::FetchError;
use reqwest::Url;

/// Filter clause selecting actions flagged for one job.
pub fn class_job_category_filter(job: &str) -> String {
    format!("ClassJobCategory.{}=1", job)
}

/// One job's search parameters, built once and consumed once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub indexes: String,
    pub columns: String,
    pub filters: String,
}

impl SearchQuery {
    /// Base filters in order, then exactly one job-category clause.
    pub fn for_job(job: &str, columns: &[String], base_filters: &[String]) -> Self {
        let mut filters: Vec<String> = base_filters.to_vec();
        filters.push(class_job_category_filter(job));

        Self {
            indexes: "Action".to_string(),
            columns: columns.join(","),
            filters: filters.join(","),
        }
    }

    /// Ordered query parameters as sent on the wire.
    pub fn params(&self) -> [(&'static str, &str); 3] {
        [
            ("indexes", self.indexes.as_str()),
            ("columns", self.columns.as_str()),
            ("filters", self.filters.as_str()),
        ]
    }

    /// Full request URL with percent-encoded query string.
    pub fn url(&self, base: &str) -> Result<Url, FetchError> {
        Url::parse_with_params(base, self.params()).map_err(|e| FetchError::InvalidUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })
    }
}
