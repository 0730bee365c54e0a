//! Seeds per-job action data files from the XIVAPI search endpoint.
//!
//! For each configured job code, one search request is built, issued, and its
//! `Results` array written to `<out-dir>/<job>.json`. Strictly sequential,
//! abort on first failure unless keep-going mode is set.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod fs_ops;
pub mod query;

pub use client::{SearchResults, SearchSource, XivApiClient};
pub use config::{FileNameCase, JsonStyle, SeedConfig, SeedOverlay};
pub use error::FetchError;
pub use fetcher::Fetcher;
pub use query::SearchQuery;
