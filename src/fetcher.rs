// src/fetcher.rs
//! Sequential fetch-and-persist loop over the configured job list

use crate::client::SearchSource;
use crate::config::{JsonStyle, SeedConfig};
use crate::error::FetchError;
use crate::fs_ops;
use crate::query::SearchQuery;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use tracing::{info, warn};

pub struct Fetcher {
    config: SeedConfig,
}

impl Fetcher {
    pub fn new(config: SeedConfig) -> Self {
        Self { config }
    }

    /// Fetch every configured job in order. The first failure halts the run;
    /// with keep-going set, remaining jobs still run and the first failure is
    /// reported at the end.
    pub async fn run<S: SearchSource>(&self, source: &S) -> Result<(), FetchError> {
        let mut first_failure = None;

        for job in &self.config.jobs {
            match self.fetch_job(source, job).await {
                Ok(()) => {}
                Err(e) if self.config.keep_going => {
                    warn!("{}: {}", job, e);
                    if first_failure.is_none() {
                        first_failure = Some(e);
                    }
                }
                Err(e) => return Err(e),
            }
        }

        match first_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    async fn fetch_job<S: SearchSource>(&self, source: &S, job: &str) -> Result<(), FetchError> {
        let query = SearchQuery::for_job(job, &self.config.columns, &self.config.filters);
        let url = query.url(&self.config.search_url)?;

        info!("Requesting {}", url);
        let found = source.search(&url).await?;

        // XIVAPI paginates; we fetch one page and never follow. Flag it
        // rather than pretend the file is complete.
        if let Some(page) = found.next_page {
            warn!(
                "{}: result set truncated, more pages available (next page {})",
                job, page
            );
        }

        let path = self.config.output_path(job);
        let rendered =
            render_json(&found.results, self.config.json_style).map_err(|e| FetchError::Io {
                path: path.clone(),
                source: std::io::Error::other(e),
            })?;

        fs_ops::write_file(&path, &rendered).await
    }
}

/// Serialize the results array, 4-space indented or compact.
fn render_json(results: &[Value], style: JsonStyle) -> serde_json::Result<String> {
    match style {
        JsonStyle::Compact => serde_json::to_string(results),
        JsonStyle::Pretty => {
            let mut buf = Vec::new();
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut ser = Serializer::with_formatter(&mut buf, formatter);
            results.serialize(&mut ser)?;
            Ok(String::from_utf8(buf).expect("serializer emits UTF-8"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{parse_search_body, SearchResults};
    use reqwest::Url;
    use serde_json::json;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory stand-in for the HTTP layer: raw response bodies keyed by
    /// the job code found in the decoded `filters` parameter.
    struct MockSource {
        bodies: HashMap<String, Value>,
    }

    impl MockSource {
        fn new(bodies: &[(&str, Value)]) -> Self {
            Self {
                bodies: bodies
                    .iter()
                    .map(|(job, body)| (job.to_string(), body.clone()))
                    .collect(),
            }
        }
    }

    impl SearchSource for MockSource {
        async fn search(&self, url: &Url) -> Result<SearchResults, FetchError> {
            let job = job_of(url);
            let body = self.bodies.get(&job).cloned().unwrap_or_else(|| json!({}));
            parse_search_body(url, body)
        }
    }

    fn job_of(url: &Url) -> String {
        let filters = url
            .query_pairs()
            .find(|(k, _)| k == "filters")
            .map(|(_, v)| v.into_owned())
            .unwrap_or_default();

        filters
            .split(',')
            .find_map(|clause| {
                clause
                    .strip_prefix("ClassJobCategory.")
                    .and_then(|rest| rest.strip_suffix("=1"))
            })
            .unwrap_or_default()
            .to_string()
    }

    fn temp_out(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("xivseed-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn config(name: &str, jobs: &[&str]) -> SeedConfig {
        SeedConfig::default()
            .with_jobs(jobs.iter().map(|s| s.to_string()).collect())
            .with_out_dir(temp_out(name))
    }

    fn good_body() -> Value {
        json!({
            "Pagination": { "Page": 1, "PageNext": null },
            "Results": [{ "ID": 1, "Name": "Fast Blade" }],
        })
    }

    #[tokio::test]
    async fn test_writes_results_for_each_job() {
        let config = config("writes", &["PLD"]);
        let out = config.output_path("PLD");
        let source = MockSource::new(&[("PLD", good_body())]);

        Fetcher::new(config).run(&source).await.unwrap();

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(written, json!([{ "ID": 1, "Name": "Fast Blade" }]));
        assert!(out.ends_with("pld.json"));
    }

    #[tokio::test]
    async fn test_missing_results_halts_without_writing() {
        let config = config("malformed", &["PLD"]);
        let out = config.output_path("PLD");
        let source = MockSource::new(&[("PLD", json!({ "Pagination": {} }))]);

        let err = Fetcher::new(config).run(&source).await.unwrap_err();

        assert!(matches!(err, FetchError::MalformedResponse { .. }));
        assert!(!out.exists());
    }

    #[tokio::test]
    async fn test_first_failure_aborts_remaining_jobs() {
        let config = config("abort", &["PLD", "DRG"]);
        let pld = config.output_path("PLD");
        let drg = config.output_path("DRG");
        let source = MockSource::new(&[("DRG", good_body())]);

        let err = Fetcher::new(config).run(&source).await.unwrap_err();

        assert!(matches!(err, FetchError::MalformedResponse { .. }));
        assert!(!pld.exists());
        assert!(!drg.exists());
    }

    #[tokio::test]
    async fn test_keep_going_writes_remaining_jobs() {
        let config = config("keepgoing", &["PLD", "DRG"]).with_keep_going(true);
        let pld = config.output_path("PLD");
        let drg = config.output_path("DRG");
        let source = MockSource::new(&[("DRG", good_body())]);

        let err = Fetcher::new(config).run(&source).await.unwrap_err();

        assert!(matches!(err, FetchError::MalformedResponse { .. }));
        assert!(!pld.exists());

        let written: Value =
            serde_json::from_str(&std::fs::read_to_string(&drg).unwrap()).unwrap();
        assert_eq!(written, json!([{ "ID": 1, "Name": "Fast Blade" }]));
    }

    #[tokio::test]
    async fn test_reruns_are_byte_identical() {
        let config = config("idempotent", &["PLD"]);
        let out = config.output_path("PLD");
        let source = MockSource::new(&[("PLD", good_body())]);
        let fetcher = Fetcher::new(config);

        fetcher.run(&source).await.unwrap();
        let first = std::fs::read(&out).unwrap();
        fetcher.run(&source).await.unwrap();
        let second = std::fs::read(&out).unwrap();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_compact_style_and_preserved_case() {
        let config = config("compact", &["PLD"])
            .with_json_style(JsonStyle::Compact)
            .with_file_name_case(crate::config::FileNameCase::Preserve);
        let out = config.output_path("PLD");
        let source = MockSource::new(&[("PLD", good_body())]);

        Fetcher::new(config).run(&source).await.unwrap();

        assert!(out.ends_with("PLD.json"));
        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(content, r#"[{"ID":1,"Name":"Fast Blade"}]"#);
    }

    #[test]
    fn test_pretty_rendering_uses_four_space_indent() {
        let rendered = render_json(&[json!({ "ID": 1 })], JsonStyle::Pretty).unwrap();
        assert_eq!(rendered, "[\n    {\n        \"ID\": 1\n    }\n]");
    }
}
