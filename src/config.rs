// src/config.rs
//! Seed run configuration - compiled-in defaults with optional TOML overlay

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const XIVAPI_SEARCH_URL: &str = "https://xivapi.com/search";
pub const DEFAULT_OUT_DIR: &str = "app/data";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// TODO: Add more jobs eventually
pub const DEFAULT_JOBS: &[&str] = &["PLD", "DRG", "GNB"];

// The comma inside the first clause is XIVAPI filter grammar, not a list
// separator. Keep it literal.
pub const BASE_FILTERS: &[&str] = &[
    "IsPvP=0,ActionCategory.ID>=2",
    "ActionCategory.ID<=4",
    "IsPlayerAction=1",
];

// NOTE: Description has conditionals for player levels, but omits some
// resource gain information. ActionCategoryTargetID: 3 = Weaponskill, 2 = Spell
pub const DEFAULT_COLUMNS: &[&str] = &[
    "ID",
    "Name",
    "Icon",
    "Description",
    "ActionComboTargetID",
    "PreservesCombo",
    "CastType",
    "Cast100ms",
    "Recast100ms",
    "ActionCategoryTargetID",
];

/// How output filenames derive from job codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileNameCase {
    Lower,
    Preserve,
}

/// Output JSON formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonStyle {
    Pretty,
    Compact,
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub jobs: Vec<String>,
    pub columns: Vec<String>,
    pub filters: Vec<String>,
    pub search_url: String,
    pub out_dir: PathBuf,
    pub file_name_case: FileNameCase,
    pub json_style: JsonStyle,
    pub timeout_secs: u64,
    pub keep_going: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            jobs: DEFAULT_JOBS.iter().map(|s| s.to_string()).collect(),
            columns: DEFAULT_COLUMNS.iter().map(|s| s.to_string()).collect(),
            filters: BASE_FILTERS.iter().map(|s| s.to_string()).collect(),
            search_url: XIVAPI_SEARCH_URL.to_string(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_name_case: FileNameCase::Lower,
            json_style: JsonStyle::Pretty,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            keep_going: false,
        }
    }
}

impl SeedConfig {
    pub fn with_jobs(mut self, jobs: Vec<String>) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_out_dir(mut self, dir: PathBuf) -> Self {
        self.out_dir = dir;
        self
    }

    pub fn with_file_name_case(mut self, case: FileNameCase) -> Self {
        self.file_name_case = case;
        self
    }

    pub fn with_json_style(mut self, style: JsonStyle) -> Self {
        self.json_style = style;
        self
    }

    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }

    /// Output file path for one job, honoring the casing convention.
    pub fn output_path(&self, job: &str) -> PathBuf {
        let name = match self.file_name_case {
            FileNameCase::Lower => job.to_lowercase(),
            FileNameCase::Preserve => job.to_string(),
        };
        self.out_dir.join(format!("{}.json", name))
    }

    /// Apply a TOML overlay on top of the current values.
    pub fn apply_overlay(&mut self, overlay: SeedOverlay) {
        if let Some(jobs) = overlay.jobs {
            self.jobs = jobs;
        }
        if let Some(columns) = overlay.columns {
            self.columns = columns;
        }
        if let Some(filters) = overlay.filters {
            self.filters = filters;
        }
        if let Some(url) = overlay.search_url {
            self.search_url = url;
        }
        if let Some(dir) = overlay.out_dir {
            self.out_dir = dir;
        }
        if let Some(lower) = overlay.lowercase_names {
            self.file_name_case = if lower {
                FileNameCase::Lower
            } else {
                FileNameCase::Preserve
            };
        }
        if let Some(pretty) = overlay.pretty {
            self.json_style = if pretty {
                JsonStyle::Pretty
            } else {
                JsonStyle::Compact
            };
        }
        if let Some(secs) = overlay.timeout_secs {
            self.timeout_secs = secs;
        }
        if let Some(keep_going) = overlay.keep_going {
            self.keep_going = keep_going;
        }
    }
}

/// Partial configuration loaded from a TOML file; absent keys keep defaults.
#[derive(Debug, Default, Deserialize)]
pub struct SeedOverlay {
    pub jobs: Option<Vec<String>>,
    pub columns: Option<Vec<String>>,
    pub filters: Option<Vec<String>>,
    pub search_url: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub lowercase_names: Option<bool>,
    pub pretty: Option<bool>,
    pub timeout_secs: Option<u64>,
    pub keep_going: Option<bool>,
}

impl SeedOverlay {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}
