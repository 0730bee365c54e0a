// src/cli.rs
use crate::config::{FileNameCase, JsonStyle, SeedConfig, SeedOverlay};
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xivseed")]
#[command(about = "Seed per-job action data from the XIVAPI search endpoint")]
pub struct Cli {
    /// TOML file overriding the built-in seed configuration
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the per-job JSON files are written to
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Job codes to fetch, e.g. PLD DRG GNB
    #[arg(long, num_args = 1..)]
    pub jobs: Option<Vec<String>>,

    /// Keep the job list's casing for output filenames instead of lowercasing
    #[arg(long)]
    pub preserve_case: bool,

    /// Emit compact JSON instead of 4-space-indented
    #[arg(long)]
    pub compact: bool,

    /// Continue with the remaining jobs after a failed one
    #[arg(long)]
    pub keep_going: bool,

    /// HTTP timeout per request in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

impl Cli {
    /// Resolve defaults, then the TOML overlay, then flags, in that order.
    pub fn into_config(self) -> Result<SeedConfig> {
        let mut config = SeedConfig::default();

        if let Some(path) = &self.config {
            config.apply_overlay(SeedOverlay::load(path)?);
        }

        if let Some(jobs) = self.jobs {
            config.jobs = jobs;
        }
        if let Some(dir) = self.out_dir {
            config.out_dir = dir;
        }
        if self.preserve_case {
            config.file_name_case = FileNameCase::Preserve;
        }
        if self.compact {
            config.json_style = JsonStyle::Compact;
        }
        if self.keep_going {
            config.keep_going = true;
        }
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }

        Ok(config)
    }
}
