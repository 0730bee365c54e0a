// src/fs_ops.rs
//! File system helpers for the output directory

use crate::error::FetchError;
use std::path::Path;
use tokio::fs;
use tracing::info;

pub async fn ensure_dir_exists(path: &Path) -> Result<(), FetchError> {
    if !path.exists() {
        fs::create_dir_all(path).await.map_err(|e| FetchError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        info!("Created directory: {}", path.display());
    }
    Ok(())
}

pub async fn write_file(path: &Path, content: &str) -> Result<(), FetchError> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent).await?;
    }

    fs::write(path, content).await.map_err(|e| FetchError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!("Written file: {}", path.display());
    Ok(())
}
