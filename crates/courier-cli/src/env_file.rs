//! `.env` loading

use anyhow::Context;
use std::path::{Path, PathBuf};

/// Load variables from `path`, or from `./.env` when no path is given.
///
/// Variables already set in the process win. A missing default `.env` is
/// fine; a missing explicit file is an error.
pub fn load(path: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    match path {
        Some(path) => {
            dotenv::from_path(path)
                .with_context(|| format!("Failed to load env file {}", path.display()))?;
            Ok(Some(path.to_path_buf()))
        }
        None => Ok(dotenv::dotenv().ok()),
    }
}
