//! Output directory preparation

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// What [`prepare_output_dir`] had to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClearOutcome {
    /// The directory did not exist and was created
    Created,
    /// The directory existed and had no entries
    AlreadyEmpty,
    /// The directory existed; this many files were deleted from it
    Cleared {
        /// Number of files removed
        removed: usize,
    },
}

/// Make `dir` an empty-of-files directory, creating it if needed
///
/// Only regular files directly inside `dir` are deleted. Subdirectories and
/// their contents are left alone.
pub fn prepare_output_dir(dir: &Path) -> Result<ClearOutcome> {
    if !dir.exists() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
        info!("Output directory '{}' created.", dir.display());
        return Ok(ClearOutcome::Created);
    }

    if !dir.is_dir() {
        return Err(Error::output(format!(
            "Output path {} exists and is not a directory",
            dir.display()
        )));
    }

    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read output directory {}", dir.display()))?
        .collect::<std::io::Result<Vec<_>>>()
        .with_context(|| format!("Failed to read output directory {}", dir.display()))?;

    if entries.is_empty() {
        info!("Output directory '{}' is empty.", dir.display());
        return Ok(ClearOutcome::AlreadyEmpty);
    }

    info!(
        "Output directory '{}' is not empty. Deleting files...",
        dir.display()
    );

    let mut removed = 0;
    for entry in entries {
        let path = entry.path();
        if path.is_file() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to delete {}", path.display()))?;
            removed += 1;
        }
    }

    info!("All files deleted from '{}'", dir.display());
    Ok(ClearOutcome::Cleared { removed })
}
