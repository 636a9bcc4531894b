//! PDF file writer

use super::naming::pdf_file_name;
use crate::error::{Result, ResultExt};
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes exported PDFs into one directory
#[derive(Debug, Clone)]
pub struct PdfWriter {
    dir: PathBuf,
}

impl PdfWriter {
    /// Create a writer for `dir` (the directory must already exist)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Target directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `bytes` for a page titled `title`, stamped with the local time
    pub fn write(&self, title: &str, bytes: &[u8]) -> Result<PathBuf> {
        self.write_at(title, bytes, Local::now().naive_local())
    }

    /// Write `bytes` for a page titled `title`, stamped with `at`
    ///
    /// An existing file with the same name is overwritten.
    pub fn write_at(&self, title: &str, bytes: &[u8], at: NaiveDateTime) -> Result<PathBuf> {
        let path = self.dir.join(pdf_file_name(title, at));
        fs::write(&path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }
}
