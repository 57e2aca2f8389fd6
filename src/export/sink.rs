//! Export destinations

use super::config::EXPORT_FILE_PREFIX;
use crate::error::SinkError;
use chrono::{DateTime, TimeDelta, Utc};
use std::fs;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Where serialized exports go
///
/// A sink persists the document and hands it to whatever share mechanism it
/// fronts. It returns the location of the persisted document.
pub trait ExportSink: Send + Sync {
    fn persist_and_offer(
        &self,
        text: &str,
        suggested_name: &str,
        file_extension: &str,
    ) -> Result<PathBuf, SinkError>;
}

/// Writes exports into a directory on disk
pub struct FileSink {
    /// Directory receiving export files
    dir: PathBuf,
}

impl FileSink {
    /// Create a sink writing into `dir`
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Full path of the export file for a name and extension
    pub fn export_path(&self, name: &str, extension: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, extension))
    }

    fn ensure_dir(&self) -> Result<(), SinkError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            SinkError::StorageUnavailable(format!("{}: {}", self.dir.display(), e))
        })?;

        if !self.dir.is_dir() {
            return Err(SinkError::StorageUnavailable(format!(
                "{} is not a directory",
                self.dir.display()
            )));
        }
        Ok(())
    }

    /// Delete exports older than `keep_days`
    ///
    /// Only files named like an export are considered. Errors are logged and
    /// skipped. Returns the number of files removed.
    pub fn cleanup_old_exports(&self, keep_days: u32) -> usize {
        if !self.dir.is_dir() {
            return 0;
        }

        let cutoff = match TimeDelta::try_days(i64::from(keep_days))
            .and_then(|age| Utc::now().checked_sub_signed(age))
        {
            Some(cutoff) => cutoff,
            None => {
                log::debug!("Retention of {} days reaches past any date, keeping all", keep_days);
                return 0;
            }
        };
        let mut removed = 0;

        for entry in WalkDir::new(&self.dir).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Error scanning export directory: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file()
                || !entry.file_name().to_string_lossy().starts_with(EXPORT_FILE_PREFIX)
            {
                continue;
            }

            let modified = match entry.metadata().ok().and_then(|m| m.modified().ok()) {
                Some(time) => DateTime::<Utc>::from(time),
                None => continue,
            };

            if modified < cutoff {
                match fs::remove_file(entry.path()) {
                    Ok(()) => {
                        log::info!("Removed old export file: {:?}", entry.file_name());
                        removed += 1;
                    }
                    Err(e) => log::warn!("Failed to remove {:?}: {}", entry.path(), e),
                }
            }
        }

        removed
    }
}

impl ExportSink for FileSink {
    fn persist_and_offer(
        &self,
        text: &str,
        suggested_name: &str,
        file_extension: &str,
    ) -> Result<PathBuf, SinkError> {
        self.ensure_dir()?;

        let path = self.export_path(suggested_name, file_extension);
        let tmp_path = self
            .dir
            .join(format!(".{}.{}.tmp", suggested_name, file_extension));

        // Write next to the target and rename, so a reader never sees a partial file
        fs::write(&tmp_path, text.as_bytes())
            .map_err(|e| SinkError::WriteFailed(format!("{}: {}", tmp_path.display(), e)))?;

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(SinkError::WriteFailed(format!("{}: {}", path.display(), e)));
        }

        if !path.is_file() {
            return Err(SinkError::WriteFailed(format!(
                "{} missing after write",
                path.display()
            )));
        }

        log::info!("Export written to: {:?}", path);
        Ok(path)
    }
}
