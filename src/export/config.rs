//! Export configuration

use super::format::ExportFormat;

/// Prefix shared by every export file name
pub const EXPORT_FILE_PREFIX: &str = "music_play_counts";

/// Configuration for the export process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Document format to produce
    pub format: ExportFormat,

    /// File name prefix; the timestamp is appended to it
    pub file_prefix: String,
}

impl ExportConfig {
    /// Create a new export configuration
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            file_prefix: EXPORT_FILE_PREFIX.to_string(),
        }
    }

    /// Set the export format
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the file name prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Suggested file name (without extension) for an export made at `timestamp`
    ///
    /// Uniqueness of the timestamp is up to the caller.
    pub fn suggested_name(&self, timestamp: i64) -> String {
        format!("{}_{}", self.file_prefix, timestamp)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self::new(ExportFormat::default())
    }
}
