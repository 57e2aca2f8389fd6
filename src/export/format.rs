//! Supported export formats

use crate::error::SerializationError;
use crate::model::LibrarySnapshot;
use std::fmt;
use std::str::FromStr;

/// Output document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Pretty-printed JSON array
    #[default]
    Json,

    /// Comma-separated values with a header line
    Csv,
}

impl ExportFormat {
    /// File extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    /// MIME type handed to share targets
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }

    /// Encode a snapshot in this format
    pub fn serialize(&self, snapshot: &LibrarySnapshot) -> Result<String, SerializationError> {
        match self {
            ExportFormat::Json => super::json::to_json(snapshot),
            ExportFormat::Csv => super::csv::to_csv(snapshot),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(format!("unknown export format '{}' (expected json or csv)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("json".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(" CSV ".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_extension_matches_display() {
        for format in [ExportFormat::Json, ExportFormat::Csv] {
            assert_eq!(format.to_string(), format.extension());
            assert_eq!(format.to_string().parse::<ExportFormat>().unwrap(), format);
        }
    }
}
