//! Supported export formats.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use actordesk_core::AppError;

/// Output format selected by the `file_extension` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Comma-separated values.
    Csv,
    /// Office Open XML spreadsheet.
    Xlsx,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }

    /// MIME type sent in `Content-Type`.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Csv => "text/csv; charset=utf-8",
            Self::Xlsx => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        }
    }

    /// Attachment file name stamped with the generation time,
    /// e.g. `actors_20240131_235959.csv`.
    pub fn file_name(&self, prefix: &str, generated_at: DateTime<Utc>) -> String {
        format!(
            "{prefix}_{}.{}",
            generated_at.format("%Y%m%d_%H%M%S"),
            self.extension()
        )
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    /// Unknown extensions are reported as not found, matching a route
    /// that does not exist.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(Self::Csv),
            "xlsx" => Ok(Self::Xlsx),
            other => Err(AppError::not_found(format!(
                "Unsupported export format: '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_str() {
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("xlsx".parse::<ExportFormat>().unwrap(), ExportFormat::Xlsx);
        let err = "pdf".parse::<ExportFormat>().unwrap_err();
        assert!(err.is_not_found());
        assert!("CSV".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_file_name() {
        let at = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 58).unwrap();
        assert_eq!(
            ExportFormat::Xlsx.file_name("actors", at),
            "actors_20240131_235958.xlsx"
        );
        assert_eq!(
            ExportFormat::Csv.file_name("cast", at),
            "cast_20240131_235958.csv"
        );
    }
}
