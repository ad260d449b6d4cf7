//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand, ValueEnum};

use crate::config::OutputFormat;
use crate::error::{Error, Result};

/// Brief command arguments.
#[derive(Debug, Args)]
pub struct BriefCommand {
    /// METAR JSON file (provider response, or a canonical observation with --normalized)
    #[arg(short, long, value_name = "FILE")]
    pub metar: PathBuf,

    /// TAF JSON file (provider response, or canonical forecast periods with --normalized)
    #[arg(short, long, value_name = "FILE")]
    pub taf: Option<PathBuf>,

    /// Station to brief when the METAR file holds several
    #[arg(short, long, value_name = "ICAO")]
    pub station: Option<String>,

    /// Inputs are already in canonical form
    #[arg(long)]
    pub normalized: bool,

    /// Brief as of this time instead of now (RFC 3339)
    #[arg(long, value_name = "TIME", value_parser = parse_time)]
    pub at: Option<DateTime<Utc>>,

    /// Forecast look-ahead in hours (overrides configuration)
    #[arg(short, long, value_name = "HOURS")]
    pub window: Option<u32>,

    /// Output format (overrides configuration)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Category command arguments.
#[derive(Debug, Args)]
pub struct CategoryCommand {
    /// Ceiling in feet AGL (omit for no ceiling)
    #[arg(long, value_name = "FT")]
    pub ceiling: Option<i32>,

    /// Visibility in statute miles (e.g. "3", "1 1/2", "10+")
    #[arg(long, value_name = "SM")]
    pub visibility: String,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Output format argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Parse an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] if the text is not RFC 3339.
pub fn parse_time(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::invalid_value("time", text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_arg_conversion() {
        assert_eq!(OutputFormat::from(FormatArg::Text), OutputFormat::Text);
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(
            parse_time("2026-10-19T18:00:00Z").unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 19, 18, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time("2026-10-19T11:00:00-07:00").unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 19, 18, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_time_invalid() {
        let err = parse_time("yesterday").unwrap_err();
        assert!(err.to_string().contains("invalid time"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }
}
