//! Command line interface

use availability::ReportFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Probe HTTP endpoints every 15 seconds and report cumulative
/// per-domain availability.
#[derive(Debug, Parser)]
#[command(name = "availability-monitor", version, about)]
pub struct Cli {
    /// Path to the endpoint configuration file (YAML or JSON)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Diagnostic log format (written to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Availability report format (written to stdout)
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub report_format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_single_positional_argument() {
        let cli = Cli::try_parse_from(["availability-monitor", "endpoints.yaml"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("endpoints.yaml"));
        assert_eq!(cli.log_format, LogFormat::Text);
        assert_eq!(ReportFormat::from(cli.report_format), ReportFormat::Text);
    }

    #[test]
    fn test_missing_or_extra_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["availability-monitor"]).is_err());
        assert!(Cli::try_parse_from(["availability-monitor", "a.yaml", "b.yaml"]).is_err());
    }

    #[test]
    fn test_format_flags() {
        let cli = Cli::try_parse_from([
            "availability-monitor",
            "--log-format",
            "json",
            "--report-format",
            "json",
            "endpoints.json",
        ])
        .unwrap();
        assert_eq!(cli.log_format, LogFormat::Json);
        assert_eq!(ReportFormat::from(cli.report_format), ReportFormat::Json);
    }

    #[test]
    fn test_help_and_version_are_not_failures() {
        let err = Cli::try_parse_from(["availability-monitor", "--help"]).unwrap_err();
        assert!(!err.use_stderr());
        let err = Cli::try_parse_from(["availability-monitor", "--version"]).unwrap_err();
        assert!(!err.use_stderr());

        let err = Cli::try_parse_from(["availability-monitor"]).unwrap_err();
        assert!(err.use_stderr());
    }
}
