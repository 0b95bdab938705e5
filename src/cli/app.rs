use clap::Parser;

use crate::config::{LogLevel, OutputFormat, Settings};

/// Coursedesk: interactive course catalog and notification desk
#[derive(Parser, Debug)]
#[command(name = "coursedesk")]
#[command(version)]
#[command(about = "Interactive course catalog and notification desk")]
#[command(
    long_about = "Coursedesk keeps an in-memory catalog of university courses and per-course notifications, driven by a numbered menu on standard input."
)]
pub struct Cli {
    /// Set log level (logs are written to stderr)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Output format for course listings and notifications
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl From<&Cli> for Settings {
    fn from(cli: &Cli) -> Self {
        Settings {
            log_level: cli.log_level,
            format: cli.format,
        }
    }
}
