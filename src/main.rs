use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use coursedesk::{
    cli::{Cli, Session},
    config::{LogLevel, Settings},
    CourseDesk,
};

/// Initialize tracing from the --log-level flag
///
/// Logs always go to stderr so they never interleave with the menu on stdout.
fn initialize_tracing(log_level: &LogLevel) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from(&cli);

    initialize_tracing(&settings.log_level);

    let desk = CourseDesk::with_sample_courses();
    info!(
        courses = desk.catalog.len(),
        format = %settings.format,
        "Course desk ready"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(desk, stdin.lock(), stdout.lock(), settings.format);
    session.run().context("Interactive session failed")?;

    Ok(())
}
