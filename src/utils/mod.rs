use anyhow::{Context, Result};
use std::io;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::core::config::SessionSettings;
use crate::core::session::GarageSession;

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
/// `RUST_LOG` wins when set; otherwise `verbose` picks debug over warn.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let collector = tracing_subscriber::registry().with(
        fmt::Layer::new()
            .with_writer(io::stderr)
            .with_target(false)
            .with_filter(filter),
    );
    tracing::subscriber::set_global_default(collector)
        .context("Unable to set a global tracing subscriber")?;
    Ok(())
}

/// Runs a garage session on the process's stdin and stdout.
pub fn run_interactive(settings: SessionSettings) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = GarageSession::new(stdin.lock(), stdout.lock(), settings);
    session.run()
}
