/// A small garage you drive from the terminal.
/// Create cars, park them, find them by id, list what is
/// parked and take them out again. Nothing is saved: the
/// garage lives only as long as the program runs.
use anyhow::Result;
use clap::Parser;
use garage::core::config::SessionSettings;
use garage::utils;

#[derive(Parser)]
#[command(name = "garage")]
#[command(about = "An interactive console for managing the cars in a garage")]
struct Cli {
    /// Print debug logs to stderr (RUST_LOG overrides the level)
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Skip the welcome banner
    #[arg(long)]
    no_banner: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = SessionSettings {
        show_banner: !cli.no_banner,
        color: !cli.no_color,
        verbose: cli.verbose,
    };

    utils::init_logging(settings.verbose)?;
    utils::run_interactive(settings)
}
