use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use warbler::app;
use warbler::config::Config;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Command {
    /// Migrate the database, then serve.
    Start,
    /// Migrate the database and exit.
    Migrate,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(value_enum)]
    command: Command,

    #[command(flatten)]
    config: Config,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    match args.command {
        Command::Start => app::start(&args.config).await?,
        Command::Migrate => app::migrate(&args.config).await?,
    }

    Ok(())
}
