use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod output;
mod parser;
mod prompt;
mod provider;
mod runner;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // API keys may live in a local .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("titlejudge=debug")
    } else {
        EnvFilter::new("titlejudge=info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Generate(args) => cli::generate::execute(args, config).await,
        Commands::Review(args) => cli::review::execute(args, config).await,
        Commands::Demo(args) => cli::demo::execute(args, config).await,
        Commands::Schema => cli::schema::execute(),
    }
}
