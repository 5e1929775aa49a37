pub mod demo;
pub mod generate;
pub mod review;
pub mod schema;

use crate::config::{BackendKind, Config, Field, Round};
use crate::provider::Backends;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "titlejudge")]
#[command(
    author,
    version,
    about = "Generate near-duplicate paper titles and have LLM judges compare them"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: titlejudge.yaml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a field's corpus of title triplets
    Generate(GenerateArgs),

    /// Have a judge model review a field's corpus for one round
    Review(ReviewArgs),

    /// Single-model A/B walkthrough over a field's corpus
    Demo(DemoArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct GenerateArgs {
    /// Research field
    #[arg(long, value_enum)]
    pub field: Field,

    /// Generator model (default from config)
    #[arg(long)]
    pub model: Option<String>,

    /// Backend to use instead of inferring it from the model id
    #[arg(long, value_enum)]
    pub backend: Option<BackendKind>,

    /// Output JSON file (default: data/pairs/{field}.json)
    #[arg(long)]
    pub outfile: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct ReviewArgs {
    /// Research field
    #[arg(long, value_enum)]
    pub field: Field,

    /// Review round
    #[arg(long, value_enum)]
    pub round: Round,

    /// Judge model, e.g. gpt-4o, gpt-4o-mini, claude
    #[arg(long)]
    pub model: String,

    /// Backend to use instead of inferring it from the model id
    #[arg(long, value_enum)]
    pub backend: Option<BackendKind>,

    /// Number of pairs to review (default: all)
    #[arg(long)]
    pub num: Option<usize>,

    /// Output JSON file (default: results/{field}/{round}_{model}.json)
    #[arg(long)]
    pub outfile: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct DemoArgs {
    /// Research field
    #[arg(long, value_enum)]
    pub field: Field,

    /// Judge model (default from config)
    #[arg(long)]
    pub model: Option<String>,

    /// Backend to use instead of inferring it from the model id
    #[arg(long, value_enum)]
    pub backend: Option<BackendKind>,

    /// Output JSON file (default: results/demo_{field}.json)
    #[arg(long)]
    pub outfile: Option<PathBuf>,
}

/// Config plus backend clients, built once per process
pub fn load_context(config_path: Option<&Path>) -> anyhow::Result<(Config, Backends)> {
    let config = Config::resolve(config_path)?;
    info!("Prompts from {:?}", config.prompts_dir);
    let backends = Backends::from_env(&config.providers);
    Ok((config, backends))
}
