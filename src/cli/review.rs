use crate::cli::{load_context, ReviewArgs};
use crate::output::{read_corpus, write_json};
use crate::prompt::PromptStore;
use crate::provider::ModelSelection;
use crate::runner::{ReviewReport, ReviewRunner};
use std::path::Path;
use tracing::info;

pub async fn execute(args: ReviewArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let (config, backends) = load_context(config_path)?;
    let prompts = PromptStore::new(&config.prompts_dir);

    let model = ModelSelection::resolve(&args.model, args.backend, &config.providers.claude);
    let infile = config.corpus_path(args.field);
    // Named after the model id as typed, so `--model claude` keeps writing `*_claude.json`
    let outfile = args
        .outfile
        .unwrap_or_else(|| config.review_results_path(args.field, args.round, &args.model));

    let corpus = read_corpus(&infile)?;
    info!("Loaded {} pairs from {:?}", corpus.len(), infile);

    // Persist only after the whole batch succeeded
    let report: ReviewReport = ReviewRunner::new(&backends, &prompts, config.review.temperature)
        .run(args.field, &corpus, args.round, &model, args.num)
        .await?;

    write_json(&outfile, &report.records)?;

    info!(
        "Reviewed {} pairs: {} parsed, {} degraded",
        report.records.len(),
        report.parsed,
        report.degraded
    );
    info!("Results saved to {:?}", outfile);
    Ok(())
}
