use crate::cli::{load_context, DemoArgs};
use crate::output::{read_corpus, write_json};
use crate::prompt::PromptStore;
use crate::provider::ModelSelection;
use crate::runner::DemoRunner;
use std::path::Path;
use tracing::info;

pub async fn execute(args: DemoArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let (config, backends) = load_context(config_path)?;
    let prompts = PromptStore::new(&config.prompts_dir);

    let model_id = args.model.as_deref().unwrap_or(&config.review.demo_model);
    let model = ModelSelection::resolve(model_id, args.backend, &config.providers.claude);
    let infile = config.corpus_path(args.field);
    let outfile = args
        .outfile
        .unwrap_or_else(|| config.demo_results_path(args.field));

    let corpus = read_corpus(&infile)?;
    let results = DemoRunner::new(&backends, &prompts, config.review.temperature)
        .run(&corpus, &model)
        .await?;

    write_json(&outfile, &results)?;
    info!("Results saved to {:?}", outfile);
    Ok(())
}
