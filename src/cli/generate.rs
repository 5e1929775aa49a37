use crate::cli::{load_context, GenerateArgs};
use crate::output::{write_json, write_raw};
use crate::parser::GeneratedBatch;
use crate::prompt::PromptStore;
use crate::provider::ModelSelection;
use crate::runner::PairGenerator;
use std::path::Path;
use tracing::{info, warn};

pub async fn execute(args: GenerateArgs, config_path: Option<&Path>) -> anyhow::Result<()> {
    let (config, backends) = load_context(config_path)?;
    let prompts = PromptStore::new(&config.prompts_dir);

    let model_id = args.model.as_deref().unwrap_or(&config.generation.model);
    let model = ModelSelection::resolve(model_id, args.backend, &config.providers.claude);
    let outfile = args
        .outfile
        .unwrap_or_else(|| config.corpus_path(args.field));

    info!("Generating pairs for {} ...", args.field.to_string().to_uppercase());
    let batch = PairGenerator::new(&backends, &prompts, &config.generation)
        .generate(args.field, &model)
        .await?;

    match &batch {
        GeneratedBatch::Parsed(value) => write_json(&outfile, value)?,
        GeneratedBatch::Raw(text) => {
            warn!("Writing raw model output to {:?} for manual recovery", outfile);
            write_raw(&outfile, text)?;
        }
    }

    info!("Saved {} pairs to {:?}", args.field, outfile);
    Ok(())
}
