use crate::config::{CorpusPolicy, Field, GenerationConfig};
use crate::error::RunnerError;
use crate::parser::{parse_generated_batch, ComparisonItem, GeneratedBatch};
use crate::prompt::PromptStore;
use crate::provider::{Backends, ModelSelection};
use serde_json::Value;
use std::collections::HashSet;
use tracing::{info, warn};

fn system_instruction(target_count: usize) -> String {
    format!(
        "You generate strict JSON. Reply with ONLY a JSON array (RFC 8259) of exactly {} \
         objects, each with the keys \"id\", \"title_a\", \"title_b\", \"title_c\" and \
         \"abstract\". No comments, no trailing commas, no text before or after the array.",
        target_count
    )
}

/// Produces one field's corpus with a single model call
pub struct PairGenerator<'a> {
    backends: &'a Backends,
    prompts: &'a PromptStore,
    config: &'a GenerationConfig,
}

impl<'a> PairGenerator<'a> {
    pub fn new(
        backends: &'a Backends,
        prompts: &'a PromptStore,
        config: &'a GenerationConfig,
    ) -> Self {
        Self {
            backends,
            prompts,
            config,
        }
    }

    pub async fn generate(
        &self,
        field: Field,
        model: &ModelSelection,
    ) -> Result<GeneratedBatch, RunnerError> {
        let prompt = self.prompts.generation(field)?;

        info!("Generating {} pairs for {} with {}", self.config.target_count, field, model.model);
        let request = model.request(
            Some(system_instruction(self.config.target_count)),
            prompt,
            self.config.temperature,
        );
        let raw = self.backends.complete(model, &request).await?;

        let batch = parse_generated_batch(&raw);
        if let GeneratedBatch::Parsed(value) = &batch {
            self.check_corpus(value)?;
        }
        Ok(batch)
    }

    fn check_corpus(&self, value: &Value) -> Result<(), RunnerError> {
        if self.config.corpus_policy == CorpusPolicy::Accept {
            return Ok(());
        }

        let problems = corpus_problems(value, self.config.target_count);
        if problems.is_empty() {
            return Ok(());
        }

        match self.config.corpus_policy {
            CorpusPolicy::Reject => Err(RunnerError::IncompleteCorpus(problems.join("; "))),
            _ => {
                for problem in &problems {
                    warn!("Generated corpus: {}", problem);
                }
                Ok(())
            }
        }
    }
}

/// Count, shape and id-uniqueness problems in a parsed corpus
pub fn corpus_problems(value: &Value, target_count: usize) -> Vec<String> {
    let Value::Array(items) = value else {
        return vec!["expected a JSON array of items".to_string()];
    };

    let mut problems = Vec::new();
    if items.len() != target_count {
        problems.push(format!(
            "expected {} items, got {}",
            target_count,
            items.len()
        ));
    }

    let mut seen: HashSet<String> = HashSet::new();
    for (idx, item) in items.iter().enumerate() {
        match serde_json::from_value::<ComparisonItem>(item.clone()) {
            Ok(parsed) => {
                if !seen.insert(parsed.id.key()) {
                    problems.push(format!("duplicate id {}", parsed.id));
                }
            }
            Err(e) => problems.push(format!("item {}: {}", idx, e)),
        }
    }
    problems
}
