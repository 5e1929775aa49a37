use crate::error::RunnerError;
use crate::parser::ComparisonItem;
use crate::prompt::PromptStore;
use crate::provider::{Backends, ModelSelection};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

/// Raw judge text for title A and title B, each shown with the shared abstract
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DemoVerdicts {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
}

/// Single-model A/B walkthrough: no JSON recovery, verdict text is kept as-is
pub struct DemoRunner<'a> {
    backends: &'a Backends,
    prompts: &'a PromptStore,
    temperature: f32,
}

impl<'a> DemoRunner<'a> {
    pub fn new(backends: &'a Backends, prompts: &'a PromptStore, temperature: f32) -> Self {
        Self {
            backends,
            prompts,
            temperature,
        }
    }

    /// Returns a JSON object keyed by pair id
    pub async fn run(
        &self,
        corpus: &[ComparisonItem],
        model: &ModelSelection,
    ) -> Result<Map<String, Value>, RunnerError> {
        let template = self.prompts.demo()?;

        let mut results = Map::new();
        for item in corpus {
            info!("Reviewing pair {}", item.id);
            let a = self.judge(&template, &item.title_a, item, model).await?;
            let b = self.judge(&template, &item.title_b, item, model).await?;

            let verdicts = DemoVerdicts { a, b };
            results.insert(item.id.to_string(), serde_json::to_value(&verdicts)?);
        }
        Ok(results)
    }

    async fn judge(
        &self,
        template: &str,
        title: &str,
        item: &ComparisonItem,
        model: &ModelSelection,
    ) -> Result<String, RunnerError> {
        let prompt = format!(
            "{}\n\nTitle: {}\nAbstract: {}",
            template, title, item.abstract_text
        );
        let request = model.request(None, prompt, self.temperature);
        Ok(self.backends.complete(model, &request).await?)
    }
}
