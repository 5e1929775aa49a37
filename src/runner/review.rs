use crate::config::{Field, Round};
use crate::error::RunnerError;
use crate::parser::{parse_review_verdict, ComparisonItem};
use crate::prompt::PromptStore;
use crate::provider::{Backends, ModelSelection};
use serde_json::Value;
use tracing::{debug, info};

/// Records for one (field, round, model) batch
#[derive(Debug, Default)]
pub struct ReviewReport {
    pub records: Vec<Value>,
    pub parsed: usize,
    pub degraded: usize,
}

/// Judge input for one item; the abstract is only shown in the abstract round.
/// Starts with a blank line, so the full prompt is `template\n\n\nTitle A: ...`.
pub fn round_text(item: &ComparisonItem, round: Round) -> String {
    let mut text = format!(
        "\nTitle A: {}\nTitle B: {}\nTitle C: {}\n",
        item.title_a, item.title_b, item.title_c
    );
    if round.includes_abstract() {
        text.push_str(&format!("Shared Abstract: {}\n", item.abstract_text));
    }
    text
}

pub struct ReviewRunner<'a> {
    backends: &'a Backends,
    prompts: &'a PromptStore,
    temperature: f32,
}

impl<'a> ReviewRunner<'a> {
    pub fn new(backends: &'a Backends, prompts: &'a PromptStore, temperature: f32) -> Self {
        Self {
            backends,
            prompts,
            temperature,
        }
    }

    /// Review up to `limit` items in order (`None` or `Some(0)` means all).
    /// A backend error aborts the run and the records gathered so far are dropped.
    pub async fn run(
        &self,
        field: Field,
        corpus: &[ComparisonItem],
        round: Round,
        model: &ModelSelection,
        limit: Option<usize>,
    ) -> Result<ReviewReport, RunnerError> {
        let template = self.prompts.reviewer(round)?;

        let take = limit.filter(|n| *n > 0).unwrap_or(corpus.len());
        let items = &corpus[..take.min(corpus.len())];

        let mut report = ReviewReport::default();
        for item in items {
            info!(
                "Reviewing {} pair {} ({}, {})",
                field, item.id, round, model.model
            );

            let prompt = format!("{}\n\n{}", template, round_text(item, round));
            let request = model.request(None, prompt, self.temperature);
            let raw = self.backends.complete(model, &request).await?;
            debug!("Pair {} called", item.id);

            let verdict = parse_review_verdict(&raw);
            if verdict.is_degraded() {
                report.degraded += 1;
                debug!("Pair {} degraded", item.id);
            } else {
                report.parsed += 1;
                debug!("Pair {} parsed", item.id);
            }

            let record = verdict.into_record(&item.id);
            debug!("Pair {} tagged: {}", item.id, record);
            report.records.push(record);
        }

        Ok(report)
    }
}
