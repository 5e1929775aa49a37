mod claude;
mod openai;
#[cfg(test)]
pub mod stub;

pub use claude::ClaudeBackend;
pub use openai::OpenAiBackend;

use crate::config::{BackendKind, ClaudeConfig, ProvidersConfig};
use crate::error::ProviderError;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

const OPENAI_KEY_VAR: &str = "OPENAI_API_KEY";
const CLAUDE_KEY_VARS: [&str; 2] = ["CLAUDE_API_KEY", "ANTHROPIC_API_KEY"];

/// One completion call: an optional system instruction plus a single user prompt
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub system: Option<String>,
    pub prompt: String,
    pub temperature: f32,
}

#[async_trait]
pub trait Backend: Send + Sync {
    fn name(&self) -> &'static str;

    /// Send the prompt and return the model's text, trimmed
    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError>;
}

/// Which backend and concrete model id a run talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub backend: BackendKind,
    pub model: String,
}

impl ModelSelection {
    /// An explicit backend wins; otherwise ids starting with the Claude prefix
    /// go to Claude and everything else to OpenAI. The bare prefix (`claude`)
    /// stands for the configured default Claude model.
    pub fn resolve(model: &str, explicit: Option<BackendKind>, claude: &ClaudeConfig) -> Self {
        let backend = explicit.unwrap_or_else(|| infer_backend(model, &claude.alias_prefix));
        let model = if backend == BackendKind::Claude && model == claude.alias_prefix {
            claude.default_model.clone()
        } else {
            model.to_string()
        };
        Self { backend, model }
    }

    pub fn request(
        &self,
        system: Option<String>,
        prompt: String,
        temperature: f32,
    ) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            system,
            prompt,
            temperature,
        }
    }
}

pub fn infer_backend(model: &str, claude_prefix: &str) -> BackendKind {
    if !claude_prefix.is_empty() && model.starts_with(claude_prefix) {
        BackendKind::Claude
    } else {
        BackendKind::OpenAi
    }
}

/// Backend clients, built once at startup and passed to the runners
pub struct Backends {
    openai: Option<Arc<dyn Backend>>,
    claude: Option<Arc<dyn Backend>>,
}

impl Backends {
    pub fn new(openai: Option<Arc<dyn Backend>>, claude: Option<Arc<dyn Backend>>) -> Self {
        Self { openai, claude }
    }

    /// Build clients for every backend whose API key is set
    pub fn from_env(config: &ProvidersConfig) -> Self {
        let openai = read_key(&[OPENAI_KEY_VAR]).map(|key| {
            Arc::new(OpenAiBackend::new(&key, &config.openai)) as Arc<dyn Backend>
        });
        let claude = read_key(&CLAUDE_KEY_VARS).map(|key| {
            Arc::new(ClaudeBackend::new(&key, &config.claude)) as Arc<dyn Backend>
        });

        debug!(
            openai = openai.is_some(),
            claude = claude.is_some(),
            "Backends configured"
        );
        Self::new(openai, claude)
    }

    /// Never falls back to the other backend
    pub fn get(&self, kind: BackendKind) -> Result<&dyn Backend, ProviderError> {
        let backend = match kind {
            BackendKind::OpenAi => self.openai.as_deref(),
            BackendKind::Claude => self.claude.as_deref(),
        };
        backend.ok_or(ProviderError::Unavailable(kind))
    }

    pub async fn complete(
        &self,
        selection: &ModelSelection,
        request: &CompletionRequest,
    ) -> Result<String, ProviderError> {
        let backend = self.get(selection.backend)?;
        debug!(backend = backend.name(), model = %request.model, "Sending completion");
        backend.complete(request).await
    }
}

fn read_key(vars: &[&str]) -> Option<String> {
    vars.iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|key| !key.trim().is_empty())
}
