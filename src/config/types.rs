use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    #[serde(default = "default_prompts_dir")]
    pub prompts_dir: PathBuf,

    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,

    #[serde(default)]
    pub generation: GenerationConfig,

    #[serde(default)]
    pub review: ReviewConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct GenerationConfig {
    #[serde(default = "default_generation_model")]
    pub model: String,

    #[serde(default = "default_generation_temperature")]
    pub temperature: f32,

    /// Number of comparison items requested per field
    #[serde(default = "default_target_count")]
    pub target_count: usize,

    #[serde(default)]
    pub corpus_policy: CorpusPolicy,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: default_generation_model(),
            temperature: default_generation_temperature(),
            target_count: default_target_count(),
            corpus_policy: CorpusPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ReviewConfig {
    #[serde(default = "default_review_temperature")]
    pub temperature: f32,

    #[serde(default = "default_demo_model")]
    pub demo_model: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            temperature: default_review_temperature(),
            demo_model: default_demo_model(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openai: OpenAiConfig,

    #[serde(default)]
    pub claude: ClaudeConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct OpenAiConfig {
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,

    /// Left unset so the API default applies
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            base_url: default_openai_base_url(),
            max_tokens: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct ClaudeConfig {
    #[serde(default = "default_claude_base_url")]
    pub base_url: String,

    /// Model used when the bare alias (e.g. `claude`) is given
    #[serde(default = "default_claude_model")]
    pub default_model: String,

    /// Model ids starting with this prefix route to Claude unless a backend is given explicitly
    #[serde(default = "default_claude_prefix")]
    pub alias_prefix: String,

    #[serde(default = "default_claude_max_tokens")]
    pub max_tokens: u32,
}

impl Default for ClaudeConfig {
    fn default() -> Self {
        Self {
            base_url: default_claude_base_url(),
            default_model: default_claude_model(),
            alias_prefix: default_claude_prefix(),
            max_tokens: default_claude_max_tokens(),
        }
    }
}

/// What to do when a generated corpus is short or malformed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CorpusPolicy {
    Accept,
    #[default]
    Warn,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Nlp,
    Cv,
    Bio,
    Climate,
    Social,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Nlp => write!(f, "nlp"),
            Field::Cv => write!(f, "cv"),
            Field::Bio => write!(f, "bio"),
            Field::Climate => write!(f, "climate"),
            Field::Social => write!(f, "social"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Round {
    /// Judge sees the three titles only
    TitleOnly,
    /// Judge sees the three titles plus the shared abstract
    TitleAbstract,
}

impl Round {
    pub fn includes_abstract(self) -> bool {
        matches!(self, Round::TitleAbstract)
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Round::TitleOnly => write!(f, "title-only"),
            Round::TitleAbstract => write!(f, "title-abstract"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    #[value(name = "openai")]
    OpenAi,
    Claude,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::OpenAi => write!(f, "openai"),
            BackendKind::Claude => write!(f, "claude"),
        }
    }
}
