use std::path::PathBuf;
use thiserror::Error;

use crate::config::BackendKind;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read prompt file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("{0} backend not available (missing API key for this backend)")]
    Unavailable(BackendKind),

    #[error("Invalid API key header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{backend} API error ({status}): {body}")]
    Api {
        backend: &'static str,
        status: u16,
        body: String,
    },

    #[error("{0} returned no text content")]
    EmptyResponse(&'static str),
}

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create output directory: {0}")]
    CreateDir(std::io::Error),

    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed corpus file '{}': {source}", path.display())]
    Corpus {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Generated corpus rejected: {0}")]
    IncompleteCorpus(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
