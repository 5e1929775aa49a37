use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "titlejudge.yaml";

pub fn default_prompts_dir() -> PathBuf {
    PathBuf::from("prompts")
}

pub fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

pub fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

pub fn default_generation_model() -> String {
    "gpt-4o-mini".to_string()
}

pub fn default_generation_temperature() -> f32 {
    0.7
}

pub fn default_target_count() -> usize {
    20
}

pub fn default_review_temperature() -> f32 {
    0.0
}

pub fn default_demo_model() -> String {
    "gpt-4o-mini".to_string()
}

pub fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

pub fn default_claude_base_url() -> String {
    "https://api.anthropic.com/v1".to_string()
}

pub fn default_claude_model() -> String {
    "claude-3-7-sonnet-20250219".to_string()
}

pub fn default_claude_prefix() -> String {
    "claude".to_string()
}

pub fn default_claude_max_tokens() -> u32 {
    1000
}
