mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::{Path, PathBuf};

impl Default for Config {
    fn default() -> Self {
        Self {
            prompts_dir: default_prompts_dir(),
            data_dir: default_data_dir(),
            results_dir: default_results_dir(),
            generation: GenerationConfig::default(),
            review: ReviewConfig::default(),
            providers: ProvidersConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load an explicit config file, else `titlejudge.yaml` if present, else defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn corpus_path(&self, field: Field) -> PathBuf {
        self.data_dir.join("pairs").join(format!("{}.json", field))
    }

    /// `results/{field}/{round}_{model}.json`
    pub fn review_results_path(&self, field: Field, round: Round, model: &str) -> PathBuf {
        self.results_dir
            .join(field.to_string())
            .join(format!("{}_{}.json", round, model))
    }

    pub fn demo_results_path(&self, field: Field) -> PathBuf {
        self.results_dir.join(format!("demo_{}.json", field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let yaml = r#"
results_dir: out
generation:
  target_count: 5
  corpus_policy: reject
providers:
  claude:
    max_tokens: 2048
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.results_dir, PathBuf::from("out"));
        assert_eq!(config.prompts_dir, PathBuf::from("prompts"));
        assert_eq!(config.generation.target_count, 5);
        assert_eq!(config.generation.corpus_policy, CorpusPolicy::Reject);
        assert_eq!(config.generation.model, "gpt-4o-mini");
        assert_eq!(config.providers.claude.max_tokens, 2048);
        assert_eq!(config.providers.claude.alias_prefix, "claude");
        assert_eq!(config.review.temperature, 0.0);
    }

    #[test]
    fn test_result_paths() {
        let config = Config::default();
        assert_eq!(
            config.corpus_path(Field::Climate),
            PathBuf::from("data/pairs/climate.json")
        );
        assert_eq!(
            config.review_results_path(Field::Nlp, Round::TitleAbstract, "gpt-4o"),
            PathBuf::from("results/nlp/title-abstract_gpt-4o.json")
        );
        assert_eq!(
            config.demo_results_path(Field::Bio),
            PathBuf::from("results/demo_bio.json")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/titlejudge.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }
}
