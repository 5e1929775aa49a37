use crate::config::{Field, Round};
use crate::error::PromptError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-backed prompt templates rooted at `prompts_dir`
#[derive(Debug, Clone)]
pub struct PromptStore {
    root: PathBuf,
}

impl PromptStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `datagen/{field}_prompt.txt`
    pub fn generation(&self, field: Field) -> Result<String, PromptError> {
        self.load(&self.root.join("datagen").join(format!("{}_prompt.txt", field)))
    }

    /// `reviewer_prompt/{round}.txt`
    pub fn reviewer(&self, round: Round) -> Result<String, PromptError> {
        self.load(&self.root.join("reviewer_prompt").join(format!("{}.txt", round)))
    }

    /// `reviewer_prompt.txt`, used by the single-model A/B demo
    pub fn demo(&self) -> Result<String, PromptError> {
        self.load(&self.root.join("reviewer_prompt.txt"))
    }

    fn load(&self, path: &Path) -> Result<String, PromptError> {
        if !path.exists() {
            return Err(PromptError::NotFound {
                path: path.to_path_buf(),
            });
        }
        debug!("Loading prompt {:?}", path);
        std::fs::read_to_string(path).map_err(|e| PromptError::Read {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
