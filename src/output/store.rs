use crate::error::OutputError;
use crate::parser::ComparisonItem;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a field's corpus (JSON array of comparison items)
pub fn read_corpus(path: &Path) -> Result<Vec<ComparisonItem>, OutputError> {
    let content = fs::read_to_string(path).map_err(|e| OutputError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| OutputError::Corpus {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write pretty-printed JSON (2-space indent, non-ASCII left unescaped)
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(value)?;
    write_raw(path, &json)
}

/// Write text verbatim, creating parent directories
pub fn write_raw(path: &Path, content: &str) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(OutputError::CreateDir)?;
    }
    fs::write(path, content).map_err(|e| OutputError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
