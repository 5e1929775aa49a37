use crate::error::ParserError;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",\s*([}\]])").expect("valid trailing comma regex"));

/// Collapse `,` + optional whitespace + `}`/`]` into the closer, repeating
/// until the text stops changing (`[1,,]` needs two passes).
pub fn repair_trailing_commas(text: &str) -> String {
    let mut current = text.to_string();
    loop {
        let next = TRAILING_COMMA.replace_all(&current, "$1").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

/// Strict-parse; only text that fails is repaired and parsed again, so
/// string contents of already valid JSON are never rewritten.
pub fn parse_lenient(text: &str) -> Result<Value, ParserError> {
    if let Ok(value) = serde_json::from_str(text) {
        return Ok(value);
    }
    let repaired = repair_trailing_commas(text);
    Ok(serde_json::from_str(&repaired)?)
}
