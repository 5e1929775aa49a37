mod fence;
mod item;
mod lenient;
mod verdict;

pub use fence::{outermost_array, strip_fences};
pub use item::{ComparisonItem, PairId};
pub use lenient::parse_lenient;
pub use verdict::Verdict;

use serde_json::Value;
use tracing::warn;

/// Result of parsing a generated batch. Generation is all-or-nothing, so a
/// failed parse keeps the whole text for manual recovery.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedBatch {
    Parsed(Value),
    Raw(String),
}

/// Parse a generated batch: strip fences, narrow to the outermost array,
/// repair trailing commas, strict-parse. Falls back to the raw text.
pub fn parse_generated_batch(raw: &str) -> GeneratedBatch {
    let content = raw.trim();
    let candidate = outermost_array(strip_fences(content));

    match parse_lenient(candidate) {
        Ok(value) => GeneratedBatch::Parsed(value),
        Err(e) => {
            warn!("JSON decode failed after cleaning, keeping raw output: {}", e);
            GeneratedBatch::Raw(content.to_string())
        }
    }
}

/// Parse a single judge response. Anything that is not a JSON object
/// after recovery becomes a degraded verdict carrying the raw text.
pub fn parse_review_verdict(raw: &str) -> Verdict {
    let content = raw.trim();

    match parse_lenient(strip_fences(content)) {
        Ok(Value::Object(map)) => Verdict::Parsed(map),
        Ok(other) => {
            warn!(
                "Judge returned JSON {} instead of an object, keeping raw output",
                json_kind(&other)
            );
            Verdict::Degraded {
                raw_output: content.to_string(),
            }
        }
        Err(e) => {
            warn!("JSON parse failed, keeping raw output: {}", e);
            Verdict::Degraded {
                raw_output: content.to_string(),
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_batch_with_prose_and_fence() {
        let raw = "```json\nHere are the items:\n[\n  {\"id\": 1, \"title_a\": \"X\",},\n]\nDone.\n```";
        assert_eq!(
            parse_generated_batch(raw),
            GeneratedBatch::Parsed(json!([{"id": 1, "title_a": "X"}]))
        );
    }

    #[test]
    fn test_batch_fallback_keeps_original_text() {
        let raw = "  ```json\n[{\"id\": 1, \"title_a\": }]\n```\n";
        assert_eq!(
            parse_generated_batch(raw),
            GeneratedBatch::Raw("```json\n[{\"id\": 1, \"title_a\": }]\n```".to_string())
        );
    }

    #[test]
    fn test_review_fenced_object() {
        let verdict = parse_review_verdict("```json\n{\"winner\":\"A\"}\n```");
        assert_eq!(verdict.into_record(&PairId::Number(1)), json!({"winner": "A", "id": 1}));
    }

    #[test]
    fn test_review_trailing_comma_repaired() {
        let verdict = parse_review_verdict("{\"winner\": \"B\", \"scores\": [1, 2,],}");
        assert!(!verdict.is_degraded());
    }

    #[test]
    fn test_review_degraded() {
        let verdict = parse_review_verdict("not json at all");
        assert_eq!(
            verdict,
            Verdict::Degraded {
                raw_output: "not json at all".to_string()
            }
        );
    }

    #[test]
    fn test_review_non_object_degraded() {
        let verdict = parse_review_verdict("[\"A\", \"B\"]");
        assert_eq!(
            verdict.into_record(&PairId::Number(4)),
            json!({"raw_output": "[\"A\", \"B\"]", "id": 4})
        );
    }
}
