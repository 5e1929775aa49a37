use super::PairId;
use serde_json::{Map, Value};

/// Judge output after recovery, before it is tagged with its pair id
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Strict JSON object; shape is whatever the round's prompt asked for
    Parsed(Map<String, Value>),
    /// Could not be recovered; the trimmed model text is kept for debugging
    Degraded { raw_output: String },
}

impl Verdict {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Verdict::Degraded { .. })
    }

    /// Inject `id` into the record. Both variants are tagged.
    pub fn into_record(self, id: &PairId) -> Value {
        let mut map = match self {
            Verdict::Parsed(map) => map,
            Verdict::Degraded { raw_output } => {
                let mut map = Map::new();
                map.insert("raw_output".to_string(), Value::String(raw_output));
                map
            }
        };
        map.insert("id".to_string(), Value::from(id));
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parsed_record_keeps_order_and_appends_id() {
        let Value::Object(map) = json!({"winner": "A", "reason": "clearer"}) else {
            unreachable!()
        };
        let record = Verdict::Parsed(map).into_record(&PairId::Number(7));
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"winner":"A","reason":"clearer","id":7}"#
        );
    }

    #[test]
    fn test_degraded_record_tagged() {
        let verdict = Verdict::Degraded {
            raw_output: "oops".to_string(),
        };
        assert!(verdict.is_degraded());
        let record = verdict.into_record(&PairId::Text("p-1".to_string()));
        assert_eq!(record, json!({"raw_output": "oops", "id": "p-1"}));
    }

    #[test]
    fn test_model_supplied_id_overwritten() {
        let Value::Object(map) = json!({"id": 99, "winner": "C"}) else {
            unreachable!()
        };
        let record = Verdict::Parsed(map).into_record(&PairId::Number(3));
        assert_eq!(record["id"], json!(3));
    }
}
