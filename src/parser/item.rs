use serde::{Deserialize, Serialize};

/// Pair identifier as written by the generator: usually an integer, sometimes a string.
/// Anything else (floats, large unsigned ints, bools, null) is carried through verbatim.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PairId {
    Number(i64),
    Text(String),
    Other(serde_json::Value),
}

impl PairId {
    /// JSON text of the id, distinguishing `1` from `"1"`
    pub fn key(&self) -> String {
        serde_json::Value::from(self).to_string()
    }
}

impl std::fmt::Display for PairId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PairId::Number(n) => write!(f, "{}", n),
            PairId::Text(s) => write!(f, "{}", s),
            PairId::Other(v) => write!(f, "{}", v),
        }
    }
}

impl From<&PairId> for serde_json::Value {
    fn from(id: &PairId) -> Self {
        match id {
            PairId::Number(n) => serde_json::Value::from(*n),
            PairId::Text(s) => serde_json::Value::from(s.as_str()),
            PairId::Other(v) => v.clone(),
        }
    }
}

/// Three paraphrase-equivalent titles sharing one abstract
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComparisonItem {
    pub id: PairId,
    pub title_a: String,
    pub title_b: String,
    pub title_c: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_numeric_and_text_ids() {
        let items: Vec<ComparisonItem> = serde_json::from_value(json!([
            {"id": 1, "title_a": "A", "title_b": "B", "title_c": "C", "abstract": "X"},
            {"id": "nlp-2", "title_a": "A", "title_b": "B", "title_c": "C", "abstract": "Y", "extra": true}
        ]))
        .unwrap();

        assert_eq!(items[0].id, PairId::Number(1));
        assert_eq!(items[1].id, PairId::Text("nlp-2".to_string()));
        assert_eq!(items[1].abstract_text, "Y");
        assert_eq!(items[1].id.to_string(), "nlp-2");
    }

    #[test]
    fn test_unusual_ids_carried_verbatim() {
        let items: Vec<ComparisonItem> = serde_json::from_value(json!([
            {"id": 1.5, "title_a": "A", "title_b": "B", "title_c": "C", "abstract": "X"},
            {"id": 18446744073709551615u64, "title_a": "A", "title_b": "B", "title_c": "C", "abstract": "X"},
            {"id": null, "title_a": "A", "title_b": "B", "title_c": "C", "abstract": "X"},
            {"id": true, "title_a": "A", "title_b": "B", "title_c": "C", "abstract": "X"}
        ]))
        .unwrap();

        let ids: Vec<serde_json::Value> = items.iter().map(|i| (&i.id).into()).collect();
        assert_eq!(
            ids,
            vec![json!(1.5), json!(18446744073709551615u64), json!(null), json!(true)]
        );
        assert_eq!(items[1].id.to_string(), "18446744073709551615");
    }

    #[test]
    fn test_key_distinguishes_number_and_text() {
        assert_eq!(PairId::Number(1).key(), "1");
        assert_eq!(PairId::Text("1".to_string()).key(), "\"1\"");
    }

    #[test]
    fn test_missing_field_rejected() {
        let result: Result<ComparisonItem, _> =
            serde_json::from_value(json!({"id": 1, "title_a": "A", "abstract": "X"}));
        assert!(result.is_err());
    }
}
