//! Recognises the worker's vocabulary payload so it can be shown as entries
//! rather than raw JSON.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VocabularyEntry {
    pub word: String,
    pub meaning: String,
    pub examples: Vec<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub synonyms: Vec<String>,
}

/// Returns the entries when the payload is a non-empty array whose first
/// element carries both `word` and `meaning`.
///
/// Later elements are decoded leniently: missing or mistyped fields fall back
/// to empty values instead of rejecting the whole payload.
pub fn entries(payload: &Value) -> Option<Vec<VocabularyEntry>> {
    let items = payload.as_array()?;
    let first = items.first()?.as_object()?;
    if !first.contains_key("word") || !first.contains_key("meaning") {
        return None;
    }

    Some(items.iter().map(entry_from_value).collect())
}

fn entry_from_value(value: &Value) -> VocabularyEntry {
    match VocabularyEntry::deserialize(value) {
        Ok(entry) => entry,
        Err(_) => VocabularyEntry {
            word: text_field(value, "word"),
            meaning: text_field(value, "meaning"),
            examples: string_list(value, "examples"),
            kind: value.get("type").and_then(Value::as_str).map(str::to_string),
            synonyms: string_list(value, "synonyms"),
        },
    }
}

fn text_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn string_list(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn single_entry_with_examples() {
        let payload = json!([{"word": "run", "meaning": "to move fast", "examples": ["He ran."]}]);
        let entries = entries(&payload).expect("structured");
        assert_eq!(
            entries,
            vec![VocabularyEntry {
                word: "run".into(),
                meaning: "to move fast".into(),
                examples: vec!["He ran.".into()],
                kind: None,
                synonyms: vec![],
            }]
        );
    }

    #[test]
    fn optional_type_and_synonyms() {
        let payload = json!([{
            "word": "swift",
            "meaning": "quick",
            "type": "adjective",
            "synonyms": ["fast", "rapid"]
        }]);
        let entry = &entries(&payload).unwrap()[0];
        assert_eq!(entry.kind.as_deref(), Some("adjective"));
        assert_eq!(entry.synonyms, vec!["fast".to_string(), "rapid".to_string()]);
        assert!(entry.examples.is_empty());
    }

    #[test]
    fn rejects_other_shapes() {
        for payload in [
            json!([]),
            json!({"word": "run", "meaning": "x"}),
            json!([{"word": "run"}]),
            json!([{"meaning": "x"}]),
            json!(["run"]),
            json!("run"),
            json!(null),
        ] {
            assert_eq!(entries(&payload), None, "{payload}");
        }
    }

    #[test]
    fn only_first_element_gates_detection() {
        let payload = json!([
            {"word": "run", "meaning": "to move fast"},
            {"word": 7, "examples": "not a list"}
        ]);
        let entries = entries(&payload).expect("structured");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].word, "7");
        assert_eq!(entries[1].meaning, "");
        assert!(entries[1].examples.is_empty());
    }
}
