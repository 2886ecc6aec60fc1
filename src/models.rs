//! Frontend Models
//!
//! Records persisted as user-scoped JSON blobs. Wire field names are
//! camelCase to stay compatible with the stored record format.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Flat form state: field key to raw (untrimmed) input value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormRecord {
    fields: BTreeMap<String, String>,
}

impl FormRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for `key`, empty string if never set
    pub fn value(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    /// Trimmed value for `key`
    pub fn trimmed(&self, key: &str) -> &str {
        self.value(key).trim()
    }

    /// True when `key` has a non-empty value after trimming
    pub fn is_filled(&self, key: &str) -> bool {
        !self.trimmed(key).is_empty()
    }

    pub fn set(&mut self, key: &str, value: String) {
        self.fields.insert(key.to_string(), value);
    }
}

/// One generated suggestion package the user chooses from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub summary: Vec<String>,
    pub prompt: String,
    #[serde(rename = "do")]
    pub do_list: Vec<String>,
    #[serde(rename = "dont")]
    pub dont_list: Vec<String>,
}

/// In-progress interview state persisted for resumption
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    pub form: FormRecord,
    pub candidates: Vec<Candidate>,
    pub selected_id: String,
    pub updated_at: u64,
}

/// Finalized record written when a candidate has been selected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub form: FormRecord,
    pub candidates: Vec<Candidate>,
    pub selected_id: String,
    pub updated_at: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<Candidate>,
}

/// Title/subtitle pair shown on completion badges
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub title: String,
    pub subtitle: String,
}

/// Summary-only record kept under the older per-service key for
/// cross-page completion badges
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySummary {
    pub updated_at: u64,
    pub selected_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<Candidate>,
    pub summary: ResultSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> Candidate {
        Candidate {
            id: "A".to_string(),
            name: "Bold launch".to_string(),
            summary: vec!["Loud and direct".to_string()],
            prompt: "Make it bold".to_string(),
            do_list: vec!["High contrast".to_string()],
            dont_list: vec!["Pastel tones".to_string()],
        }
    }

    #[test]
    fn test_form_record_trimming() {
        let mut form = FormRecord::new();
        form.set("productName", "  Tumbler  ".to_string());
        assert_eq!(form.value("productName"), "  Tumbler  ");
        assert_eq!(form.trimmed("productName"), "Tumbler");
        assert!(form.is_filled("productName"));
        assert!(!form.is_filled("missing"));
    }

    #[test]
    fn test_whitespace_only_counts_as_blank() {
        let mut form = FormRecord::new();
        form.set("goal", "   ".to_string());
        assert!(!form.is_filled("goal"));
    }

    #[test]
    fn test_draft_record_wire_names() {
        let draft = DraftRecord {
            form: FormRecord::new(),
            candidates: vec![candidate()],
            selected_id: "A".to_string(),
            updated_at: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("\"selectedId\":\"A\""));
        assert!(json.contains("\"updatedAt\":1700000000000"));
        assert!(json.contains("\"do\":[\"High contrast\"]"));
        assert!(json.contains("\"dont\":[\"Pastel tones\"]"));
    }

    #[test]
    fn test_draft_round_trip() {
        let mut form = FormRecord::new();
        form.set("productName", "Tumbler".to_string());
        let draft = DraftRecord {
            form,
            candidates: vec![candidate()],
            selected_id: String::new(),
            updated_at: 42,
        };
        let json = serde_json::to_string(&draft).unwrap();
        let back: DraftRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, draft);
    }

    #[test]
    fn test_result_record_omits_absent_selected() {
        let result = ResultRecord {
            form: FormRecord::new(),
            candidates: vec![],
            selected_id: String::new(),
            updated_at: 0,
            selected: None,
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("\"selected\":null"));
    }
}
