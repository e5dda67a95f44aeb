//! Wire payload types for the backend JSON contract.
//!
//! Field names match the backend exactly (including the `cooccurence_related`
//! spelling). All entities are ephemeral: rebuilt from each response, never
//! persisted.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Response body from `/api/all_symptoms`.
#[derive(Debug, Clone, Deserialize)]
pub struct AllSymptomsResponse {
    pub all_symptoms: Vec<String>,
}

/// One semantically similar symptom with its similarity score in [0,1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticMatch {
    pub symptom: String,
    pub score: f64,
}

/// Response body from `/api/related_symptoms`.
///
/// The backend may answer `null` when it knows nothing about the queried
/// symptom; callers receive that as `Option<RelatedSymptoms>`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelatedSymptoms {
    #[serde(default)]
    pub cooccurence_related: Vec<String>,
    #[serde(default)]
    pub semantic_related: Vec<SemanticMatch>,
}

/// One symptom mention extracted from free text, confidence in [0,1].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedSymptom {
    pub symptom: String,
    pub confidence: f64,
    /// Set by the backend when the mention was a literal keyword hit
    /// rather than a model extraction.
    #[serde(default)]
    pub is_direct_match: bool,
}

/// Response body from `/api/analyze_text`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub extracted_symptoms: Vec<ExtractedSymptom>,
    /// Disease name → non-negative relevance score, no fixed upper bound.
    #[serde(default)]
    pub possible_diseases: HashMap<String, f64>,
}

/// One catalog entry from `/api/diseases`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disease {
    pub disease: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response body from `/api/get` (liveness ping).
#[derive(Debug, Clone, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

// Request bodies -------------------------------------------------------------

/// Request body for `/api/related_symptoms`.
#[derive(Debug, Serialize)]
pub struct RelatedSymptomsRequest<'a> {
    pub symptom: &'a str,
}

/// Request body for `/api/analyze_text`.
#[derive(Debug, Serialize)]
pub struct AnalyzeTextRequest<'a> {
    pub text: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn related_symptoms_accepts_full_payload() {
        let json = r#"{
            "cooccurence_related": ["Fever", "Chills"],
            "semantic_related": [{"symptom": "High temperature", "score": 0.87}]
        }"#;
        let parsed: RelatedSymptoms = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.cooccurence_related, vec!["Fever", "Chills"]);
        assert_eq!(parsed.semantic_related.len(), 1);
        assert!((parsed.semantic_related[0].score - 0.87).abs() < f64::EPSILON);
    }

    #[test]
    fn related_symptoms_null_parses_as_none() {
        let parsed: Option<RelatedSymptoms> = serde_json::from_str("null").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn related_symptoms_missing_lists_default_empty() {
        let parsed: RelatedSymptoms = serde_json::from_str("{}").unwrap();
        assert!(parsed.cooccurence_related.is_empty());
        assert!(parsed.semantic_related.is_empty());
    }

    #[test]
    fn extracted_symptom_direct_match_defaults_false() {
        let parsed: ExtractedSymptom =
            serde_json::from_str(r#"{"symptom": "cough", "confidence": 0.9}"#).unwrap();
        assert!(!parsed.is_direct_match);
    }

    #[test]
    fn disease_description_is_optional() {
        let parsed: Disease = serde_json::from_str(r#"{"disease": "Influenza"}"#).unwrap();
        assert_eq!(parsed.disease, "Influenza");
        assert!(parsed.description.is_none());
    }

    #[test]
    fn analysis_response_tolerates_missing_fields() {
        let parsed: AnalysisResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.extracted_symptoms.is_empty());
        assert!(parsed.possible_diseases.is_empty());
    }

    #[test]
    fn request_bodies_serialize_expected_keys() {
        let related = serde_json::to_value(RelatedSymptomsRequest { symptom: "Fever" }).unwrap();
        assert_eq!(related, serde_json::json!({"symptom": "Fever"}));

        let analyze = serde_json::to_value(AnalyzeTextRequest { text: "I feel hot" }).unwrap();
        assert_eq!(analyze, serde_json::json!({"text": "I feel hot"}));
    }
}
