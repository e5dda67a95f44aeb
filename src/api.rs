//! HTTP client for the symptom-checker backend.
//!
//! Every endpoint is a `POST` with a JSON body (the ping is the one `GET`).
//! Any non-2xx status maps to the same generic network failure; there is no
//! status-specific branching beyond logging the status and body.

use serde::de::DeserializeOwned;

use crate::config;
use crate::error::CheckerError;
use crate::models::{
    AllSymptomsResponse, AnalysisResponse, AnalyzeTextRequest, Disease, PingResponse,
    RelatedSymptoms, RelatedSymptomsRequest,
};

/// Backend access seam. The dispatcher only ever talks to this trait, so tests
/// swap in [`MockSymptomApi`] without a running server.
pub trait SymptomApi {
    fn fetch_all_symptoms(&self) -> Result<Vec<String>, CheckerError>;
    fn fetch_related(&self, symptom: &str) -> Result<Option<RelatedSymptoms>, CheckerError>;
    fn analyze_text(&self, text: &str) -> Result<AnalysisResponse, CheckerError>;
    fn fetch_diseases(&self) -> Result<Vec<Disease>, CheckerError>;
    fn ping(&self) -> Result<String, CheckerError>;
}

/// Blocking HTTP client for the backend API.
pub struct BackendClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl BackendClient {
    /// Create a client pointing at the given base URL.
    pub fn new(base_url: &str) -> Result<Self, CheckerError> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()
            .map_err(|e| CheckerError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Client for the configured backend (env override or local default).
    pub fn from_env() -> Result<Self, CheckerError> {
        Self::new(&config::api_base_url())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post_json<B: serde::Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, CheckerError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self.client.post(&url).json(body).send().map_err(|e| {
            if e.is_connect() {
                CheckerError::Transport(format!("connection to {} failed", self.base_url))
            } else {
                CheckerError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::warn!(%status, path, body, "backend returned error status");
            return Err(CheckerError::Network {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .map_err(|e| CheckerError::DataShape(e.to_string()))
    }
}

impl SymptomApi for BackendClient {
    fn fetch_all_symptoms(&self) -> Result<Vec<String>, CheckerError> {
        let parsed: AllSymptomsResponse =
            self.post_json(config::ALL_SYMPTOMS_PATH, &serde_json::json!({}))?;
        Ok(parsed.all_symptoms)
    }

    fn fetch_related(&self, symptom: &str) -> Result<Option<RelatedSymptoms>, CheckerError> {
        self.post_json(
            config::RELATED_SYMPTOMS_PATH,
            &RelatedSymptomsRequest { symptom },
        )
    }

    fn analyze_text(&self, text: &str) -> Result<AnalysisResponse, CheckerError> {
        self.post_json(config::ANALYZE_TEXT_PATH, &AnalyzeTextRequest { text })
    }

    fn fetch_diseases(&self) -> Result<Vec<Disease>, CheckerError> {
        self.post_json(config::DISEASES_PATH, &serde_json::json!({}))
    }

    fn ping(&self) -> Result<String, CheckerError> {
        let url = format!("{}{}", self.base_url, config::PING_PATH);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| CheckerError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CheckerError::Network {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let parsed: PingResponse = response
            .json()
            .map_err(|e| CheckerError::DataShape(e.to_string()))?;
        Ok(parsed.message)
    }
}

/// Mock backend for tests — canned responses plus a log of endpoints hit,
/// so tests can assert that input validation short-circuits the network.
pub struct MockSymptomApi {
    all_symptoms: Result<Vec<String>, CheckerError>,
    related: Result<Option<RelatedSymptoms>, CheckerError>,
    analysis: Result<AnalysisResponse, CheckerError>,
    diseases: Result<Vec<Disease>, CheckerError>,
    calls: std::cell::RefCell<Vec<&'static str>>,
    analyzed_texts: std::cell::RefCell<Vec<String>>,
}

impl Default for MockSymptomApi {
    fn default() -> Self {
        Self {
            all_symptoms: Ok(Vec::new()),
            related: Ok(Some(RelatedSymptoms::default())),
            analysis: Ok(AnalysisResponse::default()),
            diseases: Ok(Vec::new()),
            calls: std::cell::RefCell::new(Vec::new()),
            analyzed_texts: std::cell::RefCell::new(Vec::new()),
        }
    }
}

impl MockSymptomApi {
    pub fn with_symptoms(symptoms: &[&str]) -> Self {
        Self::default().symptoms(Ok(symptoms.iter().map(|s| s.to_string()).collect()))
    }

    pub fn symptoms(mut self, result: Result<Vec<String>, CheckerError>) -> Self {
        self.all_symptoms = result;
        self
    }

    pub fn related(mut self, result: Result<Option<RelatedSymptoms>, CheckerError>) -> Self {
        self.related = result;
        self
    }

    pub fn analysis(mut self, result: Result<AnalysisResponse, CheckerError>) -> Self {
        self.analysis = result;
        self
    }

    pub fn diseases(mut self, result: Result<Vec<Disease>, CheckerError>) -> Self {
        self.diseases = result;
        self
    }

    /// Endpoints hit so far, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    /// Texts sent to `analyze_text`, in call order.
    pub fn analyzed_texts(&self) -> Vec<String> {
        self.analyzed_texts.borrow().clone()
    }

    fn record(&self, endpoint: &'static str) {
        self.calls.borrow_mut().push(endpoint);
    }

    fn clone_result<T: Clone>(result: &Result<T, CheckerError>) -> Result<T, CheckerError> {
        match result {
            Ok(v) => Ok(v.clone()),
            Err(CheckerError::UserInput(m)) => Err(CheckerError::UserInput(m.clone())),
            Err(CheckerError::Network { status, body }) => Err(CheckerError::Network {
                status: *status,
                body: body.clone(),
            }),
            Err(CheckerError::Transport(m)) => Err(CheckerError::Transport(m.clone())),
            Err(CheckerError::DataShape(m)) => Err(CheckerError::DataShape(m.clone())),
        }
    }
}

impl SymptomApi for MockSymptomApi {
    fn fetch_all_symptoms(&self) -> Result<Vec<String>, CheckerError> {
        self.record("all_symptoms");
        Self::clone_result(&self.all_symptoms)
    }

    fn fetch_related(&self, _symptom: &str) -> Result<Option<RelatedSymptoms>, CheckerError> {
        self.record("related_symptoms");
        Self::clone_result(&self.related)
    }

    fn analyze_text(&self, text: &str) -> Result<AnalysisResponse, CheckerError> {
        self.record("analyze_text");
        self.analyzed_texts.borrow_mut().push(text.to_string());
        Self::clone_result(&self.analysis)
    }

    fn fetch_diseases(&self) -> Result<Vec<Disease>, CheckerError> {
        self.record("diseases");
        Self::clone_result(&self.diseases)
    }

    fn ping(&self) -> Result<String, CheckerError> {
        self.record("ping");
        Ok("Hello, request ok".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_trims_trailing_slash() {
        let client = BackendClient::new("http://localhost:5000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:5000");
    }

    #[test]
    fn from_env_uses_default_when_unset() {
        // Relies on the env var being absent in the test environment.
        if std::env::var(config::API_URL_ENV).is_err() {
            let client = BackendClient::from_env().unwrap();
            assert_eq!(client.base_url(), config::DEFAULT_API_URL);
        }
    }

    #[test]
    fn mock_returns_configured_symptoms() {
        let api = MockSymptomApi::with_symptoms(&["Fever", "Cough"]);
        let symptoms = api.fetch_all_symptoms().unwrap();
        assert_eq!(symptoms, vec!["Fever", "Cough"]);
        assert_eq!(api.calls(), vec!["all_symptoms"]);
    }

    #[test]
    fn mock_records_calls_in_order() {
        let api = MockSymptomApi::default();
        let _ = api.fetch_related("Fever");
        let _ = api.analyze_text("headache");
        let _ = api.fetch_diseases();
        assert_eq!(
            api.calls(),
            vec!["related_symptoms", "analyze_text", "diseases"]
        );
    }

    #[test]
    fn mock_propagates_configured_error() {
        let api = MockSymptomApi::default().related(Err(CheckerError::Network {
            status: 500,
            body: String::new(),
        }));
        let err = api.fetch_related("Fever").unwrap_err();
        assert!(matches!(err, CheckerError::Network { status: 500, .. }));
    }
}
