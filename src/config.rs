/// Application-level constants
pub const APP_NAME: &str = "SymptomScope";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Env var overriding the backend base URL.
pub const API_URL_ENV: &str = "SYMPTOMSCOPE_API_URL";

/// Default backend instance (local Flask-style dev server).
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Fixed endpoint paths on the backend.
pub const ALL_SYMPTOMS_PATH: &str = "/api/all_symptoms";
pub const RELATED_SYMPTOMS_PATH: &str = "/api/related_symptoms";
pub const ANALYZE_TEXT_PATH: &str = "/api/analyze_text";
pub const DISEASES_PATH: &str = "/api/diseases";
pub const PING_PATH: &str = "/api/get";

/// Sample symptoms shown when the all-symptoms fetch fails or returns
/// an unexpected shape. The dropdown must never come up empty.
pub const FALLBACK_SYMPTOMS: &[&str] = &["Headache", "Fever", "Fatigue", "Cough", "Nausea"];

/// Get the backend base URL (env override, else local default).
pub fn api_base_url() -> String {
    std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Default log filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    "symptomscope=info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_is_local() {
        assert!(DEFAULT_API_URL.contains("localhost"));
    }

    #[test]
    fn fallback_list_has_five_samples() {
        assert_eq!(FALLBACK_SYMPTOMS.len(), 5);
        assert!(FALLBACK_SYMPTOMS.contains(&"Fever"));
    }

    #[test]
    fn endpoint_paths_are_rooted() {
        for path in [
            ALL_SYMPTOMS_PATH,
            RELATED_SYMPTOMS_PATH,
            ANALYZE_TEXT_PATH,
            DISEASES_PATH,
            PING_PATH,
        ] {
            assert!(path.starts_with("/api/"), "unexpected path: {path}");
        }
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, env!("CARGO_PKG_VERSION"));
    }
}
