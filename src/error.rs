//! Error taxonomy for checker operations.
//!
//! Three user-relevant kinds: input rejected before dispatch, network/transport
//! failure, and a well-formed response missing expected fields. Only the first
//! two ever surface as a blocking alert; shape errors on the all-symptoms
//! fetch degrade silently to the fallback list.

/// Errors from dispatcher operations.
#[derive(Debug, thiserror::Error)]
pub enum CheckerError {
    /// Required input missing before dispatch — no network call was made.
    #[error("{0}")]
    UserInput(String),

    /// Backend answered with a non-2xx status.
    #[error("Backend error (HTTP {status})")]
    Network { status: u16, body: String },

    /// Connection, DNS, or timeout failure below HTTP.
    #[error("Could not reach backend: {0}")]
    Transport(String),

    /// Well-formed JSON that does not match the expected payload shape.
    #[error("Unexpected response shape: {0}")]
    DataShape(String),
}

impl CheckerError {
    /// Message for the blocking alert shown to the user.
    ///
    /// Mirrors the tone of the original UI: input problems are phrased as
    /// instructions, everything else as a retryable failure.
    pub fn alert_message(&self, action: &str) -> String {
        match self {
            CheckerError::UserInput(msg) => msg.clone(),
            _ => format!("Failed to {action}. Please try again."),
        }
    }
}

impl From<reqwest::Error> for CheckerError {
    fn from(err: reqwest::Error) -> Self {
        CheckerError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_input_alert_uses_own_message() {
        let err = CheckerError::UserInput("Please select a symptom first.".into());
        assert_eq!(
            err.alert_message("fetch related symptoms"),
            "Please select a symptom first."
        );
    }

    #[test]
    fn network_alert_is_generic_retry_prompt() {
        let err = CheckerError::Network {
            status: 500,
            body: "internal".into(),
        };
        assert_eq!(
            err.alert_message("analyze symptoms"),
            "Failed to analyze symptoms. Please try again."
        );
    }

    #[test]
    fn transport_alert_matches_network_alert() {
        let transport = CheckerError::Transport("connection refused".into());
        let network = CheckerError::Network {
            status: 502,
            body: String::new(),
        };
        assert_eq!(
            transport.alert_message("fetch related symptoms"),
            network.alert_message("fetch related symptoms")
        );
    }
}
