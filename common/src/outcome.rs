use serde_json::Value;

use crate::error::ClientError;
use crate::http::HttpResponse;

/// Generic message shown when no response was received.
pub const CONNECTIVITY_MESSAGE: &str = "Une erreur s'est produite. Veuillez réessayer.";

/// How an endpoint's success body is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Text(String),
    Json(Value),
}

impl Payload {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(text) => Some(text),
            Payload::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Text(_) => None,
        }
    }
}

/// Result of one submission attempt, consumed right after rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Success {
        payload: Payload,
        /// Set when the server redirected the request, e.g. registration
        /// answering `303 See Other` towards the login page.
        redirect: Option<String>,
    },
    Failure {
        message: String,
        /// `None` when the request never got a response.
        status: Option<u16>,
    },
}

impl SubmissionOutcome {
    pub fn connectivity() -> Self {
        SubmissionOutcome::Failure {
            message: CONNECTIVITY_MESSAGE.to_string(),
            status: None,
        }
    }

    pub fn from_response(kind: ResponseKind, response: HttpResponse) -> Self {
        if !response.is_success() {
            return SubmissionOutcome::Failure {
                message: response.body.trim().to_string(),
                status: Some(response.status),
            };
        }

        if let Some(target) = response.redirected_to {
            return SubmissionOutcome::Success {
                payload: Payload::Text(response.body),
                redirect: Some(target),
            };
        }

        let payload = match kind {
            ResponseKind::Text => Payload::Text(response.body),
            ResponseKind::Json => match serde_json::from_str(&response.body) {
                Ok(value) => Payload::Json(value),
                Err(e) => {
                    let err = ClientError::MalformedResponse {
                        status: response.status,
                        reason: e.to_string(),
                    };
                    log::error!("{}", err);
                    return SubmissionOutcome::Failure {
                        message: String::new(),
                        status: Some(response.status),
                    };
                }
            },
        };
        SubmissionOutcome::Success {
            payload,
            redirect: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success { .. })
    }

    /// True for failures where nothing came back from the server.
    pub fn is_connectivity_failure(&self) -> bool {
        matches!(self, SubmissionOutcome::Failure { status: None, .. })
    }
}

/// Pulls a human message out of a diagnostic body: the `message` or `error`
/// member of a JSON object when present, the trimmed text otherwise.
pub fn diagnostic_text(body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        for key in ["message", "error"] {
            if let Some(Value::String(text)) = map.get(key) {
                return text.trim().to_string();
            }
        }
    }
    trimmed.to_string()
}
