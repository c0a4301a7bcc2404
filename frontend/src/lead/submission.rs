use std::future::Future;
use std::pin::Pin;

use gloo_net::http::Request;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config;
use crate::lead::attribution::Attribution;

pub const GENERIC_FAILURE: &str = "Une erreur est survenue. Veuillez réessayer.";

/// One ambassador application, as sent to the agent request endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadSubmission {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub submitted_by: Option<String>,
    #[serde(flatten)]
    pub attribution: Attribution,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("request rejected: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },
    #[error("request failed: {0}")]
    Transport(String),
}

impl SubmissionError {
    /// Text shown to the visitor: the service's own words when it gave any.
    pub fn user_message(&self) -> String {
        match self {
            SubmissionError::Rejected { message: Some(message) } if !message.is_empty() => {
                message.clone()
            }
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}

pub type SubmitFuture<'a> = Pin<Box<dyn Future<Output = Result<(), SubmissionError>> + 'a>>;

pub trait SubmissionService {
    fn submit(&self, lead: LeadSubmission) -> SubmitFuture<'_>;
}

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

pub struct HttpSubmissionService {
    endpoint: String,
}

impl HttpSubmissionService {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn from_config() -> Self {
        Self::new(config::lead_submission_url())
    }
}

impl SubmissionService for HttpSubmissionService {
    fn submit(&self, lead: LeadSubmission) -> SubmitFuture<'_> {
        Box::pin(async move {
            let request = Request::post(&self.endpoint)
                .json(&lead)
                .map_err(|e| SubmissionError::Transport(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| SubmissionError::Transport(e.to_string()))?;

            if response.ok() {
                info!("Agent request accepted");
                return Ok(());
            }

            warn!("Agent request rejected with status: {}", response.status());
            let message = match response.json::<ErrorResponse>().await {
                Ok(body) => body.message.or(body.error),
                Err(_) => None,
            };
            Err(SubmissionError::Rejected { message })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submission_serializes_flat_with_nulls() {
        let lead = LeadSubmission {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-1234".into(),
            submitted_by: None,
            attribution: Attribution {
                utm_source: Some("facebook".into()),
                assigned_user_id: Some("42".into()),
                ..Attribution::default()
            },
        };

        assert_eq!(
            serde_json::to_value(&lead).unwrap(),
            json!({
                "full_name": "Jane Doe",
                "email": "jane@example.com",
                "phone": "555-1234",
                "submitted_by": null,
                "utm_source": "facebook",
                "utm_medium": null,
                "utm_campaign": null,
                "agent": null,
                "assigned_user_id": "42",
            })
        );
    }

    #[test]
    fn user_message_prefers_service_text() {
        let rejected = SubmissionError::Rejected { message: Some("Duplicate entry".into()) };
        assert_eq!(rejected.user_message(), "Duplicate entry");
    }

    #[test]
    fn user_message_falls_back_to_generic() {
        let cases = [
            SubmissionError::Rejected { message: None },
            SubmissionError::Rejected { message: Some(String::new()) },
            SubmissionError::Transport("connection refused".into()),
        ];
        for failure in cases {
            assert_eq!(failure.user_message(), GENERIC_FAILURE);
        }
    }

    #[test]
    fn error_body_accepts_message_or_error() {
        let body: ErrorResponse = serde_json::from_str(r#"{"message":"Duplicate entry"}"#).unwrap();
        assert_eq!(body.message.or(body.error).as_deref(), Some("Duplicate entry"));

        let body: ErrorResponse = serde_json::from_str(r#"{"error":"Bad phone"}"#).unwrap();
        assert_eq!(body.message.or(body.error).as_deref(), Some("Bad phone"));
    }
}
