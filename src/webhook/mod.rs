//! Outbound webhook client.
//!
//! Forwards generated emails to an external draft-creation webhook (an n8n
//! flow that files the email as a Gmail draft). Delivery is best-effort: the
//! outcome is reported back to the caller as a success flag plus message and
//! never affects the stored render.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::config::WebhookConfig;
use crate::domain::history::GeneratedEmail;

/// JSON payload posted to the draft-creation webhook
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftPayload {
    pub subject: String,
    pub body: String,
    pub building_name: String,
    pub template_name: String,
    pub generated_at: chrono::DateTime<Utc>,
    pub source: String,
}

impl From<&GeneratedEmail> for DraftPayload {
    fn from(email: &GeneratedEmail) -> Self {
        Self {
            subject: email.subject.clone(),
            body: email.body.clone(),
            building_name: email.building_name.clone(),
            template_name: email.template_name.clone(),
            generated_at: email.generated_at,
            source: "email-template-service".to_string(),
        }
    }
}

/// Delivery outcome reported to the caller
#[derive(Debug, Clone, Serialize)]
pub struct WebhookResponse {
    pub success: bool,
    pub message: String,
}

impl WebhookResponse {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

pub struct WebhookClient {
    url: Option<String>,
    timeout: Duration,
    http: reqwest::Client,
}

impl WebhookClient {
    pub fn new(config: &WebhookConfig) -> Self {
        Self {
            url: config.url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            http: reqwest::Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Forward one generated email for draft creation.
    #[tracing::instrument(name = "webhook.send_draft", skip(self, email))]
    pub async fn send_draft(&self, email: &GeneratedEmail) -> WebhookResponse {
        let Some(url) = &self.url else {
            return WebhookResponse::failed("Webhook URL is not configured");
        };

        let payload = DraftPayload::from(email);
        match self.post(url, &payload).await {
            Ok(()) => WebhookResponse::ok("Email forwarded for draft creation"),
            Err(message) => {
                tracing::warn!(%message, "Webhook delivery failed");
                WebhookResponse::failed(message)
            }
        }
    }

    /// Connectivity probe with a marker payload.
    #[tracing::instrument(name = "webhook.test_connection", skip(self))]
    pub async fn test_connection(&self) -> WebhookResponse {
        let Some(url) = &self.url else {
            return WebhookResponse::failed("Webhook URL is not configured");
        };

        let probe = serde_json::json!({
            "test": true,
            "message": "Connection test from email template service",
            "timestamp": Utc::now(),
        });

        match self.post(url, &probe).await {
            Ok(()) => WebhookResponse::ok("Webhook connection successful"),
            Err(message) => {
                WebhookResponse::failed(format!("Webhook connection failed: {message}"))
            }
        }
    }

    async fn post<T: Serialize + ?Sized>(&self, url: &str, payload: &T) -> Result<(), String> {
        let response = self
            .http
            .post(url)
            .timeout(self.timeout)
            .json(payload)
            .send()
            .await
            .map_err(|e| format!("Request failed: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Server returned {status}"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::RenderedEmail;

    fn sample_email() -> GeneratedEmail {
        GeneratedEmail::from_rendered(
            RenderedEmail {
                subject: "Subject".to_string(),
                body: "Body".to_string(),
            },
            "Oak Street",
            "Notice",
        )
    }

    #[test]
    fn test_payload_uses_camel_case_keys() {
        let payload = DraftPayload::from(&sample_email());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["buildingName"], "Oak Street");
        assert_eq!(json["templateName"], "Notice");
        assert_eq!(json["source"], "email-template-service");
        assert!(json.get("generatedAt").is_some());
    }

    #[tokio::test]
    async fn test_unconfigured_client_reports_failure() {
        let client = WebhookClient::new(&WebhookConfig {
            url: None,
            timeout_seconds: 1,
        });

        assert!(!client.is_configured());

        let response = client.send_draft(&sample_email()).await;
        assert!(!response.success);
        assert!(response.message.contains("not configured"));

        let probe = client.test_connection().await;
        assert!(!probe.success);
    }
}
