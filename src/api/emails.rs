//! Email generation, history and webhook forwarding endpoints.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::generate::generate_email;
use crate::domain::history::{GeneratedEmail, GeneratedEmailListResponse};
use crate::error::AppError;
use crate::server::AppState;
use crate::webhook::WebhookResponse;

#[derive(Debug, Deserialize)]
pub struct GenerateEmailRequest {
    pub template_id: String,
    pub building_id: String,

    /// Also forward the result to the draft-creation webhook
    #[serde(default)]
    pub forward: bool,
}

#[derive(Debug, Serialize)]
pub struct GenerateEmailResponse {
    pub email: GeneratedEmail,

    /// Present only when forwarding was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook: Option<WebhookResponse>,
}

/// POST /api/v1/emails/generate - Render a template against a building
#[tracing::instrument(
    name = "http.generate_email",
    skip(state, request),
    fields(template_id = %request.template_id, building_id = %request.building_id)
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateEmailRequest>,
) -> Result<(StatusCode, Json<GenerateEmailResponse>), AppError> {
    let email = generate_email(
        state.templates.as_ref(),
        state.buildings.as_ref(),
        state.variables.as_ref(),
        state.history.as_ref(),
        &request.template_id,
        &request.building_id,
    )?;

    let webhook = if request.forward {
        Some(state.webhook.send_draft(&email).await)
    } else {
        None
    };

    Ok((
        StatusCode::CREATED,
        Json(GenerateEmailResponse { email, webhook }),
    ))
}

/// GET /api/v1/emails - Generated email history, newest first
#[tracing::instrument(name = "http.list_emails", skip(state))]
pub async fn list_emails(State(state): State<AppState>) -> Json<GeneratedEmailListResponse> {
    let emails = state.history.list();
    let total = emails.len();

    Json(GeneratedEmailListResponse { emails, total })
}

#[derive(Debug, Deserialize)]
pub struct ForwardEmailRequest {
    pub subject: String,
    pub body: String,
    pub building_name: String,
    pub template_name: String,

    /// Render timestamp; defaults to now for ad hoc forwards
    pub generated_at: Option<DateTime<Utc>>,
}

/// POST /api/v1/emails/forward - Forward an email to the draft webhook.
/// Delivery failure is reported in the body, not as an HTTP error.
#[tracing::instrument(
    name = "http.forward_email",
    skip(state, request),
    fields(template = %request.template_name)
)]
pub async fn forward_email(
    State(state): State<AppState>,
    Json(request): Json<ForwardEmailRequest>,
) -> Json<WebhookResponse> {
    let email = GeneratedEmail {
        subject: request.subject,
        body: request.body,
        building_name: request.building_name,
        template_name: request.template_name,
        generated_at: request.generated_at.unwrap_or_else(Utc::now),
    };

    Json(state.webhook.send_draft(&email).await)
}

/// POST /api/v1/webhook/test - Webhook connectivity probe
#[tracing::instrument(name = "http.test_webhook", skip(state))]
pub async fn test_webhook(State(state): State<AppState>) -> Json<WebhookResponse> {
    Json(state.webhook.test_connection().await)
}
