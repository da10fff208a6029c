//! Generated email history types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::template::RenderedEmail;

/// An immutable record of one completed render. Building and template names
/// are denormalized so history stays readable after the source entities are
/// renamed or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedEmail {
    /// Rendered subject line
    pub subject: String,

    /// Rendered body text
    pub body: String,

    /// Display name of the source building at render time
    pub building_name: String,

    /// Display name of the source template at render time
    pub template_name: String,

    /// When the render completed
    pub generated_at: DateTime<Utc>,
}

impl GeneratedEmail {
    /// Stamp a rendered subject/body pair with the current time and the
    /// source entities' display names.
    pub fn from_rendered(
        rendered: RenderedEmail,
        building_name: &str,
        template_name: &str,
    ) -> Self {
        Self {
            subject: rendered.subject,
            body: rendered.body,
            building_name: building_name.to_string(),
            template_name: template_name.to_string(),
            generated_at: Utc::now(),
        }
    }
}

/// Response for listing generated emails
#[derive(Debug, Serialize)]
pub struct GeneratedEmailListResponse {
    /// Generated emails, newest first
    pub emails: Vec<GeneratedEmail>,

    /// Total count
    pub total: usize,
}
