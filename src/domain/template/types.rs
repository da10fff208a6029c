//! Template types and error definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::placeholder::extract_placeholders;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Invalid template: {0}")]
    InvalidTemplate(String),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// An email template definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
    /// Unique template identifier
    pub id: String,

    /// Human-readable template name
    pub name: String,

    /// Category tag used for grouping in listings
    pub category: String,

    /// Subject line with {{variable}} placeholders
    pub subject: String,

    /// Body text with {{variable}} placeholders
    pub body: String,

    /// Derived cache: placeholder names present in subject and body, in
    /// first-occurrence order. Maintained exclusively by the store on
    /// create/update; never accepted from callers.
    #[serde(default)]
    pub used_variables: Vec<String>,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// Validate the template
    pub fn validate(&self) -> TemplateResult<()> {
        if self.name.is_empty() || self.name.len() > 256 {
            return Err(TemplateError::InvalidTemplate(
                "Name must be 1-256 characters".to_string(),
            ));
        }

        if self.category.is_empty() || self.category.len() > 64 {
            return Err(TemplateError::InvalidTemplate(
                "Category must be 1-64 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Recompute the used-variable cache from the live subject and body.
    /// This is the only mutation path for `used_variables`.
    pub(crate) fn refresh_used_variables(&mut self) {
        self.used_variables = extract_placeholders(&format!("{} {}", self.subject, self.body));
    }
}

/// Request to create a new template
#[derive(Debug, Deserialize)]
pub struct CreateTemplateRequest {
    /// Human-readable template name
    pub name: String,

    /// Category tag
    pub category: String,

    /// Subject line
    pub subject: String,

    /// Body text
    pub body: String,
}

impl From<CreateTemplateRequest> for Template {
    fn from(req: CreateTemplateRequest) -> Self {
        let now = Utc::now();
        let mut template = Template {
            id: uuid::Uuid::new_v4().to_string(),
            name: req.name,
            category: req.category,
            subject: req.subject,
            body: req.body,
            used_variables: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        template.refresh_used_variables();
        template
    }
}

/// Request to update an existing template
#[derive(Debug, Deserialize)]
pub struct UpdateTemplateRequest {
    /// Human-readable template name (optional)
    pub name: Option<String>,

    /// Category tag (optional)
    pub category: Option<String>,

    /// Subject line (optional)
    pub subject: Option<String>,

    /// Body text (optional)
    pub body: Option<String>,
}

/// Response for listing templates
#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    /// List of templates
    pub templates: Vec<Template>,

    /// Total count
    pub total: usize,
}
