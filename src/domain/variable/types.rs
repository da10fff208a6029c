//! Static variable types and error definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Static-variable-specific error type
#[derive(Debug, Error)]
pub enum VariableError {
    #[error("Static variable not found: {0}")]
    NotFound(String),

    #[error("Static variable already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid static variable: {0}")]
    InvalidVariable(String),
}

/// Result type for static variable operations
pub type VariableResult<T> = Result<T, VariableError>;

/// A global name/value pair available to all templates regardless of building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticVariable {
    /// Unique identifier
    pub id: String,

    /// Variable name, unique across the set; must be usable inside a
    /// `{{name}}` token
    pub name: String,

    /// Substitution value
    pub value: String,

    /// Operator-facing description (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl StaticVariable {
    /// Validate the variable
    pub fn validate(&self) -> VariableResult<()> {
        if self.name.is_empty() || self.name.len() > 128 {
            return Err(VariableError::InvalidVariable(
                "Name must be 1-128 characters".to_string(),
            ));
        }

        // Names outside the placeholder alphabet could never be referenced.
        if !self
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(VariableError::InvalidVariable(
                "Name must contain only alphanumeric characters or underscore".to_string(),
            ));
        }

        Ok(())
    }
}

/// Request to create a new static variable
#[derive(Debug, Deserialize)]
pub struct CreateVariableRequest {
    /// Variable name
    pub name: String,

    /// Substitution value
    pub value: String,

    /// Description (optional)
    pub description: Option<String>,
}

impl From<CreateVariableRequest> for StaticVariable {
    fn from(req: CreateVariableRequest) -> Self {
        let now = Utc::now();
        StaticVariable {
            id: uuid::Uuid::new_v4().to_string(),
            name: req.name,
            value: req.value,
            description: req.description,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request to update an existing static variable
#[derive(Debug, Deserialize)]
pub struct UpdateVariableRequest {
    /// Variable name (optional)
    pub name: Option<String>,

    /// Substitution value (optional)
    pub value: Option<String>,

    /// Description: absent leaves it unchanged, null clears it
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}

/// Distinguishes an absent field (outer `None`, via the serde default) from
/// an explicit JSON `null` (`Some(None)`).
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Response for listing static variables
#[derive(Debug, Serialize)]
pub struct VariableListResponse {
    /// List of static variables
    pub variables: Vec<StaticVariable>,

    /// Total count
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_distinguishes_null_from_absent() {
        let req: UpdateVariableRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(req.description, None);

        let req: UpdateVariableRequest =
            serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(req.description, Some(None));

        let req: UpdateVariableRequest =
            serde_json::from_str(r#"{"description": "kept"}"#).unwrap();
        assert_eq!(req.description, Some(Some("kept".to_string())));
    }
}
