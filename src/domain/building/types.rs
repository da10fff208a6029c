//! Building types and error definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Building-specific error type
#[derive(Debug, Error)]
pub enum BuildingError {
    #[error("Building not found: {0}")]
    NotFound(String),

    #[error("Invalid building: {0}")]
    InvalidBuilding(String),

    #[error("Field not found on building {building_id}: {field}")]
    FieldNotFound { building_id: String, field: String },
}

/// Result type for building operations
pub type BuildingResult<T> = Result<T, BuildingError>;

/// A recipient context for templated emails: a display name plus a free-form,
/// ordered attribute map. Attributes have no fixed schema; fields come and go
/// over the building's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    /// Unique building identifier
    pub id: String,

    /// Display name, denormalized into generated-email history
    pub name: String,

    /// Ordered attribute map; values are coerced to strings at render time
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,

    /// Creation timestamp
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Building {
    /// Validate the building
    pub fn validate(&self) -> BuildingResult<()> {
        if self.name.is_empty() || self.name.len() > 256 {
            return Err(BuildingError::InvalidBuilding(
                "Name must be 1-256 characters".to_string(),
            ));
        }

        Ok(())
    }
}

/// Request to create a new building
#[derive(Debug, Deserialize)]
pub struct CreateBuildingRequest {
    /// Display name
    pub name: String,

    /// Initial attribute map (optional)
    #[serde(default)]
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl From<CreateBuildingRequest> for Building {
    fn from(req: CreateBuildingRequest) -> Self {
        let now = Utc::now();
        Building {
            id: uuid::Uuid::new_v4().to_string(),
            name: req.name,
            attributes: req.attributes,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request to update an existing building
#[derive(Debug, Deserialize)]
pub struct UpdateBuildingRequest {
    /// Display name (optional)
    pub name: Option<String>,

    /// Full replacement attribute map (optional)
    pub attributes: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Request to add a single attribute field to a building
#[derive(Debug, Deserialize)]
pub struct AddFieldRequest {
    /// Field name
    pub name: String,

    /// Initial value; defaults to the empty string
    #[serde(default = "default_field_value")]
    pub value: serde_json::Value,
}

fn default_field_value() -> serde_json::Value {
    serde_json::Value::String(String::new())
}

/// Response for listing buildings
#[derive(Debug, Serialize)]
pub struct BuildingListResponse {
    /// List of buildings
    pub buildings: Vec<Building>,

    /// Total count
    pub total: usize,
}
