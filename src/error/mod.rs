use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::building::BuildingError;
use crate::domain::generate::GenerateError;
use crate::domain::template::TemplateError;
use crate::domain::variable::VariableError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<BuildingError> for AppError {
    fn from(err: BuildingError) -> Self {
        match err {
            BuildingError::NotFound(_) | BuildingError::FieldNotFound { .. } => {
                AppError::NotFound(err.to_string())
            }
            BuildingError::InvalidBuilding(_) => AppError::Validation(err.to_string()),
        }
    }
}

impl From<VariableError> for AppError {
    fn from(err: VariableError) -> Self {
        match err {
            VariableError::NotFound(_) => AppError::NotFound(err.to_string()),
            VariableError::AlreadyExists(_) => AppError::Conflict(err.to_string()),
            VariableError::InvalidVariable(_) => AppError::Validation(err.to_string()),
        }
    }
}

impl From<TemplateError> for AppError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::NotFound(_) => AppError::NotFound(err.to_string()),
            TemplateError::InvalidTemplate(_) => AppError::Validation(err.to_string()),
        }
    }
}

impl From<GenerateError> for AppError {
    fn from(err: GenerateError) -> Self {
        AppError::NotFound(err.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

/// Check if running in production mode (based on RUN_MODE env var)
fn is_production() -> bool {
    std::env::var("RUN_MODE")
        .map(|m| m == "production" || m == "prod")
        .unwrap_or(false)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, client_message, log_message) = match &self {
            AppError::Config(e) => {
                let log_msg = e.to_string();
                let client_msg = if is_production() {
                    "Configuration error".to_string()
                } else {
                    log_msg.clone()
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONFIG_ERROR",
                    client_msg,
                    log_msg,
                )
            }
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                msg.clone(),
                msg.clone(),
            ),
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone(), msg.clone())
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, "CONFLICT", msg.clone(), msg.clone())
            }
            AppError::Internal(e) => {
                let log_msg = e.clone();
                let client_msg = if is_production() {
                    "Internal server error".to_string()
                } else {
                    log_msg.clone()
                };
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    client_msg,
                    log_msg,
                )
            }
        };

        if status.is_server_error() {
            tracing::error!(code, "{}", log_message);
        } else {
            tracing::debug!(code, "{}", log_message);
        }

        let body = Json(ErrorResponse {
            error: ErrorBody {
                code: code.to_string(),
                message: client_message,
            },
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_domain_errors_map_to_app_error() {
        let err: AppError = TemplateError::NotFound("t".to_string()).into();
        assert!(matches!(err, AppError::NotFound(_)));

        let err: AppError = VariableError::AlreadyExists("v".to_string()).into();
        assert!(matches!(err, AppError::Conflict(_)));

        let err: AppError = BuildingError::InvalidBuilding("b".to_string()).into();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
