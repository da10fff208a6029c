//! Static variable CRUD endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::domain::variable::{
    CreateVariableRequest, StaticVariable, UpdateVariableRequest, VariableListResponse,
};
use crate::error::AppError;
use crate::server::AppState;

/// POST /api/v1/variables - Create a new static variable
#[tracing::instrument(
    name = "http.create_variable",
    skip(state, request),
    fields(name = %request.name)
)]
pub async fn create_variable(
    State(state): State<AppState>,
    Json(request): Json<CreateVariableRequest>,
) -> Result<(StatusCode, Json<StaticVariable>), AppError> {
    let variable = state.variables.create(request)?;
    Ok((StatusCode::CREATED, Json(variable)))
}

/// GET /api/v1/variables - List all static variables
#[tracing::instrument(name = "http.list_variables", skip(state))]
pub async fn list_variables(State(state): State<AppState>) -> Json<VariableListResponse> {
    let variables = state.variables.list();
    let total = variables.len();

    Json(VariableListResponse { variables, total })
}

/// PUT /api/v1/variables/:id - Update an existing static variable
#[tracing::instrument(name = "http.update_variable", skip(state, request))]
pub async fn update_variable(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateVariableRequest>,
) -> Result<Json<StaticVariable>, AppError> {
    Ok(Json(state.variables.update(&id, request)?))
}

/// DELETE /api/v1/variables/:id - Delete a static variable
#[tracing::instrument(name = "http.delete_variable", skip(state))]
pub async fn delete_variable(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.variables.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}
