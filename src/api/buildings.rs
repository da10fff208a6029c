//! Building CRUD endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::domain::building::{
    AddFieldRequest, Building, BuildingListResponse, CreateBuildingRequest, UpdateBuildingRequest,
};
use crate::domain::groups::{variable_groups, VariableGroup};
use crate::error::AppError;
use crate::server::AppState;

/// POST /api/v1/buildings - Create a new building
#[tracing::instrument(
    name = "http.create_building",
    skip(state, request),
    fields(name = %request.name)
)]
pub async fn create_building(
    State(state): State<AppState>,
    Json(request): Json<CreateBuildingRequest>,
) -> Result<(StatusCode, Json<Building>), AppError> {
    let building = state.buildings.create(request)?;
    Ok((StatusCode::CREATED, Json(building)))
}

/// GET /api/v1/buildings - List all buildings
#[tracing::instrument(name = "http.list_buildings", skip(state))]
pub async fn list_buildings(State(state): State<AppState>) -> Json<BuildingListResponse> {
    let buildings = state.buildings.list();
    let total = buildings.len();

    Json(BuildingListResponse { buildings, total })
}

/// GET /api/v1/buildings/:id - Get a specific building
#[tracing::instrument(name = "http.get_building", skip(state))]
pub async fn get_building(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Building>, AppError> {
    Ok(Json(state.buildings.get(&id)?))
}

/// PUT /api/v1/buildings/:id - Update an existing building
#[tracing::instrument(name = "http.update_building", skip(state, request))]
pub async fn update_building(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateBuildingRequest>,
) -> Result<Json<Building>, AppError> {
    Ok(Json(state.buildings.update(&id, request)?))
}

/// DELETE /api/v1/buildings/:id - Delete a building
#[tracing::instrument(name = "http.delete_building", skip(state))]
pub async fn delete_building(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.buildings.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/buildings/:id/fields - Add an attribute field
#[tracing::instrument(
    name = "http.add_building_field",
    skip(state, request),
    fields(field = %request.name)
)]
pub async fn add_building_field(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddFieldRequest>,
) -> Result<Json<Building>, AppError> {
    Ok(Json(state.buildings.add_field(&id, request)?))
}

/// DELETE /api/v1/buildings/:id/fields/:name - Remove an attribute field
#[tracing::instrument(name = "http.remove_building_field", skip(state))]
pub async fn remove_building_field(
    State(state): State<AppState>,
    Path((id, name)): Path<(String, String)>,
) -> Result<Json<Building>, AppError> {
    Ok(Json(state.buildings.remove_field(&id, &name)?))
}

/// GET /api/v1/buildings/:id/variables - Variable groups for the editor panel
#[tracing::instrument(name = "http.building_variable_groups", skip(state))]
pub async fn building_variable_groups(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<VariableGroup>>, AppError> {
    let building = state.buildings.get(&id)?;
    let static_variables = state.variables.list();

    Ok(Json(variable_groups(&building, &static_variables)))
}
