use axum::{
    routing::{get, post, put},
    Router,
};

use crate::server::AppState;

use super::buildings::{
    add_building_field, building_variable_groups, create_building, delete_building, get_building,
    list_buildings, remove_building_field, update_building,
};
use super::emails::{forward_email, generate, list_emails, test_webhook};
use super::health::{health, stats};
use super::templates::{
    create_template, delete_template, get_template, list_templates, update_template,
};
use super::variables::{create_variable, delete_variable, list_variables, update_variable};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health & Stats
        .route("/health", get(health))
        .route("/stats", get(stats))
        .nest(
            "/api/v1",
            Router::new()
                // Buildings
                .route("/buildings", post(create_building).get(list_buildings))
                .route(
                    "/buildings/{id}",
                    get(get_building)
                        .put(update_building)
                        .delete(delete_building),
                )
                .route("/buildings/{id}/fields", post(add_building_field))
                .route(
                    "/buildings/{id}/fields/{name}",
                    axum::routing::delete(remove_building_field),
                )
                .route("/buildings/{id}/variables", get(building_variable_groups))
                // Static variables
                .route("/variables", post(create_variable).get(list_variables))
                .route(
                    "/variables/{id}",
                    put(update_variable).delete(delete_variable),
                )
                // Templates
                .route("/templates", post(create_template).get(list_templates))
                .route(
                    "/templates/{id}",
                    get(get_template)
                        .put(update_template)
                        .delete(delete_template),
                )
                // Email generation & history
                .route("/emails/generate", post(generate))
                .route("/emails", get(list_emails))
                .route("/emails/forward", post(forward_email))
                // Webhook
                .route("/webhook/test", post(test_webhook)),
        )
}
