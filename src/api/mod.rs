//! API layer - HTTP endpoint handlers organized by domain.

mod buildings;
mod emails;
mod health;
mod routes;
mod templates;
mod variables;

// Re-export all handlers for use in server/app.rs
pub use buildings::{
    add_building_field, building_variable_groups, create_building, delete_building, get_building,
    list_buildings, remove_building_field, update_building,
};
pub use emails::{forward_email, generate, list_emails, test_webhook};
pub use health::{health, stats};
pub use routes::api_routes;
pub use templates::{
    create_template, delete_template, get_template, list_templates, update_template,
};
pub use variables::{create_variable, delete_variable, list_variables, update_variable};
