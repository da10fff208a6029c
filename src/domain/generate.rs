//! Email generation: the one operation that ties the collections together.
//!
//! Looks up the template and building, snapshots the static variable set,
//! renders, and appends the result to the append-only history. Rendering
//! itself stays pure; the history write happens here, in the caller.

use thiserror::Error;

use crate::domain::building::BuildingRepository;
use crate::domain::history::{EmailHistory, GeneratedEmail};
use crate::domain::template::{render, TemplateRepository};
use crate::domain::variable::VariableRepository;

/// Generation-specific error type
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Building not found: {0}")]
    BuildingNotFound(String),
}

/// Render `template_id` against `building_id` and the current static
/// variable snapshot, appending exactly one history record on success.
pub fn generate_email(
    templates: &dyn TemplateRepository,
    buildings: &dyn BuildingRepository,
    variables: &dyn VariableRepository,
    history: &dyn EmailHistory,
    template_id: &str,
    building_id: &str,
) -> Result<GeneratedEmail, GenerateError> {
    let template = templates
        .get(template_id)
        .map_err(|_| GenerateError::TemplateNotFound(template_id.to_string()))?;
    let building = buildings
        .get(building_id)
        .map_err(|_| GenerateError::BuildingNotFound(building_id.to_string()))?;

    let static_variables = variables.as_lookup();
    let rendered = render(&template, &building, &static_variables);

    let email = GeneratedEmail::from_rendered(rendered, &building.name, &template.name);
    history.append(email.clone());

    tracing::info!(
        template = %template.name,
        building = %building.name,
        "Generated email"
    );

    Ok(email)
}
