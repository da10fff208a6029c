use std::sync::Arc;

use crate::config::Settings;
use crate::domain::building::{create_building_store, BuildingRepository};
use crate::domain::history::{create_email_history, EmailHistory};
use crate::domain::template::{create_template_store, TemplateRepository};
use crate::domain::variable::{create_variable_store, VariableRepository};
use crate::webhook::WebhookClient;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub buildings: Arc<dyn BuildingRepository>,
    pub variables: Arc<dyn VariableRepository>,
    pub templates: Arc<dyn TemplateRepository>,
    pub history: Arc<dyn EmailHistory>,
    pub webhook: Arc<WebhookClient>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let webhook = Arc::new(WebhookClient::new(&settings.webhook));

        Self {
            settings: Arc::new(settings),
            buildings: create_building_store(),
            variables: create_variable_store(),
            templates: create_template_store(),
            history: create_email_history(),
            webhook,
        }
    }
}
