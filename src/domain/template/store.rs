//! Template storage with CRUD operations

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;

use super::types::{
    CreateTemplateRequest, Template, TemplateError, TemplateResult, UpdateTemplateRequest,
};

/// Repository interface for the template collection.
///
/// Rendering and the HTTP handlers depend only on this trait; the in-memory
/// backend below is the only one shipped.
pub trait TemplateRepository: Send + Sync {
    fn create(&self, request: CreateTemplateRequest) -> TemplateResult<Template>;
    fn get(&self, id: &str) -> TemplateResult<Template>;
    fn list(&self) -> Vec<Template>;
    fn update(&self, id: &str, updates: UpdateTemplateRequest) -> TemplateResult<Template>;
    fn delete(&self, id: &str) -> TemplateResult<()>;
}

/// In-memory template storage
pub struct MemoryTemplateStore {
    templates: DashMap<String, Template>,
}

impl Default for MemoryTemplateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTemplateStore {
    pub fn new() -> Self {
        Self {
            templates: DashMap::new(),
        }
    }
}

impl TemplateRepository for MemoryTemplateStore {
    fn create(&self, request: CreateTemplateRequest) -> TemplateResult<Template> {
        let template: Template = request.into();
        template.validate()?;

        let id = template.id.clone();
        self.templates.insert(id, template.clone());

        Ok(template)
    }

    fn get(&self, id: &str) -> TemplateResult<Template> {
        self.templates
            .get(id)
            .map(|t| t.clone())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }

    fn list(&self) -> Vec<Template> {
        let mut templates: Vec<Template> = self
            .templates
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        templates.sort_by(|a, b| a.name.cmp(&b.name));
        templates
    }

    fn update(&self, id: &str, updates: UpdateTemplateRequest) -> TemplateResult<Template> {
        let mut template = self.get(id)?;

        if let Some(name) = updates.name {
            template.name = name;
        }

        if let Some(category) = updates.category {
            template.category = category;
        }

        let text_changed = updates.subject.is_some() || updates.body.is_some();

        if let Some(subject) = updates.subject {
            template.subject = subject;
        }

        if let Some(body) = updates.body {
            template.body = body;
        }

        if text_changed {
            template.refresh_used_variables();
        }

        template.updated_at = Utc::now();
        template.validate()?;

        self.templates.insert(id.to_string(), template.clone());
        Ok(template)
    }

    fn delete(&self, id: &str) -> TemplateResult<()> {
        self.templates
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TemplateError::NotFound(id.to_string()))
    }
}

/// Create a template repository backed by the in-memory store
pub fn create_template_store() -> Arc<dyn TemplateRepository> {
    Arc::new(MemoryTemplateStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(subject: &str, body: &str) -> CreateTemplateRequest {
        CreateTemplateRequest {
            name: "Water usage notice".to_string(),
            category: "notice".to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_create_computes_used_variables() {
        let store = MemoryTemplateStore::new();

        let template = store
            .create(create_request(
                "Notice for {{short_name}}",
                "Dear {{salutation}}, regarding {{short_name}}.",
            ))
            .unwrap();

        assert_eq!(template.used_variables, vec!["short_name", "salutation"]);
    }

    #[test]
    fn test_get_returns_created_template() {
        let store = MemoryTemplateStore::new();
        let created = store.create(create_request("S", "B")).unwrap();

        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched.name, "Water usage notice");
        assert_eq!(fetched.subject, "S");
    }

    #[test]
    fn test_get_missing_template() {
        let store = MemoryTemplateStore::new();
        assert!(matches!(
            store.get("missing"),
            Err(TemplateError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_body_refreshes_cache() {
        let store = MemoryTemplateStore::new();
        let created = store.create(create_request("S", "Hello {{a}}")).unwrap();
        assert_eq!(created.used_variables, vec!["a"]);

        let updated = store
            .update(
                &created.id,
                UpdateTemplateRequest {
                    name: None,
                    category: None,
                    subject: None,
                    body: Some("Hello {{a}} and {{newvar}}".to_string()),
                },
            )
            .unwrap();

        assert!(updated.used_variables.contains(&"newvar".to_string()));
    }

    #[test]
    fn test_update_name_only_keeps_cache() {
        let store = MemoryTemplateStore::new();
        let created = store.create(create_request("{{x}}", "{{y}}")).unwrap();

        let updated = store
            .update(
                &created.id,
                UpdateTemplateRequest {
                    name: Some("Renamed".to_string()),
                    category: None,
                    subject: None,
                    body: None,
                },
            )
            .unwrap();

        assert_eq!(updated.used_variables, vec!["x", "y"]);
        assert_eq!(updated.name, "Renamed");
    }

    #[test]
    fn test_delete_template() {
        let store = MemoryTemplateStore::new();
        let created = store.create(create_request("S", "B")).unwrap();

        store.delete(&created.id).unwrap();
        assert!(store.get(&created.id).is_err());
        assert!(store.delete(&created.id).is_err());
    }

    #[test]
    fn test_list_sorted_by_name() {
        let store = MemoryTemplateStore::new();
        for name in ["Zeta", "Alpha", "Mid"] {
            store
                .create(CreateTemplateRequest {
                    name: name.to_string(),
                    category: "misc".to_string(),
                    subject: "S".to_string(),
                    body: "B".to_string(),
                })
                .unwrap();
        }

        let names: Vec<String> = store.list().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["Alpha", "Mid", "Zeta"]);
    }

    #[test]
    fn test_create_rejects_empty_name() {
        let store = MemoryTemplateStore::new();
        let result = store.create(CreateTemplateRequest {
            name: String::new(),
            category: "misc".to_string(),
            subject: "S".to_string(),
            body: "B".to_string(),
        });

        assert!(matches!(result, Err(TemplateError::InvalidTemplate(_))));
    }
}
