//! Static variable storage with CRUD operations

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;

use super::types::{
    CreateVariableRequest, StaticVariable, UpdateVariableRequest, VariableError, VariableResult,
};

/// Repository interface for the static variable collection.
pub trait VariableRepository: Send + Sync {
    fn create(&self, request: CreateVariableRequest) -> VariableResult<StaticVariable>;
    fn get(&self, id: &str) -> VariableResult<StaticVariable>;
    fn list(&self) -> Vec<StaticVariable>;
    fn update(&self, id: &str, updates: UpdateVariableRequest) -> VariableResult<StaticVariable>;
    fn delete(&self, id: &str) -> VariableResult<()>;

    /// Snapshot of the current set as a name → value lookup for rendering.
    fn as_lookup(&self) -> HashMap<String, String> {
        self.list()
            .into_iter()
            .map(|v| (v.name, v.value))
            .collect()
    }
}

/// In-memory static variable storage, keyed by id with a uniqueness check
/// on names.
pub struct MemoryVariableStore {
    variables: DashMap<String, StaticVariable>,
}

impl Default for MemoryVariableStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryVariableStore {
    pub fn new() -> Self {
        Self {
            variables: DashMap::new(),
        }
    }

    fn name_taken(&self, name: &str, except_id: Option<&str>) -> bool {
        self.variables
            .iter()
            .any(|entry| entry.value().name == name && Some(entry.key().as_str()) != except_id)
    }
}

impl VariableRepository for MemoryVariableStore {
    fn create(&self, request: CreateVariableRequest) -> VariableResult<StaticVariable> {
        let variable: StaticVariable = request.into();
        variable.validate()?;

        if self.name_taken(&variable.name, None) {
            return Err(VariableError::AlreadyExists(variable.name));
        }

        let id = variable.id.clone();
        self.variables.insert(id, variable.clone());

        Ok(variable)
    }

    fn get(&self, id: &str) -> VariableResult<StaticVariable> {
        self.variables
            .get(id)
            .map(|v| v.clone())
            .ok_or_else(|| VariableError::NotFound(id.to_string()))
    }

    fn list(&self) -> Vec<StaticVariable> {
        let mut variables: Vec<StaticVariable> = self
            .variables
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        variables.sort_by(|a, b| a.name.cmp(&b.name));
        variables
    }

    fn update(&self, id: &str, updates: UpdateVariableRequest) -> VariableResult<StaticVariable> {
        let mut variable = self.get(id)?;

        if let Some(name) = updates.name {
            if self.name_taken(&name, Some(id)) {
                return Err(VariableError::AlreadyExists(name));
            }
            variable.name = name;
        }

        if let Some(value) = updates.value {
            variable.value = value;
        }

        if let Some(description) = updates.description {
            variable.description = description;
        }

        variable.updated_at = Utc::now();
        variable.validate()?;

        self.variables.insert(id.to_string(), variable.clone());
        Ok(variable)
    }

    fn delete(&self, id: &str) -> VariableResult<()> {
        self.variables
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| VariableError::NotFound(id.to_string()))
    }
}

/// Create a variable repository backed by the in-memory store
pub fn create_variable_store() -> Arc<dyn VariableRepository> {
    Arc::new(MemoryVariableStore::new())
}
