//! Building storage with CRUD operations

use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;

use super::types::{
    AddFieldRequest, Building, BuildingError, BuildingResult, CreateBuildingRequest,
    UpdateBuildingRequest,
};

/// Repository interface for the building collection.
pub trait BuildingRepository: Send + Sync {
    fn create(&self, request: CreateBuildingRequest) -> BuildingResult<Building>;
    fn get(&self, id: &str) -> BuildingResult<Building>;
    fn list(&self) -> Vec<Building>;
    fn update(&self, id: &str, updates: UpdateBuildingRequest) -> BuildingResult<Building>;
    fn delete(&self, id: &str) -> BuildingResult<()>;

    /// Add one attribute field; overwrites an existing field of the same name.
    fn add_field(&self, id: &str, field: AddFieldRequest) -> BuildingResult<Building>;

    /// Remove one attribute field.
    fn remove_field(&self, id: &str, field: &str) -> BuildingResult<Building>;
}

/// In-memory building storage
pub struct MemoryBuildingStore {
    buildings: DashMap<String, Building>,
}

impl Default for MemoryBuildingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBuildingStore {
    pub fn new() -> Self {
        Self {
            buildings: DashMap::new(),
        }
    }
}

impl BuildingRepository for MemoryBuildingStore {
    fn create(&self, request: CreateBuildingRequest) -> BuildingResult<Building> {
        let building: Building = request.into();
        building.validate()?;

        let id = building.id.clone();
        self.buildings.insert(id, building.clone());

        Ok(building)
    }

    fn get(&self, id: &str) -> BuildingResult<Building> {
        self.buildings
            .get(id)
            .map(|b| b.clone())
            .ok_or_else(|| BuildingError::NotFound(id.to_string()))
    }

    fn list(&self) -> Vec<Building> {
        let mut buildings: Vec<Building> = self
            .buildings
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        buildings.sort_by(|a, b| a.name.cmp(&b.name));
        buildings
    }

    fn update(&self, id: &str, updates: UpdateBuildingRequest) -> BuildingResult<Building> {
        let mut building = self.get(id)?;

        if let Some(name) = updates.name {
            building.name = name;
        }

        if let Some(attributes) = updates.attributes {
            building.attributes = attributes;
        }

        building.updated_at = Utc::now();
        building.validate()?;

        self.buildings.insert(id.to_string(), building.clone());
        Ok(building)
    }

    fn delete(&self, id: &str) -> BuildingResult<()> {
        self.buildings
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| BuildingError::NotFound(id.to_string()))
    }

    fn add_field(&self, id: &str, field: AddFieldRequest) -> BuildingResult<Building> {
        let mut building = self.get(id)?;

        building.attributes.insert(field.name, field.value);
        building.updated_at = Utc::now();

        self.buildings.insert(id.to_string(), building.clone());
        Ok(building)
    }

    fn remove_field(&self, id: &str, field: &str) -> BuildingResult<Building> {
        let mut building = self.get(id)?;

        if building.attributes.remove(field).is_none() {
            return Err(BuildingError::FieldNotFound {
                building_id: id.to_string(),
                field: field.to_string(),
            });
        }

        building.updated_at = Utc::now();
        self.buildings.insert(id.to_string(), building.clone());
        Ok(building)
    }
}

/// Create a building repository backed by the in-memory store
pub fn create_building_store() -> Arc<dyn BuildingRepository> {
    Arc::new(MemoryBuildingStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attributes(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        match value {
            serde_json::Value::Object(map) => map,
            _ => panic!("attributes must be an object"),
        }
    }

    #[test]
    fn test_create_and_get() {
        let store = MemoryBuildingStore::new();

        let created = store
            .create(CreateBuildingRequest {
                name: "Oak Street 12".to_string(),
                attributes: attributes(json!({"short_name": "Oak"})),
            })
            .unwrap();

        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched.name, "Oak Street 12");
        assert_eq!(fetched.attributes["short_name"], "Oak");
    }

    #[test]
    fn test_attribute_order_is_preserved() {
        let store = MemoryBuildingStore::new();

        let created = store
            .create(CreateBuildingRequest {
                name: "Ordered".to_string(),
                attributes: attributes(json!({"z_last": "1", "a_first": "2", "m_mid": "3"})),
            })
            .unwrap();

        let keys: Vec<&String> = created.attributes.keys().collect();
        assert_eq!(keys, vec!["z_last", "a_first", "m_mid"]);
    }

    #[test]
    fn test_add_and_remove_field() {
        let store = MemoryBuildingStore::new();
        let created = store
            .create(CreateBuildingRequest {
                name: "B".to_string(),
                attributes: attributes(json!({})),
            })
            .unwrap();

        let with_field = store
            .add_field(
                &created.id,
                AddFieldRequest {
                    name: "phone".to_string(),
                    value: json!("+420 123 456 789"),
                },
            )
            .unwrap();
        assert_eq!(with_field.attributes["phone"], "+420 123 456 789");

        let without_field = store.remove_field(&created.id, "phone").unwrap();
        assert!(without_field.attributes.get("phone").is_none());
    }

    #[test]
    fn test_remove_missing_field() {
        let store = MemoryBuildingStore::new();
        let created = store
            .create(CreateBuildingRequest {
                name: "B".to_string(),
                attributes: attributes(json!({})),
            })
            .unwrap();

        assert!(matches!(
            store.remove_field(&created.id, "ghost"),
            Err(BuildingError::FieldNotFound { .. })
        ));
    }

    #[test]
    fn test_update_replaces_attributes() {
        let store = MemoryBuildingStore::new();
        let created = store
            .create(CreateBuildingRequest {
                name: "B".to_string(),
                attributes: attributes(json!({"old": "1"})),
            })
            .unwrap();

        let updated = store
            .update(
                &created.id,
                UpdateBuildingRequest {
                    name: None,
                    attributes: Some(attributes(json!({"new": "2"}))),
                },
            )
            .unwrap();

        assert!(updated.attributes.get("old").is_none());
        assert_eq!(updated.attributes["new"], "2");
    }

    #[test]
    fn test_delete_missing_building() {
        let store = MemoryBuildingStore::new();
        assert!(matches!(
            store.delete("missing"),
            Err(BuildingError::NotFound(_))
        ));
    }
}
