//! Building management: free-form attribute bags behind a repository trait.

mod store;
mod types;

pub use store::{create_building_store, BuildingRepository, MemoryBuildingStore};
pub use types::{
    AddFieldRequest, Building, BuildingError, BuildingListResponse, BuildingResult,
    CreateBuildingRequest, UpdateBuildingRequest,
};
