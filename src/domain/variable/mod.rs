//! Global static variables shared by every template and building.

mod store;
mod types;

pub use store::{create_variable_store, MemoryVariableStore, VariableRepository};
pub use types::{
    CreateVariableRequest, StaticVariable, UpdateVariableRequest, VariableError,
    VariableListResponse, VariableResult,
};
