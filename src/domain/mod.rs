//! Domain layer modules
//!
//! This module contains business domain logic:
//! - `building`: Buildings with free-form attribute maps
//! - `variable`: Global static variables
//! - `template`: Email templates, placeholder extraction and rendering
//! - `history`: Append-only generated-email history
//! - `generate`: The render-and-record operation
//! - `groups`: Variable panel grouping projection
//! - `seed`: Sample data bootstrap

pub mod building;
pub mod generate;
pub mod groups;
pub mod history;
pub mod seed;
pub mod template;
pub mod variable;

pub use generate::{generate_email, GenerateError};
pub use groups::{variable_groups, PanelVariable, VariableGroup, VariableKind};
