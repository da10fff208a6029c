//! Email template system.
//!
//! This module provides:
//! - Template definition with `{{variable}}` placeholders and a derived
//!   used-variable cache
//! - Placeholder extraction (ordered, deduplicated)
//! - Single-pass rendering against layered variable scopes
//! - Template storage with CRUD operations behind a repository trait

mod placeholder;
mod render;
mod store;
mod types;

pub use placeholder::extract_placeholders;
pub(crate) use render::coerce_value;
pub use render::{render, resolve, RenderedEmail};
pub use store::{create_template_store, MemoryTemplateStore, TemplateRepository};
pub use types::{
    CreateTemplateRequest, Template, TemplateError, TemplateListResponse, TemplateResult,
    UpdateTemplateRequest,
};
