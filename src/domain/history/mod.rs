//! Append-only generated-email history.

mod store;
mod types;

pub use store::{create_email_history, EmailHistory, MemoryEmailHistory};
pub use types::{GeneratedEmail, GeneratedEmailListResponse};
