//! Append-only storage for generated email history

use std::sync::{Arc, RwLock};

use super::types::GeneratedEmail;

/// Append-only history of completed renders. Records are never updated or
/// deleted once written.
pub trait EmailHistory: Send + Sync {
    fn append(&self, email: GeneratedEmail);

    /// All records, newest first.
    fn list(&self) -> Vec<GeneratedEmail>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory history backend
pub struct MemoryEmailHistory {
    emails: RwLock<Vec<GeneratedEmail>>,
}

impl Default for MemoryEmailHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryEmailHistory {
    pub fn new() -> Self {
        Self {
            emails: RwLock::new(Vec::new()),
        }
    }
}

impl EmailHistory for MemoryEmailHistory {
    fn append(&self, email: GeneratedEmail) {
        self.emails
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(email);
    }

    fn list(&self) -> Vec<GeneratedEmail> {
        let emails = self
            .emails
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        emails.iter().rev().cloned().collect()
    }

    fn len(&self) -> usize {
        self.emails
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

/// Create an email history backed by the in-memory store
pub fn create_email_history() -> Arc<dyn EmailHistory> {
    Arc::new(MemoryEmailHistory::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::RenderedEmail;

    fn email(subject: &str) -> GeneratedEmail {
        GeneratedEmail::from_rendered(
            RenderedEmail {
                subject: subject.to_string(),
                body: "body".to_string(),
            },
            "Building",
            "Template",
        )
    }

    #[test]
    fn test_append_and_list_newest_first() {
        let history = MemoryEmailHistory::new();
        history.append(email("first"));
        history.append(email("second"));

        let listed = history.list();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].subject, "second");
        assert_eq!(listed[1].subject, "first");
    }

    #[test]
    fn test_len_and_is_empty() {
        let history = MemoryEmailHistory::new();
        assert!(history.is_empty());

        history.append(email("x"));
        assert_eq!(history.len(), 1);
        assert!(!history.is_empty());
    }

    #[test]
    fn test_records_keep_denormalized_names() {
        let history = MemoryEmailHistory::new();
        history.append(email("s"));

        let listed = history.list();
        assert_eq!(listed[0].building_name, "Building");
        assert_eq!(listed[0].template_name, "Template");
    }
}
