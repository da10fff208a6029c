//! Variable resolution and template rendering.
//!
//! Rendering resolves each `{{name}}` token against two layered scopes: the
//! selected building's attribute map first, then the global static variables.
//! A token that resolves in neither scope is left in the output verbatim.

use std::collections::HashMap;

use super::placeholder::PLACEHOLDER_RE;
use super::types::Template;
use crate::domain::building::Building;

/// The rendered subject/body pair produced from one (building, template) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEmail {
    pub subject: String,
    pub body: String,
}

/// Resolve a single placeholder name. Building attributes take precedence
/// over static variables; a miss in both scopes yields `None`.
pub fn resolve(
    name: &str,
    attributes: &serde_json::Map<String, serde_json::Value>,
    static_variables: &HashMap<String, String>,
) -> Option<String> {
    if let Some(value) = attributes.get(name) {
        return Some(coerce_value(value));
    }

    static_variables.get(name).cloned()
}

/// Canonical string form of an attribute value. Numbers and booleans render
/// in their literal textual form, null renders empty, and nested structures
/// fall back to their JSON representation. Shared with the variable panel so
/// displayed values always match what a render would substitute.
pub(crate) fn coerce_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => String::new(),
        _ => value.to_string(),
    }
}

/// Render a template against a building and the static variable set.
///
/// The live subject and body are re-scanned on every call; the template's
/// `used_variables` cache is never consulted here since it may be stale
/// relative to a just-edited template. Substitution is a single pass: a
/// resolved value that itself contains a `{{other}}` token is emitted as-is
/// and never re-expanded.
pub fn render(
    template: &Template,
    building: &Building,
    static_variables: &HashMap<String, String>,
) -> RenderedEmail {
    RenderedEmail {
        subject: render_text(&template.subject, building, static_variables),
        body: render_text(&template.body, building, static_variables),
    }
}

fn render_text(
    text: &str,
    building: &Building,
    static_variables: &HashMap<String, String>,
) -> String {
    PLACEHOLDER_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            resolve(&caps[1], &building.attributes, static_variables)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
