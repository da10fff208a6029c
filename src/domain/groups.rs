//! Variable panel grouping.
//!
//! For a selected building, the editor side panel shows two groups: the
//! global static variables and the building's own attributes. This is a pure
//! projection of existing data; no new state is introduced here.

use serde::Serialize;

use crate::domain::building::Building;
use crate::domain::template::coerce_value;
use crate::domain::variable::StaticVariable;

/// Where a panel variable comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Static,
    Dynamic,
}

/// One entry in the variable panel
#[derive(Debug, Clone, Serialize)]
pub struct PanelVariable {
    pub name: String,
    pub value: String,
    pub kind: VariableKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A labeled group of panel variables
#[derive(Debug, Clone, Serialize)]
pub struct VariableGroup {
    pub name: String,
    pub variables: Vec<PanelVariable>,
}

/// Partition the available variables for `building` into a static group and
/// a dynamic group labeled with the building's name. Empty groups are
/// omitted.
pub fn variable_groups(
    building: &Building,
    static_variables: &[StaticVariable],
) -> Vec<VariableGroup> {
    let mut groups = Vec::new();

    let static_vars: Vec<PanelVariable> = static_variables
        .iter()
        .map(|v| PanelVariable {
            name: v.name.clone(),
            value: v.value.clone(),
            kind: VariableKind::Static,
            description: v.description.clone(),
        })
        .collect();

    if !static_vars.is_empty() {
        groups.push(VariableGroup {
            name: "Static variables".to_string(),
            variables: static_vars,
        });
    }

    let dynamic_vars: Vec<PanelVariable> = building
        .attributes
        .iter()
        .map(|(name, value)| PanelVariable {
            name: name.clone(),
            value: coerce_value(value),
            kind: VariableKind::Dynamic,
            description: Some(format!("Value from building: {}", building.name)),
        })
        .collect();

    if !dynamic_vars.is_empty() {
        groups.push(VariableGroup {
            name: format!("Building data: {}", building.name),
            variables: dynamic_vars,
        });
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use serde_json::json;

    fn building(attributes: serde_json::Value) -> Building {
        let serde_json::Value::Object(attributes) = attributes else {
            panic!("attributes must be an object");
        };
        Building {
            id: "b1".to_string(),
            name: "Oak Street".to_string(),
            attributes,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn static_var(name: &str, value: &str) -> StaticVariable {
        StaticVariable {
            id: format!("id-{name}"),
            name: name.to_string(),
            value: value.to_string(),
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_both_groups_present() {
        let groups = variable_groups(
            &building(json!({"short_name": "Oak"})),
            &[static_var("sig", "Regards")],
        );

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Static variables");
        assert_eq!(groups[0].variables[0].kind, VariableKind::Static);
        assert_eq!(groups[1].name, "Building data: Oak Street");
        assert_eq!(groups[1].variables[0].kind, VariableKind::Dynamic);
    }

    #[test]
    fn test_empty_groups_omitted() {
        let groups = variable_groups(&building(json!({})), &[]);
        assert!(groups.is_empty());
    }

    #[test]
    fn test_panel_values_match_render_coercion() {
        let groups = variable_groups(
            &building(json!({"floors": 12, "occupied": true, "notes": null})),
            &[],
        );

        let values: Vec<&str> = groups[0]
            .variables
            .iter()
            .map(|v| v.value.as_str())
            .collect();
        assert_eq!(values, vec!["12", "true", ""]);
    }

    #[test]
    fn test_dynamic_group_follows_attribute_order() {
        let groups = variable_groups(
            &building(json!({"b_second": "2", "a_first": "1"})),
            &[],
        );

        let names: Vec<&str> = groups[0]
            .variables
            .iter()
            .map(|v| v.name.as_str())
            .collect();
        assert_eq!(names, vec!["b_second", "a_first"]);
    }
}
