//! Sample data bootstrap for demo deployments.
//!
//! Loaded at startup when `storage.seed_sample_data` is enabled so the
//! service comes up with a working set of buildings, variables and templates.

use serde_json::json;

use crate::domain::building::{BuildingRepository, CreateBuildingRequest};
use crate::domain::template::{CreateTemplateRequest, TemplateRepository};
use crate::domain::variable::{CreateVariableRequest, VariableRepository};

pub fn load_sample_data(
    buildings: &dyn BuildingRepository,
    variables: &dyn VariableRepository,
    templates: &dyn TemplateRepository,
) {
    let sample_buildings = [
        (
            "Drevarska 851/4, Brno",
            json!({
                "plny_nazev": "Drevarska 851/4, Brno",
                "zkraceny_nazev": "Drevarska",
                "osloveni_obecne": "Dobry den,",
                "nazev_svj": "Spolecenstvi vlastniku jednotek Drevarska 4, Brno",
                "adresa": "Drevarska 851/4, 602 00 Brno",
                "telefon": "+420 123 456 789"
            }),
        ),
        (
            "Knihnicka 318, Brno",
            json!({
                "plny_nazev": "Knihnicka 318, Brno",
                "zkraceny_nazev": "Knihnicka",
                "osloveni_obecne": "Dobry den, pani Kucerova,",
                "nazev_svj": "Spolecenstvi vlastniku pro dum Neptun",
                "adresa": "Knihnicka 318, 602 00 Brno",
                "telefon": "+420 987 654 321"
            }),
        ),
    ];

    for (name, attributes) in sample_buildings {
        let serde_json::Value::Object(attributes) = attributes else {
            continue;
        };
        if let Err(e) = buildings.create(CreateBuildingRequest {
            name: name.to_string(),
            attributes,
        }) {
            tracing::warn!(building = name, error = %e, "Failed to seed building");
        }
    }

    let sample_variables = [
        (
            "osloveni_vyboru",
            "S pozdravem,\nJan Novak\nSpravce nemovitosti",
            Some("Standard property manager signature"),
        ),
        (
            "kontaktni_email",
            "info@sprava-nemovitosti.cz",
            Some("Main contact e-mail"),
        ),
        ("nazev_spolecnosti", "Sprava nemovitosti s.r.o.", None),
    ];

    for (name, value, description) in sample_variables {
        if let Err(e) = variables.create(CreateVariableRequest {
            name: name.to_string(),
            value: value.to_string(),
            description: description.map(str::to_string),
        }) {
            tracing::warn!(variable = name, error = %e, "Failed to seed static variable");
        }
    }

    let sample_templates = [
        CreateTemplateRequest {
            name: "High water usage notice".to_string(),
            category: "notice".to_string(),
            subject: "{{zkraceny_nazev}} - Upozorneni na vysokou spotrebu vody".to_string(),
            body: "{{osloveni_obecne}}\n\n\
                   dovolte mi upozornit Vas na neobvykle vysokou spotrebu vody v budove \
                   {{plny_nazev}} za posledni mesic.\n\n\
                   V pripade zjisteni problemu me prosim kontaktujte na e-mailu \
                   {{kontaktni_email}} nebo telefonicky na {{telefon}}.\n\n\
                   {{osloveni_vyboru}}"
                .to_string(),
        },
        CreateTemplateRequest {
            name: "Owners meeting invitation".to_string(),
            category: "invitation".to_string(),
            subject: "{{zkraceny_nazev}} - Pozvanka na schuzi vlastniku".to_string(),
            body: "{{osloveni_obecne}}\n\n\
                   timto Vas zvu na radnou schuzi {{nazev_svj}}, ktera se bude konat na adrese \
                   {{adresa}}.\n\n\
                   Prosim o potvrzeni ucasti odpovedi na tento e-mail.\n\n\
                   {{osloveni_vyboru}}"
                .to_string(),
        },
    ];

    for request in sample_templates {
        let name = request.name.clone();
        if let Err(e) = templates.create(request) {
            tracing::warn!(template = %name, error = %e, "Failed to seed template");
        }
    }

    tracing::info!("Sample data loaded");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::building::MemoryBuildingStore;
    use crate::domain::template::MemoryTemplateStore;
    use crate::domain::variable::MemoryVariableStore;

    #[test]
    fn test_seed_populates_all_collections() {
        let buildings = MemoryBuildingStore::new();
        let variables = MemoryVariableStore::new();
        let templates = MemoryTemplateStore::new();

        load_sample_data(&buildings, &variables, &templates);

        assert_eq!(buildings.list().len(), 2);
        assert_eq!(variables.list().len(), 3);
        assert_eq!(templates.list().len(), 2);
    }

    #[test]
    fn test_seeded_templates_have_used_variables() {
        let buildings = MemoryBuildingStore::new();
        let variables = MemoryVariableStore::new();
        let templates = MemoryTemplateStore::new();

        load_sample_data(&buildings, &variables, &templates);

        for template in templates.list() {
            assert!(!template.used_variables.is_empty());
        }
    }
}
