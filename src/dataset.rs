//! Static Datasets
//!
//! Grants and organization form definitions bundled into the binary.
//! Records without a usable id or title are skipped, never fatal.

use serde::de::DeserializeOwned;

use crate::models::{Grant, OrganizationDefinition};

const GRANTS_JSON: &str = include_str!("../data/grants.json");
const ORGANIZATIONS_JSON: &str = include_str!("../data/organizations.json");

pub fn load_grants() -> Vec<Grant> {
    parse_records(GRANTS_JSON, "grants")
}

pub fn load_organizations() -> Vec<OrganizationDefinition> {
    parse_records(ORGANIZATIONS_JSON, "organizations")
}

/// Parse a JSON array record by record
pub fn parse_records<T: DeserializeOwned>(raw: &str, label: &str) -> Vec<T> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            log::error!("[DATA] {} dataset unreadable: {}", label, e);
            return Vec::new();
        }
    };

    let total = values.len();
    let records: Vec<T> = values
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("[DATA] skipping {} record #{}: {}", label, i, e);
                None
            }
        })
        .collect();

    log::info!("[DATA] loaded {}/{} {}", records.len(), total, label);
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldKind;

    #[test]
    fn test_bundled_grants_parse() {
        let grants = load_grants();
        assert!(grants.len() > 10);
        assert!(grants.iter().all(|g| !g.title.is_empty()));
    }

    #[test]
    fn test_bundled_organizations_parse() {
        let orgs = load_organizations();
        assert!(!orgs.is_empty());
        assert!(orgs.iter().all(|o| !o.fields.is_empty()));
        assert!(orgs
            .iter()
            .flat_map(|o| o.fields.iter())
            .any(|f| matches!(f.kind, FieldKind::Radio { .. })));
    }

    #[test]
    fn test_record_without_id_or_title_is_skipped() {
        let raw = r#"[{"id": 1, "title": "ok"}, {"title": "no id"}, {"id": 3, "title": 42}, {"id": "4", "title": "fine"}]"#;
        let grants: Vec<Grant> = parse_records(raw, "grants");
        assert_eq!(grants.len(), 2);
        assert_eq!(grants[1].title, "fine");
    }

    #[test]
    fn test_malformed_optional_field_keeps_record() {
        let raw = r#"[{"id": 5, "title": "ok", "status": 3},
                      {"id": 6, "title": "ok2", "categories": "Education"},
                      {"id": 7, "title": "ok3", "fundingAmount": true}]"#;
        let grants: Vec<Grant> = parse_records(raw, "grants");
        assert_eq!(grants.len(), 3);
        assert_eq!(grants[0].status, None);
        assert_eq!(grants[1].categories, None);
        assert_eq!(grants[2].funding_amount, None);
    }

    #[test]
    fn test_unreadable_dataset_is_empty() {
        let grants: Vec<Grant> = parse_records("{not json", "grants");
        assert!(grants.is_empty());
    }
}
