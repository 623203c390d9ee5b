//! Grant Sorting
//!
//! Sort options offered by the filter sheet.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::Grant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Amount,
    DueDate,
    EstimatedAwardDate,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Amount, SortKey::DueDate, SortKey::EstimatedAwardDate];

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Amount => "Grant amount",
            SortKey::DueDate => "Due date",
            SortKey::EstimatedAwardDate => "Estimated award date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Asc => "Ascending",
            SortDirection::Desc => "Descending",
        }
    }
}

/// `key == None` keeps dataset order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortSpec {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

fn parse_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

fn sort_value(grant: &Grant, key: SortKey) -> Option<f64> {
    match key {
        SortKey::Amount => grant.amount(),
        SortKey::DueDate => {
            parse_date(grant.application_due_date.as_deref()).map(|d| d.timestamp_millis() as f64)
        }
        SortKey::EstimatedAwardDate => {
            parse_date(grant.estimated_award_date.as_deref()).map(|d| d.timestamp_millis() as f64)
        }
    }
}

/// Stable sort; grants without a value for the key go last either way
pub fn sort_grants(grants: &mut [Grant], spec: SortSpec) {
    let Some(key) = spec.key else { return };

    grants.sort_by(|a, b| match (sort_value(a, key), sort_value(b, key)) {
        (Some(x), Some(y)) => {
            let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            match spec.direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FundingAmount, GrantId};

    fn grant(id: i64, amount: Option<&str>, due: Option<&str>) -> Grant {
        Grant {
            id: GrantId::Number(id),
            agency: String::new(),
            logo: None,
            title: format!("Grant {}", id),
            funding_amount: amount.map(|a| FundingAmount::Text(a.to_string())),
            status: None,
            application_due_date: due.map(str::to_string),
            estimated_award_date: None,
            categories: None,
            description: None,
            website: None,
            contact_information: None,
        }
    }

    fn ids(grants: &[Grant]) -> Vec<String> {
        grants.iter().map(|g| g.id.to_string()).collect()
    }

    #[test]
    fn test_amount_descending_missing_last() {
        let mut grants = vec![
            grant(1, Some("500"), None),
            grant(2, None, None),
            grant(3, Some("90000"), None),
            grant(4, Some("junk"), None),
            grant(5, Some("7000"), None),
        ];
        sort_grants(&mut grants, SortSpec { key: Some(SortKey::Amount), direction: SortDirection::Desc });
        assert_eq!(ids(&grants), ["3", "5", "1", "2", "4"]);
    }

    #[test]
    fn test_due_date_ascending() {
        let mut grants = vec![
            grant(1, None, Some("2027-05-01T00:00:00.000Z")),
            grant(2, None, Some("2026-01-15")),
            grant(3, None, None),
            grant(4, None, Some("2026-09-30T00:00:00.000Z")),
        ];
        sort_grants(&mut grants, SortSpec { key: Some(SortKey::DueDate), direction: SortDirection::Asc });
        assert_eq!(ids(&grants), ["2", "4", "1", "3"]);
    }

    #[test]
    fn test_no_key_keeps_order() {
        let mut grants = vec![grant(2, Some("1"), None), grant(1, Some("9"), None)];
        sort_grants(&mut grants, SortSpec::default());
        assert_eq!(ids(&grants), ["2", "1"]);
    }
}
