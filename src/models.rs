//! Frontend Models
//!
//! Data structures matching the bundled JSON datasets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category used when a grant has none
pub const FALLBACK_CATEGORY: &str = "Technology & Innovation";

/// Grant identifier: the dataset mixes numeric and string ids
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GrantId {
    Number(i64),
    Text(String),
}

impl fmt::Display for GrantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrantId::Number(n) => write!(f, "{}", n),
            GrantId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Funding amount, numeric or string-encoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FundingAmount {
    Number(f64),
    Text(String),
}

impl FundingAmount {
    /// Numeric value; blank text reads as zero, unparsable text as None
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            FundingAmount::Number(n) => *n,
            FundingAmount::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().ok()?
                }
            }
        };
        value.is_finite().then_some(value)
    }

    /// Whether the amount should be shown at all (zero and "" are hidden)
    pub fn is_present(&self) -> bool {
        match self {
            FundingAmount::Number(n) => *n != 0.0 && !n.is_nan(),
            FundingAmount::Text(s) => !s.is_empty(),
        }
    }
}

/// Dataset fields that may hold the wrong JSON type
mod lenient {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer};

    /// Wrong type or null reads as None
    pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(serde_json::from_value(value).ok())
    }

    pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned + Default,
    {
        Ok(option(deserializer)?.unwrap_or_default())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInformation {
    #[serde(default, deserialize_with = "lenient::option")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub email_description: Option<String>,
}

/// A grant card in the deck. `id` and `title` are required; any other
/// field that is missing or of the wrong type reads as blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
    pub id: GrantId,
    pub title: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub agency: String,
    #[serde(default, deserialize_with = "lenient::option")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub funding_amount: Option<FundingAmount>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub application_due_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub estimated_award_date: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub categories: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub contact_information: Option<ContactInformation>,
}

impl Grant {
    pub fn primary_category(&self) -> &str {
        self.categories
            .as_ref()
            .and_then(|c| c.first())
            .map(String::as_str)
            .unwrap_or(FALLBACK_CATEGORY)
    }

    pub fn amount(&self) -> Option<f64> {
        self.funding_amount.as_ref().and_then(FundingAmount::as_f64)
    }

    pub fn contact_email(&self) -> Option<&str> {
        self.contact_information
            .as_ref()
            .and_then(|c| c.email.as_deref())
            .filter(|e| !e.is_empty())
    }
}

/// Compact money label: `$1.3M`, `$250K`, `$900`; blank when not numeric
pub fn short_money(amount: Option<&FundingAmount>) -> String {
    let Some(x) = amount.and_then(FundingAmount::as_f64) else {
        return String::new();
    };
    if x >= 1_000_000.0 {
        let tenths = (x / 100_000.0).round() as i64;
        if tenths % 10 == 0 {
            format!("${}M", tenths / 10)
        } else {
            format!("${}.{}M", tenths / 10, tenths % 10)
        }
    } else if x >= 1_000.0 {
        format!("${}K", (x / 1_000.0).round() as i64)
    } else if x.fract() == 0.0 {
        format!("${}", x as i64)
    } else {
        format!("${}", x)
    }
}

/// Capitalize each space-separated word, lowercase the rest
pub fn title_case(title: &str) -> String {
    title
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `M/D/YYYY` for an ISO date; unparsable input is returned as-is
pub fn display_date(iso: &str) -> String {
    use chrono::{DateTime, NaiveDate};

    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.format("%-m/%-d/%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        return date.format("%-m/%-d/%Y").to_string();
    }
    iso.to_string()
}

// ========================
// Organization definitions
// ========================

/// Input kind for a dynamic form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Number,
    Date,
    Textarea,
    Select { options: Vec<String> },
    Radio { options: Vec<String> },
}

impl FieldKind {
    /// `<input type>` for the single-line kinds, element name otherwise
    pub fn html_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Number => "number",
            FieldKind::Date => "date",
            FieldKind::Textarea => "textarea",
            FieldKind::Select { .. } => "select",
            FieldKind::Radio { .. } => "radio",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Form key the value is submitted under
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub kind: FieldKind,
}

/// An organization's application form layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FundingAmount {
        FundingAmount::Text(s.to_string())
    }

    #[test]
    fn test_short_money() {
        assert_eq!(short_money(Some(&text("1250000"))), "$1.3M");
        assert_eq!(short_money(Some(&FundingAmount::Number(2_000_000.0))), "$2M");
        assert_eq!(short_money(Some(&text("250400"))), "$250K");
        assert_eq!(short_money(Some(&FundingAmount::Number(900.0))), "$900");
        assert_eq!(short_money(Some(&text("n/a"))), "");
        assert_eq!(short_money(None), "");
    }

    #[test]
    fn test_funding_presence() {
        assert!(!text("").is_present());
        assert!(text("0").is_present());
        assert!(!FundingAmount::Number(0.0).is_present());
        assert_eq!(text("").as_f64(), Some(0.0));
    }

    #[test]
    fn test_grant_deserialize_with_missing_fields() {
        let grant: Grant = serde_json::from_str(r#"{"id": "g-1", "title": "solar MICROGRIDS"}"#).unwrap();
        assert_eq!(grant.id, GrantId::Text("g-1".to_string()));
        assert_eq!(grant.agency, "");
        assert_eq!(grant.primary_category(), FALLBACK_CATEGORY);
        assert_eq!(grant.amount(), None);
        assert_eq!(title_case(&grant.title), "Solar Microgrids");
    }

    #[test]
    fn test_numeric_id_and_amount() {
        let grant: Grant = serde_json::from_str(
            r#"{"id": 7, "title": "t", "fundingAmount": 5000, "categories": ["Education"],
                "contactInformation": {"email": "x@y.org", "emailDescription": null}}"#,
        )
        .unwrap();
        assert_eq!(grant.id.to_string(), "7");
        assert_eq!(grant.amount(), Some(5000.0));
        assert_eq!(grant.primary_category(), "Education");
        assert_eq!(grant.contact_email(), Some("x@y.org"));
    }

    #[test]
    fn test_wrongly_typed_optional_fields_read_as_blank() {
        let grant: Grant = serde_json::from_str(
            r#"{"id": 5, "title": "ok", "agency": 12, "status": 3, "categories": "Education",
                "fundingAmount": true, "contactInformation": {"email": 9}}"#,
        )
        .unwrap();
        assert_eq!(grant.agency, "");
        assert_eq!(grant.status, None);
        assert_eq!(grant.categories, None);
        assert_eq!(grant.primary_category(), FALLBACK_CATEGORY);
        assert_eq!(grant.funding_amount, None);
        assert_eq!(short_money(grant.funding_amount.as_ref()), "");
        assert_eq!(grant.contact_email(), None);
    }

    #[test]
    fn test_title_is_required() {
        assert!(serde_json::from_str::<Grant>(r#"{"id": 1}"#).is_err());
        assert!(serde_json::from_str::<Grant>(r#"{"id": 1, "title": 42}"#).is_err());
    }

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2026-03-05T00:00:00.000Z"), "3/5/2026");
        assert_eq!(display_date("2026-12-31"), "12/31/2026");
        assert_eq!(display_date("soon"), "soon");
    }

    #[test]
    fn test_field_kind_html_type() {
        assert_eq!(FieldKind::Email.html_type(), "email");
        assert_eq!(FieldKind::Date.html_type(), "date");
        assert_eq!(FieldKind::Textarea.html_type(), "textarea");
        assert_eq!(FieldKind::Radio { options: vec![] }.html_type(), "radio");
    }

    #[test]
    fn test_field_kind_tagging() {
        let field: FieldDescriptor = serde_json::from_str(
            r#"{"name": "organizationType", "label": "Type", "type": "select", "options": ["Nonprofit", "Tribal"]}"#,
        )
        .unwrap();
        assert!(!field.required);
        assert_eq!(
            field.kind,
            FieldKind::Select { options: vec!["Nonprofit".to_string(), "Tribal".to_string()] }
        );

        let field: FieldDescriptor =
            serde_json::from_str(r#"{"name": "email", "label": "Email", "type": "email", "required": true}"#).unwrap();
        assert_eq!(field.kind, FieldKind::Email);
    }
}
