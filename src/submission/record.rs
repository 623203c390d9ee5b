//! Submission Records
//!
//! The two application schemas. They share identifier and timestamp
//! handling but are stored under different keys and never mixed.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::form_input::{parse_comma_list, parse_leading_float, parse_number, FormInput};

/// Storage schema of a submission log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormSchema {
    /// Quick application: applicant, grant, proposal
    V1,
    /// Full application with organization, project, budget, attachments
    V2,
}

impl FormSchema {
    pub fn storage_key(&self) -> &'static str {
        match self {
            FormSchema::V1 => "grant_app_submissions_v1",
            FormSchema::V2 => "grant_app_submissions_v2",
        }
    }

    pub fn id_prefix(&self) -> &'static str {
        match self {
            FormSchema::V1 => "SUB",
            FormSchema::V2 => "APP",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormSchema::V1 => "Grant application submitted successfully.",
            FormSchema::V2 => "Application submitted successfully.",
        }
    }
}

/// A record that can live in a submission log
pub trait SubmissionRecord: Serialize + DeserializeOwned + Clone {
    const SCHEMA: FormSchema;

    fn from_form(input: &FormInput, id: String, submitted_at: String) -> Self;

    fn id(&self) -> &str;

    fn submitted_at(&self) -> &str;
}

/// Serialize whole numbers as JSON integers (`500`, not `500.0`)
mod js_number {
    use serde::Serializer;

    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER => serializer.serialize_i64(*v as i64),
            Some(v) => serializer.serialize_f64(*v),
            None => serializer.serialize_none(),
        }
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

// ========================
// Schema v1
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantV1 {
    pub name: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantRequestV1 {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(serialize_with = "js_number::serialize")]
    pub amount_requested: Option<f64>,
    pub match_required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub summary: Option<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationV1 {
    pub id: String,
    pub submitted_at: String,
    pub applicant: ApplicantV1,
    pub grant: GrantRequestV1,
    pub proposal: Proposal,
}

impl SubmissionRecord for ApplicationV1 {
    const SCHEMA: FormSchema = FormSchema::V1;

    fn from_form(input: &FormInput, id: String, submitted_at: String) -> Self {
        let text = |name: &str| owned(input.get_non_empty(name));
        Self {
            id,
            submitted_at,
            applicant: ApplicantV1 {
                name: text("applicantName"),
                email: text("email"),
                organization: text("organization"),
            },
            grant: GrantRequestV1 {
                id: text("grantId"),
                title: text("grantTitle"),
                amount_requested: input.get_non_empty("amountRequested").and_then(parse_number),
                match_required: input.get("matchRequired") == Some("true"),
            },
            proposal: Proposal {
                summary: text("proposalSummary"),
                categories: parse_comma_list(input.get("categories")),
            },
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn submitted_at(&self) -> &str {
        &self.submitted_at
    }
}

// ========================
// Schema v2
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantV2 {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub website: Option<String>,
    pub tax_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantRequestV2 {
    pub id: Option<String>,
    pub title: Option<String>,
    #[serde(serialize_with = "js_number::serialize")]
    pub amount_requested: Option<f64>,
    pub match_required: bool,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub executive_summary: Option<String>,
    pub statement_of_need: Option<String>,
    pub goals: Option<String>,
    pub implementation_plan: Option<String>,
    pub evaluation_plan: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    #[serde(serialize_with = "js_number::serialize")]
    pub total: Option<f64>,
    pub justification: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachments {
    pub proposal_file: Option<String>,
    pub budget_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub certified: bool,
    pub signature: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationV2 {
    pub id: String,
    pub submitted_at: String,
    pub applicant: ApplicantV2,
    pub organization: Organization,
    pub grant: GrantRequestV2,
    pub project: Project,
    pub budget: Budget,
    pub attachments: Attachments,
    pub certification: Certification,
}

impl SubmissionRecord for ApplicationV2 {
    const SCHEMA: FormSchema = FormSchema::V2;

    fn from_form(input: &FormInput, id: String, submitted_at: String) -> Self {
        // Present values are kept verbatim, empty strings included
        let text = |name: &str| owned(input.get(name));
        let float = |name: &str| input.get(name).and_then(parse_leading_float);
        Self {
            id,
            submitted_at,
            applicant: ApplicantV2 {
                name: text("applicantName"),
                email: text("email"),
                phone: text("phone"),
            },
            organization: Organization {
                name: text("organizationName"),
                kind: text("organizationType"),
                website: text("organizationWebsite"),
                tax_id: text("organizationTaxId"),
            },
            grant: GrantRequestV2 {
                id: text("grantId"),
                title: text("grantTitle"),
                amount_requested: float("amountRequested"),
                match_required: input.get("matchRequired") == Some("true"),
                start_date: owned(input.get_non_empty("startDate")),
                end_date: owned(input.get_non_empty("endDate")),
            },
            project: Project {
                executive_summary: text("executiveSummary"),
                statement_of_need: text("statementOfNeed"),
                goals: text("projectGoals"),
                implementation_plan: text("implementationPlan"),
                evaluation_plan: text("evaluationPlan"),
            },
            budget: Budget {
                total: float("totalBudget").filter(|v| *v != 0.0),
                justification: text("budgetJustification"),
            },
            attachments: Attachments {
                proposal_file: owned(input.file_name("proposalFile")),
                budget_file: owned(input.file_name("budgetFile")),
            },
            certification: Certification {
                certified: input.get("certify") == Some("on"),
                signature: text("signature"),
                date: text("signatureDate"),
            },
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn submitted_at(&self) -> &str {
        &self.submitted_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_input() -> FormInput {
        FormInput::from_pairs([
            ("applicantName", "A"),
            ("email", "a@b.com"),
            ("amountRequested", "500"),
        ])
    }

    #[test]
    fn test_v1_amount_is_a_number() {
        let record = ApplicationV1::from_form(&sample_input(), "SUB-1".into(), "t".into());
        assert_eq!(record.grant.amount_requested, Some(500.0));
        assert_eq!(record.applicant.email.as_deref(), Some("a@b.com"));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["grant"]["amountRequested"], json!(500));
        assert_eq!(value["applicant"]["email"], json!("a@b.com"));
        assert_eq!(value["submittedAt"], json!("t"));
    }

    #[test]
    fn test_v2_amount_is_a_number() {
        let record = ApplicationV2::from_form(&sample_input(), "APP-1".into(), "t".into());
        assert_eq!(record.grant.amount_requested, Some(500.0));
        assert_eq!(record.applicant.email.as_deref(), Some("a@b.com"));

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["grant"]["amountRequested"], json!(500));
    }

    #[test]
    fn test_v1_blank_fields_are_null() {
        let input = FormInput::from_pairs([
            ("applicantName", ""),
            ("amountRequested", ""),
            ("matchRequired", "false"),
            ("categories", "arts, youth"),
        ]);
        let record = ApplicationV1::from_form(&input, "SUB-1".into(), "t".into());
        assert_eq!(record.applicant.name, None);
        assert_eq!(record.grant.amount_requested, None);
        assert!(!record.grant.match_required);
        assert_eq!(record.proposal.categories, ["arts", "youth"]);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["grant"]["amountRequested"], serde_json::Value::Null);
        assert_eq!(value["proposal"]["summary"], serde_json::Value::Null);
    }

    #[test]
    fn test_v1_non_numeric_amount_is_null() {
        let input = FormInput::from_pairs([("amountRequested", "lots"), ("matchRequired", "true")]);
        let record = ApplicationV1::from_form(&input, "SUB-1".into(), "t".into());
        assert_eq!(record.grant.amount_requested, None);
        assert!(record.grant.match_required);
    }

    #[test]
    fn test_v2_field_mapping() {
        let mut input = FormInput::from_pairs([
            ("applicantName", "Dana"),
            ("phone", ""),
            ("organizationType", "501(c)(3)"),
            ("amountRequested", "12500.50 USD"),
            ("startDate", ""),
            ("endDate", "2027-06-30"),
            ("projectGoals", "Serve 400 families"),
            ("totalBudget", "0"),
            ("certify", "on"),
            ("signature", "Dana R."),
        ]);
        input.push_file("proposalFile", "proposal.pdf");
        input.push_file("budgetFile", "");

        let record = ApplicationV2::from_form(&input, "APP-1".into(), "t".into());
        assert_eq!(record.applicant.phone.as_deref(), Some(""));
        assert_eq!(record.applicant.email, None);
        assert_eq!(record.organization.kind.as_deref(), Some("501(c)(3)"));
        assert_eq!(record.grant.amount_requested, Some(12500.5));
        assert_eq!(record.grant.start_date, None);
        assert_eq!(record.grant.end_date.as_deref(), Some("2027-06-30"));
        assert_eq!(record.project.goals.as_deref(), Some("Serve 400 families"));
        assert_eq!(record.budget.total, None);
        assert_eq!(record.attachments.proposal_file.as_deref(), Some("proposal.pdf"));
        assert_eq!(record.attachments.budget_file, None);
        assert!(record.certification.certified);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["organization"]["type"], json!("501(c)(3)"));
        assert_eq!(value["grant"]["amountRequested"], json!(12500.5));
        assert_eq!(value["project"]["goals"], json!("Serve 400 families"));
    }

    #[test]
    fn test_stored_record_reads_back() {
        let record = ApplicationV1::from_form(&sample_input(), "SUB-1".into(), "t".into());
        let raw = serde_json::to_string(&vec![record.clone()]).unwrap();
        let back: Vec<ApplicationV1> = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, vec![record]);
    }

    #[test]
    fn test_schema_keys_differ() {
        assert_ne!(FormSchema::V1.storage_key(), FormSchema::V2.storage_key());
        assert_eq!(ApplicationV1::SCHEMA.id_prefix(), "SUB");
        assert_eq!(ApplicationV2::SCHEMA.id_prefix(), "APP");
    }
}
