//! Division models
//!
//! Three shapes of the same entity:
//! - [`DivisionInput`]: request body element, accepted without shape validation
//! - [`DivisionRecord`]: persistence record built by the service on insert
//! - [`DivisionRow`] / [`DivisionNominationRow`]: rows read back from storage

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::numeric::parse_leading_int;

/// One element of a bulk-insert request body.
///
/// Missing fields are tolerated and unknown fields ignored. A numeric
/// `divisionCode` is accepted and kept in its textual form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionInput {
    #[serde(default, deserialize_with = "lenient_text")]
    pub division_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub division_code: Option<String>,
}

impl DivisionInput {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            division_name: Some(name.into()),
            division_code: Some(code.into()),
        }
    }
}

/// Accept any JSON scalar as text; `null` is treated as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Division as written to storage.
///
/// `no_of_candidates` is `None` when the code holds no leading integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivisionRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "NAME")]
    pub name: Option<String>,
    #[serde(rename = "CODE")]
    pub code: Option<String>,
    #[serde(rename = "NO_OF_CANDIDATES")]
    pub no_of_candidates: Option<i64>,
    #[serde(rename = "MODULE_ID")]
    pub module_id: String,
}

impl DivisionRecord {
    /// Build a record from request input.
    ///
    /// `NO_OF_CANDIDATES` is read from the division code.
    pub fn from_input(id: String, module_id: &str, input: DivisionInput) -> Self {
        let no_of_candidates = input.division_code.as_deref().and_then(parse_leading_int);
        Self {
            id,
            name: input.division_name,
            code: input.division_code,
            no_of_candidates,
            module_id: module_id.to_owned(),
        }
    }
}

/// Result of a bulk insert, returned to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertedDivisions {
    pub inserted: u64,
    pub divisions: Vec<DivisionRecord>,
}

/// Division row read back for an election.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DivisionRow {
    pub id: String,
    pub name: Option<String>,
    pub code: Option<String>,
    pub no_of_candidates: Option<i64>,
    pub module_id: String,
}

/// Division row joined with at most one nomination of the requested team.
///
/// A division with several nominations appears once per nomination.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DivisionNominationRow {
    pub id: String,
    pub name: Option<String>,
    pub code: Option<String>,
    pub no_of_candidates: Option<i64>,
    pub module_id: String,
    pub nomination_id: Option<String>,
    pub team_id: Option<String>,
    pub nomination_status: Option<String>,
}

/// Division as presented to API clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionView {
    pub id: String,
    pub name: Option<String>,
    pub code: Option<String>,
    pub no_of_candidates: Option<i64>,
    pub module_id: String,
}

/// A team's nomination for a division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NominationView {
    pub id: String,
    pub team_id: Option<String>,
    pub status: Option<String>,
}

/// Division with the nominations of one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionWithNominationView {
    pub id: String,
    pub name: Option<String>,
    pub code: Option<String>,
    pub no_of_candidates: Option<i64>,
    pub module_id: String,
    pub nominations: Vec<NominationView>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn input_reads_camel_case() {
        let input: DivisionInput =
            serde_json::from_value(json!({"divisionName": "Ward 1", "divisionCode": "10"}))
                .unwrap();
        assert_eq!(input.division_name.as_deref(), Some("Ward 1"));
        assert_eq!(input.division_code.as_deref(), Some("10"));
    }

    #[test]
    fn input_tolerates_missing_and_numeric_fields() {
        let input: DivisionInput =
            serde_json::from_value(json!({"divisionCode": 42, "extra": true})).unwrap();
        assert_eq!(input.division_name, None);
        assert_eq!(input.division_code.as_deref(), Some("42"));

        let input: DivisionInput =
            serde_json::from_value(json!({"divisionName": null})).unwrap();
        assert_eq!(input.division_name, None);
        assert_eq!(input.division_code, None);
    }

    #[test]
    fn record_parses_candidates_from_code() {
        let record =
            DivisionRecord::from_input("id-1".into(), "M1", DivisionInput::new("Ward 1", "10"));
        assert_eq!(record.no_of_candidates, Some(10));
        assert_eq!(record.code.as_deref(), Some("10"));
        assert_eq!(record.module_id, "M1");
    }

    #[test]
    fn record_with_text_code_has_no_candidate_count() {
        let record =
            DivisionRecord::from_input("id-1".into(), "M1", DivisionInput::new("Ward 1", "abc"));
        assert_eq!(record.no_of_candidates, None);

        let record = DivisionRecord::from_input("id-2".into(), "M1", DivisionInput::default());
        assert_eq!(record.no_of_candidates, None);
        assert_eq!(record.name, None);
    }

    #[test]
    fn record_serializes_with_column_names() {
        let record =
            DivisionRecord::from_input("id-1".into(), "M1", DivisionInput::new("Ward 1", "abc"));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "ID": "id-1",
                "NAME": "Ward 1",
                "CODE": "abc",
                "NO_OF_CANDIDATES": null,
                "MODULE_ID": "M1"
            })
        );
    }
}
