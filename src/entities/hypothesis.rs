//! Hypothesis: a testable assumption with a metric and a target.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{validate, Entity, EntityKind, Record, Typed, Validation};
use crate::schema::{FieldDef, Schema};

pub const HYPOTHESIS_TYPE: &str = "https://schema.org.ai/Hypothesis";

/// Where a hypothesis stands in its test cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HypothesisStatus {
    Untested,
    Testing,
    Validated,
    Invalidated,
}

impl HypothesisStatus {
    pub const VALUES: &'static [&'static str] = &["untested", "testing", "validated", "invalidated"];

    pub fn as_str(&self) -> &'static str {
        match self {
            HypothesisStatus::Untested => "untested",
            HypothesisStatus::Testing => "testing",
            HypothesisStatus::Validated => "validated",
            HypothesisStatus::Invalidated => "invalidated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    #[serde(rename = "$id")]
    pub id: String,
    pub assumption: String,
    pub metric: String,
    pub target: f64,
    pub status: HypothesisStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<Vec<String>>,
}

impl Entity for Hypothesis {
    const KIND: EntityKind = EntityKind::Hypothesis;

    fn into_record(self) -> Record {
        Record::Hypothesis(self)
    }
}

pub(crate) fn schema() -> Schema {
    Schema::new(
        EntityKind::Hypothesis,
        vec![
            FieldDef::identifier(),
            FieldDef::required_string("assumption"),
            FieldDef::required_string("metric"),
            FieldDef::required_number("target"),
            FieldDef::required_enum("status", HypothesisStatus::VALUES),
            FieldDef::optional_string_list("evidence"),
        ],
    )
}

pub fn validate_hypothesis(input: &Value) -> Validation<Hypothesis> {
    validate(input)
}

pub fn is_hypothesis(input: &Value) -> bool {
    validate_hypothesis(input).is_ok()
}

pub fn create_hypothesis(fields: Hypothesis) -> Typed<Hypothesis> {
    Typed::new(fields)
}
