//! Ideal Customer Profile
//!
//! Five required clauses that read as one sentence, the semantic frame:
//! `"{as} at {at} are {are} using {using} to {to}"`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{validate, Entity, EntityKind, Record, Typed, Validation};
use crate::schema::{FieldDef, Schema};

pub const ICP_TYPE: &str = "https://schema.org.ai/ICP";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icp {
    #[serde(rename = "$id")]
    pub id: String,
    /// Who the customer is
    pub r#as: String,
    /// Where they work
    pub at: String,
    /// What they are doing
    pub are: String,
    /// What they do it with
    pub using: String,
    /// What they want to achieve
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
}

impl Icp {
    /// Renders the profile as one sentence.
    pub fn semantic_frame(&self) -> String {
        format!(
            "{} at {} are {} using {} to {}",
            self.r#as, self.at, self.are, self.using, self.to
        )
    }
}

impl fmt::Display for Icp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.semantic_frame())
    }
}

impl Entity for Icp {
    const KIND: EntityKind = EntityKind::Icp;

    fn into_record(self) -> Record {
        Record::Icp(self)
    }
}

pub(crate) fn schema() -> Schema {
    Schema::new(
        EntityKind::Icp,
        vec![
            FieldDef::identifier(),
            FieldDef::required_string("as"),
            FieldDef::required_string("at"),
            FieldDef::required_string("are"),
            FieldDef::required_string("using"),
            FieldDef::required_string("to"),
            FieldDef::optional_string("occupation"),
            FieldDef::optional_string("industry"),
        ],
    )
}

pub fn validate_icp(input: &Value) -> Validation<Icp> {
    validate(input)
}

pub fn is_icp(input: &Value) -> bool {
    validate_icp(input).is_ok()
}

pub fn create_icp(fields: Icp) -> Typed<Icp> {
    Typed::new(fields)
}

/// Literal interpolation of the five clauses; no trimming or escaping.
pub fn semantic_frame(icp: &Icp) -> String {
    icp.semantic_frame()
}
