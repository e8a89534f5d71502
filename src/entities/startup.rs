//! Startup: the venture itself, tying together its customer profile, idea,
//! business model and founders.
//!
//! `icp`, `idea` and `businessModel` are nested ICP, Idea and LeanCanvas
//! records and may be `null`. `founders` is an ordered list of Founder
//! records. Nested records carry their own `$type` and are validated with
//! their own schema.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{validate, Entity, EntityKind, Founder, Icp, Idea, LeanCanvas, Record, Typed, Validation};
use crate::schema::{FieldDef, Schema};

pub const STARTUP_TYPE: &str = "https://schema.org.ai/Startup";

/// Lifecycle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupStatus {
    Draft,
    Validation,
    Mvp,
    Growth,
    Scale,
}

impl StartupStatus {
    pub const VALUES: &'static [&'static str] = &["draft", "validation", "mvp", "growth", "scale"];

    pub fn as_str(&self) -> &'static str {
        match self {
            StartupStatus::Draft => "draft",
            StartupStatus::Validation => "validation",
            StartupStatus::Mvp => "mvp",
            StartupStatus::Growth => "growth",
            StartupStatus::Scale => "scale",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Startup {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    pub status: StartupStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icp: Option<Typed<Icp>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idea: Option<Typed<Idea>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_model: Option<Typed<LeanCanvas>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founders: Option<Vec<Typed<Founder>>>,
}

impl Startup {
    /// Sum of every founder's equity stake
    pub fn allocated_equity(&self) -> f64 {
        self.founders
            .iter()
            .flatten()
            .map(|founder| founder.equity)
            .sum()
    }
}

impl Entity for Startup {
    const KIND: EntityKind = EntityKind::Startup;

    fn into_record(self) -> Record {
        Record::Startup(self)
    }
}

pub(crate) fn schema() -> Schema {
    Schema::new(
        EntityKind::Startup,
        vec![
            FieldDef::identifier(),
            FieldDef::required_string("name"),
            FieldDef::required_enum("status", StartupStatus::VALUES),
            FieldDef::optional_record("icp", EntityKind::Icp).nullable(),
            FieldDef::optional_record("idea", EntityKind::Idea).nullable(),
            FieldDef::optional_record("businessModel", EntityKind::LeanCanvas).nullable(),
            FieldDef::optional_record_list("founders", EntityKind::Founder),
        ],
    )
}

pub fn validate_startup(input: &Value) -> Validation<Startup> {
    validate(input)
}

pub fn is_startup(input: &Value) -> bool {
    validate_startup(input).is_ok()
}

pub fn create_startup(fields: Startup) -> Typed<Startup> {
    Typed::new(fields)
}
