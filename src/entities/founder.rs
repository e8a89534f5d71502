//! Founder: a person's role and equity stake in a startup, with optional
//! vesting terms.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{validate, Entity, EntityKind, Record, Typed, Validation};
use crate::schema::{FieldDef, Schema};

pub const FOUNDER_TYPE: &str = "https://schema.org.ai/Founder";

/// Equity is a percentage in `[EQUITY_MIN, EQUITY_MAX]`.
pub const EQUITY_MIN: f64 = 0.0;
pub const EQUITY_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FounderRole {
    Ceo,
    Cto,
    Coo,
    Cfo,
    #[serde(rename = "co-founder")]
    CoFounder,
}

impl FounderRole {
    pub const VALUES: &'static [&'static str] = &["ceo", "cto", "coo", "cfo", "co-founder"];

    pub fn as_str(&self) -> &'static str {
        match self {
            FounderRole::Ceo => "ceo",
            FounderRole::Cto => "cto",
            FounderRole::Coo => "coo",
            FounderRole::Cfo => "cfo",
            FounderRole::CoFounder => "co-founder",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VestingSchedule {
    Monthly,
    Quarterly,
}

impl VestingSchedule {
    pub const VALUES: &'static [&'static str] = &["monthly", "quarterly"];

    pub fn as_str(&self) -> &'static str {
        match self {
            VestingSchedule::Monthly => "monthly",
            VestingSchedule::Quarterly => "quarterly",
        }
    }
}

/// Vesting terms. `cliff` and `period` are in months.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vesting {
    pub cliff: f64,
    pub period: f64,
    pub schedule: VestingSchedule,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Founder {
    #[serde(rename = "$id")]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub role: FounderRole,
    /// Percentage of the company, 0 to 100 inclusive
    pub equity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vesting: Option<Vesting>,
}

impl Entity for Founder {
    const KIND: EntityKind = EntityKind::Founder;

    fn into_record(self) -> Record {
        Record::Founder(self)
    }
}

pub(crate) fn schema() -> Schema {
    let vesting = vec![
        FieldDef::required_number("cliff"),
        FieldDef::required_number("period"),
        FieldDef::required_enum("schedule", VestingSchedule::VALUES),
    ];

    Schema::new(
        EntityKind::Founder,
        vec![
            FieldDef::identifier(),
            FieldDef::required_string("userId"),
            FieldDef::required_string("name"),
            FieldDef::required_enum("role", FounderRole::VALUES),
            FieldDef::required_bounded("equity", EQUITY_MIN, EQUITY_MAX),
            FieldDef::optional_object("vesting", vesting),
        ],
    )
}

pub fn validate_founder(input: &Value) -> Validation<Founder> {
    validate(input)
}

pub fn is_founder(input: &Value) -> bool {
    validate_founder(input).is_ok()
}

pub fn create_founder(fields: Founder) -> Typed<Founder> {
    Typed::new(fields)
}
