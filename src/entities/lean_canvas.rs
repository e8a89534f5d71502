//! Lean Canvas: the one-page business model.
//!
//! Every list section must name at least one item.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{validate, Entity, EntityKind, Record, Typed, Validation};
use crate::schema::{FieldDef, Schema};

pub const LEAN_CANVAS_TYPE: &str = "https://schema.org.ai/LeanCanvas";

/// Sections that hold a non-empty list of strings.
pub(crate) const LIST_SECTIONS: [&str; 7] = [
    "problem",
    "solution",
    "customerSegments",
    "channels",
    "revenueStreams",
    "costStructure",
    "keyMetrics",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeanCanvas {
    #[serde(rename = "$id")]
    pub id: String,
    pub problem: Vec<String>,
    pub solution: Vec<String>,
    pub unique_value: String,
    pub customer_segments: Vec<String>,
    pub channels: Vec<String>,
    pub revenue_streams: Vec<String>,
    pub cost_structure: Vec<String>,
    pub key_metrics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unfair_advantage: Option<String>,
}

impl Entity for LeanCanvas {
    const KIND: EntityKind = EntityKind::LeanCanvas;

    fn into_record(self) -> Record {
        Record::LeanCanvas(self)
    }
}

pub(crate) fn schema() -> Schema {
    let mut fields = vec![
        FieldDef::identifier(),
        FieldDef::required_string("uniqueValue"),
    ];
    fields.extend(LIST_SECTIONS.into_iter().map(FieldDef::required_string_list));
    fields.push(FieldDef::optional_string("unfairAdvantage"));

    Schema::new(EntityKind::LeanCanvas, fields)
}

pub fn validate_lean_canvas(input: &Value) -> Validation<LeanCanvas> {
    validate(input)
}

pub fn is_lean_canvas(input: &Value) -> bool {
    validate_lean_canvas(input).is_ok()
}

pub fn create_lean_canvas(fields: LeanCanvas) -> Typed<LeanCanvas> {
    Typed::new(fields)
}
