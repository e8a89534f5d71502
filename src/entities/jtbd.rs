//! Jobs To Be Done: the job a customer hires a product for.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{validate, Entity, EntityKind, Record, Typed, Validation};
use crate::schema::{FieldDef, Schema};

pub const JTBD_TYPE: &str = "https://schema.org.ai/JTBD";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jtbd {
    #[serde(rename = "$id")]
    pub id: String,
    pub job: String,
    pub context: String,
    pub outcome: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_solutions: Option<Vec<String>>,
}

impl Entity for Jtbd {
    const KIND: EntityKind = EntityKind::Jtbd;

    fn into_record(self) -> Record {
        Record::Jtbd(self)
    }
}

pub(crate) fn schema() -> Schema {
    Schema::new(
        EntityKind::Jtbd,
        vec![
            FieldDef::identifier(),
            FieldDef::required_string("job"),
            FieldDef::required_string("context"),
            FieldDef::required_string("outcome"),
            FieldDef::optional_string_list("constraints"),
            FieldDef::optional_string_list("currentSolutions"),
        ],
    )
}

pub fn validate_jtbd(input: &Value) -> Validation<Jtbd> {
    validate(input)
}

pub fn is_jtbd(input: &Value) -> bool {
    validate_jtbd(input).is_ok()
}

pub fn create_jtbd(fields: Jtbd) -> Typed<Jtbd> {
    Typed::new(fields)
}
