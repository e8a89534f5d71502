//! StoryBrand: the seven-part brand narrative.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{validate, Entity, EntityKind, Record, Typed, Validation};
use crate::schema::{FieldDef, Schema};

pub const STORY_BRAND_TYPE: &str = "https://schema.org.ai/StoryBrand";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryBrand {
    #[serde(rename = "$id")]
    pub id: String,
    /// The customer as hero
    pub character: String,
    pub problem: String,
    /// The brand as guide
    pub guide: String,
    /// Ordered steps the guide gives the hero
    pub plan: Vec<String>,
    pub call_to_action: String,
    pub success: String,
    pub failure: String,
}

impl Entity for StoryBrand {
    const KIND: EntityKind = EntityKind::StoryBrand;

    fn into_record(self) -> Record {
        Record::StoryBrand(self)
    }
}

pub(crate) fn schema() -> Schema {
    Schema::new(
        EntityKind::StoryBrand,
        vec![
            FieldDef::identifier(),
            FieldDef::required_string("character"),
            FieldDef::required_string("problem"),
            FieldDef::required_string("guide"),
            FieldDef::required_string_list("plan"),
            FieldDef::required_string("callToAction"),
            FieldDef::required_string("success"),
            FieldDef::required_string("failure"),
        ],
    )
}

pub fn validate_story_brand(input: &Value) -> Validation<StoryBrand> {
    validate(input)
}

pub fn is_story_brand(input: &Value) -> bool {
    validate_story_brand(input).is_ok()
}

pub fn create_story_brand(fields: StoryBrand) -> Typed<StoryBrand> {
    Typed::new(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plan_must_not_be_empty() {
        let mut doc = json!({
            "$id": "sb-1",
            "$type": STORY_BRAND_TYPE,
            "character": "Indie developers",
            "problem": "Shipping is slow",
            "guide": "Our platform",
            "plan": ["Sign up"],
            "callToAction": "Start free",
            "success": "Ship daily",
            "failure": "Fall behind"
        });
        assert!(is_story_brand(&doc));

        doc["plan"] = json!([]);
        let err = validate_story_brand(&doc).unwrap_err();
        assert!(err.has_issue_at("plan"));
    }
}
