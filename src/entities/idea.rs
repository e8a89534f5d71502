//! Idea: a concept with the problem it addresses and the proposed solution.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{validate, Entity, EntityKind, Record, Typed, Validation};
use crate::schema::{FieldDef, Schema};

pub const IDEA_TYPE: &str = "https://schema.org.ai/Idea";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    #[serde(rename = "$id")]
    pub id: String,
    pub concept: String,
    pub problem: String,
    pub solution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub differentiator: Option<String>,
}

impl Entity for Idea {
    const KIND: EntityKind = EntityKind::Idea;

    fn into_record(self) -> Record {
        Record::Idea(self)
    }
}

pub(crate) fn schema() -> Schema {
    Schema::new(
        EntityKind::Idea,
        vec![
            FieldDef::identifier(),
            FieldDef::required_string("concept"),
            FieldDef::required_string("problem"),
            FieldDef::required_string("solution"),
            FieldDef::optional_string("differentiator"),
        ],
    )
}

pub fn validate_idea(input: &Value) -> Validation<Idea> {
    validate(input)
}

pub fn is_idea(input: &Value) -> bool {
    validate_idea(input).is_ok()
}

pub fn create_idea(fields: Idea) -> Typed<Idea> {
    Typed::new(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "$id": "idea-1",
            "$type": IDEA_TYPE,
            "concept": "AI-powered code review",
            "problem": "Code review is slow and inconsistent",
            "solution": "Automated review with contextual suggestions",
            "differentiator": "Learns team conventions"
        })
    }

    #[test]
    fn test_valid_idea() {
        let idea = validate_idea(&valid()).unwrap();
        assert_eq!(idea.differentiator.as_deref(), Some("Learns team conventions"));
        assert!(is_idea(&valid()));
    }

    #[test]
    fn test_required_strings_reject_empty() {
        for field in ["$id", "concept", "problem", "solution"] {
            let mut doc = valid();
            doc[field] = json!("");
            let err = validate_idea(&doc).unwrap_err();
            assert!(err.has_issue_at(field), "{}", field);
        }
    }

    #[test]
    fn test_differentiator_is_optional() {
        let mut doc = valid();
        doc.as_object_mut().unwrap().remove("differentiator");
        assert!(is_idea(&doc));
    }
}
