//! Closed sum type over every entity, tagged by `$type`.

use serde::Serialize;
use serde_json::Value;

use super::{
    EntityKind, Founder, Hypothesis, Icp, Idea, Jtbd, LeanCanvas, Startup, StoryBrand, Typed,
};
use crate::schema::{describe, Issue, SchemaValidator, ValidationError, TYPE_FIELD};

/// Any entity record. Serializes with the variant's fixed `$type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "$type")]
pub enum Record {
    #[serde(rename = "https://schema.org.ai/ICP")]
    Icp(Icp),
    #[serde(rename = "https://schema.org.ai/Startup")]
    Startup(Startup),
    #[serde(rename = "https://schema.org.ai/Idea")]
    Idea(Idea),
    #[serde(rename = "https://schema.org.ai/Hypothesis")]
    Hypothesis(Hypothesis),
    #[serde(rename = "https://schema.org.ai/JTBD")]
    Jtbd(Jtbd),
    #[serde(rename = "https://schema.org.ai/LeanCanvas")]
    LeanCanvas(LeanCanvas),
    #[serde(rename = "https://schema.org.ai/StoryBrand")]
    StoryBrand(StoryBrand),
    #[serde(rename = "https://schema.org.ai/Founder")]
    Founder(Founder),
}

impl Record {
    /// Validates `value` as whichever entity its `$type` names.
    ///
    /// # Errors
    ///
    /// Fails with a `Discriminant` issue when `$type` is missing or names
    /// no known entity, otherwise with that entity's validation issues.
    pub fn from_value(value: &Value) -> Result<Self, ValidationError> {
        Self::validate_with(&SchemaValidator::default(), value)
    }

    /// Same as [`Record::from_value`] with an explicit validator.
    pub fn validate_with(validator: &SchemaValidator, value: &Value) -> Result<Self, ValidationError> {
        let kind = match value.get(TYPE_FIELD) {
            Some(Value::String(uri)) => EntityKind::from_uri(uri),
            _ => None,
        };

        let Some(kind) = kind else {
            let actual = value
                .get(TYPE_FIELD)
                .map(describe)
                .unwrap_or_else(|| "missing".to_string());
            return Err(ValidationError::single(
                None,
                Issue::discriminant(TYPE_FIELD, "a known entity discriminant", actual),
            ));
        };

        Self::validate_as(validator, kind, value)
    }

    /// Validates `value` as a record of `kind`.
    pub fn validate_as(
        validator: &SchemaValidator,
        kind: EntityKind,
        value: &Value,
    ) -> Result<Self, ValidationError> {
        let record = match kind {
            EntityKind::Icp => validator.validate::<Icp>(value)?.into_record(),
            EntityKind::Startup => validator.validate::<Startup>(value)?.into_record(),
            EntityKind::Idea => validator.validate::<Idea>(value)?.into_record(),
            EntityKind::Hypothesis => validator.validate::<Hypothesis>(value)?.into_record(),
            EntityKind::Jtbd => validator.validate::<Jtbd>(value)?.into_record(),
            EntityKind::LeanCanvas => validator.validate::<LeanCanvas>(value)?.into_record(),
            EntityKind::StoryBrand => validator.validate::<StoryBrand>(value)?.into_record(),
            EntityKind::Founder => validator.validate::<Founder>(value)?.into_record(),
        };
        Ok(record)
    }

    /// Returns the entity kind
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::Icp(_) => EntityKind::Icp,
            Record::Startup(_) => EntityKind::Startup,
            Record::Idea(_) => EntityKind::Idea,
            Record::Hypothesis(_) => EntityKind::Hypothesis,
            Record::Jtbd(_) => EntityKind::Jtbd,
            Record::LeanCanvas(_) => EntityKind::LeanCanvas,
            Record::StoryBrand(_) => EntityKind::StoryBrand,
            Record::Founder(_) => EntityKind::Founder,
        }
    }

    /// Returns the `$type` value
    pub fn type_uri(&self) -> &'static str {
        self.kind().uri()
    }

    /// Returns the record's `$id`
    pub fn id(&self) -> &str {
        match self {
            Record::Icp(r) => &r.id,
            Record::Startup(r) => &r.id,
            Record::Idea(r) => &r.id,
            Record::Hypothesis(r) => &r.id,
            Record::Jtbd(r) => &r.id,
            Record::LeanCanvas(r) => &r.id,
            Record::StoryBrand(r) => &r.id,
            Record::Founder(r) => &r.id,
        }
    }

    /// Serializes to an untyped JSON value, `$type` included.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl<T: super::Entity> From<Typed<T>> for Record {
    fn from(typed: Typed<T>) -> Self {
        typed.into_record()
    }
}
