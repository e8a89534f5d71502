//! A complete record: entity fields plus the entity's fixed discriminant.

use std::ops::Deref;

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Entity, EntityKind, Record};
use crate::schema::TYPE_FIELD;

/// An entity value stamped with its `$type`.
///
/// The discriminant is derived from `T` and cannot be set by callers, so
/// a `Typed<T>` always carries exactly `T`'s tag. Build one with
/// [`Typed::new`] (or the per-entity `create_*` factories) or obtain one
/// from a validator.
#[derive(Debug, Clone, PartialEq)]
pub struct Typed<T> {
    value: T,
}

impl<T: Entity> Typed<T> {
    /// Stamps `value` with `T`'s discriminant. Performs no validation.
    pub fn new(value: T) -> Self {
        Self { value }
    }

    /// Returns the entity kind
    pub fn kind(&self) -> EntityKind {
        T::KIND
    }

    /// Returns the `$type` value
    pub fn type_uri(&self) -> &'static str {
        T::KIND.uri()
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    /// Wraps this record in the closed `Record` sum type
    pub fn into_record(self) -> Record {
        self.value.into_record()
    }

    /// Serializes to an untyped JSON value, `$type` included.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

impl<T> Deref for Typed<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: Entity> From<T> for Typed<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Entity> Serialize for Typed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Tagged<'a, T> {
            #[serde(rename = "$type")]
            type_uri: &'static str,
            #[serde(flatten)]
            value: &'a T,
        }

        Tagged {
            type_uri: T::KIND.uri(),
            value: &self.value,
        }
        .serialize(serializer)
    }
}

impl<'de, T: Entity> Deserialize<'de> for Typed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut value = Value::deserialize(deserializer)?;
        let tag = value
            .as_object_mut()
            .and_then(|obj| obj.remove(TYPE_FIELD));

        match tag.as_ref().and_then(Value::as_str) {
            Some(uri) if uri == T::KIND.uri() => {}
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "expected {} '{}', found '{}'",
                    TYPE_FIELD,
                    T::KIND.uri(),
                    other
                )));
            }
            None => return Err(de::Error::missing_field("$type")),
        }

        T::deserialize(value).map(Self::new).map_err(de::Error::custom)
    }
}
