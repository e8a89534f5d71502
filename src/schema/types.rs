//! Schema type definitions
//!
//! Supported field types:
//! - string: UTF-8 string with a minimum length (required strings use 1)
//! - number: any JSON number, optionally bounded by a closed interval
//! - enum: one of a fixed set of string literals
//! - array: sequence with an element type and a minimum length
//! - object: nested object with its own field list
//! - record: nested entity record carrying its own `$type`

use serde::Serialize;

use crate::entities::EntityKind;

/// Field carrying the record identifier.
pub const ID_FIELD: &str = "$id";

/// Field carrying the record discriminant.
pub const TYPE_FIELD: &str = "$type";

/// Supported field types
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string of at least `min_len` characters
    String { min_len: usize },
    /// JSON number within `[min, max]` when bounds are declared
    Number {
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    /// One of a fixed set of string literals
    Enum { values: &'static [&'static str] },
    /// Sequence of `element_type` with at least `min_items` elements
    Array {
        element_type: Box<FieldType>,
        min_items: usize,
    },
    /// Nested object with its own field schema
    Object { fields: Vec<FieldDef> },
    /// Nested entity record, checked against that entity's schema
    Record { entity: EntityKind },
}

impl FieldType {
    /// Returns the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String { .. } => "string",
            FieldType::Number { .. } => "number",
            FieldType::Enum { .. } => "enum",
            FieldType::Array { .. } => "array",
            FieldType::Object { .. } => "object",
            FieldType::Record { .. } => "record",
        }
    }

    /// Non-empty string
    pub fn text() -> Self {
        FieldType::String { min_len: 1 }
    }

    /// Any string, including the empty one
    pub fn any_text() -> Self {
        FieldType::String { min_len: 0 }
    }

    /// Unbounded number
    pub fn number() -> Self {
        FieldType::Number {
            min: None,
            max: None,
        }
    }

    /// Number in the closed interval `[min, max]`
    pub fn bounded(min: f64, max: f64) -> Self {
        FieldType::Number {
            min: Some(min),
            max: Some(max),
        }
    }
}

/// Field definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDef {
    /// Field name as it appears in the JSON object
    pub name: &'static str,
    /// Field data type
    #[serde(flatten)]
    pub field_type: FieldType,
    /// Whether field must be present
    pub required: bool,
    /// Whether an explicit `null` is accepted
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
}

impl FieldDef {
    /// Create a field with an arbitrary type
    pub fn new(name: &'static str, field_type: FieldType, required: bool) -> Self {
        Self {
            name,
            field_type,
            required,
            nullable: false,
        }
    }

    /// Create a required non-empty string field
    pub fn required_string(name: &'static str) -> Self {
        Self::new(name, FieldType::text(), true)
    }

    /// Create an optional string field. Present values obey the same
    /// non-empty rule as required strings.
    pub fn optional_string(name: &'static str) -> Self {
        Self::new(name, FieldType::text(), false)
    }

    /// Create a required unbounded number field
    pub fn required_number(name: &'static str) -> Self {
        Self::new(name, FieldType::number(), true)
    }

    /// Create a required number field bounded to `[min, max]`
    pub fn required_bounded(name: &'static str, min: f64, max: f64) -> Self {
        Self::new(name, FieldType::bounded(min, max), true)
    }

    /// Create a required enum field
    pub fn required_enum(name: &'static str, values: &'static [&'static str]) -> Self {
        Self::new(name, FieldType::Enum { values }, true)
    }

    /// Create a required array of strings with at least one element
    pub fn required_string_list(name: &'static str) -> Self {
        Self::new(
            name,
            FieldType::Array {
                element_type: Box::new(FieldType::any_text()),
                min_items: 1,
            },
            true,
        )
    }

    /// Create an optional array of strings, possibly empty
    pub fn optional_string_list(name: &'static str) -> Self {
        Self::new(
            name,
            FieldType::Array {
                element_type: Box::new(FieldType::any_text()),
                min_items: 0,
            },
            false,
        )
    }

    /// Create an optional nested object field
    pub fn optional_object(name: &'static str, fields: Vec<FieldDef>) -> Self {
        Self::new(name, FieldType::Object { fields }, false)
    }

    /// Create an optional nested record field
    pub fn optional_record(name: &'static str, entity: EntityKind) -> Self {
        Self::new(name, FieldType::Record { entity }, false)
    }

    /// Create an optional array of nested records
    pub fn optional_record_list(name: &'static str, entity: EntityKind) -> Self {
        Self::new(
            name,
            FieldType::Array {
                element_type: Box::new(FieldType::Record { entity }),
                min_items: 0,
            },
            false,
        )
    }

    /// Create the `$id` field every record carries
    pub fn identifier() -> Self {
        Self::required_string(ID_FIELD)
    }

    /// Accept an explicit `null` for this field
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}

/// Complete schema definition for one entity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    /// Entity the schema describes
    pub entity: EntityKind,
    /// Discriminant every record of this entity carries
    #[serde(rename = "$type")]
    pub type_uri: &'static str,
    /// Field definitions, in declaration order
    pub fields: Vec<FieldDef>,
}

impl Schema {
    /// Create a new schema
    pub fn new(entity: EntityKind, fields: Vec<FieldDef>) -> Self {
        Self {
            entity,
            type_uri: entity.uri(),
            fields,
        }
    }

    /// Returns the field definition named `name`
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the names of every required field
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }

    /// Validates the schema structure itself (not a record)
    pub fn validate_structure(&self) -> Result<(), String> {
        match self.field(ID_FIELD) {
            None => return Err(format!("Schema must define an '{}' field", ID_FIELD)),
            Some(id) if !id.required => {
                return Err(format!("'{}' field must be required", ID_FIELD));
            }
            Some(_) => {}
        }

        if self.field(TYPE_FIELD).is_some() {
            return Err(format!(
                "'{}' is implied by the entity and must not be declared",
                TYPE_FIELD
            ));
        }

        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(format!("Field '{}' declared twice", field.name));
            }
        }

        Ok(())
    }
}
