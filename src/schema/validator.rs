//! Schema validator for untyped records
//!
//! Validation semantics:
//! - The root is a JSON object carrying the entity's exact `$type`
//! - All required fields are present
//! - Field types exactly match schema types, no coercion
//! - Strings and sequences meet their minimum lengths
//! - Enum values come from the declared literal set
//! - Numbers stay inside their declared closed interval
//! - Nested objects and records are checked recursively
//!
//! The validator never mutates its input and never panics. The same input
//! always yields the same issues, in the same order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::{Issue, SchemaResult, ValidationError};
use super::types::{FieldDef, FieldType, Schema, TYPE_FIELD};
use crate::entities::{Entity, EntityKind, Typed, Validation};

/// What to do with fields a schema does not declare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownFields {
    /// Ignore them; they are dropped from the typed value
    #[default]
    Strip,
    /// Report each one as an issue
    Reject,
}

/// Validator behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorOptions {
    /// Policy for undeclared fields
    #[serde(default)]
    pub unknown_fields: UnknownFields,
    /// Stop at the first issue instead of collecting all of them
    #[serde(default)]
    pub fail_fast: bool,
}

/// Schema validator that enforces entity schemas on untyped values.
///
/// Holds no state beyond its options, so one instance can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaValidator {
    options: ValidatorOptions,
}

impl SchemaValidator {
    /// Creates a validator with the given options.
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    /// Checks `value` against the schema of `entity` without building a
    /// typed value.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` listing every issue found.
    pub fn check(&self, entity: EntityKind, value: &Value) -> SchemaResult<()> {
        let mut pass = Pass::new(&self.options);
        pass.check_record(entity, value, "");
        pass.finish(entity)
    }

    /// Validates `value` as a record of `T` and returns the typed record.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` if any schema rule fails.
    pub fn validate<T: Entity>(&self, value: &Value) -> Validation<T> {
        self.check(T::KIND, value)?;

        // Every rule has passed, so the value has the exact shape `T` expects.
        serde_json::from_value::<Typed<T>>(value.clone()).map_err(|e| {
            ValidationError::single(
                Some(T::KIND),
                Issue::type_mismatch("$root", T::KIND.name(), e.to_string()),
            )
        })
    }

    /// Returns true iff `value` is a valid record of `T`.
    pub fn conforms<T: Entity>(&self, value: &Value) -> bool {
        self.check(T::KIND, value).is_ok()
    }
}

/// One validation run: the options plus the issues collected so far.
struct Pass<'o> {
    options: &'o ValidatorOptions,
    issues: Vec<Issue>,
}

impl<'o> Pass<'o> {
    fn new(options: &'o ValidatorOptions) -> Self {
        Self {
            options,
            issues: Vec::new(),
        }
    }

    fn report(&mut self, issue: Issue) {
        if !self.halted() {
            self.issues.push(issue);
        }
    }

    fn halted(&self) -> bool {
        self.options.fail_fast && !self.issues.is_empty()
    }

    fn finish(self, entity: EntityKind) -> SchemaResult<()> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(Some(entity), self.issues))
        }
    }

    /// Validates a tagged entity record at `path`.
    fn check_record(&mut self, entity: EntityKind, value: &Value, path: &str) {
        let Some(obj) = value.as_object() else {
            self.report(Issue::type_mismatch(
                root_path(path),
                "object",
                json_type_name(value),
            ));
            return;
        };

        let tag_path = make_path(path, TYPE_FIELD);
        match obj.get(TYPE_FIELD) {
            None => self.report(Issue::missing_field(tag_path)),
            Some(Value::String(uri)) if uri == entity.uri() => {}
            Some(other) => self.report(Issue::discriminant(
                tag_path,
                entity.uri(),
                describe(other),
            )),
        }

        let schema = entity.schema();
        self.check_object(obj, &schema.fields, path, true);
    }

    /// Validates an object against field definitions.
    fn check_object(
        &mut self,
        obj: &Map<String, Value>,
        fields: &[FieldDef],
        path: &str,
        tagged: bool,
    ) {
        if self.options.unknown_fields == UnknownFields::Reject {
            for key in obj.keys() {
                let declared = fields.iter().any(|f| f.name == key);
                if !declared && !(tagged && key == TYPE_FIELD) {
                    self.report(Issue::unknown_field(make_path(path, key)));
                }
            }
        }

        for field in fields {
            if self.halted() {
                return;
            }
            let field_path = make_path(path, field.name);

            match obj.get(field.name) {
                None if field.required => self.report(Issue::missing_field(field_path)),
                None => {}
                Some(Value::Null) if field.nullable => {}
                Some(Value::Null) => self.report(Issue::null_value(field_path)),
                Some(value) => self.check_value(value, &field.field_type, &field_path),
            }
        }
    }

    /// Validates a value against a field type.
    fn check_value(&mut self, value: &Value, expected: &FieldType, path: &str) {
        match expected {
            FieldType::String { min_len } => match value.as_str() {
                None => self.report(Issue::type_mismatch(path, "string", json_type_name(value))),
                Some(s) if s.chars().count() < *min_len => {
                    self.report(Issue::empty_value(path, "non-empty string"))
                }
                Some(_) => {}
            },
            FieldType::Number { min, max } => match value.as_f64() {
                None => self.report(Issue::type_mismatch(path, "number", json_type_name(value))),
                Some(n) => {
                    let below = min.is_some_and(|lo| n < lo);
                    let above = max.is_some_and(|hi| n > hi);
                    if below || above {
                        self.report(Issue::out_of_range(path, describe_range(*min, *max), n));
                    }
                }
            },
            FieldType::Enum { values } => match value.as_str() {
                Some(s) if values.contains(&s) => {}
                _ => self.report(Issue::invalid_enum(path, values, describe(value))),
            },
            FieldType::Array {
                element_type,
                min_items,
            } => {
                let Some(items) = value.as_array() else {
                    self.report(Issue::type_mismatch(path, "array", json_type_name(value)));
                    return;
                };

                if items.len() < *min_items {
                    self.report(Issue::empty_value(
                        path,
                        format!("at least {} element(s)", min_items),
                    ));
                }

                for (i, item) in items.iter().enumerate() {
                    if self.halted() {
                        return;
                    }
                    let item_path = format!("{}[{}]", path, i);
                    if item.is_null() {
                        self.report(Issue::null_value(item_path));
                    } else {
                        self.check_value(item, element_type, &item_path);
                    }
                }
            }
            FieldType::Object { fields } => match value.as_object() {
                Some(obj) => self.check_object(obj, fields, path, false),
                None => self.report(Issue::type_mismatch(path, "object", json_type_name(value))),
            },
            FieldType::Record { entity } => self.check_record(*entity, value, path),
        }
    }
}

/// Returns the JSON type name for error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Short rendering of a scalar for error messages; containers report
/// their type only.
pub(crate) fn describe(value: &Value) -> String {
    match value {
        Value::Array(_) | Value::Object(_) => json_type_name(value).to_string(),
        scalar => scalar.to_string(),
    }
}

fn describe_range(min: Option<f64>, max: Option<f64>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("number in [{}, {}]", lo, hi),
        (Some(lo), None) => format!("number >= {}", lo),
        (None, Some(hi)) => format!("number <= {}", hi),
        (None, None) => "number".to_string(),
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

fn root_path(path: &str) -> &str {
    if path.is_empty() {
        "$root"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Founder, Idea};
    use crate::schema::IssueCode;
    use serde_json::json;

    fn valid_idea() -> Value {
        json!({
            "$id": "idea-1",
            "$type": "https://schema.org.ai/Idea",
            "concept": "Async standups",
            "problem": "Meetings eat focus time",
            "solution": "Threaded video updates"
        })
    }

    fn valid_founder() -> Value {
        json!({
            "$id": "founder-1",
            "$type": "https://schema.org.ai/Founder",
            "userId": "user-1",
            "name": "Ada",
            "role": "ceo",
            "equity": 50,
            "vesting": { "cliff": 12, "period": 48, "schedule": "monthly" }
        })
    }

    #[test]
    fn test_valid_record_passes() {
        let validator = SchemaValidator::default();
        let idea = validator.validate::<Idea>(&valid_idea()).unwrap();
        assert_eq!(idea.concept, "Async standups");
        assert_eq!(idea.type_uri(), "https://schema.org.ai/Idea");
    }

    #[test]
    fn test_root_must_be_object() {
        let validator = SchemaValidator::default();
        let err = validator.check(EntityKind::Idea, &json!([1, 2])).unwrap_err();
        let issue = err.first().unwrap();
        assert_eq!(issue.field, "$root");
        assert_eq!(issue.actual, "array");
    }

    #[test]
    fn test_missing_discriminant_fails() {
        let mut doc = valid_idea();
        doc.as_object_mut().unwrap().remove("$type");

        let err = SchemaValidator::default().check(EntityKind::Idea, &doc).unwrap_err();
        assert!(err.has_issue_at("$type"));
        assert!(err.has_code(IssueCode::MissingField));
    }

    #[test]
    fn test_wrong_discriminant_fails() {
        let mut doc = valid_idea();
        doc["$type"] = json!("https://schema.org.ai/Founder");

        let err = SchemaValidator::default().check(EntityKind::Idea, &doc).unwrap_err();
        let issue = err.first().unwrap();
        assert_eq!(issue.code, IssueCode::Discriminant);
        assert!(issue.actual.contains("Founder"));
    }

    #[test]
    fn test_all_issues_collected() {
        let doc = json!({
            "$id": "idea-1",
            "$type": "https://schema.org.ai/Idea",
            "concept": "",
            "problem": 7
        });

        let err = SchemaValidator::default().check(EntityKind::Idea, &doc).unwrap_err();
        assert_eq!(err.issues().len(), 3);
        assert!(err.has_issue_at("concept"));
        assert!(err.has_issue_at("problem"));
        assert!(err.has_issue_at("solution"));
    }

    #[test]
    fn test_fail_fast_stops_at_first_issue() {
        let validator = SchemaValidator::new(ValidatorOptions {
            fail_fast: true,
            ..ValidatorOptions::default()
        });
        let doc = json!({ "$type": "https://schema.org.ai/Idea" });

        let err = validator.check(EntityKind::Idea, &doc).unwrap_err();
        assert_eq!(err.issues().len(), 1);
        assert_eq!(err.first().unwrap().field, "$id");
    }

    #[test]
    fn test_unknown_fields_stripped_by_default() {
        let mut doc = valid_idea();
        doc["votes"] = json!(12);

        let idea = SchemaValidator::default().validate::<Idea>(&doc).unwrap();
        let round = serde_json::to_value(&idea).unwrap();
        assert!(round.get("votes").is_none());
    }

    #[test]
    fn test_unknown_fields_rejected_when_configured() {
        let validator = SchemaValidator::new(ValidatorOptions {
            unknown_fields: UnknownFields::Reject,
            ..ValidatorOptions::default()
        });
        let mut doc = valid_founder();
        doc["votes"] = json!(12);
        doc["vesting"]["accelerated"] = json!(true);

        let err = validator.check(EntityKind::Founder, &doc).unwrap_err();
        assert!(err.has_issue_at("votes"));
        assert!(err.has_issue_at("vesting.accelerated"));
        assert!(err.has_code(IssueCode::UnknownField));

        assert!(validator.conforms::<Founder>(&valid_founder()));
    }

    #[test]
    fn test_nested_object_path() {
        let mut doc = valid_founder();
        doc["vesting"]["schedule"] = json!("weekly");

        let err = SchemaValidator::default().check(EntityKind::Founder, &doc).unwrap_err();
        let issue = err.first().unwrap();
        assert_eq!(issue.field, "vesting.schedule");
        assert_eq!(issue.code, IssueCode::InvalidEnum);
        assert_eq!(issue.actual, "\"weekly\"");
    }

    #[test]
    fn test_nested_object_must_be_object() {
        let mut doc = valid_founder();
        doc["vesting"] = json!("4 years");

        let err = SchemaValidator::default().check(EntityKind::Founder, &doc).unwrap_err();
        assert_eq!(err.first().unwrap().field, "vesting");
        assert_eq!(err.first().unwrap().expected, "object");
    }

    #[test]
    fn test_range_is_closed() {
        let validator = SchemaValidator::default();
        for (equity, ok) in [(0.0, true), (100.0, true), (-0.5, false), (100.5, false)] {
            let mut doc = valid_founder();
            doc["equity"] = json!(equity);
            assert_eq!(validator.conforms::<Founder>(&doc), ok, "equity {}", equity);
        }
    }

    #[test]
    fn test_number_rejects_numeric_string() {
        let mut doc = valid_founder();
        doc["equity"] = json!("50");

        let err = SchemaValidator::default().check(EntityKind::Founder, &doc).unwrap_err();
        assert_eq!(err.first().unwrap().code, IssueCode::TypeMismatch);
    }

    #[test]
    fn test_null_rejected_for_non_nullable() {
        let mut doc = valid_idea();
        doc["differentiator"] = Value::Null;

        let err = SchemaValidator::default().check(EntityKind::Idea, &doc).unwrap_err();
        assert_eq!(err.first().unwrap().code, IssueCode::NullValue);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let validator = SchemaValidator::default();
        let doc = json!({ "$type": "https://schema.org.ai/Founder", "equity": 900 });
        let first = validator.check(EntityKind::Founder, &doc).unwrap_err();
        for _ in 0..50 {
            assert_eq!(validator.check(EntityKind::Founder, &doc).unwrap_err(), first);
        }
    }

    #[test]
    fn test_options_deserialize_with_defaults() {
        let options: ValidatorOptions = serde_json::from_value(json!({})).unwrap();
        assert_eq!(options, ValidatorOptions::default());

        let options: ValidatorOptions =
            serde_json::from_value(json!({ "unknown_fields": "reject", "fail_fast": true })).unwrap();
        assert_eq!(options.unknown_fields, UnknownFields::Reject);
        assert!(options.fail_fast);
    }
}
