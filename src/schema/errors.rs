//! Validation error types
//!
//! Issue codes:
//! - SCHEMA_MISSING_FIELD
//! - SCHEMA_NULL_VALUE
//! - SCHEMA_TYPE_MISMATCH
//! - SCHEMA_EMPTY_VALUE
//! - SCHEMA_INVALID_ENUM
//! - SCHEMA_OUT_OF_RANGE
//! - SCHEMA_DISCRIMINANT
//! - SCHEMA_UNKNOWN_FIELD
//!
//! A failed validation always reports every issue found (unless the
//! validator runs fail-fast), never just a boolean.

use std::fmt;

use serde::Serialize;

use crate::entities::EntityKind;

/// Per-field issue codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "&'static str")]
pub enum IssueCode {
    /// Required field absent
    MissingField,
    /// Null where the field is not nullable
    NullValue,
    /// Wrong JSON type
    TypeMismatch,
    /// Empty string or too-short sequence
    EmptyValue,
    /// Value outside an enumerated literal set
    InvalidEnum,
    /// Number outside its declared interval
    OutOfRange,
    /// `$type` missing or naming another entity
    Discriminant,
    /// Undeclared field under a rejecting policy
    UnknownField,
}

impl IssueCode {
    /// Returns the stable string code.
    pub fn code(&self) -> &'static str {
        match self {
            IssueCode::MissingField => "SCHEMA_MISSING_FIELD",
            IssueCode::NullValue => "SCHEMA_NULL_VALUE",
            IssueCode::TypeMismatch => "SCHEMA_TYPE_MISMATCH",
            IssueCode::EmptyValue => "SCHEMA_EMPTY_VALUE",
            IssueCode::InvalidEnum => "SCHEMA_INVALID_ENUM",
            IssueCode::OutOfRange => "SCHEMA_OUT_OF_RANGE",
            IssueCode::Discriminant => "SCHEMA_DISCRIMINANT",
            IssueCode::UnknownField => "SCHEMA_UNKNOWN_FIELD",
        }
    }
}

impl From<IssueCode> for &'static str {
    fn from(code: IssueCode) -> Self {
        code.code()
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// What went wrong
    pub code: IssueCode,
    /// Field path (e.g., "founders[0].vesting.schedule")
    pub field: String,
    /// Expected type or condition
    pub expected: String,
    /// Actual value or type found
    pub actual: String,
}

impl Issue {
    pub fn new(
        code: IssueCode,
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self {
            code,
            field: field.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::new(IssueCode::MissingField, field, "field to be present", "missing")
    }

    pub fn null_value(field: impl Into<String>) -> Self {
        Self::new(IssueCode::NullValue, field, "non-null value", "null")
    }

    pub fn type_mismatch(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(IssueCode::TypeMismatch, field, expected, actual)
    }

    pub fn empty_value(field: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::new(IssueCode::EmptyValue, field, expected, "empty")
    }

    pub fn invalid_enum(field: impl Into<String>, allowed: &[&str], actual: impl Into<String>) -> Self {
        Self::new(
            IssueCode::InvalidEnum,
            field,
            format!("one of [{}]", allowed.join(", ")),
            actual,
        )
    }

    pub fn out_of_range(field: impl Into<String>, range: impl Into<String>, actual: f64) -> Self {
        Self::new(IssueCode::OutOfRange, field, range, actual.to_string())
    }

    pub fn discriminant(
        field: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::new(IssueCode::Discriminant, field, expected, actual)
    }

    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::new(
            IssueCode::UnknownField,
            field,
            "no undeclared fields",
            "extra field present",
        )
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "field '{}': expected {}, got {}",
            self.field, self.expected, self.actual
        )
    }
}

/// A rejected record with every issue found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Entity the input was checked against; `None` when the discriminant
    /// did not name any known entity
    entity: Option<EntityKind>,
    issues: Vec<Issue>,
}

impl ValidationError {
    /// Error code shared by every rejected record
    pub const CODE: &'static str = "SCHEMA_VALIDATION_FAILED";

    pub fn new(entity: Option<EntityKind>, issues: Vec<Issue>) -> Self {
        Self { entity, issues }
    }

    /// Single-issue rejection.
    pub fn single(entity: Option<EntityKind>, issue: Issue) -> Self {
        Self::new(entity, vec![issue])
    }

    /// Returns the entity the input was checked against
    pub fn entity(&self) -> Option<EntityKind> {
        self.entity
    }

    /// Returns all issues, in the order they were found
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Returns the first issue
    pub fn first(&self) -> Option<&Issue> {
        self.issues.first()
    }

    /// Returns the paths of every failing field
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.issues.iter().map(|issue| issue.field.as_str())
    }

    /// Returns whether some issue was reported at exactly `path`
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.fields().any(|field| field == path)
    }

    /// Returns whether some issue carries `code`
    pub fn has_code(&self, code: IssueCode) -> bool {
        self.issues.iter().any(|issue| issue.code == code)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.entity {
            Some(entity) => write!(f, "{}: {} record rejected", Self::CODE, entity)?,
            None => write!(f, "{}: record rejected", Self::CODE)?,
        }
        for (i, issue) in self.issues.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Result type for schema checks
pub type SchemaResult<T> = Result<T, ValidationError>;
