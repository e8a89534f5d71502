//! Schema subsystem
//!
//! Entity shapes are declared as data (`Schema`, `FieldDef`, `FieldType`)
//! and enforced on untyped JSON by `SchemaValidator`.
//!
//! # Design Principles
//!
//! - Every record carries `$id` and its entity's exact `$type`
//! - No coercion, no defaults
//! - Optional means "may be absent"; present values obey the full rule
//! - Failures report every offending field path
//! - Deterministic validation, no side effects

mod errors;
mod types;
mod validator;

pub use errors::{Issue, IssueCode, SchemaResult, ValidationError};
pub use types::{FieldDef, FieldType, Schema, ID_FIELD, TYPE_FIELD};
pub use validator::{SchemaValidator, UnknownFields, ValidatorOptions};

pub(crate) use validator::describe;
