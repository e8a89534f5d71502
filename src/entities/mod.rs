//! Startup-building entities
//!
//! Each entity comes with:
//! - a discriminant constant (`X_TYPE`)
//! - a validator (`validate_x`) returning the typed record or every issue
//! - a guard (`is_x`) that is true iff the validator would succeed
//! - a factory (`create_x`) that stamps the discriminant without validating
//!
//! All of these are pure functions of their input.
//!
//! ```
//! use serde_json::json;
//! use startup_schema::entities::{create_idea, is_idea, Idea};
//!
//! let idea = create_idea(Idea {
//!     id: "idea-1".into(),
//!     concept: "Async standups".into(),
//!     problem: "Meetings eat focus time".into(),
//!     solution: "Threaded video updates".into(),
//!     differentiator: None,
//! });
//! assert_eq!(idea.type_uri(), "https://schema.org.ai/Idea");
//! assert!(is_idea(&idea.to_value().unwrap()));
//! assert!(!is_idea(&json!({})));
//! ```

mod founder;
mod hypothesis;
mod icp;
mod idea;
mod jtbd;
mod kind;
mod lean_canvas;
mod record;
mod startup;
mod story_brand;
mod typed;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::schema::{SchemaValidator, ValidationError};

pub use founder::{
    create_founder, is_founder, validate_founder, Founder, FounderRole, Vesting, VestingSchedule,
    FOUNDER_TYPE,
};
pub use hypothesis::{
    create_hypothesis, is_hypothesis, validate_hypothesis, Hypothesis, HypothesisStatus,
    HYPOTHESIS_TYPE,
};
pub use icp::{create_icp, is_icp, semantic_frame, validate_icp, Icp, ICP_TYPE};
pub use idea::{create_idea, is_idea, validate_idea, Idea, IDEA_TYPE};
pub use jtbd::{create_jtbd, is_jtbd, validate_jtbd, Jtbd, JTBD_TYPE};
pub use kind::{EntityKind, SCHEMA_BASE};
pub use lean_canvas::{
    create_lean_canvas, is_lean_canvas, validate_lean_canvas, LeanCanvas, LEAN_CANVAS_TYPE,
};
pub use record::Record;
pub use startup::{create_startup, is_startup, validate_startup, Startup, StartupStatus, STARTUP_TYPE};
pub use story_brand::{
    create_story_brand, is_story_brand, validate_story_brand, StoryBrand, STORY_BRAND_TYPE,
};
pub use typed::Typed;

/// Outcome of validating an untyped value as a record of `T`.
pub type Validation<T> = Result<Typed<T>, ValidationError>;

/// An entity shape: its fields (everything but `$type`), its kind, and
/// its schema.
pub trait Entity: Serialize + DeserializeOwned + Clone + fmt::Debug + PartialEq {
    /// The kind whose discriminant every record of this entity carries
    const KIND: EntityKind;

    /// Moves the fields into the closed `Record` sum type
    fn into_record(self) -> Record;
}

/// Validates `input` as a record of `T` with default options.
pub fn validate<T: Entity>(input: &Value) -> Validation<T> {
    SchemaValidator::default().validate::<T>(input)
}

/// Returns true iff `input` is a valid record of `T`.
pub fn is_valid<T: Entity>(input: &Value) -> bool {
    SchemaValidator::default().conforms::<T>(input)
}
