//! startup-schema - Typed, validated records for startup-building concepts
//!
//! Eight entities (ICP, Startup, Idea, Hypothesis, JTBD, LeanCanvas,
//! StoryBrand, Founder), each with a validator, a guard and a factory.

pub mod cli;
pub mod entities;
pub mod observability;
pub mod schema;

pub use entities::{
    create_founder, create_hypothesis, create_icp, create_idea, create_jtbd, create_lean_canvas,
    create_startup, create_story_brand, is_founder, is_hypothesis, is_icp, is_idea, is_jtbd,
    is_lean_canvas, is_startup, is_story_brand, semantic_frame, validate_founder,
    validate_hypothesis, validate_icp, validate_idea, validate_jtbd, validate_lean_canvas,
    validate_startup, validate_story_brand, Entity, EntityKind, Founder, FounderRole, Hypothesis,
    HypothesisStatus, Icp, Idea, Jtbd, LeanCanvas, Record, Startup, StartupStatus, StoryBrand,
    Typed, Validation, Vesting, VestingSchedule, FOUNDER_TYPE, HYPOTHESIS_TYPE, ICP_TYPE,
    IDEA_TYPE, JTBD_TYPE, LEAN_CANVAS_TYPE, STARTUP_TYPE, STORY_BRAND_TYPE,
};
pub use schema::{Issue, IssueCode, SchemaValidator, ValidationError, ValidatorOptions};
