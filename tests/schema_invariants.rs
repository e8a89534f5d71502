//! Schema Invariant Tests
//!
//! Tests for record validation invariants:
//! - Validation is deterministic
//! - Guards agree with validators
//! - Every record is tagged with its own `$type`
//! - Required strings and sequences are non-empty
//! - Enum and range constraints are enforced

use serde_json::{json, Value};
use startup_schema::entities::{self, EntityKind, Record};
use startup_schema::schema::{
    FieldType, IssueCode, SchemaValidator, UnknownFields, ValidatorOptions,
};
use startup_schema::{
    is_founder, is_hypothesis, is_icp, is_idea, is_jtbd, is_lean_canvas, is_startup,
    is_story_brand, validate_founder, validate_hypothesis, validate_icp, validate_idea,
    validate_lean_canvas, validate_startup, validate_story_brand,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn icp() -> Value {
    json!({
        "$id": "icp-1",
        "$type": "https://schema.org.ai/ICP",
        "as": "Developers",
        "at": "FinTech startups",
        "are": "building payment APIs",
        "using": "Node.js and TypeScript",
        "to": "ship faster with fewer bugs"
    })
}

fn idea() -> Value {
    json!({
        "$id": "idea-1",
        "$type": "https://schema.org.ai/Idea",
        "concept": "Contract testing as a service",
        "problem": "Payment integrations break silently",
        "solution": "Replay production traffic against staging"
    })
}

fn hypothesis() -> Value {
    json!({
        "$id": "hyp-1",
        "$type": "https://schema.org.ai/Hypothesis",
        "assumption": "Teams will pay for replay testing",
        "metric": "trial conversion",
        "target": 0.15,
        "status": "testing"
    })
}

fn jtbd() -> Value {
    json!({
        "$id": "jtbd-1",
        "$type": "https://schema.org.ai/JTBD",
        "job": "release a payment change",
        "context": "before a Friday deploy",
        "outcome": "no refunds on Monday"
    })
}

fn lean_canvas() -> Value {
    json!({
        "$id": "lc-1",
        "$type": "https://schema.org.ai/LeanCanvas",
        "problem": ["silent breakage"],
        "solution": ["traffic replay"],
        "uniqueValue": "Catch integration bugs before customers do",
        "customerSegments": ["payment platform teams"],
        "channels": ["developer content"],
        "revenueStreams": ["per-seat subscription"],
        "costStructure": ["compute"],
        "keyMetrics": ["weekly replays"]
    })
}

fn story_brand() -> Value {
    json!({
        "$id": "sb-1",
        "$type": "https://schema.org.ai/StoryBrand",
        "character": "A platform engineer",
        "problem": "Deploys feel like gambling",
        "guide": "Replay",
        "plan": ["Connect staging", "Record traffic", "Ship with confidence"],
        "callToAction": "Start a free trial",
        "success": "Quiet on-call weeks",
        "failure": "Another incident review"
    })
}

fn founder(id: &str, equity: f64) -> Value {
    json!({
        "$id": id,
        "$type": "https://schema.org.ai/Founder",
        "userId": format!("user-{}", id),
        "name": "Ada",
        "role": "ceo",
        "equity": equity
    })
}

fn startup() -> Value {
    json!({
        "$id": "startup-1",
        "$type": "https://schema.org.ai/Startup",
        "name": "Replay",
        "status": "validation",
        "icp": icp(),
        "idea": idea(),
        "businessModel": lean_canvas(),
        "founders": [founder("f1", 60.0), founder("f2", 40.0)]
    })
}

/// One valid record per entity, in `EntityKind::ALL` order.
fn samples() -> Vec<(EntityKind, Value)> {
    vec![
        (EntityKind::Icp, icp()),
        (EntityKind::Startup, startup()),
        (EntityKind::Idea, idea()),
        (EntityKind::Hypothesis, hypothesis()),
        (EntityKind::Jtbd, jtbd()),
        (EntityKind::LeanCanvas, lean_canvas()),
        (EntityKind::StoryBrand, story_brand()),
        (EntityKind::Founder, founder("f1", 50.0)),
    ]
}

fn guard(kind: EntityKind, value: &Value) -> bool {
    match kind {
        EntityKind::Icp => is_icp(value),
        EntityKind::Startup => is_startup(value),
        EntityKind::Idea => is_idea(value),
        EntityKind::Hypothesis => is_hypothesis(value),
        EntityKind::Jtbd => is_jtbd(value),
        EntityKind::LeanCanvas => is_lean_canvas(value),
        EntityKind::StoryBrand => is_story_brand(value),
        EntityKind::Founder => is_founder(value),
    }
}

// =============================================================================
// Validation Determinism Tests
// =============================================================================

/// Same record validates the same way every time.
#[test]
fn test_validation_is_deterministic() {
    for (kind, value) in samples() {
        for _ in 0..50 {
            assert!(guard(kind, &value), "{} sample rejected", kind);
        }
    }
}

/// Invalid record fails with identical issues every time.
#[test]
fn test_invalid_record_fails_consistently() {
    let doc = json!({ "$id": "", "$type": "https://schema.org.ai/Founder", "equity": 101 });

    let first = validate_founder(&doc).unwrap_err();
    for _ in 0..50 {
        assert_eq!(validate_founder(&doc).unwrap_err(), first);
    }
}

/// Validation never touches its input.
#[test]
fn test_validation_does_not_mutate_input() {
    let doc = startup();
    let before = doc.clone();
    let _ = validate_startup(&doc);
    assert_eq!(doc, before);
}

// =============================================================================
// Guard Tests
// =============================================================================

/// Null, empty objects and non-objects are rejected by every guard.
#[test]
fn test_guards_reject_degenerate_inputs() {
    let inputs = [json!(null), json!({}), json!([]), json!("ICP"), json!(42), json!(true)];
    for kind in EntityKind::ALL {
        for input in &inputs {
            assert!(!guard(kind, input), "{} accepted {}", kind, input);
        }
    }
}

/// Guards agree with the generic validator.
#[test]
fn test_guards_match_validators() {
    for (kind, value) in samples() {
        for other in EntityKind::ALL {
            let expected = kind == other;
            assert_eq!(guard(other, &value), expected, "{} guard on {} sample", other, kind);
            assert_eq!(
                SchemaValidator::default().check(other, &value).is_ok(),
                expected
            );
        }
    }
}

/// Generic forms behave like the per-entity ones.
#[test]
fn test_generic_validate() {
    let typed = entities::validate::<startup_schema::Idea>(&idea()).unwrap();
    assert_eq!(typed.concept, "Contract testing as a service");
    assert!(entities::is_valid::<startup_schema::Icp>(&icp()));
    assert!(!entities::is_valid::<startup_schema::Icp>(&idea()));
}

// =============================================================================
// Discriminant Tests
// =============================================================================

/// A record of one entity never passes as another.
#[test]
fn test_cross_entity_rejection() {
    let err = validate_story_brand(&lean_canvas()).unwrap_err();
    assert_eq!(err.entity(), Some(EntityKind::StoryBrand));
    assert!(err.has_code(IssueCode::Discriminant));
    assert!(!is_story_brand(&lean_canvas()));
}

/// `$type` must be present and exact.
#[test]
fn test_discriminant_must_match_exactly() {
    let mut doc = idea();
    doc["$type"] = json!("https://schema.org.ai/idea");
    assert!(!is_idea(&doc));

    doc.as_object_mut().unwrap().remove("$type");
    let err = validate_idea(&doc).unwrap_err();
    assert!(err.has_issue_at("$type"));
}

/// Untagged or unknown records are rejected by the record dispatcher.
#[test]
fn test_record_dispatch_requires_known_type() {
    let err = Record::from_value(&json!({ "$id": "x" })).unwrap_err();
    assert_eq!(err.entity(), None);
    assert!(err.has_code(IssueCode::Discriminant));

    let err = Record::from_value(&json!({ "$id": "x", "$type": "https://schema.org.ai/Pitch" }))
        .unwrap_err();
    assert!(err.has_code(IssueCode::Discriminant));
}

/// Every sample dispatches to its own variant.
#[test]
fn test_record_dispatch_by_type() {
    for (kind, value) in samples() {
        let record = Record::from_value(&value).unwrap();
        assert_eq!(record.kind(), kind);
        assert_eq!(record.to_value().unwrap()["$type"], kind.uri());
    }
}

// =============================================================================
// Required Field Tests
// =============================================================================

/// Every required string field rejects the empty string.
#[test]
fn test_required_strings_reject_empty() {
    for (kind, value) in samples() {
        for field in kind.schema().required_fields() {
            if !value[field].is_string() {
                continue;
            }
            let mut doc = value.clone();
            doc[field] = json!("");
            assert!(!guard(kind, &doc), "{}.{} accepted \"\"", kind, field);
        }
    }
}

/// Optional strings may be absent, but once present they must be non-empty.
#[test]
fn test_optional_strings_reject_empty() {
    let mut checked = Vec::new();
    for (kind, value) in samples() {
        let schema = kind.schema();
        let optional = schema
            .fields
            .iter()
            .filter(|f| !f.required && matches!(f.field_type, FieldType::String { .. }));

        for field in optional {
            let mut doc = value.clone();
            doc[field.name] = json!("Regulated fintech");
            assert!(guard(kind, &doc), "{}.{} rejected a value", kind, field.name);

            doc[field.name] = json!("");
            assert!(!guard(kind, &doc), "{}.{} accepted \"\"", kind, field.name);
            let err = SchemaValidator::default().check(kind, &doc).unwrap_err();
            assert!(err.has_issue_at(field.name));
            assert!(err.has_code(IssueCode::EmptyValue));

            checked.push(field.name);
        }
    }
    checked.sort_unstable();
    assert_eq!(
        checked,
        vec!["differentiator", "industry", "occupation", "unfairAdvantage"]
    );
}

/// Every required field must be present.
#[test]
fn test_required_fields_must_be_present() {
    for (kind, value) in samples() {
        for field in kind.schema().required_fields() {
            let mut doc = value.clone();
            doc.as_object_mut().unwrap().remove(field);
            assert!(!guard(kind, &doc), "{} accepted without {}", kind, field);
        }
    }
}

/// All issues are collected, in schema order.
#[test]
fn test_all_issues_reported() {
    let doc = json!({ "$id": "icp-1", "$type": "https://schema.org.ai/ICP" });
    let err = validate_icp(&doc).unwrap_err();
    let fields: Vec<&str> = err.fields().collect();
    assert_eq!(fields, vec!["as", "at", "are", "using", "to"]);
}

/// Fail-fast stops at the first issue.
#[test]
fn test_fail_fast_reports_one_issue() {
    let validator = SchemaValidator::new(ValidatorOptions {
        unknown_fields: UnknownFields::Strip,
        fail_fast: true,
    });
    let doc = json!({ "$id": "icp-1", "$type": "https://schema.org.ai/ICP" });
    let err = validator.check(EntityKind::Icp, &doc).unwrap_err();
    assert_eq!(err.issues().len(), 1);
    assert_eq!(err.first().unwrap().field, "as");
}

// =============================================================================
// Sequence Tests
// =============================================================================

/// Empty required lists are rejected.
#[test]
fn test_empty_customer_segments_rejected() {
    let mut doc = lean_canvas();
    doc["customerSegments"] = json!([]);
    let err = validate_lean_canvas(&doc).unwrap_err();
    assert!(err.has_issue_at("customerSegments"));
    assert!(err.has_code(IssueCode::EmptyValue));
}

/// List elements must be strings.
#[test]
fn test_list_elements_type_checked() {
    let mut doc = story_brand();
    doc["plan"] = json!(["Connect staging", 2]);
    let err = validate_story_brand(&doc).unwrap_err();
    assert!(err.has_issue_at("plan[1]"));
}

/// Optional lists may be empty.
#[test]
fn test_optional_lists_may_be_empty() {
    let mut doc = hypothesis();
    doc["evidence"] = json!([]);
    assert!(is_hypothesis(&doc));

    let mut doc = jtbd();
    doc["currentSolutions"] = json!([]);
    assert!(is_jtbd(&doc));
}

// =============================================================================
// Enum and Range Tests
// =============================================================================

/// Founder equity is bounded to [0, 100], inclusive.
#[test]
fn test_founder_equity_bounds() {
    assert!(is_founder(&founder("f", 0.0)));
    assert!(is_founder(&founder("f", 100.0)));
    assert!(!is_founder(&founder("f", -1.0)));
    assert!(!is_founder(&founder("f", 101.0)));

    let err = validate_founder(&founder("f", 100.5)).unwrap_err();
    assert!(err.has_code(IssueCode::OutOfRange));
}

/// Hypothesis status is a closed set.
#[test]
fn test_hypothesis_status_values() {
    for status in ["untested", "testing", "validated", "invalidated"] {
        let mut doc = hypothesis();
        doc["status"] = json!(status);
        assert!(is_hypothesis(&doc), "{} rejected", status);
    }

    let mut doc = hypothesis();
    doc["status"] = json!("confirmed");
    let err = validate_hypothesis(&doc).unwrap_err();
    assert!(err.has_code(IssueCode::InvalidEnum));
}

/// Vesting schedule only accepts monthly or quarterly.
#[test]
fn test_vesting_schedule_values() {
    let mut doc = founder("f", 25.0);
    doc["vesting"] = json!({ "cliff": 12, "period": 48, "schedule": "quarterly" });
    assert!(is_founder(&doc));

    doc["vesting"]["schedule"] = json!("weekly");
    let err = validate_founder(&doc).unwrap_err();
    assert!(err.has_issue_at("vesting.schedule"));
}

/// Startup status is a closed set.
#[test]
fn test_startup_status_values() {
    let mut doc = startup();
    doc["status"] = json!("mvp");
    assert!(is_startup(&doc));
    doc["status"] = json!("MVP");
    assert!(!is_startup(&doc));
}

// =============================================================================
// Nested Record Tests
// =============================================================================

/// Nested records are validated with paths into the parent.
#[test]
fn test_nested_founder_errors_have_paths() {
    let mut doc = startup();
    doc["founders"][1]["equity"] = json!(120);
    let err = validate_startup(&doc).unwrap_err();
    assert!(err.has_issue_at("founders[1].equity"));
}

/// Nested references may be null or absent.
#[test]
fn test_nested_references_nullable() {
    let mut doc = startup();
    doc["icp"] = json!(null);
    doc["idea"] = json!(null);
    doc["businessModel"] = json!(null);
    assert!(is_startup(&doc));

    let minimal = json!({
        "$id": "startup-2",
        "$type": "https://schema.org.ai/Startup",
        "name": "Stealth",
        "status": "draft"
    });
    let typed = validate_startup(&minimal).unwrap();
    assert!(typed.icp.is_none());
    assert!(typed.founders.is_none());
}

/// Nested records must carry their own discriminant.
#[test]
fn test_nested_record_needs_own_type() {
    let mut doc = startup();
    doc["idea"] = icp();
    let err = validate_startup(&doc).unwrap_err();
    assert!(err.fields().any(|field| field.starts_with("idea")));
}

// =============================================================================
// Unknown Field Tests
// =============================================================================

/// Unknown fields are dropped by default and rejected in strict mode.
#[test]
fn test_unknown_field_policy() {
    let mut doc = idea();
    doc["tagline"] = json!("Replay everything");

    let typed = validate_idea(&doc).unwrap();
    assert!(typed.to_value().unwrap().get("tagline").is_none());

    let strict = SchemaValidator::new(ValidatorOptions {
        unknown_fields: UnknownFields::Reject,
        fail_fast: false,
    });
    let err = strict.check(EntityKind::Idea, &doc).unwrap_err();
    assert!(err.has_code(IssueCode::UnknownField));
    assert!(err.has_issue_at("tagline"));
}
