//! Closed set of entity kinds and their discriminants

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::founder::{self, FOUNDER_TYPE};
use super::hypothesis::{self, HYPOTHESIS_TYPE};
use super::icp::{self, ICP_TYPE};
use super::idea::{self, IDEA_TYPE};
use super::jtbd::{self, JTBD_TYPE};
use super::lean_canvas::{self, LEAN_CANVAS_TYPE};
use super::startup::{self, STARTUP_TYPE};
use super::story_brand::{self, STORY_BRAND_TYPE};
use crate::schema::Schema;

/// Common prefix of every discriminant.
pub const SCHEMA_BASE: &str = "https://schema.org.ai/";

/// One variant per entity shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Icp,
    Startup,
    Idea,
    Hypothesis,
    Jtbd,
    LeanCanvas,
    StoryBrand,
    Founder,
}

impl EntityKind {
    /// Every entity kind, in declaration order
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Icp,
        EntityKind::Startup,
        EntityKind::Idea,
        EntityKind::Hypothesis,
        EntityKind::Jtbd,
        EntityKind::LeanCanvas,
        EntityKind::StoryBrand,
        EntityKind::Founder,
    ];

    /// Returns the entity name used in discriminants and messages
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Icp => "ICP",
            EntityKind::Startup => "Startup",
            EntityKind::Idea => "Idea",
            EntityKind::Hypothesis => "Hypothesis",
            EntityKind::Jtbd => "JTBD",
            EntityKind::LeanCanvas => "LeanCanvas",
            EntityKind::StoryBrand => "StoryBrand",
            EntityKind::Founder => "Founder",
        }
    }

    /// Returns the fixed `$type` value
    pub fn uri(&self) -> &'static str {
        match self {
            EntityKind::Icp => ICP_TYPE,
            EntityKind::Startup => STARTUP_TYPE,
            EntityKind::Idea => IDEA_TYPE,
            EntityKind::Hypothesis => HYPOTHESIS_TYPE,
            EntityKind::Jtbd => JTBD_TYPE,
            EntityKind::LeanCanvas => LEAN_CANVAS_TYPE,
            EntityKind::StoryBrand => STORY_BRAND_TYPE,
            EntityKind::Founder => FOUNDER_TYPE,
        }
    }

    /// Returns the field schema for this entity
    pub fn schema(&self) -> Schema {
        match self {
            EntityKind::Icp => icp::schema(),
            EntityKind::Startup => startup::schema(),
            EntityKind::Idea => idea::schema(),
            EntityKind::Hypothesis => hypothesis::schema(),
            EntityKind::Jtbd => jtbd::schema(),
            EntityKind::LeanCanvas => lean_canvas::schema(),
            EntityKind::StoryBrand => story_brand::schema(),
            EntityKind::Founder => founder::schema(),
        }
    }

    /// Looks up the kind whose discriminant is exactly `uri`
    pub fn from_uri(uri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.uri() == uri)
    }

    /// Looks up a kind by entity name, ignoring ASCII case
    /// (`"leancanvas"`, `"LeanCanvas"` and `"jtbd"` all resolve)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    /// Accepts an entity name or a full discriminant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .or_else(|| Self::from_uri(s))
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|k| k.name()).collect();
                format!("unknown entity '{}' (expected one of {})", s, known.join(", "))
            })
    }
}

impl Serialize for EntityKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
