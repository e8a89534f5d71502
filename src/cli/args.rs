//! CLI argument definitions using clap
//!
//! Commands:
//! - startup-schema validate [--type <Entity>] [FILE]
//! - startup-schema frame [FILE]
//! - startup-schema types
//! - startup-schema schema <Entity>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::entities::EntityKind;
use crate::observability::Severity;

/// Validate startup-building records (ICP, Idea, LeanCanvas, ...)
#[derive(Parser, Debug)]
#[command(name = "startup-schema")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Minimum log severity, overrides the configuration file
    #[arg(long, global = true)]
    pub log_level: Option<Severity>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate JSON records read from FILE or stdin
    Validate {
        /// Validate every record as this entity instead of by its $type
        #[arg(long = "type", short = 't')]
        entity: Option<EntityKind>,

        /// Input file (object, array of objects, or JSON lines)
        input: Option<PathBuf>,
    },

    /// Print the semantic frame of an ICP record
    Frame {
        /// Input file holding one ICP record
        input: Option<PathBuf>,
    },

    /// List every entity with its discriminant
    Types,

    /// Print an entity's schema as JSON
    Schema {
        /// Entity name or discriminant
        entity: EntityKind,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
