//! CLI command implementations
//!
//! Commands write results to stdout as JSON lines and log lifecycle
//! events to stderr. The library calls they wrap are pure.

use std::io::{self, Write};
use std::path::Path;

use serde_json::{json, Value};

use crate::entities::{EntityKind, Icp, Record};
use crate::observability::{log_event, Event, Logger, MetricsSnapshot, ValidationMetrics};
use crate::schema::{SchemaValidator, ValidationError};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{parse_records, parse_single, read_input, write_json, write_line};

/// Run a parsed command line
pub fn run_command(cli: Cli) -> CliResult<()> {
    let config = Config::load_or_default(cli.config.as_deref())?;
    let logger = match cli.log_level {
        Some(level) => Logger::new(level),
        None => config.logger()?,
    };

    if let Some(path) = &cli.config {
        log_event(
            &logger,
            Event::ConfigLoaded,
            &[("path", path.display().to_string().as_str())],
        );
    }

    let result = dispatch(cli.command, &config, &logger);
    if let Err(e) = &result {
        log_event(
            &logger,
            Event::CommandFailed,
            &[("code", e.code()), ("message", e.to_string().as_str())],
        );
    }
    result
}

fn dispatch(command: Command, config: &Config, logger: &Logger) -> CliResult<()> {
    let mut stdout = io::stdout().lock();
    match command {
        Command::Validate { entity, input } => {
            validate(config, logger, entity, input.as_deref(), &mut stdout)
        }
        Command::Frame { input } => frame(config, logger, input.as_deref(), &mut stdout),
        Command::Types => types(&mut stdout),
        Command::Schema { entity } => schema(entity, &mut stdout),
    }
}

/// Validate every record in the input.
///
/// Fails with `Rejected` once all results are written if any record was
/// rejected.
pub fn validate<W: Write>(
    config: &Config,
    logger: &Logger,
    entity: Option<EntityKind>,
    input: Option<&Path>,
    out: &mut W,
) -> CliResult<()> {
    let text = read_input(input)?;
    let records = parse_records(&text)?;
    log_event(
        logger,
        Event::InputRead,
        &[("records", records.len().to_string().as_str())],
    );

    let snapshot = validate_records(&config.validator(), logger, entity, &records, out)?;
    log_event(
        logger,
        Event::BatchComplete,
        &[
            ("accepted", snapshot.records_accepted.to_string().as_str()),
            ("checked", snapshot.records_checked.to_string().as_str()),
            ("issues", snapshot.issues_reported.to_string().as_str()),
            ("rejected", snapshot.records_rejected.to_string().as_str()),
        ],
    );

    if snapshot.has_rejections() {
        return Err(CliError::Rejected {
            rejected: snapshot.records_rejected,
            checked: snapshot.records_checked,
        });
    }
    Ok(())
}

/// Validate `records` in order, writing one result line each.
pub fn validate_records<W: Write>(
    validator: &SchemaValidator,
    logger: &Logger,
    entity: Option<EntityKind>,
    records: &[Value],
    out: &mut W,
) -> CliResult<MetricsSnapshot> {
    let metrics = ValidationMetrics::new();

    for (index, value) in records.iter().enumerate() {
        let outcome = match entity {
            Some(kind) => Record::validate_as(validator, kind, value),
            None => Record::validate_with(validator, value),
        };

        match outcome {
            Ok(record) => {
                metrics.record_accepted();
                log_event(
                    logger,
                    Event::RecordAccepted,
                    &[("id", record.id()), ("type", record.kind().name())],
                );
                write_json(out, &accepted_line(index, &record))?;
            }
            Err(err) => {
                metrics.record_rejected(err.issues().len());
                log_event(
                    logger,
                    Event::RecordRejected,
                    &[
                        ("index", index.to_string().as_str()),
                        ("reason", err.to_string().as_str()),
                    ],
                );
                write_json(out, &rejected_line(index, &err))?;
            }
        }
    }

    Ok(metrics.snapshot())
}

fn accepted_line(index: usize, record: &Record) -> Value {
    json!({
        "status": "ok",
        "index": index,
        "type": record.kind(),
        "$id": record.id(),
    })
}

fn rejected_line(index: usize, err: &ValidationError) -> Value {
    json!({
        "status": "error",
        "index": index,
        "code": ValidationError::CODE,
        "type": err.entity(),
        "issues": err.issues(),
    })
}

/// Validate one ICP record and print its semantic frame.
pub fn frame<W: Write>(
    config: &Config,
    logger: &Logger,
    input: Option<&Path>,
    out: &mut W,
) -> CliResult<()> {
    let value = parse_single(&read_input(input)?)?;
    let icp = config.validator().validate::<Icp>(&value)?;

    log_event(logger, Event::FrameRendered, &[("id", icp.id.as_str())]);
    write_line(out, &icp.semantic_frame())
}

/// List every entity with its discriminant.
pub fn types<W: Write>(out: &mut W) -> CliResult<()> {
    for kind in EntityKind::ALL {
        write_json(out, &json!({ "name": kind.name(), "$type": kind.uri() }))?;
    }
    Ok(())
}

/// Print an entity's schema.
pub fn schema<W: Write>(entity: EntityKind, out: &mut W) -> CliResult<()> {
    let pretty = serde_json::to_string_pretty(&entity.schema())?;
    write_line(out, &pretty)
}
