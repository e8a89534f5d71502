//! JSON I/O handling for CLI
//!
//! - Input: one JSON value, an array of values, or JSON lines; from a file
//!   or stdin
//! - Output: one JSON object per line on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read the whole input from `path`, or stdin when absent
pub fn read_input(path: Option<&Path>) -> CliResult<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Split input into records. A lone top-level array is unpacked.
pub fn parse_records(input: &str) -> CliResult<Vec<Value>> {
    if input.trim().is_empty() {
        return Err(CliError::usage("Empty input"));
    }

    let mut values = serde_json::Deserializer::from_str(input)
        .into_iter::<Value>()
        .collect::<Result<Vec<_>, _>>()?;

    match values.pop() {
        Some(Value::Array(items)) if values.is_empty() => Ok(items),
        Some(last) => {
            values.push(last);
            Ok(values)
        }
        None => Ok(values),
    }
}

/// Parse input holding exactly one JSON value
pub fn parse_single(input: &str) -> CliResult<Value> {
    if input.trim().is_empty() {
        return Err(CliError::usage("Empty input"));
    }
    Ok(serde_json::from_str(input)?)
}

/// Write one compact JSON line
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// Write one line of plain text
pub fn write_line<W: Write>(out: &mut W, line: &str) -> CliResult<()> {
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}
