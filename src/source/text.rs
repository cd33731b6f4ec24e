/*!
 * Text Source
 * Permissive line-oriented parsing of process definitions
 */

use super::SourceResult;
use crate::core::types::{Pid, Tick};
use crate::process::ProcessSpec;
use log::info;
use std::fs;
use std::path::Path;

/// Parse process definitions from free text
///
/// Each non-empty line is split on commas and/or whitespace into
/// `pid arrival duration` fields. Fields are coerced, never rejected:
///
/// - 3+ fields: explicit pid (unparseable pid falls back to the 1-based
///   line index), then arrival and duration;
/// - 2 fields: arrival and duration, pid from the line index;
/// - 1 field: arrival only, duration defaults to 1.
///
/// Arrival and duration are clamped to a minimum of 1 and default to 1
/// when unparseable. Blank lines are skipped and do not advance the line
/// index.
pub fn parse_text(text: &str) -> Vec<ProcessSpec> {
    let mut specs = Vec::new();

    for line in text.lines() {
        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();
        let index = specs.len() as Pid + 1;
        let spec = match fields.as_slice() {
            [] => continue,
            [arrival] => ProcessSpec::new(None, parse_clamped(arrival), 1),
            [arrival, duration] => {
                ProcessSpec::new(None, parse_clamped(arrival), parse_clamped(duration))
            }
            [pid, arrival, duration, ..] => ProcessSpec::new(
                Some(pid.parse().unwrap_or(index)),
                parse_clamped(arrival),
                parse_clamped(duration),
            ),
        };
        specs.push(spec);
    }

    specs
}

/// Read `path` and hand its contents to [`parse_text`]
pub fn parse_file<P: AsRef<Path>>(path: P) -> SourceResult<Vec<ProcessSpec>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let specs = parse_text(&text);
    info!("Parsed {} process definitions from {}", specs.len(), path.display());
    Ok(specs)
}

/// Parse a numeric field permissively: unparseable becomes 1, parsed
/// values are clamped to at least 1
fn parse_clamped(field: &str) -> Tick {
    field.parse::<Tick>().map_or(1, |v| v.max(1))
}
