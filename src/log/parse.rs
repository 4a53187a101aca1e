use crate::error::PipelineError;
use crate::log::row::{Event, EventKind, Interval, IntervalIndex};
use anyhow::Context;
use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Parse a colcon events.log into a package->interval index.
///
/// Recognized line shapes (anything else is ignored):
///
/// [12.345678] (pkg_name) JobStarted: {...}
/// [98.765432] (pkg_name) JobEnded: {...}
///
/// Pairing is positional and authoritative top to bottom: a start overwrites
/// any earlier unmatched start for the same package, and each end pairs with
/// whatever start is currently recorded, overwriting the stored interval. An
/// end with no recorded start is dropped.
pub fn parse_log_file(path: &Path) -> anyhow::Result<IntervalIndex> {
    if !path.exists() {
        return Err(PipelineError::LogNotFound(path.to_path_buf()).into());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("read log file {}", path.display()))?;

    let started = Regex::new(r"^\[(\d+\.\d+)\] \((.*?)\) JobStarted: \{.*\}")?;
    let ended = Regex::new(r"^\[(\d+\.\d+)\] \((.*?)\) JobEnded: \{.*\}")?;

    let mut out: IntervalIndex = IntervalIndex::new();
    let mut job_starts: BTreeMap<String, f64> = BTreeMap::new();

    for (lineno, line) in text.lines().enumerate() {
        let Some(event) = parse_line(line, &started, &ended)
            .map_err(|text| PipelineError::MalformedTimestamp {
                path: path.display().to_string(),
                line: lineno + 1,
                text,
            })?
        else {
            continue;
        };

        match event.kind {
            EventKind::JobStarted => {
                job_starts.insert(event.package, event.stamp);
            }
            EventKind::JobEnded => {
                if let Some(&start) = job_starts.get(&event.package) {
                    out.insert(
                        event.package,
                        Interval {
                            start,
                            end: event.stamp,
                        },
                    );
                }
            }
        }
    }

    Ok(out)
}

/// Derive the elapsed-duration map from the interval index.
pub fn durations(index: &IntervalIndex) -> BTreeMap<String, f64> {
    index
        .iter()
        .map(|(package, interval)| (package.clone(), interval.duration()))
        .collect()
}

/// Match one line against the two event shapes. `Ok(None)` for lines that
/// match neither; `Err` carries the timestamp text when a matched group does
/// not convert to a float.
fn parse_line(
    line: &str,
    started: &Regex,
    ended: &Regex,
) -> Result<Option<Event>, String> {
    let (kind, caps) = if let Some(caps) = started.captures(line) {
        (EventKind::JobStarted, caps)
    } else if let Some(caps) = ended.captures(line) {
        (EventKind::JobEnded, caps)
    } else {
        return Ok(None);
    };

    let stamp_text = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
    let stamp: f64 = stamp_text.parse().map_err(|_| stamp_text.to_string())?;
    let package = caps.get(2).map(|m| m.as_str()).unwrap_or_default().to_string();

    Ok(Some(Event {
        kind,
        stamp,
        package,
    }))
}
