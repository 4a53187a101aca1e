//! Parsing for the colcon build event log (events.log).

pub mod parse;
pub mod row;

pub use parse::{durations, parse_log_file};
pub use row::{Event, EventKind, Interval, IntervalIndex};
