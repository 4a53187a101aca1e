use std::collections::BTreeMap;

/// Which of the two recognized event shapes a line matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    JobStarted,
    JobEnded,
}

/// A single parsed event line: bracketed timestamp, parenthesized package,
/// tag. The payload after the tag is opaque and dropped at parse time.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub kind: EventKind,
    /// Seconds since an arbitrary epoch (the start of the build).
    pub stamp: f64,
    pub package: String,
}

/// A paired start/end for one package.
///
/// Recorded at the moment an end event pairs with the currently held start,
/// so a later unmatched start never disturbs an already stored interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start: f64,
    pub end: f64,
}

impl Interval {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Index by package name, holding the most recent pairing for each.
pub type IntervalIndex = BTreeMap<String, Interval>;
