//! Human-readable duration formatting.

/// Format a non-negative number of seconds as `"1h 1m 10.50s"`, `"2m 5.00s"`
/// or `"45.20s"` depending on magnitude. The sub-minute remainder keeps two
/// decimals; no rounding is applied before formatting.
pub fn seconds_to_minutes_seconds(seconds: f64) -> String {
    let hours = (seconds / 3600.0).floor();
    let remainder = seconds - hours * 3600.0;
    let minutes = (remainder / 60.0).floor();
    let remaining_seconds = remainder - minutes * 60.0;

    if hours > 0.0 {
        format!(
            "{}h {}m {:.2}s",
            hours as u64, minutes as u64, remaining_seconds
        )
    } else if minutes > 0.0 {
        format!("{}m {:.2}s", minutes as u64, remaining_seconds)
    } else {
        format!("{:.2}s", remaining_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sub_minute() {
        assert_eq!(seconds_to_minutes_seconds(45.2), "45.20s");
    }

    #[test]
    fn minutes_and_seconds() {
        assert_eq!(seconds_to_minutes_seconds(125.0), "2m 5.00s");
    }

    #[test]
    fn hours_minutes_seconds() {
        assert_eq!(seconds_to_minutes_seconds(3670.5), "1h 1m 10.50s");
    }

    #[test]
    fn zero() {
        assert_eq!(seconds_to_minutes_seconds(0.0), "0.00s");
    }

    #[test]
    fn exact_minute_boundary() {
        assert_eq!(seconds_to_minutes_seconds(60.0), "1m 0.00s");
    }
}
