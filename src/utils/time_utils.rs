use chrono::{DateTime, FixedOffset, NaiveDateTime};

pub struct TimeUtils;

impl TimeUtils {
    /// "Jan 2, 09:35 AM"
    pub const SIGNAL_TIME_FORMAT: &str = "%b %-d, %I:%M %p";
    /// Intraday axis labels ("09:35 AM").
    pub const AXIS_TIME_FORMAT: &str = "%I:%M %p";
    /// Multi-day axis labels ("Jan 2").
    pub const AXIS_DATE_FORMAT: &str = "%b %-d";

    // Layouts the backend has been seen to emit besides RFC 3339
    // (pandas renders timestamps with a space separator).
    const OFFSET_LAYOUTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M:%S%.f%:z"];
    const NAIVE_LAYOUTS: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
}

/// Parses a bar/signal timestamp as sent by the backend.
///
/// The offset in the source string is kept as-is. Strings without an
/// offset are read as UTC. Returns `None` for anything unrecognised.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt);
    }

    for layout in TimeUtils::OFFSET_LAYOUTS {
        if let Ok(dt) = DateTime::parse_from_str(raw, layout) {
            return Some(dt);
        }
    }

    TimeUtils::NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(raw, layout).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Millisecond epoch used only for ordering signals.
pub fn timestamp_millis(raw: &str) -> Option<i64> {
    parse_timestamp(raw).map(|dt| dt.timestamp_millis())
}
