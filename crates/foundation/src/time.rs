use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, Utc};

/// Days an entry stays flagged as new after its creation timestamp.
pub const DEFAULT_RECENCY_DAYS: i64 = 7;

// Keeps `TimeDelta::days` far away from its overflow bound.
const MAX_WINDOW_DAYS: i64 = 1_000_000;

/// Parses a content `createdAt` value.
///
/// Accepts RFC 3339 (`2024-05-01T12:00:00Z`, with offset or fractional
/// seconds), a naive date-time (`2024-05-01T12:00:00`, read as UTC) and a bare
/// date (`2024-05-01`, midnight UTC). Anything else yields `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Trailing time window used for "new" badges.
///
/// The boundary is inclusive: an entry created exactly `span` ago is still
/// recent. Timestamps in the future are recent as well.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RecencyWindow {
    span: TimeDelta,
}

impl RecencyWindow {
    pub fn days(days: i64) -> Self {
        Self {
            span: TimeDelta::days(days.clamp(0, MAX_WINDOW_DAYS)),
        }
    }

    pub fn contains(&self, created: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(created) <= self.span
    }

    /// Unparseable or missing timestamps are never recent.
    pub fn is_recent(&self, created_at: &str, now: DateTime<Utc>) -> bool {
        parse_timestamp(created_at).is_some_and(|created| self.contains(created, now))
    }
}

impl Default for RecencyWindow {
    fn default() -> Self {
        Self::days(DEFAULT_RECENCY_DAYS)
    }
}
