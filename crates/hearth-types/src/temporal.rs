//! Timestamp handling for persisted documents.
//!
//! Every stored record carries `created_at`/`updated_at` as ISO-8601 strings
//! with exactly six fractional digits, e.g. `2024-01-01T00:00:00.000000`.
//! [`now`] truncates to microsecond precision up front so a value survives
//! the wire format without drifting.

use chrono::{NaiveDateTime, Timelike, Utc};

use crate::error::TypeError;

/// Wire format for timestamps: ISO-8601 with a fixed six-digit fraction.
pub const ISO_MICRO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Fallback accepted on parse: ISO-8601 without a fractional part.
const ISO_SECONDS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Current UTC time, truncated to microsecond precision.
pub fn now() -> NaiveDateTime {
    truncate_to_micros(Utc::now().naive_utc())
}

/// Drop sub-microsecond precision from a timestamp.
pub fn truncate_to_micros(t: NaiveDateTime) -> NaiveDateTime {
    t.with_nanosecond(t.nanosecond() / 1_000 * 1_000).unwrap_or(t)
}

/// Render a timestamp in the wire format.
pub fn format(t: &NaiveDateTime) -> String {
    t.format(ISO_MICRO_FORMAT).to_string()
}

/// Parse a wire-format timestamp. A missing fractional part is accepted.
pub fn parse(s: &str) -> Result<NaiveDateTime, TypeError> {
    NaiveDateTime::parse_from_str(s, ISO_MICRO_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, ISO_SECONDS_FORMAT))
        .map_err(|_| TypeError::InvalidTimestamp(s.to_string()))
}

/// Serde with-module serializing `NaiveDateTime` in the wire format.
///
/// Usage: `#[serde(with = "hearth_types::temporal::iso_micro")]`.
pub mod iso_micro {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(t: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(t))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_micro_opt(0, 0, 0, 0)
            .unwrap()
    }

    #[test]
    fn format_emits_six_fraction_digits() {
        assert_eq!(format(&sample()), "2024-01-01T00:00:00.000000");
    }

    #[test]
    fn format_parse_roundtrip() {
        let t = sample()
            .with_nanosecond(123_456_000)
            .unwrap();
        assert_eq!(parse(&format(&t)).unwrap(), t);
    }

    #[test]
    fn parse_accepts_missing_fraction() {
        assert_eq!(parse("2024-01-01T00:00:00").unwrap(), sample());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            parse("not a timestamp"),
            Err(TypeError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn now_is_already_truncated() {
        let t = now();
        // Surviving the wire format must not change the value.
        assert_eq!(parse(&format(&t)).unwrap(), t);
    }

    #[test]
    fn truncate_drops_nanoseconds() {
        let t = sample().with_nanosecond(123_456_789).unwrap();
        let truncated = truncate_to_micros(t);
        assert_eq!(truncated.nanosecond(), 123_456_000);
    }
}
