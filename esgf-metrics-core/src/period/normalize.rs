use crate::period::quarter::Quarter;
use chrono::{DateTime, FixedOffset};

/// Converts a log timestamp to the reference offset used for bucketing.
///
/// The instant is unchanged; only the wall-clock fields move. Two log lines
/// written for the same instant with different offsets therefore always
/// normalize to identical values.
pub fn normalize_timestamp(
    ts: DateTime<FixedOffset>,
    reference: FixedOffset,
) -> DateTime<FixedOffset> {
    ts.with_timezone(&reference)
}

/// Calendar quarter of `ts` after normalization to `reference`.
pub fn period_of(ts: DateTime<FixedOffset>, reference: FixedOffset) -> Quarter {
    Quarter::containing(&normalize_timestamp(ts, reference))
}

/// Parses `+HH:MM`, `-HH:MM`, `+HHMM` or `Z`.
pub fn parse_offset(raw: &str) -> Option<FixedOffset> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("z") || raw.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match raw.as_bytes().first()? {
        b'+' => (1, &raw[1..]),
        b'-' => (-1, &raw[1..]),
        _ => return None,
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
