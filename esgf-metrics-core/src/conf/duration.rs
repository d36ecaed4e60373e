use std::time::Duration;

/// Parses `<n><unit>` where unit is one of `s`, `m`, `h`, `d`.
///
/// Surrounding whitespace is ignored. Overflowing values are rejected.
pub fn parse_duration(raw: &str) -> Option<Duration> {
    let raw = raw.trim();
    let (split, _) = raw.char_indices().last()?;
    let (digits, unit) = raw.split_at(split);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let n: u64 = digits.parse().ok()?;
    let scale = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        _ => return None,
    };

    n.checked_mul(scale).map(Duration::from_secs)
}
