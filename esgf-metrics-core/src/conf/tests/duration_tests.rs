use crate::conf::parse_duration;
use std::time::Duration;

#[test]
fn parses_each_unit() {
    assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
    assert_eq!(parse_duration("90m"), Some(Duration::from_secs(90 * 60)));
    assert_eq!(parse_duration("12h"), Some(Duration::from_secs(12 * 3600)));
    assert_eq!(parse_duration("1d"), Some(Duration::from_secs(86_400)));
}

#[test]
fn ignores_surrounding_whitespace() {
    assert_eq!(parse_duration(" 2h "), Some(Duration::from_secs(7_200)));
}

#[test]
fn zero_is_allowed() {
    assert_eq!(parse_duration("0s"), Some(Duration::ZERO));
}

#[test]
fn rejects_malformed_values() {
    for raw in ["", "d", "1", "1w", "-1d", "1.5h", "1 d", "h1", "1dé"] {
        assert_eq!(parse_duration(raw), None, "{raw:?} should be rejected");
    }
}

#[test]
fn rejects_overflow() {
    assert_eq!(parse_duration("999999999999999999d"), None);
}
