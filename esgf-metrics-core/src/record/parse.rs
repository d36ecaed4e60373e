use crate::error::LineError;
use crate::record::types::{ByteCount, RequestRecord};
use chrono::{DateTime, FixedOffset};

const CLF_TIMESTAMP: &str = "%d/%b/%Y:%H:%M:%S %z";
const REQUIRED_FIELDS: usize = 9;

/// A line that could not become a `RequestRecord`.
///
/// `timestamp` is set when the line got far enough to yield one, so the
/// failure can still be attributed to a period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRejection {
    pub error: LineError,
    pub timestamp: Option<DateTime<FixedOffset>>,
}

impl From<LineError> for LineRejection {
    fn from(error: LineError) -> Self {
        Self {
            error,
            timestamp: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Bare,
    Quoted,
    Bracketed,
}

#[derive(Debug, Clone, Copy)]
struct Field<'a> {
    kind: FieldKind,
    value: &'a str,
}

/// Parses one combined-format line:
///
/// `host ident user [time] "METHOD PATH PROTOCOL" status bytes "referrer" "agent"`
///
/// Trailing fields after the user agent are ignored.
pub fn parse_line(line: &str) -> Result<RequestRecord, LineRejection> {
    let (fields, truncated) = split_fields(line.trim_end_matches(['\r', '\n']));

    // A line cut short after its timestamp is still attributed to a period.
    let early = |error: LineError| LineRejection {
        error,
        timestamp: leading_timestamp(&fields),
    };
    if let Some(error) = truncated {
        return Err(early(error));
    }
    if fields.len() < REQUIRED_FIELDS {
        return Err(early(LineError::malformed("too few fields")));
    }

    let client = expect_kind(fields[0], FieldKind::Bare, "client address")?;
    expect_kind(fields[1], FieldKind::Bare, "ident placeholder")?;
    expect_kind(fields[2], FieldKind::Bare, "user placeholder")?;

    let raw_ts = expect_kind(fields[3], FieldKind::Bracketed, "timestamp")?;
    let timestamp = parse_clf_timestamp(raw_ts)?;

    // From here on, failures carry the timestamp for period attribution.
    let with_ts = |error: LineError| LineRejection {
        error,
        timestamp: Some(timestamp),
    };

    let request =
        expect_kind(fields[4], FieldKind::Quoted, "request line").map_err(|r| with_ts(r.error))?;
    let parts: Vec<&str> = request.split_whitespace().collect();
    let [method, path, protocol] = parts.as_slice() else {
        return Err(with_ts(LineError::malformed(
            "request line is not METHOD PATH PROTOCOL",
        )));
    };

    let status_code = expect_kind(fields[5], FieldKind::Bare, "status code")
        .map_err(|r| with_ts(r.error))?
        .parse::<u16>()
        .map_err(|_| with_ts(LineError::malformed("non-numeric status code")))?;

    let raw_bytes =
        expect_kind(fields[6], FieldKind::Bare, "byte count").map_err(|r| with_ts(r.error))?;
    let bytes_transferred = parse_byte_count(raw_bytes).map_err(with_ts)?;

    let referrer =
        expect_kind(fields[7], FieldKind::Quoted, "referrer").map_err(|r| with_ts(r.error))?;
    let user_agent =
        expect_kind(fields[8], FieldKind::Quoted, "user agent").map_err(|r| with_ts(r.error))?;

    Ok(RequestRecord {
        client_address: client.to_string(),
        timestamp,
        method: method.to_string(),
        path: path.to_string(),
        protocol: protocol.to_string(),
        status_code,
        bytes_transferred,
        referrer: referrer.to_string(),
        user_agent: user_agent.to_string(),
    })
}

/// Parses `22/Sep/2019:12:01:01 -0700`, keeping the written offset.
pub fn parse_clf_timestamp(raw: &str) -> Result<DateTime<FixedOffset>, LineError> {
    DateTime::parse_from_str(raw, CLF_TIMESTAMP)
        .map_err(|_| LineError::malformed("unparseable timestamp"))
}

pub fn parse_byte_count(raw: &str) -> Result<ByteCount, LineError> {
    if raw == "-" {
        return Ok(ByteCount::Unknown);
    }

    // `u64::from_str` accepts a leading '+', Apache never writes one.
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LineError::InvalidByteCount {
            value: raw.to_string(),
        });
    }

    raw.parse::<u64>()
        .map(ByteCount::Known)
        .map_err(|_| LineError::InvalidByteCount {
            value: raw.to_string(),
        })
}

fn expect_kind<'a>(
    field: Field<'a>,
    kind: FieldKind,
    reason: &'static str,
) -> Result<&'a str, LineRejection> {
    if field.kind == kind {
        Ok(field.value)
    } else {
        Err(LineError::malformed(reason).into())
    }
}

/// The timestamp of a line whose fourth field is a readable `[time]`.
fn leading_timestamp(fields: &[Field<'_>]) -> Option<DateTime<FixedOffset>> {
    fields
        .get(3)
        .filter(|field| field.kind == FieldKind::Bracketed)
        .and_then(|field| parse_clf_timestamp(field.value).ok())
}

/// Splits on whitespace, treating `"..."` and `[...]` as single fields.
/// Inside quotes a backslash escapes the next character.
///
/// An unterminated quote or bracket stops the split; the fields read before
/// it are returned alongside the error.
fn split_fields(line: &str) -> (Vec<Field<'_>>, Option<LineError>) {
    let bytes = line.as_bytes();
    let mut fields = Vec::with_capacity(REQUIRED_FIELDS);
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b if b.is_ascii_whitespace() => {
                i += 1;
            }
            b'"' => {
                let start = i + 1;
                let mut end = start;
                let closed = loop {
                    match bytes.get(end) {
                        None => break false,
                        Some(b'\\') => end += 2,
                        Some(b'"') => break true,
                        Some(_) => end += 1,
                    }
                };
                let Some(value) = line.get(start..end).filter(|_| closed) else {
                    return (fields, Some(LineError::malformed("unterminated quote")));
                };
                fields.push(Field {
                    kind: FieldKind::Quoted,
                    value,
                });
                i = end + 1;
            }
            b'[' => {
                let start = i + 1;
                let Some(end) = line[start..].find(']').map(|offset| start + offset) else {
                    return (fields, Some(LineError::malformed("unterminated bracket")));
                };
                fields.push(Field {
                    kind: FieldKind::Bracketed,
                    value: &line[start..end],
                });
                i = end + 1;
            }
            _ => {
                let start = i;
                while i < bytes.len() && !bytes[i].is_ascii_whitespace() {
                    i += 1;
                }
                fields.push(Field {
                    kind: FieldKind::Bare,
                    value: &line[start..i],
                });
            }
        }
    }

    (fields, None)
}
