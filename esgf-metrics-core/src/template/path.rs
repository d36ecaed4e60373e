use crate::error::LineError;

/// Canonicalizes a request path as logged so it can be matched against the
/// serving root and split into segments.
///
/// - drops the query string
/// - percent-decodes once (`%2F` becomes a separator)
/// - collapses repeated slashes and removes `.` segments
/// - resolves `..`; climbing above `/` rejects the path
/// - removes a trailing slash
///
/// NUL bytes and invalid UTF-8 after decoding reject the path.
pub fn normalize_request_path(raw: &str) -> Result<String, LineError> {
    let without_query = raw.split_once('?').map_or(raw, |(path, _)| path);

    let decoded = percent_encoding::percent_decode_str(without_query)
        .decode_utf8()
        .map_err(|_| LineError::unrecognized(raw))?;

    if decoded.as_bytes().contains(&0) {
        return Err(LineError::unrecognized(raw));
    }

    let mut stack: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                // prevent traversal above root.
                if stack.pop().is_none() {
                    return Err(LineError::unrecognized(raw));
                }
            }
            _ => stack.push(segment),
        }
    }

    let mut normalized = String::with_capacity(decoded.len() + 1);
    normalized.push('/');
    normalized.push_str(&stack.join("/"));
    Ok(normalized)
}
