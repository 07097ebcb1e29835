//! Filename extraction from the Content-Disposition header value.

/// The backend always sends `attachment; filename=<name>`.
const ATTACHMENT_MARKER: &str = "attachment; filename=";

/// Extracts the filename from a raw Content-Disposition value by splitting on
/// the literal `attachment; filename=` marker; everything after the marker is
/// the name. Surrounding double quotes, if present, are stripped.
/// Returns None when the marker is absent or the remainder is empty.
pub fn filename_from_disposition(header_value: &str) -> Option<String> {
    let rest = header_value.split_once(ATTACHMENT_MARKER)?.1.trim();
    let unquoted = if rest.starts_with('"') && rest.ends_with('"') && rest.len() >= 2 {
        &rest[1..rest.len() - 1]
    } else {
        rest
    };
    if unquoted.is_empty() {
        None
    } else {
        Some(unquoted.to_string())
    }
}
