//! Response header map parsed from the raw header block.
//!
//! Header names are stored verbatim; lookup is case-insensitive. The map is
//! built once per response and consumed for `content-disposition` and
//! `content-type`.

/// Map of response header name → value.
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    entries: Vec<(String, String)>,
}

impl HeaderMap {
    /// Parse a raw header block: one header per line, name and value
    /// separated by the first `": "` occurrence. Lines without the separator
    /// (the status line, blank lines) are skipped.
    pub fn parse(raw: &str) -> Self {
        let mut entries = Vec::new();
        for line in raw.lines() {
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            if let Some((name, value)) = line.split_once(": ") {
                entries.push((name.to_string(), value.to_string()));
            }
        }
        Self { entries }
    }

    /// Build from already-split header lines (curl's header callback yields
    /// one line per invocation).
    pub fn from_lines(lines: &[String]) -> Self {
        let joined = lines.join("\n");
        Self::parse(&joined)
    }

    /// Case-insensitive lookup; returns the first matching value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn content_disposition(&self) -> Option<&str> {
        self.get("content-disposition")
    }

    pub fn content_type(&self) -> Option<&str> {
        self.get("content-type")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
