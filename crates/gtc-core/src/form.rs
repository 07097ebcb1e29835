//! Form field map and `application/x-www-form-urlencoded` serialization.
//!
//! Built fresh per operation and discarded after the request is sent; field
//! order is preserved so serialized bodies are deterministic.

use crate::error::ClientError;
use url::form_urlencoded;

/// Ordered name → value pairs, the client-side analog of a submitted form.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    fields: Vec<(String, String)>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Duplicate names are kept; they serialize in order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// First value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize to a `key=value&...` urlencoded body.
    pub fn serialize(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.fields {
            ser.append_pair(name, value);
        }
        ser.finish()
    }

    /// Numeric image id from the `image_id_val` field.
    ///
    /// Parses leading decimal digits and ignores any trailing text, like the
    /// form widgets that pad the value. Errors when the field is absent or
    /// starts with something other than a digit.
    pub fn image_id(&self) -> Result<u64, ClientError> {
        let raw = self.get("image_id_val").ok_or(ClientError::ImageId)?;
        let trimmed = raw.trim_start();
        let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return Err(ClientError::ImageId);
        }
        digits.parse::<u64>().map_err(|_| ClientError::ImageId)
    }
}

/// Build a field map from `name=value` pairs (CLI input form).
/// A pair without `=` becomes a field with an empty value.
pub fn fields_from_pairs<I, S>(pairs: I) -> FormFields
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut fields = FormFields::new();
    for pair in pairs {
        let pair = pair.as_ref();
        match pair.split_once('=') {
            Some((name, value)) => fields.push(name, value),
            None => fields.push(pair, ""),
        }
    }
    fields
}
