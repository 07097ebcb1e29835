//! Coordinate lookup view state.
//!
//! The web UI renders lookup results into four text nodes (latitude,
//! longitude, address, error) plus a hidden/shown error element. This struct
//! is the same surface as plain strings.

use serde_json::Value;

/// Text shown for the coordinate lookup result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateView {
    pub latitude: String,
    pub longitude: String,
    pub address: String,
    pub error: String,
    pub error_visible: bool,
}

impl CoordinateView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a lookup response.
    ///
    /// The two checks are independent, matching the web UI handler: an
    /// `error` key reveals the error text and clears the fields; a response
    /// carrying all of `latitude`, `longitude`, and `address` hides the error
    /// and fills the fields. Any other shape leaves the view untouched.
    pub fn apply(&mut self, resp: &Value) {
        if let Some(err) = resp.get("error") {
            self.error_visible = true;
            self.error = value_text(err);
            self.address.clear();
            self.latitude.clear();
            self.longitude.clear();
        }
        if let (Some(lat), Some(lon), Some(addr)) = (
            resp.get("latitude"),
            resp.get("longitude"),
            resp.get("address"),
        ) {
            self.error_visible = false;
            self.address = value_text(addr);
            // The latitude node carried a trailing ", " separator.
            self.latitude = format!("{}, ", value_text(lat));
            self.longitude = value_text(lon);
        }
    }
}

/// Render a JSON value the way string interpolation did: strings without
/// quotes, everything else in its JSON form.
fn value_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_response_reveals_error_and_clears_fields() {
        let mut view = CoordinateView {
            latitude: "9, ".to_string(),
            longitude: "9".to_string(),
            address: "Old Rd".to_string(),
            ..Default::default()
        };
        view.apply(&json!({"error": "no match"}));
        assert!(view.error_visible);
        assert_eq!(view.error, "no match");
        assert!(view.latitude.is_empty());
        assert!(view.longitude.is_empty());
        assert!(view.address.is_empty());
    }

    #[test]
    fn success_response_hides_error_and_fills_fields() {
        let mut view = CoordinateView {
            error: "stale".to_string(),
            error_visible: true,
            ..Default::default()
        };
        view.apply(&json!({"latitude": 1, "longitude": 2, "address": "X"}));
        assert!(!view.error_visible);
        assert_eq!(view.latitude, "1, ");
        assert_eq!(view.longitude, "2");
        assert_eq!(view.address, "X");
    }

    #[test]
    fn unrecognized_shape_changes_nothing() {
        let mut view = CoordinateView {
            latitude: "3, ".to_string(),
            longitude: "4".to_string(),
            address: "Main St".to_string(),
            ..Default::default()
        };
        let before = view.clone();
        view.apply(&json!({"latitude": 1, "longitude": 2}));
        assert_eq!(view, before);
    }

    #[test]
    fn response_with_both_shapes_applies_both_checks() {
        // Not mutually exclusive: the success branch runs after the error
        // branch and wins on the shared fields.
        let mut view = CoordinateView::new();
        view.apply(&json!({
            "error": "partial",
            "latitude": 5,
            "longitude": 6,
            "address": "Y"
        }));
        assert!(!view.error_visible);
        assert_eq!(view.error, "partial");
        assert_eq!(view.latitude, "5, ");
        assert_eq!(view.longitude, "6");
        assert_eq!(view.address, "Y");
    }

    #[test]
    fn float_coordinates_render_in_json_form() {
        let mut view = CoordinateView::new();
        view.apply(&json!({"latitude": 51.5, "longitude": -0.1, "address": "London"}));
        assert_eq!(view.latitude, "51.5, ");
        assert_eq!(view.longitude, "-0.1");
    }
}
