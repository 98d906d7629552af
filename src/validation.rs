//! Required-field checks and uniform response shaping.
//!
//! Every create/update handler runs the same contract before touching the
//! database: required fields are checked by truthiness (a missing key, an
//! explicit null, and an empty string all count as absent), and a failed
//! check turns into a 400 naming the missing fields. Nothing here performs
//! I/O.

use actix_web::HttpResponse;
use serde_json::json;

/// Truthiness check: `Some("")` is as absent as `None`.
pub fn is_present(value: Option<&str>) -> bool {
    value.map_or(false, |v| !v.is_empty())
}

/// Returns the names of required fields that failed the presence check,
/// in declaration order.
pub fn missing_fields(fields: &[(&'static str, Option<&str>)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| !is_present(*value))
        .map(|(name, _)| *name)
        .collect()
}

pub fn required_message(missing: &[&str]) -> String {
    if missing.len() == 1 {
        format!("{} is required", missing[0])
    } else {
        format!("{} are required", missing.join(", "))
    }
}

pub fn required_error(missing: &[&str]) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "message": required_message(missing) }))
}

/// Generic 500 body. The underlying cause is logged at the call site, never
/// surfaced to the caller.
pub fn server_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "message": "Server error" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_counts_as_absent() {
        assert!(!is_present(None));
        assert!(!is_present(Some("")));
        assert!(is_present(Some("x")));
    }

    #[test]
    fn missing_fields_keeps_declaration_order() {
        let missing = missing_fields(&[
            ("eventName", Some("Rust meetup")),
            ("eventDate", None),
            ("location", Some("")),
            ("image", Some("https://example.com/a.png")),
        ]);
        assert_eq!(missing, vec!["eventDate", "location"]);
    }

    #[test]
    fn message_wording_matches_field_count() {
        assert_eq!(required_message(&["email"]), "email is required");
        assert_eq!(
            required_message(&["name", "email", "website"]),
            "name, email, website are required"
        );
    }
}
