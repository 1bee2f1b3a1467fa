use crate::forwarder::constants::{FALLBACK_CLIENT_ID, GA_COOKIE_PREFIX};
use crate::forwarder::record::FieldValue;

/// Derives the GA4 client id from the raw `ga_client_id` value.
///
/// Cookie-style values lose their `GA1.1.` prefix, anything else passes through untouched, and a
/// missing or empty value falls back to [`FALLBACK_CLIENT_ID`]. The format is not validated.
pub fn resolve_client_id(raw: Option<&FieldValue>) -> String {
    let raw = match raw {
        Some(value) if !value.is_empty_text() => value.as_text(),
        _ => return FALLBACK_CLIENT_ID.to_string(),
    };

    match raw.strip_prefix(GA_COOKIE_PREFIX) {
        Some(stripped) => stripped.to_string(),
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_cookie_prefix() {
        let raw = FieldValue::from("GA1.1.1234567890.1700000000");
        assert_eq!(resolve_client_id(Some(&raw)), "1234567890.1700000000");
    }

    #[test]
    fn passes_through_values_without_prefix() {
        let raw = FieldValue::from("555.1700000000");
        assert_eq!(resolve_client_id(Some(&raw)), "555.1700000000");

        let other_version = FieldValue::from("GA1.2.555.1700000000");
        assert_eq!(
            resolve_client_id(Some(&other_version)),
            "GA1.2.555.1700000000"
        );
    }

    #[test]
    fn only_leading_prefix_is_stripped() {
        let raw = FieldValue::from("GA1.1.GA1.1.42");
        assert_eq!(resolve_client_id(Some(&raw)), "GA1.1.42");
    }

    #[test]
    fn missing_value_uses_fallback() {
        assert_eq!(resolve_client_id(None), "999999999.1609459200");
        assert_eq!(
            resolve_client_id(Some(&FieldValue::from(""))),
            FALLBACK_CLIENT_ID
        );
    }

    #[test]
    fn numeric_values_are_rendered() {
        let raw = FieldValue::from(987654321_u64);
        assert_eq!(resolve_client_id(Some(&raw)), "987654321");
    }
}
