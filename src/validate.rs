use serde_json::Value;

/// Return the first required field that is absent or empty, in order.
/// Empty strings and empty arrays count as missing.
pub fn missing_field<'a>(data: &Value, required: &[&'a str]) -> Option<&'a str> {
    for &field in required {
        let present = match data.get(field) {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(_) => true,
        };
        if !present {
            return Some(field);
        }
    }
    None
}

/// Minimal email heuristic: an "@" must be present and the part after the
/// last "@" must contain a ".". Deliberately weak; existing callers rely on
/// its leniency, so it must not be tightened to anything RFC-shaped.
pub fn is_valid_email(email: &str) -> bool {
    match email.rsplit_once('@') {
        Some((_, domain)) => domain.contains('.'),
        None => false,
    }
}

/// First letter upper-cased, the rest lowered ("firstName" -> "Firstname"),
/// matching the wording of the field-missing messages.
pub fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn email_heuristic() {
        assert!(is_valid_email("a@b.c"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email(""));
        // Dot before the @ does not help the domain part.
        assert!(!is_valid_email("a.b@c"));
    }

    #[test]
    fn missing_field_fails_fast_in_order() {
        let data = json!({ "email": "a@b.c" });
        assert_eq!(missing_field(&data, &["name", "email", "message"]), Some("name"));

        let data = json!({ "name": "A", "email": "a@b.c" });
        assert_eq!(missing_field(&data, &["name", "email", "message"]), Some("message"));
    }

    #[test]
    fn empty_string_and_array_count_as_missing() {
        let data = json!({ "name": "", "selectedPdfs": [] });
        assert_eq!(missing_field(&data, &["name"]), Some("name"));
        assert_eq!(missing_field(&data, &["selectedPdfs"]), Some("selectedPdfs"));
    }

    #[test]
    fn all_fields_present() {
        let data = json!({ "name": "A", "email": "a@b.c", "message": "hi" });
        assert_eq!(missing_field(&data, &["name", "email", "message"]), None);
    }

    #[test]
    fn capitalize_matches_message_style() {
        assert_eq!(capitalize("name"), "Name");
        assert_eq!(capitalize("firstName"), "Firstname");
        assert_eq!(capitalize(""), "");
    }
}
