/// Strips everything but ASCII digits from a phone number.
///
/// # Arguments
/// - `value` - Phone number as typed by the user, e.g. `(11) 99999-8888`
///
/// # Returns
/// - `String` - Digits only, e.g. `11999998888`; empty when no digits were present
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Returns the trimmed value when it is not blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formatting_from_phone() {
        assert_eq!(digits_only("(11) 99999-8888"), "11999998888");
        assert_eq!(digits_only("+55 11 9.9999"), "5511999999");
    }

    #[test]
    fn phone_without_digits_is_empty() {
        assert_eq!(digits_only("n/a"), "");
    }

    #[test]
    fn blank_values_are_none() {
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" Ana ".to_string())), Some("Ana".to_string()));
    }
}
