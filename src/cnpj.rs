use once_cell::sync::Lazy;
use regex::Regex;

/// Number of digits in a CNPJ
pub const CNPJ_LEN: usize = 14;

static NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\D").unwrap());

/// Strip every non-digit character ("11.222.333/0001-81" -> "11222333000181")
pub fn normalize(raw: &str) -> String {
    NON_DIGITS.replace_all(raw, "").into_owned()
}

/// Check that a normalized CNPJ has exactly 14 digits
pub fn has_valid_length(digits: &str) -> bool {
    digits.len() == CNPJ_LEN && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Render a CNPJ as `00.000.000/0000-00`, or return the input untouched if it
/// is not a 14 digit value.
pub fn format(raw: &str) -> String {
    let digits = normalize(raw);
    if !has_valid_length(&digits) {
        return raw.to_string();
    }

    format!(
        "{}.{}.{}/{}-{}",
        &digits[0..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..14]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("11.222.333/0001-81"), "11222333000181");
        assert_eq!(normalize(" 11 222 333 0001 81 "), "11222333000181");
        assert_eq!(normalize("11222333000181"), "11222333000181");
        assert_eq!(normalize("abc"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_valid_length() {
        assert!(has_valid_length("11222333000181"));
        assert!(!has_valid_length("1122233300018"));
        assert!(!has_valid_length("112223330001810"));
        assert!(!has_valid_length("11.222.333/0001"));
    }

    #[test]
    fn test_format() {
        assert_eq!(format("11222333000181"), "11.222.333/0001-81");
        assert_eq!(format("11.222.333/0001-81"), "11.222.333/0001-81");
        assert_eq!(format("123"), "123");
    }
}
