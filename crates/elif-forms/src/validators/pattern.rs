//! Pattern rules for character classes, addresses and encodings

use crate::registry::RuleContext;
use once_cell::sync::Lazy;
use regex::Regex;

static ALPHA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z]+$").expect("valid alpha pattern"));
static ALPHA_NUMERIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z0-9]+$").expect("valid alpha numeric pattern"));
static ALPHA_DASH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[a-z0-9_\-]+$").expect("valid alpha dash pattern"));
static IP_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let octet = r"(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})";
    Regex::new(&format!(r"^({octet}\.){{3}}{octet}$")).expect("valid ip pattern")
});
static BASE64_INVALID_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9/+=]").expect("valid base64 pattern"));
static SCHEME_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(https?|ftp|file)://[\-A-Z0-9+&@#/%?=~_|!:,.;]*[\-A-Z0-9+&@#/%=~_|]")
        .expect("valid url pattern")
});
static WWW_URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(^|[^/])(www\.\S+(\b|$))").expect("valid www pattern"));

/// Letters only
pub fn alpha(context: &RuleContext<'_>, _param: Option<&str>) -> bool {
    ALPHA_PATTERN.is_match(context.value())
}

/// Letters and digits
pub fn alpha_numeric(context: &RuleContext<'_>, _param: Option<&str>) -> bool {
    ALPHA_NUMERIC_PATTERN.is_match(context.value())
}

/// Letters, digits, underscores and dashes
pub fn alpha_dash(context: &RuleContext<'_>, _param: Option<&str>) -> bool {
    ALPHA_DASH_PATTERN.is_match(context.value())
}

/// Dotted-quad IPv4 address with octets 0-255
pub fn ip(context: &RuleContext<'_>, _param: Option<&str>) -> bool {
    IP_PATTERN.is_match(context.value())
}

/// Passes when the value contains a character outside the base64 alphabet.
///
/// The rule flags invalid characters: well-formed base64 such as `"abc="`
/// fails it. Existing forms depend on this behavior.
pub fn base64(context: &RuleContext<'_>, _param: Option<&str>) -> bool {
    BASE64_INVALID_CHAR.is_match(context.value())
}

/// Scheme-qualified URL or a bare `www.` host somewhere in the value.
///
/// An empty value passes, so the rule reads as "a URL when present".
pub fn url(context: &RuleContext<'_>, _param: Option<&str>) -> bool {
    let value = context.value();
    value.is_empty() || SCHEME_URL_PATTERN.is_match(value) || WWW_URL_PATTERN.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::test_support::check;

    #[test]
    fn test_alpha_variants() {
        assert!(check(alpha, "Hello", None));
        assert!(!check(alpha, "Hello1", None));
        assert!(!check(alpha, "hello world", None));

        assert!(check(alpha_numeric, "abc123", None));
        assert!(check(alpha_numeric, "ABC", None));
        assert!(!check(alpha_numeric, "abc-123", None));

        assert!(check(alpha_dash, "user_name-42", None));
        assert!(!check(alpha_dash, "user.name", None));
        assert!(!check(alpha_dash, "", None));
    }

    #[test]
    fn test_ip_addresses() {
        for value in ["127.0.0.1", "0.0.0.0", "255.255.255.255", "192.168.1.20"] {
            assert!(check(ip, value, None), "'{}' should be a valid ip", value);
        }
        for value in ["256.0.0.1", "1.2.3", "1.2.3.4.5", "a.b.c.d", "1.2.3.4 "] {
            assert!(!check(ip, value, None), "'{}' should not be a valid ip", value);
        }
    }

    #[test]
    fn test_base64_flags_invalid_characters() {
        // Well-formed base64 contains no disallowed character and fails the rule
        assert!(!check(base64, "abc=", None));
        assert!(!check(base64, "SGVsbG8gd29ybGQ=", None));

        assert!(check(base64, "abc$", None));
        assert!(check(base64, "not base64", None));
    }

    #[test]
    fn test_url_with_scheme() {
        assert!(check(url, "https://elif.rs/docs", None));
        assert!(check(url, "http://localhost:8080/path?q=1", None));
        assert!(check(url, "ftp://files.example.com", None));
        assert!(check(url, "see https://elif.rs for details", None));
    }

    #[test]
    fn test_url_with_www_prefix() {
        assert!(check(url, "www.example.com", None));
        assert!(check(url, "visit www.example.com", None));
        assert!(!check(url, "example.com", None));
        assert!(!check(url, "not a url", None));
    }

    #[test]
    fn test_url_empty_value_passes() {
        assert!(check(url, "", None));
    }
}
