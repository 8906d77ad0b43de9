//! Email address rules

use crate::registry::RuleContext;
use once_cell::sync::Lazy;
use regex::Regex;

/// Non-ASCII ranges accepted in addresses, following RFC 2822 with IRI extensions
const UCS: &str = r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let atom = format!(r"[a-z0-9!#$%&'*+\-/=?^_`{{|}}~{UCS}]");
    let dot_atom = format!(r"{atom}+(\.{atom}+)*");

    let folding_space = r"(([ \t]*\r\n)?[ \t]+)?";
    let qtext = format!(r"[\x01-\x08\x0b\x0c\x0e-\x1f\x7f\x21\x23-\x5b\x5d-\x7e{UCS}]");
    let quoted_pair = format!(r"\\([\x01-\x09\x0b\x0c\x0d-\x7f]|[{UCS}])");
    let quoted = format!(r#""({folding_space}({qtext}|{quoted_pair}))*{folding_space}""#);

    let alnum = format!("[a-z0-9{UCS}]");
    let alpha = format!("[a-z{UCS}]");
    let inner = format!(r"[a-z0-9\-._~{UCS}]");
    let label = format!("({alnum}|{alnum}{inner}*{alnum})");
    let top_level = format!("({alpha}|{alpha}{inner}*{alpha})");

    let pattern = format!(r"(?i)^(({dot_atom})|({quoted}))@({label}\.)+{top_level}$");
    Regex::new(&pattern).expect("valid email pattern")
});

/// Check a single address against the email pattern
pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Whole value must be one email address
pub fn email(context: &RuleContext<'_>, _param: Option<&str>) -> bool {
    is_email(context.value())
}

/// Comma separated list where every entry is an email address.
///
/// Entries are not trimmed, so `"a@b.com, c@d.com"` fails on the leading space.
/// An empty value is an empty list and passes.
pub fn emails(context: &RuleContext<'_>, _param: Option<&str>) -> bool {
    let value = context.value();
    value.is_empty() || value.split(',').all(is_email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::test_support::check;

    #[test]
    fn test_valid_emails() {
        let valid_emails = vec![
            "test@example.com",
            "user.name@domain.co.uk",
            "first+last@subdomain.example.org",
            "user123@test-domain.com",
            "a@b.co",
            "UPPER@EXAMPLE.COM",
            "o'brien@example.ie",
            "\"quoted name\"@example.com",
            "jörg@bücher.de",
        ];

        for value in valid_emails {
            assert!(check(email, value, None), "Email '{}' should be valid", value);
        }
    }

    #[test]
    fn test_invalid_emails() {
        let invalid_emails = vec![
            "",
            "plainaddress",
            "@missingdomain.com",
            "missing@.com",
            "double@@domain.com",
            "spaces @domain.com",
            "test@",
            "test@domain",
            "dot.@domain.com",
            "test@domain.c0m1",
        ];

        for value in invalid_emails {
            assert!(!check(email, value, None), "Email '{}' should be invalid", value);
        }
    }

    #[test]
    fn test_emails_list() {
        assert!(check(emails, "a@b.com,c@d.com", None));
        assert!(check(emails, "a@b.com", None));
        assert!(!check(emails, "a@b.com,bad,c@d.com", None));
        assert!(!check(emails, "a@b.com, c@d.com", None));
        assert!(!check(emails, "a@b.com,", None));
    }

    #[test]
    fn test_emails_empty_value_is_vacuously_valid() {
        assert!(check(emails, "", None));
    }
}
