//! Boolean toggles supplied as text
//!
//! Scheduled hosts pass configuration as environment strings. Only a small
//! set of affirmative spellings enable a toggle; everything else disables it.

const TRUTHY: &[&str] = &["yes", "y", "true", "t", "1"];

/// Parse a toggle value, case-insensitively and ignoring surrounding whitespace.
pub fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(value))
}

/// Parse an optional toggle value; an absent value is `false`.
///
/// Callers that want a different fallback for missing values must check
/// presence themselves before calling this.
pub fn parse_toggle(value: Option<&str>) -> bool {
    value.is_some_and(parse_flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_values() {
        for value in ["true", "T", "1", "yes", "Y", "YES", "True", " t "] {
            assert!(parse_flag(value), "expected true for {value:?}");
        }
    }

    #[test]
    fn test_falsy_values() {
        for value in ["false", "0", "", "no", "off", "enabled", "tru"] {
            assert!(!parse_flag(value), "expected false for {value:?}");
        }
    }

    #[test]
    fn test_missing_is_false() {
        assert!(!parse_toggle(None));
        assert!(parse_toggle(Some("y")));
        assert!(!parse_toggle(Some("n")));
    }
}
