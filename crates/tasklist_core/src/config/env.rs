//! Environment value parsing with fallbacks.
//!
//! - Strings: unset or empty values use the fallback.
//! - Booleans: unset uses the fallback; otherwise only `true` and `1` are true.
//! - Numbers: unset, unparseable or zero values use the fallback; parsing
//!   reads an optional sign and the leading digits, ignoring any tail.
//!   Values beyond the `i64` range saturate to `i64::MAX` / `i64::MIN`.

pub fn env_string(lookup: &dyn Fn(&str) -> Option<String>, key: &str, fallback: &str) -> String {
    match lookup(key) {
        Some(value) if !value.is_empty() => value,
        _ => fallback.to_string(),
    }
}

pub fn env_bool(lookup: &dyn Fn(&str) -> Option<String>, key: &str, fallback: bool) -> bool {
    match lookup(key) {
        Some(value) => value == "true" || value == "1",
        None => fallback,
    }
}

pub fn env_number(lookup: &dyn Fn(&str) -> Option<String>, key: &str, fallback: i64) -> i64 {
    match lookup(key).as_deref().and_then(parse_leading_int) {
        Some(0) | None => fallback,
        Some(value) => value,
    }
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let digits = &rest[..digits_len];
    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };
    // Only digits remain, so a parse failure means overflow.
    Some(signed.parse().unwrap_or(if negative { i64::MIN } else { i64::MAX }))
}

#[cfg(test)]
mod tests {
    use super::{env_bool, env_number, env_string, parse_leading_int};

    fn lookup_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |_| value.map(str::to_string)
    }

    #[test]
    fn string_falls_back_on_unset_and_empty() {
        assert_eq!(env_string(&lookup_with(None), "K", "dflt"), "dflt");
        assert_eq!(env_string(&lookup_with(Some("")), "K", "dflt"), "dflt");
        assert_eq!(env_string(&lookup_with(Some("set")), "K", "dflt"), "set");
    }

    #[test]
    fn bool_only_accepts_true_and_one() {
        assert!(env_bool(&lookup_with(None), "K", true));
        assert!(env_bool(&lookup_with(Some("1")), "K", false));
        assert!(env_bool(&lookup_with(Some("true")), "K", false));
        assert!(!env_bool(&lookup_with(Some("yes")), "K", true));
        assert!(!env_bool(&lookup_with(Some("")), "K", true));
    }

    #[test]
    fn number_uses_fallback_for_zero_and_garbage() {
        assert_eq!(env_number(&lookup_with(None), "K", 1), 1);
        assert_eq!(env_number(&lookup_with(Some("0")), "K", 1), 1);
        assert_eq!(env_number(&lookup_with(Some("abc")), "K", 1), 1);
        assert_eq!(env_number(&lookup_with(Some("137")), "K", 1), 137);
        assert_eq!(env_number(&lookup_with(Some("5eth")), "K", 1), 5);
    }

    #[test]
    fn number_saturates_on_overflow() {
        let huge = lookup_with(Some("123456789012345678901234567890"));
        assert_eq!(env_number(&huge, "K", 1), i64::MAX);
    }

    #[test]
    fn leading_int_handles_sign_and_whitespace() {
        assert_eq!(parse_leading_int("  -42x"), Some(-42));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_leading_int("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_leading_int("-9223372036854775808"), Some(i64::MIN));
    }
}
