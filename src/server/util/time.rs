//! Time and duration utilities.
//!
//! This module provides parsing for the human-friendly duration strings accepted in
//! configuration, such as the lifetime of issued authentication tokens.

use chrono::Duration;

/// Parses a duration such as `90`, `30s`, `15m`, `24h` or `7d`.
///
/// A bare number is interpreted as seconds. Surrounding whitespace is ignored. Returns `None`
/// for empty input, unknown suffixes, negative values or values that overflow.
///
/// # Example
/// ```ignore
/// assert_eq!(parse_duration("24h"), Some(Duration::hours(24)));
/// assert_eq!(parse_duration("90"), Some(Duration::seconds(90)));
/// ```
pub fn parse_duration(value: &str) -> Option<Duration> {
    let value = value.trim();
    let split_at = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (amount, unit) = value.split_at(split_at);

    let amount: i64 = amount.parse().ok()?;
    let multiplier: i64 = match unit {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        _ => return None,
    };

    Duration::try_seconds(amount.checked_mul(multiplier)?)
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::parse_duration;

    /// Expect bare numbers to be read as seconds
    #[test]
    fn parses_plain_seconds() {
        assert_eq!(parse_duration("90"), Some(Duration::seconds(90)));
        assert_eq!(parse_duration(" 15 "), Some(Duration::seconds(15)));
    }

    /// Expect each supported suffix to scale the amount
    #[test]
    fn parses_suffixed_units() {
        assert_eq!(parse_duration("30s"), Some(Duration::seconds(30)));
        assert_eq!(parse_duration("15m"), Some(Duration::minutes(15)));
        assert_eq!(parse_duration("24h"), Some(Duration::hours(24)));
        assert_eq!(parse_duration("7d"), Some(Duration::days(7)));
    }

    /// Expect None for anything that is not a non-negative amount with a known unit
    #[test]
    fn rejects_invalid_values() {
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("h"), None);
        assert_eq!(parse_duration("-5s"), None);
        assert_eq!(parse_duration("10w"), None);
        assert_eq!(parse_duration("1h30m"), None);
        assert_eq!(parse_duration("99999999999999999999d"), None);
    }
}
