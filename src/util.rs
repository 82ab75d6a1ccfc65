use crate::error::{Error, Result};
use crate::models::MAX_AMOUNT;

/// Group an integer amount with thousand separators and append `currency`.
/// e.g. `(1234567, "원")` → `"1,234,567원"`
pub(crate) fn format_amount(val: u64, currency: &str) -> String {
    let digits = val.to_string();
    let with_commas: String = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");
    format!("{with_commas}{currency}")
}

/// Parse a whole, non-negative amount. `,` and `_` grouping is ignored.
pub(crate) fn parse_amount(s: &str) -> Result<u64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    let amount = cleaned
        .parse::<u64>()
        .map_err(|_| Error::Validation(format!("'{s}' is not a non-negative whole amount")))?;
    if amount > MAX_AMOUNT {
        return Err(Error::Validation(format!(
            "'{s}' exceeds the largest accepted amount ({MAX_AMOUNT})"
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_format_amount_groups_thousands() {
        assert_eq!(format_amount(0, ""), "0");
        assert_eq!(format_amount(999, ""), "999");
        assert_eq!(format_amount(1_000, ""), "1,000");
        assert_eq!(format_amount(1_234_567, "원"), "1,234,567원");
    }

    #[test]
    fn test_parse_amount_plain() {
        assert_eq!(parse_amount("120000").unwrap(), 120_000);
    }

    #[test]
    fn test_parse_amount_grouped() {
        assert_eq!(parse_amount("1,200,000").unwrap(), 1_200_000);
        assert_eq!(parse_amount("70_001").unwrap(), 70_001);
    }

    #[test]
    fn test_parse_amount_rejects_negative_and_fractional() {
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("10.5").is_err());
        assert!(parse_amount("").is_err());
    }

    #[test]
    fn test_parse_amount_caps_at_max() {
        assert_eq!(parse_amount("1,000,000,000,000,000").unwrap(), MAX_AMOUNT);
        assert!(parse_amount("1,000,000,000,000,001").is_err());
        assert!(parse_amount("18446744073709551615").is_err());
    }
}
