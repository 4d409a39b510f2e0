//! Stateless input validation
//!
//! These functions only check that values fit the record format and have the
//! right sign. Per-mode dollar ceilings depend on the session and are applied
//! by the engine.

use crate::core::session::Mode;
use crate::types::{AccountNumber, FrontEndError};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest amount that fits the record format (999999.99)
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

/// Maximum length of a holder or user name
pub const MAX_NAME_LEN: usize = 20;

/// Width of an account number
pub const ACCOUNT_NUMBER_WIDTH: usize = 5;

/// `0 < amount <= 999999.99`
pub fn valid_amount(amount: Decimal) -> bool {
    amount > Decimal::ZERO && amount <= MAX_AMOUNT
}

/// `0 < len(trim(name)) <= 20`, counted in characters
pub fn valid_name(name: &str) -> bool {
    let len = name.trim().chars().count();
    len > 0 && len <= MAX_NAME_LEN
}

/// `standard` or `admin`, case-insensitive
pub fn valid_mode(mode: &str) -> bool {
    Mode::from_str(mode).is_ok()
}

/// Parse a raw amount line
///
/// # Errors
///
/// Returns `InvalidAmount` if the input is not a decimal number, has more
/// than 2 significant fractional digits, or fails [`valid_amount`].
pub fn parse_amount(raw: &str) -> Result<Decimal, FrontEndError> {
    let raw = raw.trim();
    let amount = Decimal::from_str(raw)
        .map_err(|_| FrontEndError::invalid_amount(raw, "amount must be numeric"))?;

    if amount.normalize().scale() > 2 {
        return Err(FrontEndError::invalid_amount(
            raw,
            "amount must have at most 2 decimal places",
        ));
    }

    if !valid_amount(amount) {
        return Err(FrontEndError::invalid_amount(
            raw,
            format!("amount must be greater than 0 and at most {}", MAX_AMOUNT),
        ));
    }

    Ok(amount)
}

/// Turn a raw account number into its 5-digit form
///
/// Short numbers are zero-padded (`10` becomes `00010`).
///
/// # Errors
///
/// Returns `UnknownAccount` for empty input, non-digits, or more than 5 digits,
/// since no such account can exist in the master file.
pub fn normalize_account_number(raw: &str) -> Result<AccountNumber, FrontEndError> {
    let raw = raw.trim();
    if raw.is_empty()
        || raw.len() > ACCOUNT_NUMBER_WIDTH
        || !raw.chars().all(|c| c.is_ascii_digit())
    {
        return Err(FrontEndError::unknown_account(raw));
    }
    Ok(format!("{:0>width$}", raw, width = ACCOUNT_NUMBER_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case::zero(dec!(0), false)]
    #[case::negative(dec!(-1.00), false)]
    #[case::smallest(dec!(0.01), true)]
    #[case::typical(dec!(100.00), true)]
    #[case::maximum(dec!(999999.99), true)]
    #[case::above_maximum(dec!(1000000.00), false)]
    fn test_valid_amount(#[case] amount: Decimal, #[case] expected: bool) {
        assert_eq!(valid_amount(amount), expected);
    }

    #[rstest]
    #[case::empty("", false)]
    #[case::blank("   ", false)]
    #[case::single("A", true)]
    #[case::twenty("ABCDEFGHIJKLMNOPQRST", true)]
    #[case::twenty_one("ABCDEFGHIJKLMNOPQRSTU", false)]
    #[case::padded_twenty("  ABCDEFGHIJKLMNOPQRST  ", true)]
    fn test_valid_name(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(valid_name(name), expected);
    }

    #[rstest]
    #[case("standard", true)]
    #[case("Admin", true)]
    #[case("root", false)]
    #[case("", false)]
    fn test_valid_mode(#[case] mode: &str, #[case] expected: bool) {
        assert_eq!(valid_mode(mode), expected);
    }

    #[rstest]
    #[case::plain("100", dec!(100))]
    #[case::two_places("100.00", dec!(100.00))]
    #[case::whitespace("  42.5 ", dec!(42.5))]
    #[case::trailing_zeros("1.500", dec!(1.5))]
    fn test_parse_amount_valid(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(raw), Ok(expected));
    }

    #[rstest]
    #[case::non_numeric("abc", "numeric")]
    #[case::empty("", "numeric")]
    #[case::three_places("1.005", "2 decimal places")]
    #[case::zero("0.00", "greater than 0")]
    #[case::negative("-5.00", "greater than 0")]
    #[case::too_large("1000000.00", "at most 999999.99")]
    fn test_parse_amount_invalid(#[case] raw: &str, #[case] expected_reason: &str) {
        match parse_amount(raw) {
            Err(FrontEndError::InvalidAmount { reason, .. }) => {
                assert!(
                    reason.contains(expected_reason),
                    "reason '{}' should mention '{}'",
                    reason,
                    expected_reason
                );
            }
            other => panic!("Expected InvalidAmount, got {:?}", other),
        }
    }

    #[rstest]
    #[case::full("00010", "00010")]
    #[case::short("10", "00010")]
    #[case::padded(" 12345 ", "12345")]
    fn test_normalize_account_number(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_account_number(raw), Ok(expected.to_string()));
    }

    #[rstest]
    #[case::empty("")]
    #[case::letters("ABCDE")]
    #[case::too_long("123456")]
    #[case::signed("-0010")]
    fn test_normalize_account_number_rejects(#[case] raw: &str) {
        assert!(matches!(
            normalize_account_number(raw),
            Err(FrontEndError::UnknownAccount { .. })
        ));
    }
}
