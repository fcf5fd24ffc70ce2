use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::Error;

/// The single unit every balance and subscription amount is denominated in.
pub const CURRENCY: &str = "USDC";

/// Decimal places shown to the user. Stored amounts keep full precision.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Parses user supplied text into an amount.
///
/// Accepts plain decimal notation only (`"15.99"`, `"-3"`); exponents,
/// bare fractions like `".5"` and trailing dots are rejected.
/// Only the *format* is checked here; sign rules belong to the ledger
/// operation that consumes the amount.
pub fn parse_amount(s: &str) -> Result<Decimal, Error> {
    let s = s.trim();

    if s.is_empty() {
        return Err(Error::InvalidAmount("amount is missing".to_string()));
    }

    let body = s.strip_prefix('-').unwrap_or(s);
    let mut parts = body.split('.');
    let int_part = parts.next().unwrap_or_default();
    let frac_part = parts.next();

    let digits_only = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
    let well_formed = digits_only(int_part)
        && parts.next().is_none()
        && frac_part.is_none_or(digits_only);

    if !well_formed {
        return Err(Error::InvalidAmount(format!("'{}' is not a number", s)));
    }

    Decimal::from_str(s)
        .map_err(|e| Error::InvalidAmount(format!("'{}' is out of range: {}", s, e)))
}

/// Formats an amount for display, rounding half away from zero like a
/// browser's `toFixed`.
pub fn display(amount: Decimal) -> String {
    let rounded =
        amount.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", DISPLAY_DECIMALS as usize, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!(parse_amount("15.99").unwrap(), dec!(15.99));
        assert_eq!(parse_amount(" 100 ").unwrap(), dec!(100));
        assert_eq!(parse_amount("-2.5").unwrap(), dec!(-2.5));
    }

    #[test]
    fn rejects_non_numeric_text() {
        for bad in ["", "abc", "1.2.3", "1e5", ".5", "--1", "12a", "NaN", "7."] {
            assert!(
                matches!(parse_amount(bad), Err(Error::InvalidAmount(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn display_rounds_to_cents() {
        assert_eq!(display(dec!(100)), "100.00");
        assert_eq!(display(dec!(1.005)), "1.01");
        assert_eq!(display(dec!(11.3325)), "11.33");
        assert_eq!(display(Decimal::ZERO), "0.00");
    }
}
