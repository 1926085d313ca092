//! Money arithmetic
//!
//! All price math runs on `Decimal` and is rounded half-away-from-zero to
//! two places before going back to the f64 wire representation. Comparisons
//! against client-declared amounts use a one-cent tolerance.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Cents precision
pub const DECIMAL_PLACES: u32 = 2;

/// Accepted drift when comparing client-declared amounts
pub const MONEY_TOLERANCE: f64 = 0.01;

/// Convert a wire amount to a Decimal, treating non-finite input as zero
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Round to cents, half away from zero
pub fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert back to the f64 wire representation, rounded to cents
pub fn to_f64(value: Decimal) -> f64 {
    round(value).to_f64().unwrap_or(0.0)
}

/// Whether two amounts agree within [`MONEY_TOLERANCE`]
///
/// Compared in `Decimal` so a difference of exactly one cent is inside the
/// tolerance for every value, not just the ones whose f64 subtraction
/// happens to land below it.
pub fn amounts_match(a: f64, b: f64) -> bool {
    (to_decimal(a) - to_decimal(b)).abs() <= to_decimal(MONEY_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(to_f64(to_decimal(2.005)), 2.01);
        assert_eq!(to_f64(to_decimal(2.004)), 2.0);
        assert_eq!(to_f64(to_decimal(-2.005)), -2.01);
    }

    #[test]
    fn test_amounts_match_within_a_cent() {
        assert!(amounts_match(71.98, 71.98));
        assert!(amounts_match(71.98, 71.99));
        assert!(!amounts_match(71.98, 72.00));
    }

    #[test]
    fn test_one_cent_difference_matches_for_every_value() {
        // 76.98 - 76.97 is 0.010000000000005116 in f64; the decimal
        // comparison must still treat it as exactly one cent
        assert!(amounts_match(76.98, 76.97));
        assert!(amounts_match(76.97, 76.98));
        assert!(!amounts_match(76.99, 76.97));
    }

    #[test]
    fn test_non_finite_input_is_zero() {
        assert_eq!(to_decimal(f64::NAN), Decimal::ZERO);
        assert_eq!(to_decimal(f64::INFINITY), Decimal::ZERO);
    }
}
