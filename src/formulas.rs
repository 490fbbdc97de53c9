//! Shared constants and arithmetic helpers for the calorie formulas
//!
//! All three activity variants read their coefficients from the single
//! [`constants`] table; no variant carries its own copy.

use crate::error::CalculationError;

/// Formula constants shared by every activity variant
pub mod constants {
    /// Distance covered per step while running or walking, in meters
    pub const STEP_LENGTH_RUN_WALK: f64 = 0.65;
    /// Distance covered per stroke while swimming, in meters
    pub const STEP_LENGTH_SWIM: f64 = 1.38;
    pub const METERS_PER_KM: f64 = 1000.0;
    pub const MINUTES_PER_HOUR: f64 = 60.0;
    pub const RUN_COEFF_1: f64 = 18.0;
    pub const RUN_COEFF_2: f64 = 20.0;
    pub const WALK_COEFF_1: f64 = 0.035;
    pub const WALK_COEFF_2: f64 = 0.029;
    pub const SWIM_SPEED_OFFSET: f64 = 1.1;
}

pub type FormulaResult<T> = std::result::Result<T, CalculationError>;

/// Divide, failing instead of producing infinity or NaN on a zero divisor.
pub fn checked_div(
    numerator: f64,
    divisor: f64,
    calculation: &'static str,
) -> FormulaResult<f64> {
    if divisor == 0.0 {
        return Err(CalculationError::DivisionByZero { calculation });
    }
    ensure_finite(numerator / divisor, calculation)
}

/// Floor division of two floats.
///
/// Rounds toward negative infinity and matches the usual float floor-division
/// semantics exactly, including the sign handling of the remainder, rather
/// than `(a / b).floor()` which can be off by one when `a / b` rounds up to
/// an integer.
pub fn floor_div(
    dividend: f64,
    divisor: f64,
    calculation: &'static str,
) -> FormulaResult<f64> {
    if divisor == 0.0 {
        return Err(CalculationError::DivisionByZero { calculation });
    }

    let remainder = dividend % divisor;
    let mut quotient = (dividend - remainder) / divisor;
    if remainder != 0.0 && ((divisor < 0.0) != (remainder < 0.0)) {
        quotient -= 1.0;
    }

    let result = if quotient != 0.0 {
        let floored = quotient.floor();
        if quotient - floored > 0.5 {
            floored + 1.0
        } else {
            floored
        }
    } else {
        // keep the sign of the exact quotient for zero results
        0.0_f64.copysign(dividend / divisor)
    };

    ensure_finite(result, calculation)
}

/// Reject infinities and NaN coming out of a formula.
pub fn ensure_finite(value: f64, calculation: &'static str) -> FormulaResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::NonFinite { calculation })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_div_positive() {
        assert_eq!(floor_div(34.2225, 180.0, "test").unwrap(), 0.0);
        assert_eq!(floor_div(400.0, 180.0, "test").unwrap(), 2.0);
        assert_eq!(floor_div(360.0, 180.0, "test").unwrap(), 2.0);
    }

    #[test]
    fn test_floor_div_rounds_toward_negative_infinity() {
        assert_eq!(floor_div(-7.0, 2.0, "test").unwrap(), -4.0);
        assert_eq!(floor_div(7.0, -2.0, "test").unwrap(), -4.0);
        assert_eq!(floor_div(-7.0, -2.0, "test").unwrap(), 3.0);
    }

    #[test]
    fn test_floor_div_exact_quotient() {
        // 1 / 0.1 is just under 10 in exact arithmetic
        assert_eq!(floor_div(1.0, 0.1, "test").unwrap(), 9.0);
    }

    #[test]
    fn test_zero_divisor() {
        assert_eq!(
            floor_div(1.0, 0.0, "walking calories"),
            Err(CalculationError::DivisionByZero {
                calculation: "walking calories"
            })
        );
        assert!(checked_div(1.0, 0.0, "mean speed").is_err());
        assert!(checked_div(1.0, -0.0, "mean speed").is_err());
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite(f64::NAN, "test").is_err());
        assert!(ensure_finite(f64::INFINITY, "test").is_err());
        assert_eq!(ensure_finite(1.5, "test").unwrap(), 1.5);
    }
}
