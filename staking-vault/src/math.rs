use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{panic_with_error, Env, I256};

use crate::errors::VaultError;

/// Computes `floor(x * y / denominator)` for non-negative operands
///
/// Falls back to a 256-bit intermediate when `x * y` does not fit an i128,
/// so large balances keep full precision.
///
/// ### Panics
/// - `DivisionByZero` if `denominator` is zero
/// - `ArithmeticOverflow` if the result does not fit an i128
pub fn mul_div_floor(e: &Env, x: i128, y: i128, denominator: i128) -> i128 {
    if denominator == 0 {
        panic_with_error!(e, VaultError::DivisionByZero);
    }
    if let Some(result) = x.fixed_mul_floor(y, denominator) {
        return result;
    }
    let product = I256::from_i128(e, x).mul(&I256::from_i128(e, y));
    narrow(e, product.div(&I256::from_i128(e, denominator)))
}

/// Computes `ceil(x * y / denominator)` for non-negative operands
///
/// ### Panics
/// - `DivisionByZero` if `denominator` is zero
/// - `ArithmeticOverflow` if the result does not fit an i128
pub fn mul_div_ceil(e: &Env, x: i128, y: i128, denominator: i128) -> i128 {
    if denominator == 0 {
        panic_with_error!(e, VaultError::DivisionByZero);
    }
    if let Some(result) = x.fixed_mul_ceil(y, denominator) {
        return result;
    }
    let wide_denominator = I256::from_i128(e, denominator);
    let product = I256::from_i128(e, x).mul(&I256::from_i128(e, y));
    let rounded = product
        .add(&wide_denominator)
        .sub(&I256::from_i128(e, 1));
    narrow(e, rounded.div(&wide_denominator))
}

fn narrow(e: &Env, value: I256) -> i128 {
    match value.to_i128() {
        Some(result) => result,
        None => panic_with_error!(e, VaultError::ArithmeticOverflow),
    }
}

/// Adds two amounts, failing with `ArithmeticOverflow` instead of wrapping
pub fn checked_add(e: &Env, x: i128, y: i128) -> i128 {
    match x.checked_add(y) {
        Some(result) => result,
        None => panic_with_error!(e, VaultError::ArithmeticOverflow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_floor_rounds_down() {
        let e = Env::default();
        assert_eq!(mul_div_floor(&e, 10, 3, 4), 7);
        assert_eq!(mul_div_floor(&e, 0, 3, 4), 0);
        assert_eq!(mul_div_floor(&e, 500, 100, 10_000), 5);
    }

    #[test]
    fn test_mul_div_ceil_rounds_up() {
        let e = Env::default();
        assert_eq!(mul_div_ceil(&e, 10, 3, 4), 8);
        assert_eq!(mul_div_ceil(&e, 12, 3, 4), 9);
        assert_eq!(mul_div_ceil(&e, 0, 3, 4), 0);
    }

    #[test]
    fn test_wide_intermediate_keeps_precision() {
        let e = Env::default();
        // x * y overflows i128 but the quotient fits
        let x = i128::MAX / 3;
        let y = 1_000_000_000_000i128;
        assert_eq!(mul_div_floor(&e, x, y, y), x);
        assert_eq!(mul_div_ceil(&e, x, y, y), x);
        assert_eq!(mul_div_floor(&e, x, y, 2 * y), x / 2);
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1220)")]
    fn test_unrepresentable_result_fails() {
        let e = Env::default();
        mul_div_floor(&e, i128::MAX, 4, 2);
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1221)")]
    fn test_zero_denominator_fails() {
        let e = Env::default();
        mul_div_floor(&e, 1, 1, 0);
    }

    #[test]
    #[should_panic(expected = "Error(Contract, #1220)")]
    fn test_checked_add_overflow_fails() {
        let e = Env::default();
        checked_add(&e, i128::MAX, 1);
    }
}
