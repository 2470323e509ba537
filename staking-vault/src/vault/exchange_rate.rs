use soroban_sdk::{panic_with_error, Env};

use crate::errors::VaultError;
use crate::math::{checked_add, mul_div_ceil, mul_div_floor};
use crate::types::VaultState;

/// Shares minted for `amount` of underlying at the current rate
///
/// The first mint (no shares outstanding) is priced 1:1. Rounds down, so
/// the minter absorbs rounding dust.
pub fn shares_for_underlying(e: &Env, state: &VaultState, amount: i128) -> i128 {
    if state.total_shares == 0 {
        return amount;
    }
    mul_div_floor(e, amount, state.total_shares, state.holder_value())
}

/// Underlying value redeemable for `shares` at the current rate, rounded down
///
/// ### Panics
/// - `DivisionByZero` if no shares are outstanding
pub fn underlying_for_shares(e: &Env, state: &VaultState, shares: i128) -> i128 {
    if state.total_shares == 0 {
        panic_with_error!(e, VaultError::DivisionByZero);
    }
    mul_div_floor(e, shares, state.holder_value(), state.total_shares)
}

/// Shares a holder must surrender to withdraw `amount` of underlying
///
/// Rounds up so the remaining holders keep the dust and the rate cannot fall.
///
/// ### Panics
/// - `DivisionByZero` if no shares are outstanding
pub fn shares_to_lock(e: &Env, state: &VaultState, amount: i128) -> i128 {
    if state.total_shares == 0 {
        panic_with_error!(e, VaultError::DivisionByZero);
    }
    mul_div_ceil(e, amount, state.total_shares, state.holder_value())
}

/// Adds reward income to the vault without minting shares, raising the rate
///
/// A zero amount is a no-op.
///
/// ### Panics
/// - `InvalidAmount` if `amount` is negative
pub fn apply_reward_income(e: &Env, state: &mut VaultState, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, VaultError::InvalidAmount);
    }
    if amount == 0 {
        return;
    }
    state.total_underlying = checked_add(e, state.total_underlying, amount);
}
