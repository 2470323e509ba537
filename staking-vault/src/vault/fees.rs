use soroban_sdk::{panic_with_error, Address, Env};

use crate::constants::BPS_DENOMINATOR;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::math::{checked_add, mul_div_floor};
use crate::storage;
use crate::types::VaultState;
use crate::vault::token;

/// Fee charged on `amount` at `fee_bps`, rounded down
pub fn fee_for(e: &Env, amount: i128, fee_bps: u32) -> i128 {
    mul_div_floor(e, amount, fee_bps as i128, BPS_DENOMINATOR)
}

/// Splits a mint into its net amount and fee, crediting the fee to the
/// withdrawable pool
///
/// Mint fees are always liquid; the operator moves them into the staked pool
/// explicitly with `move_to_staked`.
///
/// ### Returns
/// `(net, fee)` where `net + fee == gross`
pub fn record_mint_fee(
    e: &Env,
    state: &mut VaultState,
    gross: i128,
    fee_bps: u32,
) -> (i128, i128) {
    let fee = fee_for(e, gross, fee_bps);
    state.withdrawable_fees = checked_add(e, state.withdrawable_fees, fee);
    (gross - fee, fee)
}

/// Credits the operator's cut of a claimed reward to the staked pool
///
/// The staked pool is delegated value, so it first earns its pro-rata share
/// of the reward. The fee is then charged on the part left to the holders.
/// Must run before the reward is added to `total_staked`.
///
/// ### Returns
/// The amount credited to the staked pool, yield and fee together
pub fn record_reward_fee(e: &Env, state: &mut VaultState, reward: i128, fee_bps: u32) -> i128 {
    let delegated = checked_add(e, state.total_staked, state.total_exiting);
    let fee_yield = if state.staked_fees > 0 && delegated > 0 {
        mul_div_floor(e, reward, state.staked_fees, delegated)
    } else {
        0
    };
    let fee = fee_for(e, reward - fee_yield, fee_bps);
    let operator_cut = fee_yield + fee;
    state.staked_fees = checked_add(e, state.staked_fees, operator_cut);
    operator_cut
}

/// Moves `amount` from the withdrawable pool to the staked pool
///
/// The liquid fee tokens become idle holder value and the operator takes
/// ownership of the same amount of delegated value, so holder value is
/// unchanged.
///
/// ### Panics
/// - `InsufficientFeeBalance` if the withdrawable pool holds less than `amount`
/// - `InsufficientStake` if the staked pool would exceed the total staked
pub fn move_to_staked(e: &Env, state: &mut VaultState, amount: i128) {
    if amount > state.withdrawable_fees {
        panic_with_error!(e, VaultError::InsufficientFeeBalance);
    }
    if checked_add(e, state.staked_fees, amount) > state.total_staked {
        panic_with_error!(e, VaultError::InsufficientStake);
    }
    state.withdrawable_fees -= amount;
    state.staked_fees += amount;
    state.total_underlying += amount;
}

/// Moves `amount` from the staked pool to the withdrawable pool
///
/// The inverse of `move_to_staked`: the operator releases delegated value to
/// the holders and takes the same amount of idle value in exchange.
///
/// ### Panics
/// - `InsufficientFeeBalance` if the staked pool holds less than `amount`
/// - `InsufficientIdleValue` if the vault lacks idle value to back the fees
pub fn move_to_withdrawable(e: &Env, state: &mut VaultState, amount: i128) {
    if amount > state.staked_fees {
        panic_with_error!(e, VaultError::InsufficientFeeBalance);
    }
    if amount > state.idle() {
        panic_with_error!(e, VaultError::InsufficientIdleValue);
    }
    state.staked_fees -= amount;
    state.withdrawable_fees = checked_add(e, state.withdrawable_fees, amount);
    state.total_underlying -= amount;
}

/// Hands value left without any shares to the operator
///
/// Once the last shares are burned, rounding dust and rewards earned by
/// locked shares would otherwise be claimable by the next minter. The
/// delegated part joins the staked pool and the idle part the withdrawable
/// pool, leaving zero holder value.
pub fn sweep_orphaned_value(state: &mut VaultState) {
    if state.total_shares != 0 {
        return;
    }
    let residual = state.holder_value();
    if residual <= 0 {
        return;
    }
    let delegated = (state.total_staked - state.staked_fees).min(residual);
    let liquid = residual - delegated;
    state.staked_fees += delegated;
    state.withdrawable_fees += liquid;
    state.total_underlying -= liquid;
}

/// (Admin only) Moves fees between the withdrawable and staked pools
pub fn execute_move_fees(e: &Env, to_staked: bool, amount: i128) {
    if amount <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    let mut state = storage::get_state(e);
    if to_staked {
        move_to_staked(e, &mut state, amount);
    } else {
        move_to_withdrawable(e, &mut state, amount);
    }
    storage::set_state(e, &state);

    VaultEvents::move_fees(e, to_staked, amount);
}

/// (Admin only) Transfers the whole withdrawable pool to `to`
///
/// ### Returns
/// The amount transferred, zero if the pool was empty
pub fn execute_withdraw_fees(e: &Env, to: &Address) -> i128 {
    let config = storage::get_config(e);
    let mut state = storage::get_state(e);
    let amount = state.withdrawable_fees;
    if amount == 0 {
        return 0;
    }

    token::push(e, &config.token, to, amount);

    state.withdrawable_fees = 0;
    storage::set_state(e, &state);

    VaultEvents::withdraw_fees(e, to.clone(), amount);
    amount
}
