use soroban_sdk::{panic_with_error, Address, Env};

use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::math::checked_add;
use crate::storage;
use crate::vault::{exchange_rate, fees, token};

/// Mints shares to `holder` for `amount` of underlying pulled from them
///
/// The mint fee is taken from `amount` and the remaining net amount is
/// priced at the current rate. Tokens are pulled before any share is credited.
///
/// ### Returns
/// Amount of shares minted
///
/// ### Panics
/// - `ZeroAmount` if `amount` <= 0
/// - `ZeroSharesMinted` if the net amount is worth less than one share
/// - `TransferFailed` if the tokens cannot be pulled from `holder`
pub fn execute_mint_with_token(e: &Env, holder: &Address, amount: i128) -> i128 {
    let config = storage::get_config(e);
    if amount <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    let mut state = storage::get_state(e);

    let (net, fee) = fees::record_mint_fee(e, &mut state, amount, config.mint_fee_bps);
    let shares = exchange_rate::shares_for_underlying(e, &state, net);
    if shares <= 0 {
        panic_with_error!(e, VaultError::ZeroSharesMinted);
    }

    token::pull(e, &config.token, holder, amount);

    state.total_shares = checked_add(e, state.total_shares, shares);
    state.total_underlying = checked_add(e, state.total_underlying, net);
    let balance = storage::get_balance(e, holder);
    storage::set_balance(e, holder, &(balance + shares));
    storage::set_state(e, &state);

    VaultEvents::mint(e, holder.clone(), amount, fee, shares);
    shares
}

/// Moves `amount` of shares from `from` to `to`
///
/// ### Panics
/// - `ZeroAmount` if `amount` <= 0
/// - `InsufficientShares` if `from` holds less than `amount`
pub fn execute_transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
    storage::get_config(e);
    if amount <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    let from_balance = storage::get_balance(e, from);
    if amount > from_balance {
        panic_with_error!(e, VaultError::InsufficientShares);
    }
    storage::set_balance(e, from, &(from_balance - amount));
    let to_balance = storage::get_balance(e, to);
    storage::set_balance(e, to, &(to_balance + amount));

    VaultEvents::transfer(e, from.clone(), to.clone(), amount);
}
