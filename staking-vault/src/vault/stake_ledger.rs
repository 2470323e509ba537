use soroban_sdk::{panic_with_error, Address, Env};

use crate::constants::{BPS_DENOMINATOR, MAX_SERVICE_PROVIDERS};
use crate::dependencies::{ClaimsManagerClient, DelegateManagerClient};
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::math::{checked_add, mul_div_floor};
use crate::storage;
use crate::types::VaultState;
use crate::vault::{exchange_rate, fees, token};

/// (Admin only) Delegates `amount` of idle value to `provider`
///
/// The tokens are pushed to the delegate manager and the delegation recorded
/// before the ledger is written, so a failed delegation leaves no trace.
///
/// ### Returns
/// The vault's new stake with `provider`
///
/// ### Panics
/// - `ZeroAmount` if `amount` <= 0
/// - `InsufficientIdleValue` if the vault holds less than `amount` idle
/// - `TooManyServiceProviders` if `provider` is new and the list is full
/// - `DelegationFailed` if the delegate manager rejects the delegation
pub fn execute_stake(e: &Env, provider: &Address, amount: i128) -> i128 {
    if amount <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    let config = storage::get_config(e);
    let mut state = storage::get_state(e);
    if amount > state.idle() {
        panic_with_error!(e, VaultError::InsufficientIdleValue);
    }
    if !storage::has_provider_stake(e, provider) {
        register_provider(e, provider);
    }

    token::push(e, &config.token, &config.delegate_manager, amount);
    let delegate_manager = DelegateManagerClient::new(e, &config.delegate_manager);
    match delegate_manager.try_delegate(&e.current_contract_address(), provider, &amount) {
        Ok(Ok(_)) => {}
        _ => panic_with_error!(e, VaultError::DelegationFailed),
    }

    let provider_stake = checked_add(e, storage::get_provider_stake(e, provider), amount);
    storage::set_provider_stake(e, provider, &provider_stake);
    state.total_staked = checked_add(e, state.total_staked, amount);
    storage::set_state(e, &state);

    VaultEvents::stake(e, provider.clone(), amount, provider_stake);
    provider_stake
}

/// Claims the current round's reward earned with `provider`
///
/// The network restakes the reward with the provider, so it grows the
/// provider stake and the vault's underlying value without new shares. The
/// staked fee pool takes its share of the reward plus the fee on the rest. A
/// round that was already claimed returns zero and changes nothing.
///
/// ### Returns
/// The gross reward claimed
///
/// ### Panics
/// - `ServiceProviderNotFound` if the vault never staked to `provider`
/// - `RewardsClaimFailed` if the claims manager fails or reports a negative reward
pub fn execute_claim_rewards(e: &Env, provider: &Address) -> i128 {
    let config = storage::get_config(e);
    if !storage::has_provider_stake(e, provider) {
        panic_with_error!(e, VaultError::ServiceProviderNotFound);
    }

    let claims_manager = ClaimsManagerClient::new(e, &config.claims_manager);
    let reward = match claims_manager.try_claim(&e.current_contract_address(), provider) {
        Ok(Ok(reward)) if reward >= 0 => reward,
        _ => panic_with_error!(e, VaultError::RewardsClaimFailed),
    };
    if reward == 0 {
        return 0;
    }

    let mut state = storage::get_state(e);
    let fee = fees::record_reward_fee(e, &mut state, reward, config.mint_fee_bps);
    exchange_rate::apply_reward_income(e, &mut state, reward);
    state.total_staked = checked_add(e, state.total_staked, reward);
    let provider_stake = checked_add(e, storage::get_provider_stake(e, provider), reward);
    fees::sweep_orphaned_value(&mut state);

    storage::set_provider_stake(e, provider, &provider_stake);
    storage::set_state(e, &state);

    VaultEvents::claim_rewards(e, provider.clone(), reward, fee);
    reward
}

/// Share of the vault's underlying value that is staked, in basis points
pub fn staked_percentage(e: &Env, state: &VaultState) -> i128 {
    if state.total_underlying == 0 {
        return 0;
    }
    mul_div_floor(e, state.total_staked, BPS_DENOMINATOR, state.total_underlying)
}

/// Marks `amount` of `provider`'s stake as exiting
///
/// Moves no tokens; the amount stays delegated until `unstake` releases it.
///
/// ### Panics
/// - `ServiceProviderNotFound` if the vault never staked to `provider`
/// - `InsufficientStake` if the provider stake is below `amount`, or the
///   remaining stake could no longer cover the staked fees
pub fn reduce_stake(e: &Env, state: &mut VaultState, provider: &Address, amount: i128) {
    if !storage::has_provider_stake(e, provider) {
        panic_with_error!(e, VaultError::ServiceProviderNotFound);
    }
    let provider_stake = storage::get_provider_stake(e, provider);
    if amount > provider_stake || state.total_staked - amount < state.staked_fees {
        panic_with_error!(e, VaultError::InsufficientStake);
    }
    storage::set_provider_stake(e, provider, &(provider_stake - amount));
    state.total_staked -= amount;
    state.total_exiting += amount;
}

/// Returns an exiting `amount` to `provider`'s active stake
pub fn restore_stake(e: &Env, state: &mut VaultState, provider: &Address, amount: i128) {
    let provider_stake = checked_add(e, storage::get_provider_stake(e, provider), amount);
    storage::set_provider_stake(e, provider, &provider_stake);
    state.total_staked += amount;
    state.total_exiting -= amount;
}

fn register_provider(e: &Env, provider: &Address) {
    let mut providers = storage::get_providers(e);
    if providers.len() >= MAX_SERVICE_PROVIDERS {
        panic_with_error!(e, VaultError::TooManyServiceProviders);
    }
    providers.push_back(provider.clone());
    storage::set_providers(e, &providers);
    storage::set_provider_stake(e, provider, &0);
}
