use soroban_sdk::{panic_with_error, Address, Env};

use crate::dependencies::DelegateManagerClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::types::{CooldownRequest, CooldownStatus};
use crate::vault::{exchange_rate, fees, stake_ledger, token};

/// Where a holder's cooldown stands at the current ledger
pub fn status(e: &Env, request: &Option<CooldownRequest>) -> CooldownStatus {
    match request {
        None => CooldownStatus::Inactive,
        Some(request) if e.ledger().sequence() < request.maturity_ledger => {
            CooldownStatus::Cooling
        }
        Some(_) => CooldownStatus::Mature,
    }
}

/// Starts a cooldown that withdraws `amount` of `provider`'s stake to `holder`
///
/// Locks the shares worth `amount` from the holder's balance and marks the
/// amount as exiting. The shares keep counting towards the total supply until
/// `unstake` burns them.
///
/// ### Panics
/// - `ZeroAmount` if `amount` <= 0
/// - `CooldownAlreadyActive` if `holder` already has a request
/// - `ServiceProviderNotFound` if the vault never staked to `provider`
/// - `InsufficientShares` if `holder` cannot cover the locked shares
/// - `InsufficientStake` if `provider` does not hold `amount` of free stake
pub fn execute_cooldown(
    e: &Env,
    holder: &Address,
    provider: &Address,
    amount: i128,
) -> CooldownRequest {
    let config = storage::get_config(e);
    if amount <= 0 {
        panic_with_error!(e, VaultError::ZeroAmount);
    }
    if storage::has_cooldown(e, holder) {
        panic_with_error!(e, VaultError::CooldownAlreadyActive);
    }
    if !storage::has_provider_stake(e, provider) {
        panic_with_error!(e, VaultError::ServiceProviderNotFound);
    }

    let mut state = storage::get_state(e);
    let shares = exchange_rate::shares_to_lock(e, &state, amount);
    let balance = storage::get_balance(e, holder);
    if shares > balance {
        panic_with_error!(e, VaultError::InsufficientShares);
    }
    stake_ledger::reduce_stake(e, &mut state, provider, amount);

    let request = CooldownRequest {
        provider: provider.clone(),
        amount,
        shares,
        maturity_ledger: e
            .ledger()
            .sequence()
            .saturating_add(config.unstake_lockup_ledgers),
    };
    storage::set_balance(e, holder, &(balance - shares));
    storage::set_cooldown(e, holder, &request);
    storage::set_state(e, &state);

    VaultEvents::cooldown(
        e,
        holder.clone(),
        provider.clone(),
        amount,
        shares,
        request.maturity_ledger,
    );
    request
}

/// Cancels `holder`'s cooldown, restoring the provider stake and the locked shares
///
/// ### Panics
/// - `NoCooldownRequest` if `holder` has no request
pub fn execute_cancel_cooldown(e: &Env, holder: &Address) {
    storage::get_config(e);
    let request = match storage::get_cooldown(e, holder) {
        Some(request) => request,
        None => panic_with_error!(e, VaultError::NoCooldownRequest),
    };

    let mut state = storage::get_state(e);
    stake_ledger::restore_stake(e, &mut state, &request.provider, request.amount);
    let balance = storage::get_balance(e, holder);
    storage::set_balance(e, holder, &(balance + request.shares));
    storage::remove_cooldown(e, holder);
    storage::set_state(e, &state);

    VaultEvents::cancel_cooldown(
        e,
        holder.clone(),
        request.provider.clone(),
        request.amount,
        request.shares,
    );
}

/// Pays out `holder`'s matured cooldown (permissionless)
///
/// Undelegates the amount back to the vault, transfers it to the holder and
/// burns the locked shares. If either external call fails the invocation
/// reverts and the request stays in place for a retry.
///
/// ### Returns
/// Amount of underlying tokens transferred to `holder`
///
/// ### Panics
/// - `NoCooldownRequest` if `holder` has no request
/// - `CooldownNotMature` if the maturity ledger has not been reached
/// - `UndelegationFailed` if the delegate manager does not release the stake
/// - `TransferFailed` if the payout transfer fails
pub fn execute_unstake(e: &Env, holder: &Address) -> i128 {
    let config = storage::get_config(e);
    let request = match storage::get_cooldown(e, holder) {
        Some(request) => request,
        None => panic_with_error!(e, VaultError::NoCooldownRequest),
    };
    if e.ledger().sequence() < request.maturity_ledger {
        panic_with_error!(e, VaultError::CooldownNotMature);
    }

    let delegate_manager = DelegateManagerClient::new(e, &config.delegate_manager);
    match delegate_manager.try_undelegate(
        &e.current_contract_address(),
        &request.provider,
        &request.amount,
    ) {
        Ok(Ok(_)) => {}
        _ => panic_with_error!(e, VaultError::UndelegationFailed),
    }
    token::push(e, &config.token, holder, request.amount);

    let mut state = storage::get_state(e);
    state.total_exiting -= request.amount;
    state.total_underlying -= request.amount;
    state.total_shares -= request.shares;
    fees::sweep_orphaned_value(&mut state);

    storage::remove_cooldown(e, holder);
    storage::set_state(e, &state);

    VaultEvents::unstake(
        e,
        holder.clone(),
        request.provider.clone(),
        request.amount,
        request.shares,
    );
    request.amount
}
