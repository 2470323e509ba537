use soroban_sdk::{
    contract, contractclient, contractimpl, panic_with_error, Address, Env, String, Vec,
};

use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::types::{CooldownRequest, CooldownStatus, VaultConfig};
use crate::{storage, vault};

#[contract]
pub struct StakingVaultContract;

#[contractclient(name = "StakingVaultClient")]
pub trait StakingVault {
    /// One-time setup of the vault
    ///
    /// The share token's decimals are copied from the underlying token.
    ///
    /// ### Arguments
    /// * `admin` - The operator of the vault
    /// * `name` - Name of the share token
    /// * `symbol` - Symbol of the share token
    /// * `claims_manager` - Rewards-claim contract of the staking network
    /// * `delegate_manager` - Delegation contract of the staking network
    /// * `token` - The underlying token
    /// * `mint_fee_bps` - Fee on mints and claimed rewards, in basis points
    /// * `unstake_lockup_ledgers` - Ledgers between `cooldown` and `unstake`
    ///
    /// ### Panics
    /// - `AlreadyInitialized` if called a second time
    /// - `InvalidConfig` if `mint_fee_bps` >= 10_000
    fn initialize(
        e: Env,
        admin: Address,
        name: String,
        symbol: String,
        claims_manager: Address,
        delegate_manager: Address,
        token: Address,
        mint_fee_bps: u32,
        unstake_lockup_ledgers: u32,
    );

    /// (Admin only) Set a new address to become the admin of the vault. This
    /// must be accepted by the new admin w/ `accept_admin` to take effect.
    ///
    /// ### Arguments
    /// * `new_admin` - The new admin address
    fn propose_admin(e: Env, new_admin: Address);

    /// (Proposed admin only) Accept the admin role
    ///
    /// ### Panics
    /// - `NoProposedAdmin` if no admin was proposed
    fn accept_admin(e: Env);

    /// Deposits underlying tokens and mints shares to the caller
    ///
    /// Pulls `amount` from `holder`, routes the mint fee to the withdrawable
    /// fee pool and mints shares for the net amount at the current rate.
    ///
    /// ### Arguments
    /// * `holder` - The depositor and receiver of the shares
    /// * `amount` - Gross amount of underlying to deposit
    ///
    /// ### Returns
    /// Amount of shares minted
    ///
    /// ### Panics
    /// - `ZeroAmount` if amount <= 0
    /// - `ZeroSharesMinted` if the net amount buys no shares
    /// - `TransferFailed` if the tokens cannot be pulled
    fn mint_with_token(e: Env, holder: Address, amount: i128) -> i128;

    /// (Admin only) Delegates idle underlying value to a service provider
    ///
    /// ### Returns
    /// The vault's new stake with `provider`
    ///
    /// ### Panics
    /// - `InsufficientIdleValue` if the vault holds less than `amount` idle
    /// - `DelegationFailed` if the delegate manager rejects the delegation
    fn stake(e: Env, provider: Address, amount: i128) -> i128;

    /// Claims the reward earned with a service provider (permissionless)
    ///
    /// Safe to call at any interval: a round that was already claimed
    /// returns zero without changing any state.
    ///
    /// ### Returns
    /// The gross reward added to the vault
    ///
    /// ### Panics
    /// - `ServiceProviderNotFound` if the vault never staked to `provider`
    /// - `RewardsClaimFailed` if the claims manager fails
    fn claim_rewards(e: Env, provider: Address) -> i128;

    /// Starts a cooldown withdrawing `amount` of underlying staked with `provider`
    ///
    /// Locks the shares worth `amount` from `holder`. The payout can be
    /// collected with `unstake` once the lockup has elapsed.
    ///
    /// ### Panics
    /// - `CooldownAlreadyActive` if `holder` already has a request
    /// - `InsufficientShares` if `holder` cannot cover the locked shares
    /// - `InsufficientStake` if `provider` does not hold `amount`
    fn cooldown(e: Env, holder: Address, provider: Address, amount: i128) -> CooldownRequest;

    /// Cancels a pending cooldown and returns the locked shares
    ///
    /// ### Panics
    /// - `NoCooldownRequest` if `holder` has no request
    fn cancel_cooldown(e: Env, holder: Address);

    /// Pays out a matured cooldown to its holder (permissionless)
    ///
    /// ### Returns
    /// Amount of underlying tokens transferred to `holder`
    ///
    /// ### Panics
    /// - `NoCooldownRequest` if `holder` has no request
    /// - `CooldownNotMature` if the lockup has not elapsed
    /// - `UndelegationFailed` / `TransferFailed` if an external call fails;
    ///   the request is kept so the payout can be retried
    fn unstake(e: Env, holder: Address) -> i128;

    /// (Admin only) Transfers all withdrawable fees to `to`
    ///
    /// ### Returns
    /// The amount transferred
    fn withdraw_fees(e: Env, to: Address) -> i128;

    /// (Admin only) Moves `amount` from the withdrawable to the staked fee pool
    ///
    /// ### Panics
    /// - `InsufficientFeeBalance` if the withdrawable pool is short
    /// - `InsufficientStake` if the staked pool would exceed the total staked
    fn move_fees_to_staked(e: Env, amount: i128);

    /// (Admin only) Moves `amount` from the staked to the withdrawable fee pool
    ///
    /// ### Panics
    /// - `InsufficientFeeBalance` if the staked pool is short
    /// - `InsufficientIdleValue` if the vault lacks idle value to back the fees
    fn move_fees_to_withdrawable(e: Env, amount: i128);

    /// Transfers shares between holders
    ///
    /// ### Panics
    /// - `InsufficientShares` if `from` holds less than `amount`
    fn transfer(e: Env, from: Address, to: Address, amount: i128);

    /// Share balance of `holder`, locked shares excluded
    fn balance(e: Env, holder: Address) -> i128;

    fn name(e: Env) -> String;

    fn symbol(e: Env) -> String;

    fn decimals(e: Env) -> u32;

    /// Total shares outstanding, shares locked in cooldowns included
    fn total_shares(e: Env) -> i128;

    /// Underlying value backing the vault, staked fees included and
    /// withdrawable fees excluded
    fn total_underlying_value(e: Env) -> i128;

    fn get_withdrawable_fees(e: Env) -> i128;

    fn get_staked_fees(e: Env) -> i128;

    fn get_total_staked_amount(e: Env) -> i128;

    /// Amount actively staked with `provider`, exiting amounts excluded
    fn get_staked_amount(e: Env, provider: Address) -> i128;

    /// Staked share of the underlying value, in basis points
    fn get_current_staked_percentage(e: Env) -> i128;

    /// Idle holder value available for staking
    fn get_idle_amount(e: Env) -> i128;

    /// Value reserved for pending cooldowns
    fn get_exiting_amount(e: Env) -> i128;

    fn get_service_providers(e: Env) -> Vec<Address>;

    fn get_cooldown(e: Env, holder: Address) -> Option<CooldownRequest>;

    fn get_cooldown_status(e: Env, holder: Address) -> CooldownStatus;

    /// Shares a mint of `amount` net underlying would receive
    fn shares_for_underlying(e: Env, amount: i128) -> i128;

    /// Underlying value `shares` are worth at the current rate
    fn underlying_for_shares(e: Env, shares: i128) -> i128;

    fn get_config(e: Env) -> VaultConfig;

    fn get_admin(e: Env) -> Address;
}

#[contractimpl]
impl StakingVault for StakingVaultContract {
    fn initialize(
        e: Env,
        admin: Address,
        name: String,
        symbol: String,
        claims_manager: Address,
        delegate_manager: Address,
        token: Address,
        mint_fee_bps: u32,
        unstake_lockup_ledgers: u32,
    ) {
        admin.require_auth();
        let config = VaultConfig {
            token,
            delegate_manager,
            claims_manager,
            mint_fee_bps,
            unstake_lockup_ledgers,
        };
        vault::execute_initialize(&e, &admin, &name, &symbol, &config);
        storage::extend_instance(&e);
    }

    fn propose_admin(e: Env, new_admin: Address) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        storage::set_proposed_admin(&e, &new_admin);
        VaultEvents::propose_admin(&e, admin, new_admin);
    }

    fn accept_admin(e: Env) {
        storage::extend_instance(&e);
        storage::get_admin(&e);
        let proposed_admin = storage::get_proposed_admin(&e)
            .unwrap_or_else(|| panic_with_error!(&e, VaultError::NoProposedAdmin));
        proposed_admin.require_auth();

        storage::set_admin(&e, &proposed_admin);
        storage::del_proposed_admin(&e);
        VaultEvents::accept_admin(&e, proposed_admin);
    }

    fn mint_with_token(e: Env, holder: Address, amount: i128) -> i128 {
        storage::extend_instance(&e);
        holder.require_auth();

        vault::execute_mint_with_token(&e, &holder, amount)
    }

    fn stake(e: Env, provider: Address, amount: i128) -> i128 {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        vault::execute_stake(&e, &provider, amount)
    }

    fn claim_rewards(e: Env, provider: Address) -> i128 {
        storage::extend_instance(&e);
        vault::execute_claim_rewards(&e, &provider)
    }

    fn cooldown(e: Env, holder: Address, provider: Address, amount: i128) -> CooldownRequest {
        storage::extend_instance(&e);
        holder.require_auth();

        vault::execute_cooldown(&e, &holder, &provider, amount)
    }

    fn cancel_cooldown(e: Env, holder: Address) {
        storage::extend_instance(&e);
        holder.require_auth();

        vault::execute_cancel_cooldown(&e, &holder);
    }

    fn unstake(e: Env, holder: Address) -> i128 {
        storage::extend_instance(&e);
        vault::execute_unstake(&e, &holder)
    }

    fn withdraw_fees(e: Env, to: Address) -> i128 {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        vault::execute_withdraw_fees(&e, &to)
    }

    fn move_fees_to_staked(e: Env, amount: i128) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        vault::execute_move_fees(&e, true, amount);
    }

    fn move_fees_to_withdrawable(e: Env, amount: i128) {
        storage::extend_instance(&e);
        let admin = storage::get_admin(&e);
        admin.require_auth();

        vault::execute_move_fees(&e, false, amount);
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        storage::extend_instance(&e);
        from.require_auth();

        vault::execute_transfer(&e, &from, &to, amount);
    }

    fn balance(e: Env, holder: Address) -> i128 {
        storage::extend_instance(&e);
        storage::get_config(&e);
        storage::get_balance(&e, &holder)
    }

    fn name(e: Env) -> String {
        storage::extend_instance(&e);
        storage::get_config(&e);
        storage::get_name(&e)
    }

    fn symbol(e: Env) -> String {
        storage::extend_instance(&e);
        storage::get_config(&e);
        storage::get_symbol(&e)
    }

    fn decimals(e: Env) -> u32 {
        storage::extend_instance(&e);
        storage::get_config(&e);
        storage::get_decimals(&e)
    }

    fn total_shares(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_state(&e).total_shares
    }

    fn total_underlying_value(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_state(&e).total_underlying
    }

    fn get_withdrawable_fees(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_state(&e).withdrawable_fees
    }

    fn get_staked_fees(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_state(&e).staked_fees
    }

    fn get_total_staked_amount(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_state(&e).total_staked
    }

    fn get_staked_amount(e: Env, provider: Address) -> i128 {
        storage::extend_instance(&e);
        storage::get_config(&e);
        storage::get_provider_stake(&e, &provider)
    }

    fn get_current_staked_percentage(e: Env) -> i128 {
        storage::extend_instance(&e);
        let state = storage::get_state(&e);
        vault::staked_percentage(&e, &state)
    }

    fn get_idle_amount(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_state(&e).idle()
    }

    fn get_exiting_amount(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_state(&e).total_exiting
    }

    fn get_service_providers(e: Env) -> Vec<Address> {
        storage::extend_instance(&e);
        storage::get_config(&e);
        storage::get_providers(&e)
    }

    fn get_cooldown(e: Env, holder: Address) -> Option<CooldownRequest> {
        storage::extend_instance(&e);
        storage::get_config(&e);
        storage::get_cooldown(&e, &holder)
    }

    fn get_cooldown_status(e: Env, holder: Address) -> CooldownStatus {
        storage::extend_instance(&e);
        storage::get_config(&e);
        let request = storage::get_cooldown(&e, &holder);
        vault::cooldown_status(&e, &request)
    }

    fn shares_for_underlying(e: Env, amount: i128) -> i128 {
        storage::extend_instance(&e);
        let state = storage::get_state(&e);
        vault::shares_for_underlying(&e, &state, amount)
    }

    fn underlying_for_shares(e: Env, shares: i128) -> i128 {
        storage::extend_instance(&e);
        let state = storage::get_state(&e);
        vault::underlying_for_shares(&e, &state, shares)
    }

    fn get_config(e: Env) -> VaultConfig {
        storage::extend_instance(&e);
        storage::get_config(&e)
    }

    fn get_admin(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_admin(&e)
    }
}
