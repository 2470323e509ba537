use soroban_sdk::{
    contracttype, panic_with_error, unwrap::UnwrapOptimized, Address, Env, IntoVal, String,
    Symbol, TryFromVal, Val, Vec,
};

use crate::errors::VaultError;
use crate::types::{CooldownRequest, VaultConfig, VaultState};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_SHARED: u32 = ONE_DAY_LEDGERS * 45; // ~ 45 days
const LEDGER_BUMP_SHARED: u32 = LEDGER_THRESHOLD_SHARED + ONE_DAY_LEDGERS; // ~ 46 days
const LEDGER_THRESHOLD_USER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_USER: u32 = LEDGER_THRESHOLD_USER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/********** Storage Types **********/

const ADMIN_KEY: &str = "Admin";
const PROPOSED_ADMIN_KEY: &str = "PropAdmin";
const CONFIG_KEY: &str = "Config";
const STATE_KEY: &str = "State";
const NAME_KEY: &str = "Name";
const SYMBOL_KEY: &str = "Symbol";
const DECIMALS_KEY: &str = "Decimals";
const PROVIDERS_KEY: &str = "Providers";

#[derive(Clone)]
#[contracttype]
pub enum VaultDataKey {
    // A map of holder to share balance
    Balance(Address),
    // A map of service provider to delegated amount
    ProviderStake(Address),
    // A map of holder to pending cooldown
    Cooldown(Address),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>, F: FnOnce() -> V>(
    e: &Env,
    key: &K,
    default: F,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default()
    }
}

/********** Admin **********/

/// Fetch the current admin Address
///
/// ### Panics
/// If the vault has not been initialized
pub fn get_admin(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ADMIN_KEY))
        .unwrap_or_else(|| panic_with_error!(e, VaultError::NotInitialized))
}

/// Set a new admin
///
/// ### Arguments
/// * `new_admin` - The Address for the admin
pub fn set_admin(e: &Env, new_admin: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ADMIN_KEY), new_admin);
}

/// Fetch the current proposed admin Address, if any
pub fn get_proposed_admin(e: &Env) -> Option<Address> {
    e.storage()
        .temporary()
        .get(&Symbol::new(e, PROPOSED_ADMIN_KEY))
}

/// Set a new proposed admin
///
/// ### Arguments
/// * `proposed_admin` - The Address for the proposed admin
pub fn set_proposed_admin(e: &Env, proposed_admin: &Address) {
    e.storage()
        .temporary()
        .set::<Symbol, Address>(&Symbol::new(e, PROPOSED_ADMIN_KEY), proposed_admin);
    e.storage().temporary().extend_ttl(
        &Symbol::new(e, PROPOSED_ADMIN_KEY),
        10 * ONE_DAY_LEDGERS,
        10 * ONE_DAY_LEDGERS,
    );
}

pub fn del_proposed_admin(e: &Env) {
    e.storage()
        .temporary()
        .remove(&Symbol::new(e, PROPOSED_ADMIN_KEY));
}

/********** Config **********/

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&Symbol::new(e, CONFIG_KEY))
}

/// Fetch the vault configuration
///
/// ### Panics
/// If the vault has not been initialized
pub fn get_config(e: &Env) -> VaultConfig {
    e.storage()
        .instance()
        .get(&Symbol::new(e, CONFIG_KEY))
        .unwrap_or_else(|| panic_with_error!(e, VaultError::NotInitialized))
}

pub fn set_config(e: &Env, config: &VaultConfig) {
    e.storage()
        .instance()
        .set::<Symbol, VaultConfig>(&Symbol::new(e, CONFIG_KEY), config);
}

/********** Vault State **********/

/// Fetch the aggregate vault state
///
/// ### Panics
/// If the vault has not been initialized
pub fn get_state(e: &Env) -> VaultState {
    e.storage()
        .instance()
        .get(&Symbol::new(e, STATE_KEY))
        .unwrap_or_else(|| panic_with_error!(e, VaultError::NotInitialized))
}

pub fn set_state(e: &Env, state: &VaultState) {
    e.storage()
        .instance()
        .set::<Symbol, VaultState>(&Symbol::new(e, STATE_KEY), state);
}

/********** Share Metadata **********/

pub fn get_name(e: &Env) -> String {
    e.storage()
        .instance()
        .get(&Symbol::new(e, NAME_KEY))
        .unwrap_optimized()
}

pub fn set_name(e: &Env, name: &String) {
    e.storage()
        .instance()
        .set::<Symbol, String>(&Symbol::new(e, NAME_KEY), name);
}

pub fn get_symbol(e: &Env) -> String {
    e.storage()
        .instance()
        .get(&Symbol::new(e, SYMBOL_KEY))
        .unwrap_optimized()
}

pub fn set_symbol(e: &Env, symbol: &String) {
    e.storage()
        .instance()
        .set::<Symbol, String>(&Symbol::new(e, SYMBOL_KEY), symbol);
}

pub fn get_decimals(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, DECIMALS_KEY))
        .unwrap_optimized()
}

pub fn set_decimals(e: &Env, decimals: u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, DECIMALS_KEY), &decimals);
}

/********** Share Balances **********/

/// Fetch a holder's share balance, zero if they never held shares
///
/// ### Arguments
/// * `holder` - The address of the holder
pub fn get_balance(e: &Env, holder: &Address) -> i128 {
    let key = VaultDataKey::Balance(holder.clone());
    get_persistent_default(e, &key, || 0, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER)
}

/// Set a holder's share balance
///
/// ### Arguments
/// * `holder` - The address of the holder
/// * `amount` - The new share balance
pub fn set_balance(e: &Env, holder: &Address, amount: &i128) {
    let key = VaultDataKey::Balance(holder.clone());
    e.storage()
        .persistent()
        .set::<VaultDataKey, i128>(&key, amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

/********** Service Providers **********/

/// Fetch the list of providers the vault has ever staked to
pub fn get_providers(e: &Env) -> Vec<Address> {
    e.storage()
        .instance()
        .get(&Symbol::new(e, PROVIDERS_KEY))
        .unwrap_or_else(|| Vec::new(e))
}

pub fn set_providers(e: &Env, providers: &Vec<Address>) {
    e.storage()
        .instance()
        .set::<Symbol, Vec<Address>>(&Symbol::new(e, PROVIDERS_KEY), providers);
}

pub fn has_provider_stake(e: &Env, provider: &Address) -> bool {
    let key = VaultDataKey::ProviderStake(provider.clone());
    e.storage().persistent().has(&key)
}

/// Fetch the amount delegated to a provider, zero for unknown providers
///
/// ### Arguments
/// * `provider` - The address of the service provider
pub fn get_provider_stake(e: &Env, provider: &Address) -> i128 {
    let key = VaultDataKey::ProviderStake(provider.clone());
    get_persistent_default(e, &key, || 0, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED)
}

/// Set the amount delegated to a provider
///
/// ### Arguments
/// * `provider` - The address of the service provider
/// * `amount` - The new delegated amount
pub fn set_provider_stake(e: &Env, provider: &Address, amount: &i128) {
    let key = VaultDataKey::ProviderStake(provider.clone());
    e.storage()
        .persistent()
        .set::<VaultDataKey, i128>(&key, amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_SHARED, LEDGER_BUMP_SHARED);
}

/********** Cooldowns **********/

pub fn get_cooldown(e: &Env, holder: &Address) -> Option<CooldownRequest> {
    let key = VaultDataKey::Cooldown(holder.clone());
    let request = e
        .storage()
        .persistent()
        .get::<VaultDataKey, CooldownRequest>(&key);
    if request.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
    }
    request
}

pub fn set_cooldown(e: &Env, holder: &Address, request: &CooldownRequest) {
    let key = VaultDataKey::Cooldown(holder.clone());
    e.storage()
        .persistent()
        .set::<VaultDataKey, CooldownRequest>(&key, request);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_USER, LEDGER_BUMP_USER);
}

pub fn has_cooldown(e: &Env, holder: &Address) -> bool {
    let key = VaultDataKey::Cooldown(holder.clone());
    e.storage().persistent().has(&key)
}

pub fn remove_cooldown(e: &Env, holder: &Address) {
    let key = VaultDataKey::Cooldown(holder.clone());
    e.storage().persistent().remove(&key);
}
