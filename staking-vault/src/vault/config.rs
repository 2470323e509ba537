use soroban_sdk::{panic_with_error, vec, Address, Env, String};

use crate::constants::BPS_DENOMINATOR;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::types::{VaultConfig, VaultState};
use crate::vault::token;

pub fn execute_initialize(
    e: &Env,
    admin: &Address,
    name: &String,
    symbol: &String,
    config: &VaultConfig,
) {
    if storage::is_initialized(e) {
        panic_with_error!(e, VaultError::AlreadyInitialized);
    }
    require_valid_config(e, config);

    storage::set_admin(e, admin);
    storage::set_config(e, config);
    storage::set_state(e, &VaultState::default());
    storage::set_name(e, name);
    storage::set_symbol(e, symbol);
    storage::set_decimals(e, token::decimals(e, &config.token));
    storage::set_providers(e, &vec![e]);

    VaultEvents::initialize(
        e,
        admin.clone(),
        config.token.clone(),
        config.mint_fee_bps,
        config.unstake_lockup_ledgers,
    );
}

fn require_valid_config(e: &Env, config: &VaultConfig) {
    // A fee of 100% or more would leave nothing to mint shares with
    if config.mint_fee_bps as i128 >= BPS_DENOMINATOR {
        panic_with_error!(e, VaultError::InvalidConfig);
    }
    if config.token == config.delegate_manager || config.token == config.claims_manager {
        panic_with_error!(e, VaultError::InvalidConfig);
    }
}
