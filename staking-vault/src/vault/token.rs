use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::errors::VaultError;

/// Pulls `amount` of the underlying token from `from` into the vault
///
/// ### Panics
/// - `TransferFailed` if the token rejects the transfer
pub fn pull(e: &Env, token: &Address, from: &Address, amount: i128) {
    let token_client = token::Client::new(e, token);
    match token_client.try_transfer(from, &e.current_contract_address(), &amount) {
        Ok(Ok(_)) => {}
        _ => panic_with_error!(e, VaultError::TransferFailed),
    }
}

/// Pushes `amount` of the underlying token from the vault to `to`
///
/// ### Panics
/// - `TransferFailed` if the token rejects the transfer
pub fn push(e: &Env, token: &Address, to: &Address, amount: i128) {
    let token_client = token::Client::new(e, token);
    match token_client.try_transfer(&e.current_contract_address(), to, &amount) {
        Ok(Ok(_)) => {}
        _ => panic_with_error!(e, VaultError::TransferFailed),
    }
}

/// Decimals of the underlying token, reused for the share token
pub fn decimals(e: &Env, token: &Address) -> u32 {
    token::Client::new(e, token).decimals()
}
