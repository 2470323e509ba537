use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};

/// Deploys a Stellar asset contract to act as the underlying token
///
/// Returns the token address with its user and admin clients.
pub fn create_stellar_token<'a>(
    e: &Env,
    admin: &Address,
) -> (Address, TokenClient<'a>, StellarAssetClient<'a>) {
    let contract = e.register_stellar_asset_contract_v2(admin.clone());
    let id = contract.address();
    (
        id.clone(),
        TokenClient::new(e, &id),
        StellarAssetClient::new(e, &id),
    )
}
