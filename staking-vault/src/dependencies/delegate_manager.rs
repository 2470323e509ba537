use soroban_sdk::{contractclient, Address, Env};

/// Delegation interface of the external staking network
#[contractclient(name = "Client")]
pub trait DelegateManagerInterface {
    /// Records `amount` of stake from `delegator` to `service_provider`.
    /// The tokens are transferred to the delegate manager before the call.
    ///
    /// Returns the delegator's total stake with the provider
    fn delegate(e: Env, delegator: Address, service_provider: Address, amount: i128) -> i128;

    /// Releases `amount` of stake from `service_provider` and transfers the
    /// tokens back to `delegator`
    ///
    /// Returns the delegator's remaining stake with the provider
    fn undelegate(e: Env, delegator: Address, service_provider: Address, amount: i128) -> i128;
}
