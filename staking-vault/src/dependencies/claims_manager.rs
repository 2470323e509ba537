use soroban_sdk::{contractclient, Address, Env};

/// Rewards interface of the external staking network
#[contractclient(name = "Client")]
pub trait ClaimsManagerInterface {
    /// Claims the delegator's reward for the current round with
    /// `service_provider`. The reward is restaked with the provider by the
    /// network, nothing is transferred to the delegator.
    ///
    /// Returns the reward, zero if the round was already claimed
    fn claim(e: Env, delegator: Address, service_provider: Address) -> i128;
}
