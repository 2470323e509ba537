#![cfg(any(test, feature = "testutils"))]

use crate::{StakingVaultContract, StakingVaultContractClient};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, token, Address, Env,
    Symbol,
};

pub fn create_vault<'a>(e: &Env) -> StakingVaultContractClient<'a> {
    let address = e.register(StakingVaultContract {}, ());
    StakingVaultContractClient::new(e, &address)
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockError {
    Failing = 1,
    InsufficientDelegation = 2,
}

#[derive(Clone)]
#[contracttype]
enum MockDataKey {
    Delegation(Address, Address),
    Pending(Address, Address),
}

//***** Delegate Manager ******

/// In-memory delegation ledger standing in for the staking network
///
/// Holds the delegated tokens and hands them back on `undelegate`.
#[contract]
pub struct MockDelegateManager;

#[contractimpl]
impl MockDelegateManager {
    pub fn set_token(e: Env, token: Address) {
        e.storage().instance().set(&Symbol::new(&e, "Token"), &token);
    }

    pub fn set_failing(e: Env, failing: bool) {
        e.storage().instance().set(&Symbol::new(&e, "Failing"), &failing);
    }

    pub fn delegate(e: Env, delegator: Address, service_provider: Address, amount: i128) -> i128 {
        require_not_failing(&e, "Failing");
        let key = MockDataKey::Delegation(delegator, service_provider);
        let delegated = e.storage().instance().get(&key).unwrap_or(0_i128) + amount;
        e.storage().instance().set(&key, &delegated);
        delegated
    }

    pub fn undelegate(e: Env, delegator: Address, service_provider: Address, amount: i128) -> i128 {
        require_not_failing(&e, "Failing");
        let key = MockDataKey::Delegation(delegator.clone(), service_provider);
        let delegated: i128 = e.storage().instance().get(&key).unwrap_or(0);
        if amount > delegated {
            panic_with_error!(&e, MockError::InsufficientDelegation);
        }
        e.storage().instance().set(&key, &(delegated - amount));

        let token: Address = e.storage().instance().get(&Symbol::new(&e, "Token")).unwrap();
        token::Client::new(&e, &token).transfer(&e.current_contract_address(), &delegator, &amount);
        delegated - amount
    }

    /// Adds a restaked reward to a delegation. The reward tokens must already
    /// be held by this contract.
    pub fn credit_reward(e: Env, delegator: Address, service_provider: Address, amount: i128) {
        let key = MockDataKey::Delegation(delegator, service_provider);
        let delegated = e.storage().instance().get(&key).unwrap_or(0_i128) + amount;
        e.storage().instance().set(&key, &delegated);
    }

    pub fn delegated_amount(e: Env, delegator: Address, service_provider: Address) -> i128 {
        let key = MockDataKey::Delegation(delegator, service_provider);
        e.storage().instance().get(&key).unwrap_or(0)
    }
}

//***** Claims Manager ******

/// Reward rounds standing in for the staking network's claims contract
///
/// A funded round can be claimed once; claiming again returns zero until the
/// next round is funded.
#[contract]
pub struct MockClaimsManager;

#[contractimpl]
impl MockClaimsManager {
    pub fn set_delegate_manager(e: Env, delegate_manager: Address) {
        e.storage()
            .instance()
            .set(&Symbol::new(&e, "DelegateManager"), &delegate_manager);
    }

    pub fn set_claim_failing(e: Env, failing: bool) {
        e.storage().instance().set(&Symbol::new(&e, "ClaimFailing"), &failing);
    }

    pub fn fund_round(e: Env, delegator: Address, service_provider: Address, amount: i128) {
        let key = MockDataKey::Pending(delegator, service_provider);
        e.storage().instance().set(&key, &amount);
    }

    pub fn claim(e: Env, delegator: Address, service_provider: Address) -> i128 {
        require_not_failing(&e, "ClaimFailing");
        let key = MockDataKey::Pending(delegator.clone(), service_provider.clone());
        let reward: i128 = e.storage().instance().get(&key).unwrap_or(0);
        e.storage().instance().set(&key, &0_i128);
        if reward > 0 {
            let delegate_manager: Address = e
                .storage()
                .instance()
                .get(&Symbol::new(&e, "DelegateManager"))
                .unwrap();
            MockDelegateManagerClient::new(&e, &delegate_manager).credit_reward(
                &delegator,
                &service_provider,
                &reward,
            );
        }
        reward
    }
}

fn require_not_failing(e: &Env, flag: &str) {
    let failing: bool = e
        .storage()
        .instance()
        .get(&Symbol::new(e, flag))
        .unwrap_or(false);
    if failing {
        panic_with_error!(e, MockError::Failing);
    }
}
