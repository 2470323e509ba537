use soroban_sdk::{contracttype, Address};

/// Immutable vault configuration, set once by `initialize`
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VaultConfig {
    pub token: Address,                // Underlying token
    pub delegate_manager: Address,     // Delegation/staking collaborator
    pub claims_manager: Address,       // Rewards-claim collaborator
    pub mint_fee_bps: u32,             // Fee charged on mints and claimed rewards
    pub unstake_lockup_ledgers: u32,   // Ledgers between cooldown and unstake
}

/// Aggregate economic state of the vault
///
/// Loaded once per invocation, mutated in memory and written back once.
/// Every amount is in the underlying token's smallest unit.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct VaultState {
    pub total_shares: i128,        // All share balances, locked shares included
    pub total_underlying: i128,    // Idle + staked + exiting, withdrawable fees excluded
    pub total_staked: i128,        // Sum of provider stakes
    pub total_exiting: i128,       // Removed from provider stakes, awaiting unstake
    pub withdrawable_fees: i128,   // Liquid operator revenue
    pub staked_fees: i128,         // Operator revenue still delegated
}

impl VaultState {
    /// Value owned by share holders
    pub fn holder_value(&self) -> i128 {
        self.total_underlying - self.staked_fees
    }

    /// Holder value held liquid by the vault and free to be staked
    pub fn idle(&self) -> i128 {
        self.total_underlying - self.total_staked - self.total_exiting
    }
}

/// A pending withdrawal of delegated value
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CooldownRequest {
    pub provider: Address,         // Provider the amount was taken from
    pub amount: i128,              // Underlying paid out on unstake
    pub shares: i128,              // Shares locked from the holder
    pub maturity_ledger: u32,      // First ledger unstake is allowed
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum CooldownStatus {
    Inactive,
    Cooling,
    Mature,
}
