use soroban_sdk::{Address, Env, Symbol};

pub struct VaultEvents {}

impl VaultEvents {
    /// Emitted when the vault is initialized
    ///
    /// - topics - `["initialize"]`
    /// - data - `[admin: Address, token: Address, mint_fee_bps: u32, unstake_lockup_ledgers: u32]`
    pub fn initialize(
        e: &Env,
        admin: Address,
        token: Address,
        mint_fee_bps: u32,
        unstake_lockup_ledgers: u32,
    ) {
        let topics = (Symbol::new(e, "initialize"),);
        e.events()
            .publish(topics, (admin, token, mint_fee_bps, unstake_lockup_ledgers));
    }

    /// Emitted when an admin change is proposed
    ///
    /// - topics - `["propose_admin", admin: Address]`
    /// - data - `new_admin: Address`
    pub fn propose_admin(e: &Env, admin: Address, new_admin: Address) {
        let topics = (Symbol::new(e, "propose_admin"), admin);
        e.events().publish(topics, new_admin);
    }

    /// Emitted when a proposed admin accepts the role
    ///
    /// - topics - `["accept_admin", new_admin: Address]`
    /// - data - `()`
    pub fn accept_admin(e: &Env, new_admin: Address) {
        let topics = (Symbol::new(e, "accept_admin"), new_admin);
        e.events().publish(topics, ());
    }

    /// Emitted when shares are minted for underlying tokens
    ///
    /// - topics - `["mint", holder: Address]`
    /// - data - `[tokens: i128, fee: i128, shares: i128]`
    ///
    /// ### Arguments
    /// * holder - The address receiving the minted shares
    /// * tokens - The gross amount of underlying pulled from the holder
    /// * fee - The part of `tokens` credited to the withdrawable fee pool
    /// * shares - The amount of shares minted
    pub fn mint(e: &Env, holder: Address, tokens: i128, fee: i128, shares: i128) {
        let topics = (Symbol::new(e, "mint"), holder);
        e.events().publish(topics, (tokens, fee, shares));
    }

    /// Emitted when idle value is delegated to a service provider
    ///
    /// - topics - `["stake", provider: Address]`
    /// - data - `[amount: i128, provider_stake: i128]`
    pub fn stake(e: &Env, provider: Address, amount: i128, provider_stake: i128) {
        let topics = (Symbol::new(e, "stake"), provider);
        e.events().publish(topics, (amount, provider_stake));
    }

    /// Emitted when a non-zero reward is claimed and restaked
    ///
    /// - topics - `["claim_rewards", provider: Address]`
    /// - data - `[reward: i128, fee: i128]`
    ///
    /// ### Arguments
    /// * provider - The service provider the reward was earned with
    /// * reward - The gross reward added to the provider stake
    /// * fee - The part of `reward` credited to the staked fee pool, its yield
    ///   share plus the fee on the rest
    pub fn claim_rewards(e: &Env, provider: Address, reward: i128, fee: i128) {
        let topics = (Symbol::new(e, "claim_rewards"), provider);
        e.events().publish(topics, (reward, fee));
    }

    /// Emitted when a holder starts a cooldown
    ///
    /// - topics - `["cooldown", holder: Address, provider: Address]`
    /// - data - `[amount: i128, shares: i128, maturity_ledger: u32]`
    pub fn cooldown(
        e: &Env,
        holder: Address,
        provider: Address,
        amount: i128,
        shares: i128,
        maturity_ledger: u32,
    ) {
        let topics = (Symbol::new(e, "cooldown"), holder, provider);
        e.events().publish(topics, (amount, shares, maturity_ledger));
    }

    /// Emitted when a holder cancels a cooldown
    ///
    /// - topics - `["cancel_cooldown", holder: Address, provider: Address]`
    /// - data - `[amount: i128, shares: i128]`
    pub fn cancel_cooldown(
        e: &Env,
        holder: Address,
        provider: Address,
        amount: i128,
        shares: i128,
    ) {
        let topics = (Symbol::new(e, "cancel_cooldown"), holder, provider);
        e.events().publish(topics, (amount, shares));
    }

    /// Emitted when a matured cooldown is paid out
    ///
    /// - topics - `["unstake", holder: Address, provider: Address]`
    /// - data - `[amount: i128, shares: i128]`
    pub fn unstake(e: &Env, holder: Address, provider: Address, amount: i128, shares: i128) {
        let topics = (Symbol::new(e, "unstake"), holder, provider);
        e.events().publish(topics, (amount, shares));
    }

    /// Emitted when the operator withdraws liquid fees
    ///
    /// - topics - `["withdraw_fees", to: Address]`
    /// - data - `amount: i128`
    pub fn withdraw_fees(e: &Env, to: Address, amount: i128) {
        let topics = (Symbol::new(e, "withdraw_fees"), to);
        e.events().publish(topics, amount);
    }

    /// Emitted when fees move between the withdrawable and staked pools
    ///
    /// - topics - `["move_fees"]`
    /// - data - `[to_staked: bool, amount: i128]`
    pub fn move_fees(e: &Env, to_staked: bool, amount: i128) {
        let topics = (Symbol::new(e, "move_fees"),);
        e.events().publish(topics, (to_staked, amount));
    }

    /// Emitted when shares move between holders
    ///
    /// - topics - `["transfer", from: Address, to: Address]`
    /// - data - `amount: i128`
    pub fn transfer(e: &Env, from: Address, to: Address, amount: i128) {
        let topics = (Symbol::new(e, "transfer"), from, to);
        e.events().publish(topics, amount);
    }
}
