use crate::token::create_stellar_token;
use crate::SCALAR_7;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, Error, String};
use staking_vault::testutils::{
    MockClaimsManager, MockClaimsManagerClient, MockDelegateManager, MockDelegateManagerClient,
};
use staking_vault::{StakingVaultClient, StakingVaultContract, VaultError, VaultState};

const ONE_DAY_LEDGERS: u32 = 17280;

pub const DEFAULT_MINT_FEE_BPS: u32 = 100;
pub const DEFAULT_LOCKUP_LEDGERS: u32 = ONE_DAY_LEDGERS;

pub struct TestFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub users: Vec<Address>,
    pub providers: Vec<Address>,
    pub vault: StakingVaultClient<'a>,
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
    pub delegate_manager: MockDelegateManagerClient<'a>,
    pub claims_manager: MockClaimsManagerClient<'a>,
}

impl TestFixture<'_> {
    /// Creates an initialized vault backed by a Stellar asset and mock
    /// staking network collaborators
    pub fn create<'a>(mint_fee_bps: u32, unstake_lockup_ledgers: u32) -> TestFixture<'a> {
        let fixture = TestFixture::create_uninitialized();
        fixture.vault.initialize(
            &fixture.admin,
            &String::from_str(&fixture.env, "Staked Token"),
            &String::from_str(&fixture.env, "stTKN"),
            &fixture.claims_manager.address,
            &fixture.delegate_manager.address,
            &fixture.token.address,
            &mint_fee_bps,
            &unstake_lockup_ledgers,
        );
        fixture
    }

    /// Creates the vault and its collaborators without calling `initialize`
    pub fn create_uninitialized<'a>() -> TestFixture<'a> {
        let e = Env::default();
        e.mock_all_auths();
        e.ledger().with_mut(|li| {
            li.sequence_number = 100;
            li.timestamp = 1_700_000_000;
            li.min_temp_entry_ttl = ONE_DAY_LEDGERS;
            li.min_persistent_entry_ttl = 120 * ONE_DAY_LEDGERS;
            li.max_entry_ttl = 180 * ONE_DAY_LEDGERS;
        });

        let admin = Address::generate(&e);
        let (token_id, token_client, token_admin_client) = create_stellar_token(&e, &admin);

        let delegate_manager_id = e.register(MockDelegateManager {}, ());
        let delegate_manager = MockDelegateManagerClient::new(&e, &delegate_manager_id);
        delegate_manager.set_token(&token_id);

        let claims_manager_id = e.register(MockClaimsManager {}, ());
        let claims_manager = MockClaimsManagerClient::new(&e, &claims_manager_id);
        claims_manager.set_delegate_manager(&delegate_manager_id);

        let vault_id = e.register(StakingVaultContract {}, ());
        let vault = StakingVaultClient::new(&e, &vault_id);

        let users: Vec<Address> = (0..3).map(|_| Address::generate(&e)).collect();
        for user in users.iter() {
            token_admin_client.mint(user, &(1_000_000 * SCALAR_7));
        }
        let providers: Vec<Address> = (0..2).map(|_| Address::generate(&e)).collect();

        TestFixture {
            env: e,
            admin,
            users,
            providers,
            vault,
            token: token_client,
            token_admin: token_admin_client,
            delegate_manager,
            claims_manager,
        }
    }

    /********** Staking Network Helpers ***********/

    /// Opens a reward round of `amount` for the vault's stake with `provider`.
    /// The reward tokens are minted to the delegate manager, where the
    /// network holds restaked rewards.
    pub fn fund_rewards(&self, provider: &Address, amount: i128) {
        if amount > 0 {
            self.token_admin.mint(&self.delegate_manager.address, &amount);
        }
        self.claims_manager
            .fund_round(&self.vault.address, provider, &amount);
    }

    pub fn delegated_to(&self, provider: &Address) -> i128 {
        self.delegate_manager
            .delegated_amount(&self.vault.address, provider)
    }

    /********** Vault Helpers ***********/

    pub fn read_state(&self) -> VaultState {
        self.env.as_contract(&self.vault.address, || {
            staking_vault::storage::get_state(&self.env)
        })
    }

    /// Share-holder value per share, scaled by `SCALAR_7`
    pub fn rate(&self) -> i128 {
        let state = self.read_state();
        if state.total_shares == 0 {
            return SCALAR_7;
        }
        state.holder_value() * SCALAR_7 / state.total_shares
    }

    /// Checks the accounting invariants against the vault state, the token
    /// balances and the delegate manager's records
    pub fn assert_invariants(&self) {
        let state = self.read_state();

        assert_eq!(state.total_shares == 0, state.holder_value() == 0);
        assert!(state.total_staked <= state.total_underlying);
        assert!(state.staked_fees <= state.total_staked);
        assert!(state.idle() >= 0);
        assert!(state.withdrawable_fees >= 0);

        // liquid value matches the tokens held by the vault
        assert_eq!(
            self.token.balance(&self.vault.address),
            state.idle() + state.withdrawable_fees
        );

        // every staked or exiting unit is still delegated
        let mut provider_total = 0;
        let mut delegated_total = 0;
        for provider in self.vault.get_service_providers().iter() {
            provider_total += self.vault.get_staked_amount(&provider);
            delegated_total += self.delegated_to(&provider);
        }
        assert_eq!(provider_total, state.total_staked);
        assert_eq!(delegated_total, state.total_staked + state.total_exiting);

        // share balances and locked shares add up to the supply
        let mut shares = 0;
        let mut exiting = 0;
        for user in self.users.iter() {
            shares += self.vault.balance(user);
            if let Some(request) = self.vault.get_cooldown(user) {
                assert!(request.amount > 0);
                shares += request.shares;
                exiting += request.amount;
            }
        }
        assert_eq!(shares, state.total_shares);
        assert_eq!(exiting, state.total_exiting);
    }

    /********** Chain Helpers ***********/

    /// Advances the ledger by `ledgers`, at 5s a ledger
    pub fn jump(&self, ledgers: u32) {
        self.env.ledger().with_mut(|li| {
            li.sequence_number = li.sequence_number.saturating_add(ledgers);
            li.timestamp = li.timestamp.saturating_add(ledgers as u64 * 5);
        });
    }
}

/// Asserts that a `try_` client call failed with `expected`
pub fn assert_vault_error<T, E>(result: Result<T, Result<Error, E>>, expected: VaultError) {
    match result {
        Err(Ok(error)) => assert_eq!(error, Error::from_contract_error(expected as u32)),
        _ => panic!("expected the call to fail with {:?}", expected),
    }
}
