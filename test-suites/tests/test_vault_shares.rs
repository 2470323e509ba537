use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, String};
use staking_vault::VaultError;
use test_suites::setup::create_fixture_with_data;
use test_suites::test_fixture::{
    assert_vault_error, TestFixture, DEFAULT_LOCKUP_LEDGERS, DEFAULT_MINT_FEE_BPS,
};
use test_suites::SCALAR_7;

#[test]
fn test_initialize_sets_config_and_metadata() {
    let fixture = TestFixture::create(DEFAULT_MINT_FEE_BPS, DEFAULT_LOCKUP_LEDGERS);

    let config = fixture.vault.get_config();
    assert_eq!(config.token, fixture.token.address);
    assert_eq!(config.delegate_manager, fixture.delegate_manager.address);
    assert_eq!(config.claims_manager, fixture.claims_manager.address);
    assert_eq!(config.mint_fee_bps, DEFAULT_MINT_FEE_BPS);
    assert_eq!(config.unstake_lockup_ledgers, DEFAULT_LOCKUP_LEDGERS);

    assert_eq!(fixture.vault.get_admin(), fixture.admin);
    assert_eq!(
        fixture.vault.name(),
        String::from_str(&fixture.env, "Staked Token")
    );
    assert_eq!(
        fixture.vault.symbol(),
        String::from_str(&fixture.env, "stTKN")
    );
    assert_eq!(fixture.vault.decimals(), fixture.token.decimals());
    assert_eq!(fixture.vault.total_shares(), 0);
    assert_eq!(fixture.vault.total_underlying_value(), 0);
    assert_eq!(fixture.vault.get_current_staked_percentage(), 0);
    assert_eq!(fixture.vault.get_service_providers().len(), 0);
}

#[test]
#[should_panic(expected = "Error(Contract, #1200)")]
fn test_initialize_twice_fails() {
    let fixture = TestFixture::create(DEFAULT_MINT_FEE_BPS, DEFAULT_LOCKUP_LEDGERS);

    fixture.vault.initialize(
        &fixture.admin,
        &String::from_str(&fixture.env, "Other"),
        &String::from_str(&fixture.env, "OTH"),
        &fixture.claims_manager.address,
        &fixture.delegate_manager.address,
        &fixture.token.address,
        &0,
        &0,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #1202)")]
fn test_initialize_with_full_fee_fails() {
    let fixture = TestFixture::create_uninitialized();

    fixture.vault.initialize(
        &fixture.admin,
        &String::from_str(&fixture.env, "Staked Token"),
        &String::from_str(&fixture.env, "stTKN"),
        &fixture.claims_manager.address,
        &fixture.delegate_manager.address,
        &fixture.token.address,
        &10_000,
        &DEFAULT_LOCKUP_LEDGERS,
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #1202)")]
fn test_initialize_with_token_as_collaborator_fails() {
    let fixture = TestFixture::create_uninitialized();

    fixture.vault.initialize(
        &fixture.admin,
        &String::from_str(&fixture.env, "Staked Token"),
        &String::from_str(&fixture.env, "stTKN"),
        &fixture.claims_manager.address,
        &fixture.token.address,
        &fixture.token.address,
        &DEFAULT_MINT_FEE_BPS,
        &DEFAULT_LOCKUP_LEDGERS,
    );
}

#[test]
fn test_operations_before_initialize_fail() {
    let fixture = TestFixture::create_uninitialized();
    let user = &fixture.users[0];

    assert_vault_error(
        fixture.vault.try_mint_with_token(user, &100),
        VaultError::NotInitialized,
    );
    assert_vault_error(
        fixture.vault.try_stake(&fixture.providers[0], &100),
        VaultError::NotInitialized,
    );
    assert_vault_error(
        fixture.vault.try_unstake(user),
        VaultError::NotInitialized,
    );
    assert_vault_error(
        fixture.vault.try_total_underlying_value(),
        VaultError::NotInitialized,
    );
    assert_vault_error(fixture.vault.try_get_config(), VaultError::NotInitialized);

    // share and cooldown paths read no config of their own but still refuse
    assert_vault_error(
        fixture.vault.try_transfer(user, &fixture.users[1], &100),
        VaultError::NotInitialized,
    );
    assert_vault_error(
        fixture.vault.try_cooldown(user, &fixture.providers[0], &0),
        VaultError::NotInitialized,
    );
    assert_vault_error(
        fixture.vault.try_cancel_cooldown(user),
        VaultError::NotInitialized,
    );
    assert_vault_error(fixture.vault.try_accept_admin(), VaultError::NotInitialized);
    assert_vault_error(fixture.vault.try_balance(user), VaultError::NotInitialized);
    assert_vault_error(
        fixture.vault.try_get_staked_amount(&fixture.providers[0]),
        VaultError::NotInitialized,
    );
    assert_vault_error(
        fixture.vault.try_get_service_providers(),
        VaultError::NotInitialized,
    );
    assert_vault_error(
        fixture.vault.try_get_cooldown(user),
        VaultError::NotInitialized,
    );
    assert_vault_error(
        fixture.vault.try_get_cooldown_status(user),
        VaultError::NotInitialized,
    );
}

#[test]
fn test_second_mint_ignores_first_mint_fee() {
    let fixture = TestFixture::create(100, DEFAULT_LOCKUP_LEDGERS);

    fixture.vault.mint_with_token(&fixture.users[0], &1_000);
    let rate = fixture.rate();
    assert_eq!(rate, SCALAR_7);

    // 1% of 300 is taken, the other 297 mint at the genesis rate
    let shares = fixture.vault.mint_with_token(&fixture.users[1], &300);
    assert_eq!(shares, 297);
    assert_eq!(fixture.rate(), rate);
    assert_eq!(fixture.vault.get_withdrawable_fees(), 13);
    fixture.assert_invariants();
}

#[test]
fn test_mint_round_trip_never_exceeds_net_deposit() {
    let fixture = create_fixture_with_data();
    let provider = &fixture.providers[0];
    let user = &fixture.users[2];

    fixture.fund_rewards(provider, 777 * SCALAR_7 + 13);
    fixture.vault.claim_rewards(provider);

    for amount in [1_001, 12_345_678, 99 * SCALAR_7 + 7] {
        let expected_shares = fixture.vault.shares_for_underlying(&(amount - amount / 100));
        let balance_before = fixture.vault.balance(user);
        let shares = fixture.vault.mint_with_token(user, &amount);
        assert_eq!(shares, expected_shares);
        assert_eq!(fixture.vault.balance(user), balance_before + shares);

        let value = fixture.vault.underlying_for_shares(&shares);
        assert!(value <= amount - amount / 100);
    }
    fixture.assert_invariants();
}

#[test]
fn test_mint_worth_less_than_one_share_fails() {
    let fixture = TestFixture::create(0, DEFAULT_LOCKUP_LEDGERS);
    let provider = &fixture.providers[0];

    fixture.vault.mint_with_token(&fixture.users[0], &1);
    fixture.vault.stake(provider, &1);
    fixture.fund_rewards(provider, 1_000);
    fixture.vault.claim_rewards(provider);

    // one share is now worth 1_001 units
    let vault_balance = fixture.token.balance(&fixture.vault.address);
    assert_vault_error(
        fixture.vault.try_mint_with_token(&fixture.users[1], &1_000),
        VaultError::ZeroSharesMinted,
    );
    assert_eq!(fixture.token.balance(&fixture.vault.address), vault_balance);
    assert_eq!(fixture.vault.balance(&fixture.users[1]), 0);

    assert_eq!(
        fixture.vault.mint_with_token(&fixture.users[1], &2_002),
        2
    );
    fixture.assert_invariants();
}

#[test]
#[should_panic(expected = "Error(Contract, #1210)")]
fn test_mint_zero_fails() {
    let fixture = TestFixture::create(DEFAULT_MINT_FEE_BPS, DEFAULT_LOCKUP_LEDGERS);
    fixture.vault.mint_with_token(&fixture.users[0], &0);
}

#[test]
fn test_mint_without_tokens_fails() {
    let fixture = TestFixture::create(DEFAULT_MINT_FEE_BPS, DEFAULT_LOCKUP_LEDGERS);
    let user = Address::generate(&fixture.env);

    assert_vault_error(
        fixture.vault.try_mint_with_token(&user, &(10 * SCALAR_7)),
        VaultError::TransferFailed,
    );
    assert_eq!(fixture.vault.total_shares(), 0);
    assert_eq!(fixture.vault.get_withdrawable_fees(), 0);
}

#[test]
fn test_transfer_shares() {
    let fixture = create_fixture_with_data();
    let from = &fixture.users[0];
    let to = &fixture.users[2];
    let from_before = fixture.vault.balance(from);

    fixture.vault.transfer(from, to, &(1_000 * SCALAR_7));

    assert_eq!(fixture.vault.balance(from), from_before - 1_000 * SCALAR_7);
    assert_eq!(fixture.vault.balance(to), 1_000 * SCALAR_7);
    assert_eq!(fixture.vault.total_shares(), 14_850 * SCALAR_7);
    fixture.assert_invariants();
}

#[test]
fn test_locked_shares_cannot_be_transferred() {
    let fixture = create_fixture_with_data();
    let user = &fixture.users[1];
    let balance = fixture.vault.balance(user);

    let request = fixture
        .vault
        .cooldown(user, &fixture.providers[0], &(1_000 * SCALAR_7));
    assert_eq!(fixture.vault.balance(user), balance - request.shares);

    assert_vault_error(
        fixture.vault.try_transfer(user, &fixture.users[2], &balance),
        VaultError::InsufficientShares,
    );
    fixture
        .vault
        .transfer(user, &fixture.users[2], &(balance - request.shares));
    assert_eq!(fixture.vault.balance(user), 0);
    fixture.assert_invariants();
}

#[test]
fn test_admin_handover() {
    let fixture = TestFixture::create(DEFAULT_MINT_FEE_BPS, DEFAULT_LOCKUP_LEDGERS);
    let new_admin = Address::generate(&fixture.env);

    assert_vault_error(fixture.vault.try_accept_admin(), VaultError::NoProposedAdmin);

    fixture.vault.propose_admin(&new_admin);
    assert_eq!(fixture.vault.get_admin(), fixture.admin);

    fixture.vault.accept_admin();
    assert_eq!(fixture.vault.get_admin(), new_admin);
    assert_vault_error(fixture.vault.try_accept_admin(), VaultError::NoProposedAdmin);
}
