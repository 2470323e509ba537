use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;
use staking_vault::VaultError;
use test_suites::setup::create_fixture_with_data;
use test_suites::test_fixture::{assert_vault_error, TestFixture, DEFAULT_LOCKUP_LEDGERS};
use test_suites::SCALAR_7;

#[test]
fn test_withdraw_fees_empties_withdrawable_pool() {
    let fixture = create_fixture_with_data();
    let treasury = Address::generate(&fixture.env);

    assert_eq!(fixture.vault.withdraw_fees(&treasury), 150 * SCALAR_7);
    assert_eq!(fixture.token.balance(&treasury), 150 * SCALAR_7);
    assert_eq!(fixture.vault.get_withdrawable_fees(), 0);
    assert_eq!(fixture.vault.total_underlying_value(), 14_850 * SCALAR_7);
    fixture.assert_invariants();

    assert_eq!(fixture.vault.withdraw_fees(&treasury), 0);
    assert_eq!(fixture.token.balance(&treasury), 150 * SCALAR_7);
}

#[test]
fn test_move_fees_keeps_holder_value() {
    let fixture = create_fixture_with_data();
    let holder_value = fixture.read_state().holder_value();
    let rate = fixture.rate();

    fixture.vault.move_fees_to_staked(&(100 * SCALAR_7));
    assert_eq!(fixture.vault.get_withdrawable_fees(), 50 * SCALAR_7);
    assert_eq!(fixture.vault.get_staked_fees(), 100 * SCALAR_7);
    assert_eq!(fixture.vault.total_underlying_value(), 14_950 * SCALAR_7);
    assert_eq!(fixture.read_state().holder_value(), holder_value);
    assert_eq!(fixture.rate(), rate);
    fixture.assert_invariants();

    fixture.vault.move_fees_to_withdrawable(&(40 * SCALAR_7));
    assert_eq!(fixture.vault.get_withdrawable_fees(), 90 * SCALAR_7);
    assert_eq!(fixture.vault.get_staked_fees(), 60 * SCALAR_7);
    assert_eq!(fixture.vault.total_underlying_value(), 14_910 * SCALAR_7);
    assert_eq!(fixture.read_state().holder_value(), holder_value);
    fixture.assert_invariants();

    // withdrawn fees leave holder value alone as well
    fixture.vault.withdraw_fees(&fixture.admin);
    assert_eq!(fixture.read_state().holder_value(), holder_value);
    fixture.assert_invariants();
}

#[test]
fn test_move_fees_beyond_pools_fails() {
    let fixture = create_fixture_with_data();

    assert_vault_error(
        fixture.vault.try_move_fees_to_staked(&(150 * SCALAR_7 + 1)),
        VaultError::InsufficientFeeBalance,
    );
    assert_vault_error(
        fixture.vault.try_move_fees_to_withdrawable(&1),
        VaultError::InsufficientFeeBalance,
    );
    assert_vault_error(
        fixture.vault.try_move_fees_to_staked(&0),
        VaultError::ZeroAmount,
    );
}

#[test]
fn test_move_fees_to_staked_requires_stake() {
    let fixture = TestFixture::create(100, DEFAULT_LOCKUP_LEDGERS);
    fixture.vault.mint_with_token(&fixture.users[0], &10_000);
    assert_eq!(fixture.vault.get_withdrawable_fees(), 100);

    assert_vault_error(
        fixture.vault.try_move_fees_to_staked(&1),
        VaultError::InsufficientStake,
    );

    fixture.vault.stake(&fixture.providers[0], &60);
    assert_vault_error(
        fixture.vault.try_move_fees_to_staked(&61),
        VaultError::InsufficientStake,
    );
    fixture.vault.move_fees_to_staked(&60);
    assert_eq!(fixture.vault.get_staked_fees(), 60);
    fixture.assert_invariants();
}

#[test]
fn test_move_fees_to_withdrawable_requires_idle_value() {
    let fixture = TestFixture::create(100, DEFAULT_LOCKUP_LEDGERS);
    let provider = &fixture.providers[0];

    fixture.vault.mint_with_token(&fixture.users[0], &10_000);
    let idle = fixture.vault.get_idle_amount();
    fixture.vault.stake(provider, &idle);
    fixture.fund_rewards(provider, 5_000);
    fixture.vault.claim_rewards(provider);
    assert_eq!(fixture.vault.get_staked_fees(), 50);
    assert_eq!(fixture.vault.get_idle_amount(), 0);

    assert_vault_error(
        fixture.vault.try_move_fees_to_withdrawable(&50),
        VaultError::InsufficientIdleValue,
    );

    // idle value from a new mint backs the move
    fixture.vault.mint_with_token(&fixture.users[1], &1_000);
    fixture.vault.move_fees_to_withdrawable(&50);
    assert_eq!(fixture.vault.get_staked_fees(), 0);
    assert_eq!(fixture.vault.get_withdrawable_fees(), 160);
    fixture.assert_invariants();
}

#[test]
fn test_staked_fees_earn_rewards() {
    let liquid = TestFixture::create(1_000, DEFAULT_LOCKUP_LEDGERS);
    let staked = TestFixture::create(1_000, DEFAULT_LOCKUP_LEDGERS);

    for fixture in [&liquid, &staked] {
        fixture.vault.mint_with_token(&fixture.users[0], &1_000);
        fixture.vault.stake(&fixture.providers[0], &900);
    }
    staked.vault.move_fees_to_staked(&100);
    assert_eq!(staked.vault.get_staked_fees(), 100);
    assert_eq!(
        staked.read_state().holder_value(),
        liquid.read_state().holder_value()
    );

    for fixture in [&liquid, &staked] {
        fixture.fund_rewards(&fixture.providers[0], 100);
        fixture.vault.claim_rewards(&fixture.providers[0]);
        fixture.assert_invariants();
    }

    // only the 10% fee on the reward
    assert_eq!(liquid.vault.get_staked_fees(), 10);
    assert_eq!(liquid.vault.get_withdrawable_fees(), 100);
    assert_eq!(liquid.read_state().holder_value(), 990);

    // 100 of the 900 delegated earn 11, the fee is 10% of the other 89
    assert_eq!(staked.vault.get_staked_fees(), 100 + 11 + 8);
    assert_eq!(staked.vault.get_withdrawable_fees(), 0);
    assert_eq!(staked.read_state().holder_value(), 981);
}
