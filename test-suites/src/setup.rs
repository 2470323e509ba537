use crate::test_fixture::{TestFixture, DEFAULT_LOCKUP_LEDGERS, DEFAULT_MINT_FEE_BPS};
use crate::SCALAR_7;

/// Creates a vault where two holders have minted and part of the value is
/// delegated to each provider
///
/// - users[0] mints 10_000 tokens, users[1] mints 5_000 tokens
/// - 6_000 tokens are staked with providers[0], 3_000 with providers[1]
pub fn create_fixture_with_data<'a>() -> TestFixture<'a> {
    let fixture = TestFixture::create(DEFAULT_MINT_FEE_BPS, DEFAULT_LOCKUP_LEDGERS);

    fixture
        .vault
        .mint_with_token(&fixture.users[0], &(10_000 * SCALAR_7));
    fixture
        .vault
        .mint_with_token(&fixture.users[1], &(5_000 * SCALAR_7));

    fixture
        .vault
        .stake(&fixture.providers[0], &(6_000 * SCALAR_7));
    fixture
        .vault
        .stake(&fixture.providers[1], &(3_000 * SCALAR_7));

    fixture
}
