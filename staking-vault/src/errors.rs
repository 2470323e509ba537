use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VaultError {
    // Configuration
    AlreadyInitialized = 1200,
    NotInitialized = 1201,
    InvalidConfig = 1202,
    NoProposedAdmin = 1203,

    // Amount validation errors
    ZeroAmount = 1210,
    InvalidAmount = 1211,
    InsufficientShares = 1212,
    ZeroSharesMinted = 1213,

    // Arithmetic
    ArithmeticOverflow = 1220,
    DivisionByZero = 1221,

    // Fees
    InsufficientFeeBalance = 1230,

    // Staking
    InsufficientIdleValue = 1240,
    InsufficientStake = 1241,
    ServiceProviderNotFound = 1242,
    TooManyServiceProviders = 1243,

    // Cooldown
    CooldownAlreadyActive = 1250,
    NoCooldownRequest = 1251,
    CooldownNotMature = 1252,

    // External collaborators
    TransferFailed = 1260,
    DelegationFailed = 1261,
    UndelegationFailed = 1262,
    RewardsClaimFailed = 1263,
}
