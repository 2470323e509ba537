// Fee precision
pub const BPS_DENOMINATOR: i128 = 10_000; // 100% in basis points

// Limits
pub const MAX_SERVICE_PROVIDERS: u32 = 20; // Max providers the vault delegates to
