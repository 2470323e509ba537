pub mod setup;
pub mod test_fixture;
pub mod token;

pub const SCALAR_7: i128 = 1_0000000;
