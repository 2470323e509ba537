#![no_std]

mod constants;
mod errors;
mod events;
mod math;
pub mod storage;
mod contract;
mod vault;

mod types;
mod dependencies;
pub mod testutils;

pub use constants::{BPS_DENOMINATOR, MAX_SERVICE_PROVIDERS};
pub use contract::*;
pub use errors::VaultError;
pub use types::*;
