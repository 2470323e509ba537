mod config;
mod cooldown;
mod exchange_rate;
mod fees;
mod shares;
mod stake_ledger;
mod token;

pub use config::execute_initialize;
pub use cooldown::{execute_cancel_cooldown, execute_cooldown, execute_unstake};
pub use exchange_rate::{shares_for_underlying, underlying_for_shares};
pub use fees::{execute_move_fees, execute_withdraw_fees};
pub use shares::{execute_mint_with_token, execute_transfer};
pub use stake_ledger::{execute_claim_rewards, execute_stake, staked_percentage};

pub(crate) use cooldown::status as cooldown_status;
