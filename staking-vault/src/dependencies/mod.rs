mod claims_manager;
mod delegate_manager;

pub use claims_manager::Client as ClaimsManagerClient;
pub use delegate_manager::Client as DelegateManagerClient;
