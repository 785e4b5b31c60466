pub mod admin;
pub mod contract;
pub mod payout;
pub mod phase;
pub mod state;
pub mod validate;
