pub mod abi;
pub mod address;
pub mod details;
pub mod errors;
pub mod explorer;
pub mod game_state;
pub mod page;
pub mod protocol;
pub mod units;

pub use alloy_primitives::{Address, TxHash, U256};
