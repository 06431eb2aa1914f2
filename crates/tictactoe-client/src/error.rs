use thiserror::Error;
use tictactoe_core::abi::AbiError;
use tictactoe_core::game_state::UnknownStatus;
use tictactoe_core::protocol::CellOutOfBounds;

use crate::transport::TransportError;

/// Anything that can go wrong talking to the explore API or the chain.
///
/// The `Display` text is what the page shows to the user.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error(transparent)]
    Abi(#[from] AbiError),

    #[error(transparent)]
    Status(#[from] UnknownStatus),

    #[error(transparent)]
    Cell(#[from] CellOutOfBounds),

    #[error("transaction {0} reverted")]
    Reverted(String),

    #[error("transaction {0} was not mined in time")]
    ReceiptTimeout(String),
}
