//! Snapshots of on-chain state the details page renders.
//!
//! Every type here is a read-only view fetched from a collaborator (the
//! game contract, the token, the chain clock or the step-event log). None
//! of them are mutated locally; a refresh replaces the whole snapshot.

use std::fmt;

use alloy_primitives::{Address, TxHash, U256};
use thiserror::Error;

/// Lifecycle of a game contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Created, waiting for a second player.
    Wait,
    /// Both players joined; moves are being made.
    InProgress,
    Finished,
    Canceled,
}

/// The contract reported a status code outside the known range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown game status code {0}")]
pub struct UnknownStatus(pub u8);

impl TryFrom<u8> for GameStatus {
    type Error = UnknownStatus;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(GameStatus::Wait),
            1 => Ok(GameStatus::InProgress),
            2 => Ok(GameStatus::Finished),
            3 => Ok(GameStatus::Canceled),
            other => Err(UnknownStatus(other)),
        }
    }
}

impl GameStatus {
    pub fn code(self) -> u8 {
        match self {
            GameStatus::Wait => 0,
            GameStatus::InProgress => 1,
            GameStatus::Finished => 2,
            GameStatus::Canceled => 3,
        }
    }

    /// Label shown in the status row.
    pub fn label(self) -> &'static str {
        match self {
            GameStatus::Wait => "Wait player",
            GameStatus::InProgress => "Wait step",
            GameStatus::Finished => "Finished",
            GameStatus::Canceled => "Canceled",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which player acted (or whose turn it is).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    None,
    Player1,
    Player2,
}

impl Side {
    /// Map the contract's side code; anything unexpected is `None`.
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Side::Player1,
            2 => Side::Player2,
            _ => Side::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::None => "NONE",
            Side::Player1 => "Player 1",
            Side::Player2 => "Player 2",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Status fields read from the game contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStatusSnapshot {
    pub status: GameStatus,
    pub current_turn: Side,
    /// Zero address while nobody has joined.
    pub player2: Address,
    /// Unix seconds of the last move (or of the join).
    pub last_step_time: u64,
}

/// Factory-level context. `current_time` is the latest block timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactoryState {
    pub address: Address,
    pub current_time: u64,
}

/// ERC-20 metadata of the stake token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenData {
    pub address: Address,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    /// Amount the current account has approved for the game contract.
    pub allowance: U256,
}

/// One decoded `GameStep` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveLogEntry {
    pub block_number: u64,
    pub transaction_hash: TxHash,
    pub log_index: u64,
    pub side: Side,
    pub row: u8,
    pub col: u8,
}

impl MoveLogEntry {
    /// Cell text for the move table.
    pub fn cell(&self) -> String {
        format!("{} x {}", self.row, self.col)
    }
}
