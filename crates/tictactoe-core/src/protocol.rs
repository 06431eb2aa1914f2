//! Wire types for the explore API and the actions a player can submit.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Game configuration fixed at deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameParams {
    /// Stake per player in the token's smallest unit.
    #[serde(deserialize_with = "deserialize_amount")]
    pub coins: U256,
    /// Seconds a player may take before the opponent can claim a timeout.
    pub timeout: u64,
    /// Board edge length.
    pub size: u8,
}

/// Indexed metadata for one game contract, as returned by the explore API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMetadata {
    pub address: Address,
    pub factory_address: Address,
    pub token_address: Address,
    pub creator_address: Address,
    pub params: GameParams,
}

/// Body of `GET /api/explore/{chainId}/details/{gameAddress}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDetailsResponse {
    pub game: GameMetadata,
}

/// Path of the details endpoint for one game.
pub fn details_path(chain_id: u64, game: &Address) -> String {
    format!("/api/explore/{chain_id}/details/{}", game.to_checksum(None))
}

/// Accept a token amount as a decimal string, a `0x` hex string, or a JSON number.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(u64),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(U256::from(n)),
        Raw::Text(s) => U256::from_str(s.trim()).map_err(serde::de::Error::custom),
    }
}

/// A transaction the current account can send to the game (or its token).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Join a waiting game as player 2.
    Play,
    /// Creator withdraws a game nobody joined.
    Cancel,
    /// Creator claims the game after the opponent ran out of time.
    Timeout,
    /// Place a mark on the board.
    Step { row: u8, col: u8 },
    /// Let the game contract pull the stake from the token.
    Approve { amount: U256 },
}

impl GameAction {
    /// Human-readable label for buttons and logs.
    pub fn label(&self) -> &'static str {
        match self {
            GameAction::Play => "Play",
            GameAction::Cancel => "Cancel",
            GameAction::Timeout => "Timeout",
            GameAction::Step { .. } => "Step",
            GameAction::Approve { .. } => "Approve",
        }
    }

    /// Reject a step outside a `size` x `size` board. Other actions always pass.
    pub fn check_cell(&self, size: u8) -> Result<(), CellOutOfBounds> {
        match *self {
            GameAction::Step { row, col } if row >= size || col >= size => {
                Err(CellOutOfBounds { row, col, size })
            }
            _ => Ok(()),
        }
    }

    /// `true` if the transaction goes to the token rather than the game.
    pub fn targets_token(&self) -> bool {
        matches!(self, GameAction::Approve { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cell {row} x {col} is outside the {size} x {size} board")]
pub struct CellOutOfBounds {
    pub row: u8,
    pub col: u8,
    pub size: u8,
}

impl fmt::Display for GameAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameAction::Step { row, col } => write!(f, "Step {row} x {col}"),
            other => f.write_str(other.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"{
        "game": {
            "address": "0x1111111111111111111111111111111111111111",
            "factoryAddress": "0x2222222222222222222222222222222222222222",
            "tokenAddress": "0x3333333333333333333333333333333333333333",
            "creatorAddress": "0x4444444444444444444444444444444444444444",
            "params": { "coins": "1500000000000000000", "timeout": 300, "size": 3 }
        }
    }"#;

    #[test]
    fn parses_details_body() {
        let resp: GameDetailsResponse = serde_json::from_str(BODY).unwrap();
        let game = resp.game;
        assert_eq!(game.creator_address, Address::repeat_byte(0x44));
        assert_eq!(game.params.coins, U256::from(1_500_000_000_000_000_000u64));
        assert_eq!(game.params.timeout, 300);
        assert_eq!(game.params.size, 3);
    }

    #[test]
    fn coins_accepts_number_and_hex() {
        let numeric = BODY.replace("\"1500000000000000000\"", "42");
        let resp: GameDetailsResponse = serde_json::from_str(&numeric).unwrap();
        assert_eq!(resp.game.params.coins, U256::from(42u8));

        let hex = BODY.replace("\"1500000000000000000\"", "\"0x2a\"");
        let resp: GameDetailsResponse = serde_json::from_str(&hex).unwrap();
        assert_eq!(resp.game.params.coins, U256::from(42u8));
    }

    #[test]
    fn details_path_uses_checksummed_address() {
        let game = Address::repeat_byte(0xab);
        assert_eq!(
            details_path(5, &game),
            format!("/api/explore/5/details/{}", game.to_checksum(None))
        );
    }

    #[test]
    fn action_display() {
        assert_eq!(GameAction::Step { row: 1, col: 2 }.to_string(), "Step 1 x 2");
        assert_eq!(GameAction::Cancel.to_string(), "Cancel");
        assert!(GameAction::Approve { amount: U256::ZERO }.targets_token());
    }

    #[test]
    fn step_bounds() {
        assert!(GameAction::Step { row: 2, col: 2 }.check_cell(3).is_ok());
        let err = GameAction::Step { row: 3, col: 0 }.check_cell(3).unwrap_err();
        assert_eq!(err.to_string(), "cell 3 x 0 is outside the 3 x 3 board");
        assert!(GameAction::Play.check_cell(0).is_ok());
    }
}
