//! Contract interfaces of the game and its stake token, plus decoding of
//! raw JSON-RPC results into the domain snapshots.

use alloy_primitives::{Address, B256, Bytes, TxHash, U64, U256};
use alloy_sol_types::{SolCall, SolEvent, SolType, SolValue, sol, sol_data};
use serde::Deserialize;
use thiserror::Error;

use crate::game_state::{MoveLogEntry, Side};
use crate::protocol::GameAction;

sol! {
    /// Single tic-tac-toe match with an ERC-20 stake.
    interface ITicTacToe {
        function status() external view returns (uint8);
        function currentTurn() external view returns (uint8);
        function player2() external view returns (address);
        function lastStepTime() external view returns (uint256);

        function play() external;
        function cancel() external;
        function timeout() external;
        function step(uint8 row, uint8 col) external;

        event GameStep(uint8 side, uint8 row, uint8 col);
    }

    interface IERC20 {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function allowance(address owner, address spender) external view returns (uint256);
        function approve(address spender, uint256 amount) external returns (bool);
    }
}

#[derive(Debug, Error)]
pub enum AbiError {
    #[error("log is not a GameStep event")]
    NotGameStep,
    #[error("log has no block number yet")]
    Pending,
    #[error("value {0} does not fit the expected integer width")]
    Overflow(U256),
    #[error("ABI decode failed: {0}")]
    Decode(#[from] alloy_sol_types::Error),
}

/// `topic0` of every `GameStep` log.
pub fn game_step_topic() -> B256 {
    ITicTacToe::GameStep::SIGNATURE_HASH
}

// ---------------------------------------------------------------------------
// Calldata
// ---------------------------------------------------------------------------

pub fn status_calldata() -> Bytes {
    ITicTacToe::statusCall {}.abi_encode().into()
}

pub fn current_turn_calldata() -> Bytes {
    ITicTacToe::currentTurnCall {}.abi_encode().into()
}

pub fn player2_calldata() -> Bytes {
    ITicTacToe::player2Call {}.abi_encode().into()
}

pub fn last_step_time_calldata() -> Bytes {
    ITicTacToe::lastStepTimeCall {}.abi_encode().into()
}

pub fn token_name_calldata() -> Bytes {
    IERC20::nameCall {}.abi_encode().into()
}

pub fn token_symbol_calldata() -> Bytes {
    IERC20::symbolCall {}.abi_encode().into()
}

pub fn token_decimals_calldata() -> Bytes {
    IERC20::decimalsCall {}.abi_encode().into()
}

pub fn allowance_calldata(owner: Address, spender: Address) -> Bytes {
    IERC20::allowanceCall { owner, spender }.abi_encode().into()
}

/// Encode the transaction data for `action`. `game` is the approval spender.
pub fn action_calldata(action: &GameAction, game: Address) -> Bytes {
    let data = match *action {
        GameAction::Play => ITicTacToe::playCall {}.abi_encode(),
        GameAction::Cancel => ITicTacToe::cancelCall {}.abi_encode(),
        GameAction::Timeout => ITicTacToe::timeoutCall {}.abi_encode(),
        GameAction::Step { row, col } => ITicTacToe::stepCall { row, col }.abi_encode(),
        GameAction::Approve { amount } => IERC20::approveCall {
            spender: game,
            amount,
        }
        .abi_encode(),
    };
    data.into()
}

// ---------------------------------------------------------------------------
// Return values
// ---------------------------------------------------------------------------

/// Decode a `uint8` return (status, turn, decimals).
pub fn decode_u8(data: &[u8]) -> Result<u8, AbiError> {
    Ok(<sol_data::Uint<8> as SolType>::abi_decode(data)?)
}

pub fn decode_u256(data: &[u8]) -> Result<U256, AbiError> {
    Ok(U256::abi_decode(data)?)
}

/// Decode a `uint256` that must fit in 64 bits (timestamps, block numbers).
pub fn decode_u64(data: &[u8]) -> Result<u64, AbiError> {
    let value = decode_u256(data)?;
    u64::try_from(value).map_err(|_| AbiError::Overflow(value))
}

pub fn decode_address(data: &[u8]) -> Result<Address, AbiError> {
    Ok(Address::abi_decode(data)?)
}

pub fn decode_string(data: &[u8]) -> Result<String, AbiError> {
    Ok(String::abi_decode(data)?)
}

// ---------------------------------------------------------------------------
// Logs
// ---------------------------------------------------------------------------

/// A log object as returned by `eth_getLogs`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcLog {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
    pub block_number: Option<U64>,
    pub transaction_hash: Option<TxHash>,
    pub log_index: Option<U64>,
    #[serde(default)]
    pub removed: bool,
}

/// Decode one `GameStep` log into a move-table row.
pub fn decode_step_log(log: &RpcLog) -> Result<MoveLogEntry, AbiError> {
    if log.topics.first() != Some(&game_step_topic()) {
        return Err(AbiError::NotGameStep);
    }
    let (Some(block_number), Some(transaction_hash)) = (log.block_number, log.transaction_hash)
    else {
        return Err(AbiError::Pending);
    };

    let event = ITicTacToe::GameStep::decode_raw_log(log.topics.iter().copied(), &log.data)?;
    Ok(MoveLogEntry {
        block_number: block_number.to::<u64>(),
        transaction_hash,
        log_index: log.log_index.map(|i| i.to::<u64>()).unwrap_or_default(),
        side: Side::from_code(event.side),
        row: event.row,
        col: event.col,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    type StepParams = (sol_data::Uint<8>, sol_data::Uint<8>, sol_data::Uint<8>);

    fn step_data(side: u8, row: u8, col: u8) -> Vec<u8> {
        StepParams::abi_encode_params(&(side, row, col))
    }

    fn step_log(side: u8, row: u8, col: u8, block: u64) -> RpcLog {
        RpcLog {
            address: Address::repeat_byte(0x01),
            topics: vec![game_step_topic()],
            data: step_data(side, row, col).into(),
            block_number: Some(U64::from(block)),
            transaction_hash: Some(TxHash::repeat_byte(0x0f)),
            log_index: Some(U64::from(3u8)),
            removed: false,
        }
    }

    #[test]
    fn decodes_game_step() {
        let entry = decode_step_log(&step_log(2, 1, 0, 77)).unwrap();
        assert_eq!(entry.side, Side::Player2);
        assert_eq!((entry.row, entry.col), (1, 0));
        assert_eq!(entry.block_number, 77);
        assert_eq!(entry.log_index, 3);
        assert_eq!(entry.cell(), "1 x 0");
    }

    #[test]
    fn rejects_foreign_and_pending_logs() {
        let mut foreign = step_log(1, 0, 0, 1);
        foreign.topics = vec![B256::repeat_byte(0x99)];
        assert!(matches!(decode_step_log(&foreign), Err(AbiError::NotGameStep)));

        let mut pending = step_log(1, 0, 0, 1);
        pending.block_number = None;
        assert!(matches!(decode_step_log(&pending), Err(AbiError::Pending)));
    }

    #[test]
    fn parses_rpc_log_json() {
        let data = step_data(1, 2, 2);
        let json = serde_json::json!({
            "address": "0x1111111111111111111111111111111111111111",
            "topics": [game_step_topic()],
            "data": Bytes::from(data),
            "blockNumber": "0x10",
            "transactionHash": TxHash::repeat_byte(0xaa),
            "logIndex": "0x0",
            "removed": false
        });
        let log: RpcLog = serde_json::from_value(json).unwrap();
        let entry = decode_step_log(&log).unwrap();
        assert_eq!(entry.block_number, 16);
        assert_eq!(entry.side, Side::Player1);
    }

    #[test]
    fn decodes_return_values() {
        assert_eq!(decode_u8(&<sol_data::Uint<8> as SolType>::abi_encode(&3u8)).unwrap(), 3);
        assert_eq!(
            decode_u64(&U256::from(1_700_000_000u64).abi_encode()).unwrap(),
            1_700_000_000
        );
        assert!(matches!(decode_u64(&U256::MAX.abi_encode()), Err(AbiError::Overflow(_))));
        assert_eq!(decode_string(&"Tether".to_string().abi_encode()).unwrap(), "Tether");
        let who = Address::repeat_byte(0x42);
        assert_eq!(decode_address(&who.abi_encode()).unwrap(), who);
    }

    #[test]
    fn action_calldata_selectors() {
        let game = Address::repeat_byte(0x07);
        let step = action_calldata(&GameAction::Step { row: 2, col: 1 }, game);
        assert_eq!(&step[..4], &ITicTacToe::stepCall::SELECTOR);
        assert_eq!(step.len(), 4 + 64);

        let approve = action_calldata(&GameAction::Approve { amount: U256::from(5u8) }, game);
        assert_eq!(&approve[..4], &IERC20::approveCall::SELECTOR);
    }
}
