//! In-memory transports and sinks for unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use alloy_primitives::{Address, Bytes, TxHash, U64, U256};
use alloy_sol_types::{SolType, SolValue, sol_data};
use serde_json::{Value, json};
use tictactoe_core::abi;
use tictactoe_core::errors::{Collaborator, CollaboratorErrors};
use tictactoe_core::game_state::{FactoryState, GameStatusSnapshot, MoveLogEntry, TokenData};
use tictactoe_core::protocol::{GameDetailsResponse, GameMetadata};

use crate::session::{DetailsSink, Notice};
use crate::transport::{HttpTransport, RpcTransport, TransportError};

type StepParams = (sol_data::Uint<8>, sol_data::Uint<8>, sol_data::Uint<8>);

/// ABI word of a `uint8` return value.
fn uint8_word(value: u8) -> Vec<u8> {
    <sol_data::Uint<8> as SolType>::abi_encode(&value)
}

pub fn details_body() -> String {
    json!({
        "game": {
            "address": Address::repeat_byte(0x11),
            "factoryAddress": Address::repeat_byte(0x22),
            "tokenAddress": Address::repeat_byte(0x33),
            "creatorAddress": Address::repeat_byte(0x44),
            "params": { "coins": "1000000000000000000", "timeout": 300, "size": 3 }
        }
    })
    .to_string()
}

pub fn metadata() -> GameMetadata {
    serde_json::from_str::<GameDetailsResponse>(&details_body())
        .unwrap()
        .game
}

// ---------------------------------------------------------------------------
// HTTP
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct FakeHttp {
    response: Result<String, TransportError>,
    requests: Rc<RefCell<Vec<String>>>,
}

impl FakeHttp {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            response: Ok(body.into()),
            requests: Rc::default(),
        }
    }

    pub fn failing(err: TransportError) -> Self {
        Self {
            response: Err(err),
            requests: Rc::default(),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl HttpTransport for FakeHttp {
    async fn get(&self, url: &str) -> Result<String, TransportError> {
        self.requests.borrow_mut().push(url.to_string());
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// JSON-RPC
// ---------------------------------------------------------------------------

pub struct FakeChainState {
    pub status: u8,
    pub current_turn: u8,
    pub player2: Address,
    pub last_step_time: u64,
    pub timestamp: u64,
    pub block_number: u64,
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub allowance: U256,
    pub logs: Vec<Value>,
    pub calls: Vec<String>,
    pub sent: Vec<(Address, Bytes)>,
    pub fail_method: Option<&'static str>,
    pub revert_all: bool,
}

impl Default for FakeChainState {
    fn default() -> Self {
        Self {
            status: 0,
            current_turn: 1,
            player2: Address::ZERO,
            last_step_time: 0,
            timestamp: 1_000,
            block_number: 100,
            name: "TicTacToe Token".into(),
            symbol: "TTT".into(),
            decimals: 18,
            allowance: U256::ZERO,
            logs: Vec::new(),
            calls: Vec::new(),
            sent: Vec::new(),
            fail_method: None,
            revert_all: false,
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeRpc {
    state: Rc<RefCell<FakeChainState>>,
}

impl FakeRpc {
    pub fn with<T>(&self, f: impl FnOnce(&mut FakeChainState) -> T) -> T {
        f(&mut self.state.borrow_mut())
    }

    pub fn push_step(&self, block: u64, side: u8, row: u8, col: u8) {
        let log = json!({
            "address": Address::repeat_byte(0x11),
            "topics": [abi::game_step_topic()],
            "data": Bytes::from(StepParams::abi_encode_params(&(side, row, col))),
            "blockNumber": U64::from(block),
            "transactionHash": TxHash::repeat_byte(block as u8),
            "logIndex": U64::from(0u8),
            "removed": false,
        });
        self.with(|s| s.logs.push(log));
    }

    fn eth_call(state: &FakeChainState, params: &Value) -> Result<Value, TransportError> {
        let data: Bytes = serde_json::from_value(params[0]["data"].clone())
            .map_err(|e| TransportError::Io(e.to_string()))?;
        let selector = &data[..4];
        let is = |calldata: Bytes| &calldata[..4] == selector;

        let encoded = if is(abi::status_calldata()) {
            uint8_word(state.status)
        } else if is(abi::current_turn_calldata()) {
            uint8_word(state.current_turn)
        } else if is(abi::player2_calldata()) {
            state.player2.abi_encode()
        } else if is(abi::last_step_time_calldata()) {
            U256::from(state.last_step_time).abi_encode()
        } else if is(abi::token_name_calldata()) {
            state.name.abi_encode()
        } else if is(abi::token_symbol_calldata()) {
            state.symbol.abi_encode()
        } else if is(abi::token_decimals_calldata()) {
            uint8_word(state.decimals)
        } else if is(abi::allowance_calldata(Address::ZERO, Address::ZERO)) {
            state.allowance.abi_encode()
        } else {
            return Err(TransportError::Rpc {
                code: -32000,
                message: "execution reverted".into(),
            });
        };
        Ok(json!(Bytes::from(encoded)))
    }
}

impl RpcTransport for FakeRpc {
    async fn request(&self, method: &str, params: Value) -> Result<Value, TransportError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(method.to_string());
        if state.fail_method == Some(method) {
            return Err(TransportError::Io(format!("{method} unavailable")));
        }

        match method {
            "eth_getBlockByNumber" => Ok(json!({ "timestamp": U64::from(state.timestamp) })),
            "eth_call" => Self::eth_call(&state, &params),
            "eth_getLogs" => {
                let from: U64 = serde_json::from_value(params[0]["fromBlock"].clone())
                    .map_err(|e| TransportError::Io(e.to_string()))?;
                let logs: Vec<Value> = state
                    .logs
                    .iter()
                    .filter(|log| {
                        serde_json::from_value::<U64>(log["blockNumber"].clone())
                            .is_ok_and(|b| b >= from)
                    })
                    .cloned()
                    .collect();
                Ok(Value::Array(logs))
            }
            "eth_sendTransaction" => {
                let to: Address = serde_json::from_value(params[0]["to"].clone())
                    .map_err(|e| TransportError::Io(e.to_string()))?;
                let data: Bytes = serde_json::from_value(params[0]["data"].clone())
                    .map_err(|e| TransportError::Io(e.to_string()))?;
                state.sent.push((to, data));
                Ok(json!(TxHash::repeat_byte(state.sent.len() as u8)))
            }
            "eth_getTransactionReceipt" => {
                let status = if state.revert_all { 0u8 } else { 1u8 };
                Ok(json!({
                    "blockNumber": U64::from(state.block_number),
                    "status": U64::from(status),
                }))
            }
            other => Err(TransportError::Rpc {
                code: -32601,
                message: format!("method {other} not found"),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Sink
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingSink {
    pub metadata: Option<GameMetadata>,
    pub factory: Option<FactoryState>,
    pub status: Option<GameStatusSnapshot>,
    pub token: Option<TokenData>,
    pub moves: Option<Vec<MoveLogEntry>>,
    pub errors: CollaboratorErrors,
    pub notices: Vec<Notice>,
    pub busy_changes: Vec<bool>,
}

impl DetailsSink for RecordingSink {
    fn metadata(&mut self, game: &GameMetadata) {
        self.metadata = Some(game.clone());
    }

    fn factory(&mut self, state: FactoryState) {
        self.factory = Some(state);
    }

    fn status(&mut self, snapshot: GameStatusSnapshot) {
        self.status = Some(snapshot);
    }

    fn token(&mut self, token: TokenData) {
        self.token = Some(token);
    }

    fn moves(&mut self, entries: &[MoveLogEntry]) {
        self.moves = Some(entries.to_vec());
    }

    fn error(&mut self, source: Collaborator, message: Option<String>) {
        match message {
            Some(m) => self.errors.set(source, m),
            None => self.errors.clear(source),
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn busy(&mut self, busy: bool) {
        self.busy_changes.push(busy);
    }
}
