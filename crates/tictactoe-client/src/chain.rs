//! Reads of the game contract, its token and the chain clock, plus
//! transaction submission through the connected account.

use alloy_primitives::{Address, Bytes, TxHash, U64};
use serde::Deserialize;
use serde_json::{Value, json};
use tictactoe_core::abi::{self, AbiError, RpcLog};
use tictactoe_core::game_state::{
    FactoryState, GameStatus, GameStatusSnapshot, MoveLogEntry, Side, TokenData,
};
use tictactoe_core::protocol::{GameAction, GameMetadata};

use crate::error::ClientError;
use crate::transport::RpcTransport;

#[derive(Deserialize)]
struct BlockHeader {
    timestamp: U64,
}

/// Mined transaction outcome, as far as the page cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub block_number: U64,
    /// `0x1` on success, `0x0` on revert.
    pub status: U64,
}

impl Receipt {
    pub fn succeeded(&self) -> bool {
        self.status == U64::from(1u8)
    }
}

pub struct GameChain<R> {
    rpc: R,
}

impl<R: RpcTransport> GameChain<R> {
    pub fn new(rpc: R) -> Self {
        Self { rpc }
    }

    async fn call_raw(&self, method: &str, params: Value) -> Result<Value, ClientError> {
        Ok(self.rpc.request(method, params).await?)
    }

    /// `eth_call` against the latest block.
    async fn eth_call(&self, to: Address, data: Bytes) -> Result<Bytes, ClientError> {
        let result = self
            .call_raw("eth_call", json!([{ "to": to, "data": data }, "latest"]))
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    /// Factory context; the clock is the latest block timestamp.
    pub async fn factory_state(&self, factory: Address) -> Result<FactoryState, ClientError> {
        let result = self
            .call_raw("eth_getBlockByNumber", json!(["latest", false]))
            .await?;
        let header: BlockHeader = serde_json::from_value(result)?;
        Ok(FactoryState {
            address: factory,
            current_time: header.timestamp.to::<u64>(),
        })
    }

    pub async fn game_status(&self, game: Address) -> Result<GameStatusSnapshot, ClientError> {
        let (status, turn, player2, last_step) = futures_util::try_join!(
            self.eth_call(game, abi::status_calldata()),
            self.eth_call(game, abi::current_turn_calldata()),
            self.eth_call(game, abi::player2_calldata()),
            self.eth_call(game, abi::last_step_time_calldata()),
        )?;

        Ok(GameStatusSnapshot {
            status: GameStatus::try_from(abi::decode_u8(&status)?)?,
            current_turn: Side::from_code(abi::decode_u8(&turn)?),
            player2: abi::decode_address(&player2)?,
            last_step_time: abi::decode_u64(&last_step)?,
        })
    }

    /// ERC-20 metadata plus the allowance `owner` granted to `spender`.
    pub async fn token_data(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<TokenData, ClientError> {
        let (name, symbol, decimals, allowance) = futures_util::try_join!(
            self.eth_call(token, abi::token_name_calldata()),
            self.eth_call(token, abi::token_symbol_calldata()),
            self.eth_call(token, abi::token_decimals_calldata()),
            self.eth_call(token, abi::allowance_calldata(owner, spender)),
        )?;

        Ok(TokenData {
            address: token,
            name: abi::decode_string(&name)?,
            symbol: abi::decode_string(&symbol)?,
            decimals: abi::decode_u8(&decimals)?,
            allowance: abi::decode_u256(&allowance)?,
        })
    }

    /// All `GameStep` logs of `game` from `from_block` on, in the order the
    /// node returns them. Pending and removed logs are skipped.
    pub async fn step_logs(
        &self,
        game: Address,
        from_block: u64,
    ) -> Result<Vec<MoveLogEntry>, ClientError> {
        let filter = json!([{
            "address": game,
            "topics": [abi::game_step_topic()],
            "fromBlock": U64::from(from_block),
            "toBlock": "latest",
        }]);
        let result = self.call_raw("eth_getLogs", filter).await?;
        let logs: Vec<RpcLog> = serde_json::from_value(result)?;

        let mut entries = Vec::with_capacity(logs.len());
        for log in logs.iter().filter(|l| !l.removed) {
            match abi::decode_step_log(log) {
                Ok(entry) => entries.push(entry),
                Err(AbiError::Pending) => tracing::debug!("skipping pending GameStep log"),
                Err(e) => tracing::warn!(error = %e, "undecodable GameStep log"),
            }
        }
        Ok(entries)
    }

    /// Ask the connected account to send `action`. Returns the tx hash.
    pub async fn submit_action(
        &self,
        from: Address,
        game: &GameMetadata,
        action: &GameAction,
    ) -> Result<TxHash, ClientError> {
        let to = if action.targets_token() {
            game.token_address
        } else {
            game.address
        };
        let data = abi::action_calldata(action, game.address);
        tracing::info!(%action, %to, "submitting transaction");
        let result = self
            .call_raw(
                "eth_sendTransaction",
                json!([{ "from": from, "to": to, "data": data }]),
            )
            .await?;
        Ok(serde_json::from_value(result)?)
    }

    /// `None` while the transaction is still pending.
    pub async fn receipt(&self, hash: TxHash) -> Result<Option<Receipt>, ClientError> {
        let result = self
            .call_raw("eth_getTransactionReceipt", json!([hash]))
            .await?;
        Ok(serde_json::from_value(result)?)
    }
}
