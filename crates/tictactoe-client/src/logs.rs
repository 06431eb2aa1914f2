//! Lazily populated, continuously extended view of a game's `GameStep` log.

use alloy_primitives::Address;
use tictactoe_core::game_state::MoveLogEntry;

use crate::chain::GameChain;
use crate::error::ClientError;
use crate::transport::RpcTransport;

/// Outcome of one subscription poll.
#[derive(Debug)]
pub enum LogPoll {
    /// The visible entries changed; `n` entries were appended. The first
    /// successful poll always reports `Updated`, even with zero entries.
    Updated(usize),
    /// Nothing new since the last poll.
    Unchanged,
    /// The node request failed; the entries kept so far are untouched.
    Failed(ClientError),
}

/// Polling subscription to `GameStep` events of one game, with no argument
/// filter. Entries are kept in the order the node supplies them; nothing
/// is reordered or deduplicated here.
pub struct StepLogSubscription {
    game: Address,
    next_block: u64,
    entries: Option<Vec<MoveLogEntry>>,
}

impl StepLogSubscription {
    pub fn new(game: Address, from_block: u64) -> Self {
        Self {
            game,
            next_block: from_block,
            entries: None,
        }
    }

    /// `None` until the first poll succeeds.
    pub fn entries(&self) -> Option<&[MoveLogEntry]> {
        self.entries.as_deref()
    }

    /// First block the next poll asks for.
    pub fn next_block(&self) -> u64 {
        self.next_block
    }

    pub async fn poll<R: RpcTransport>(&mut self, chain: &GameChain<R>) -> LogPoll {
        let fresh = match chain.step_logs(self.game, self.next_block).await {
            Ok(fresh) => fresh,
            Err(e) => return LogPoll::Failed(e),
        };

        if let Some(last) = fresh.iter().map(|e| e.block_number).max() {
            self.next_block = last.saturating_add(1);
        }

        let count = fresh.len();
        match &mut self.entries {
            None => {
                self.entries = Some(fresh);
                LogPoll::Updated(count)
            }
            Some(_) if count == 0 => LogPoll::Unchanged,
            Some(entries) => {
                entries.extend(fresh);
                LogPoll::Updated(count)
            }
        }
    }
}
