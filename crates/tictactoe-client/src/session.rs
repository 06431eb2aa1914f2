//! Control flow of one game details page.
//!
//! Fetch metadata, then the factory clock, the game status and the token
//! (in that order, each only once the previous one succeeded), then keep
//! polling the step log and serve action requests until the request
//! stream closes. Every result is pushed into a [`DetailsSink`], so the
//! flow is independent of the UI framework that renders it.

use std::future::Future;

use alloy_primitives::{Address, TxHash};
use futures_util::{Stream, StreamExt};
use tictactoe_core::address::shorten_hash;
use tictactoe_core::errors::Collaborator;
use tictactoe_core::game_state::{FactoryState, GameStatusSnapshot, MoveLogEntry, TokenData};
use tictactoe_core::protocol::{GameAction, GameMetadata};

use crate::api::ExploreApi;
use crate::chain::GameChain;
use crate::error::ClientError;
use crate::logs::{LogPoll, StepLogSubscription};
use crate::transport::{HttpTransport, RpcTransport};

/// How many times a submitted transaction's receipt is polled.
pub const RECEIPT_POLL_ATTEMPTS: u32 = 60;

/// Delay between receipt polls in ms.
pub const RECEIPT_POLL_MS: u64 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A transient user notification (rendered as a toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.into(),
        }
    }
}

/// Requests the page sends to a running session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRequest {
    /// Send a transaction; `Play` approves the stake first when needed.
    Submit(GameAction),
    /// Re-read factory, status and token.
    Refresh,
}

/// Receiver of everything a session learns.
pub trait DetailsSink {
    fn metadata(&mut self, game: &GameMetadata);
    fn factory(&mut self, state: FactoryState);
    fn status(&mut self, snapshot: GameStatusSnapshot);
    fn token(&mut self, token: TokenData);
    /// Full, ordered list of moves seen so far.
    fn moves(&mut self, entries: &[MoveLogEntry]);
    /// Set (`Some`) or clear (`None`) one collaborator's error slot.
    fn error(&mut self, source: Collaborator, message: Option<String>);
    fn notify(&mut self, notice: Notice);
    /// A transaction is in flight.
    fn busy(&mut self, _busy: bool) {}
}

/// Fixed inputs of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionParams {
    pub game_address: Address,
    pub account: Address,
    pub chain_id: u64,
    pub poll_interval_ms: u64,
    pub logs_from_block: u64,
}

pub struct DetailsSession<H, R> {
    api: ExploreApi<H>,
    chain: GameChain<R>,
    params: SessionParams,
}

impl<H: HttpTransport, R: RpcTransport> DetailsSession<H, R> {
    pub fn new(api: ExploreApi<H>, chain: GameChain<R>, params: SessionParams) -> Self {
        Self { api, chain, params }
    }

    /// Fetch game metadata. A failure becomes an error toast and ends the flow.
    pub async fn load_metadata<S: DetailsSink>(&self, sink: &mut S) -> Option<GameMetadata> {
        match self.api.fetch_game(self.params.chain_id, &self.params.game_address).await {
            Ok(game) => {
                sink.error(Collaborator::Metadata, None);
                sink.metadata(&game);
                Some(game)
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(
                    game = %self.params.game_address,
                    error = %message,
                    "game details fetch failed"
                );
                sink.error(Collaborator::Metadata, Some(message.clone()));
                sink.notify(Notice::error(message));
                None
            }
        }
    }

    /// Read factory clock, game status and token in dependency order.
    /// Returns the token data when the whole chain succeeded.
    pub async fn refresh<S: DetailsSink>(
        &self,
        sink: &mut S,
        game: &GameMetadata,
    ) -> Option<TokenData> {
        let factory = self.chain.factory_state(game.factory_address).await;
        let factory = record(sink, Collaborator::Factory, factory)?;
        sink.factory(factory);

        let status = self.chain.game_status(game.address).await;
        let status = record(sink, Collaborator::Game, status)?;
        sink.status(status);

        let token = self
            .chain
            .token_data(game.token_address, self.params.account, game.address)
            .await;
        let token = record(sink, Collaborator::Token, token)?;
        sink.token(token.clone());
        Some(token)
    }

    /// Submit `action` (preceded by an approval for `Play` when the allowance
    /// is short) and wait for each transaction to be mined.
    pub async fn submit<S, F, Fut>(
        &self,
        sink: &mut S,
        game: &GameMetadata,
        token: Option<&TokenData>,
        action: GameAction,
        sleep_ms: &F,
    ) -> bool
    where
        S: DetailsSink,
        F: Fn(u64) -> Fut,
        Fut: Future<Output = ()>,
    {
        if let Err(e) = action.check_cell(game.params.size) {
            let message = e.to_string();
            sink.error(Collaborator::Action, Some(message.clone()));
            sink.notify(Notice::error(message));
            return false;
        }

        let mut steps = Vec::with_capacity(2);
        if action == GameAction::Play && token.is_some_and(|t| t.allowance < game.params.coins) {
            steps.push(GameAction::Approve {
                amount: game.params.coins,
            });
        }
        steps.push(action);

        sink.busy(true);
        let mut ok = true;
        for step in steps {
            match self.send_and_wait(game, step, sleep_ms).await {
                Ok(hash) => {
                    let text = format!("{step} confirmed in {}", shorten_hash(&hash));
                    sink.notify(Notice::success(text));
                }
                Err(e) => {
                    let message = format!("{step} failed: {e}");
                    tracing::warn!(%message, "transaction failed");
                    sink.error(Collaborator::Action, Some(message.clone()));
                    sink.notify(Notice::error(message));
                    ok = false;
                    break;
                }
            }
        }
        if ok {
            sink.error(Collaborator::Action, None);
        }
        sink.busy(false);
        ok
    }

    async fn send_and_wait<F, Fut>(
        &self,
        game: &GameMetadata,
        action: GameAction,
        sleep_ms: &F,
    ) -> Result<TxHash, ClientError>
    where
        F: Fn(u64) -> Fut,
        Fut: Future<Output = ()>,
    {
        let hash = self.chain.submit_action(self.params.account, game, &action).await?;
        for _ in 0..RECEIPT_POLL_ATTEMPTS {
            if let Some(receipt) = self.chain.receipt(hash).await? {
                return if receipt.succeeded() {
                    Ok(hash)
                } else {
                    Err(ClientError::Reverted(shorten_hash(&hash)))
                };
            }
            sleep_ms(RECEIPT_POLL_MS).await;
        }
        Err(ClientError::ReceiptTimeout(shorten_hash(&hash)))
    }

    /// Drive the whole page lifecycle until `requests` closes.
    ///
    /// `sleep_ms` is an async function that sleeps for the given number of
    /// milliseconds, provided by the platform (`gloo_timers` on web,
    /// `tokio::time::sleep` on native).
    pub async fn run<S, Q, F, Fut>(self, sink: &mut S, mut requests: Q, sleep_ms: F)
    where
        S: DetailsSink,
        Q: Stream<Item = SessionRequest> + Unpin,
        F: Fn(u64) -> Fut,
        Fut: Future<Output = ()>,
    {
        let Some(game) = self.load_metadata(sink).await else {
            return;
        };
        let mut token = self.refresh(sink, &game).await;
        let mut logs = StepLogSubscription::new(game.address, self.params.logs_from_block);
        // Set by each poll tick: the chain clock moved and the opponent may
        // have joined without emitting a `GameStep`.
        let mut stale = false;

        loop {
            let first_poll = logs.entries().is_none();
            match logs.poll(&self.chain).await {
                LogPoll::Updated(added) => {
                    if let Some(entries) = logs.entries() {
                        sink.moves(entries);
                    }
                    // A new move changes turn and clock.
                    stale |= added > 0 && !first_poll;
                }
                LogPoll::Unchanged => {}
                LogPoll::Failed(e) => tracing::warn!(error = %e, "step log poll failed"),
            }
            if stale {
                token = self.refresh(sink, &game).await;
                stale = false;
            }

            tokio::select! {
                biased;
                request = requests.next() => match request {
                    Some(SessionRequest::Refresh) => {
                        token = self.refresh(sink, &game).await;
                    }
                    Some(SessionRequest::Submit(action)) => {
                        if self.submit(sink, &game, token.as_ref(), action, &sleep_ms).await {
                            token = self.refresh(sink, &game).await;
                        }
                    }
                    None => return,
                },
                _ = sleep_ms(self.params.poll_interval_ms) => stale = true,
            }
        }
    }
}

/// Record the outcome of one collaborator read in its error slot.
fn record<S: DetailsSink, T>(
    sink: &mut S,
    source: Collaborator,
    result: Result<T, ClientError>,
) -> Option<T> {
    match result {
        Ok(value) => {
            sink.error(source, None);
            Some(value)
        }
        Err(e) => {
            tracing::warn!(?source, error = %e, "collaborator read failed");
            sink.error(source, Some(e.to_string()));
            None
        }
    }
}
