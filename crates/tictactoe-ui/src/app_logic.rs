//! Platform-agnostic page lifecycle.
//!
//! Bridges a [`DetailsSession`] to Dioxus signals: the session runs inside
//! a `use_coroutine`, receives [`UiMessage`]s from the modals and writes
//! every result into the page's [`DetailsSignals`]. Platform crates only
//! provide the transports and an async sleep function.

use std::future::Future;

use dioxus::prelude::*;
use futures_util::StreamExt;
use tictactoe_client::session::{DetailsSession, DetailsSink, Notice, SessionRequest};
use tictactoe_client::transport::{HttpTransport, RpcTransport};
use tictactoe_core::errors::Collaborator;
use tictactoe_core::game_state::{FactoryState, GameStatusSnapshot, MoveLogEntry, TokenData};
use tictactoe_core::protocol::GameMetadata;

use crate::{DetailsSignals, ToastQueue, UiMessage};

/// [`DetailsSink`] writing into Dioxus signals and the toast queue.
pub struct SignalSink {
    signals: DetailsSignals,
    toasts: ToastQueue,
}

impl SignalSink {
    pub fn new(signals: DetailsSignals, toasts: ToastQueue) -> Self {
        Self { signals, toasts }
    }
}

impl DetailsSink for SignalSink {
    fn metadata(&mut self, game: &GameMetadata) {
        self.signals.metadata.set(Some(game.clone()));
    }

    fn factory(&mut self, state: FactoryState) {
        self.signals.factory.set(Some(state));
    }

    fn status(&mut self, snapshot: GameStatusSnapshot) {
        self.signals.status.set(Some(snapshot));
    }

    fn token(&mut self, token: TokenData) {
        self.signals.token.set(Some(token));
    }

    fn moves(&mut self, entries: &[MoveLogEntry]) {
        self.signals.moves.set(Some(entries.to_vec()));
    }

    fn error(&mut self, source: Collaborator, message: Option<String>) {
        let mut errors = self.signals.errors;
        // Skip no-op clears so an idle poll does not re-render the page.
        if message.is_none() && errors.peek().get(source).is_none() {
            return;
        }
        match message {
            Some(m) => errors.write().set(source, m),
            None => errors.write().clear(source),
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.toasts.push(notice);
    }

    fn busy(&mut self, busy: bool) {
        self.signals.busy.set(busy);
    }
}

/// Drive one details page until its coroutine is dropped.
///
/// This is the async body a `use_coroutine` should run.
pub async fn run_details_page<H, R, F, Fut>(
    rx: UnboundedReceiver<UiMessage>,
    session: DetailsSession<H, R>,
    signals: DetailsSignals,
    toasts: ToastQueue,
    sleep_ms: F,
) where
    H: HttpTransport,
    R: RpcTransport,
    F: Fn(u64) -> Fut,
    Fut: Future<Output = ()>,
{
    let mut sink = SignalSink::new(signals, toasts);
    let requests = rx.map(SessionRequest::from);
    session.run(&mut sink, requests, sleep_ms).await;
    tracing::debug!("details session ended");
}
