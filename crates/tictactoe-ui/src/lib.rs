//! Shared Dioxus UI components for the tic-tac-toe explorer.
//!
//! This crate is platform-agnostic: it provides the page components, the
//! `UiMessage` type sent to the page coroutine, and the signal bundle the
//! details session writes into. The web binary supplies transports,
//! wallet access and timers.

pub mod app_logic;
pub mod components;

use dioxus::prelude::*;
use tictactoe_client::session::{Notice, SessionRequest};
use tictactoe_core::Address;
use tictactoe_core::errors::CollaboratorErrors;
use tictactoe_core::game_state::{FactoryState, GameStatusSnapshot, MoveLogEntry, TokenData};
use tictactoe_core::protocol::{GameAction, GameMetadata};

// ---------------------------------------------------------------------------
// Shared types
// ---------------------------------------------------------------------------

/// Messages sent from UI components to the page coroutine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiMessage {
    /// A transaction the user confirmed in one of the modals.
    Action(GameAction),
    /// Re-read on-chain state.
    Refresh,
}

impl From<UiMessage> for SessionRequest {
    fn from(msg: UiMessage) -> Self {
        match msg {
            UiMessage::Action(action) => SessionRequest::Submit(action),
            UiMessage::Refresh => SessionRequest::Refresh,
        }
    }
}

/// Active wallet connection as reported by the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WalletState {
    /// A provider is injected into the page.
    pub available: bool,
    pub account: Option<Address>,
    pub chain_id: Option<u64>,
}

/// Everything the details session learns, one signal per collaborator.
#[derive(Clone, Copy, PartialEq)]
pub struct DetailsSignals {
    pub metadata: Signal<Option<GameMetadata>>,
    pub factory: Signal<Option<FactoryState>>,
    pub status: Signal<Option<GameStatusSnapshot>>,
    pub token: Signal<Option<TokenData>>,
    /// `None` until the step log answered once.
    pub moves: Signal<Option<Vec<MoveLogEntry>>>,
    pub errors: Signal<CollaboratorErrors>,
    /// A transaction is being sent or mined.
    pub busy: Signal<bool>,
}

/// Create the signal bundle in the calling component's scope.
pub fn use_details_signals() -> DetailsSignals {
    DetailsSignals {
        metadata: use_signal(|| None),
        factory: use_signal(|| None),
        status: use_signal(|| None),
        token: use_signal(|| None),
        moves: use_signal(|| None),
        errors: use_signal(CollaboratorErrors::default),
        busy: use_signal(|| false),
    }
}

// ---------------------------------------------------------------------------
// Toasts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
    /// Time on screen so far.
    pub age_ms: u64,
}

/// App-wide toast queue, provided as context by the root component.
#[derive(Clone, Copy, PartialEq)]
pub struct ToastQueue {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
    lifetime_ms: u64,
}

impl ToastQueue {
    /// Must be called from a component (creates signals in its scope).
    pub fn new(lifetime_ms: u64) -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
            lifetime_ms,
        }
    }

    pub fn toasts(&self) -> Signal<Vec<Toast>> {
        self.toasts
    }

    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = *self.next_id.peek();
        self.next_id.set(id + 1);
        self.toasts.write().push(Toast {
            id,
            notice,
            age_ms: 0,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|t| t.id != id);
    }

    /// Advance every toast's age and drop the expired ones.
    pub fn tick(&mut self, elapsed_ms: u64) {
        if self.toasts.peek().is_empty() {
            return;
        }
        age_toasts(&mut self.toasts.write(), elapsed_ms, self.lifetime_ms);
    }
}

/// Age `toasts` by `elapsed_ms`, removing those older than `lifetime_ms`.
pub fn age_toasts(toasts: &mut Vec<Toast>, elapsed_ms: u64, lifetime_ms: u64) {
    for toast in toasts.iter_mut() {
        toast.age_ms = toast.age_ms.saturating_add(elapsed_ms);
    }
    toasts.retain(|t| t.age_ms < lifetime_ms);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast(id: u64, age_ms: u64) -> Toast {
        Toast {
            id,
            notice: Notice::error("Network Error"),
            age_ms,
        }
    }

    #[test]
    fn toasts_expire_after_lifetime() {
        let mut toasts = vec![toast(0, 4_500), toast(1, 0)];
        age_toasts(&mut toasts, 500, 5_000);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, 1);
        assert_eq!(toasts[0].age_ms, 500);
    }

    #[test]
    fn ui_message_maps_to_session_request() {
        let req: SessionRequest = UiMessage::Action(GameAction::Cancel).into();
        assert_eq!(req, SessionRequest::Submit(GameAction::Cancel));
        assert_eq!(SessionRequest::from(UiMessage::Refresh), SessionRequest::Refresh);
    }
}
