//! Derived view of a game: what the detail list shows and which actions
//! the current account may take.

use alloy_primitives::Address;

use crate::game_state::{FactoryState, GameStatus, GameStatusSnapshot, Side, TokenData};
use crate::protocol::GameMetadata;
use crate::units::format_units;

/// Which action controls are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionSet {
    pub play: bool,
    pub cancel: bool,
    pub timeout: bool,
    pub step: bool,
}

/// Everything the detail list needs, computed from the fetched snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    pub status: GameStatus,
    pub status_label: String,
    /// Present once someone joined (any status other than `Wait`).
    pub player2: Option<Address>,
    /// Stake formatted with the token's decimals.
    pub bet: String,
    pub timeout: String,
    pub size: String,
    pub actions: ActionSet,
}

impl DetailsView {
    pub fn derive(
        game: &GameMetadata,
        account: Address,
        snapshot: &GameStatusSnapshot,
        token: &TokenData,
        factory: &FactoryState,
    ) -> Self {
        let status = snapshot.status;
        let waiting = status == GameStatus::Wait;
        let is_creator = account == game.creator_address;

        // A finished or canceled game may report nobody to move.
        let status_label = if waiting || snapshot.current_turn == Side::None {
            status.label().to_string()
        } else {
            format!("{} {}", status.label(), snapshot.current_turn)
        };

        let actions = ActionSet {
            play: waiting,
            cancel: waiting && is_creator,
            timeout: status == GameStatus::InProgress
                && is_creator
                && timed_out(snapshot.last_step_time, game.params.timeout, factory.current_time),
            step: true,
        };

        Self {
            status,
            status_label,
            player2: (!waiting).then_some(snapshot.player2),
            bet: format_units(game.params.coins, token.decimals),
            timeout: format!("{} sec.", game.params.timeout),
            size: format!("{0} x {0}", game.params.size),
            actions,
        }
    }
}

/// `true` once strictly more than `timeout` seconds passed since the last move.
pub fn timed_out(last_step_time: u64, timeout: u64, now: u64) -> bool {
    last_step_time.saturating_add(timeout) < now
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::Side;
    use crate::protocol::GameParams;
    use alloy_primitives::{U256, address};

    const CREATOR: Address = address!("c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0c0");
    const OTHER: Address = address!("0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e");

    fn game() -> GameMetadata {
        GameMetadata {
            address: Address::repeat_byte(0x01),
            factory_address: Address::repeat_byte(0x02),
            token_address: Address::repeat_byte(0x03),
            creator_address: CREATOR,
            params: GameParams {
                coins: U256::from(2_500_000u64),
                timeout: 60,
                size: 3,
            },
        }
    }

    fn snapshot(status: GameStatus, last_step_time: u64) -> GameStatusSnapshot {
        GameStatusSnapshot {
            status,
            current_turn: Side::Player2,
            player2: OTHER,
            last_step_time,
        }
    }

    fn token() -> TokenData {
        TokenData {
            address: Address::repeat_byte(0x03),
            name: "USD Coin".into(),
            symbol: "USDC".into(),
            decimals: 6,
            allowance: U256::ZERO,
        }
    }

    fn clock(now: u64) -> FactoryState {
        FactoryState {
            address: Address::repeat_byte(0x02),
            current_time: now,
        }
    }

    fn derive_at(account: Address, snap: &GameStatusSnapshot, now: u64) -> DetailsView {
        DetailsView::derive(&game(), account, snap, &token(), &clock(now))
    }

    #[test]
    fn waiting_game_offers_play() {
        let view = derive_at(OTHER, &snapshot(GameStatus::Wait, 0), 10_000);
        assert_eq!(view.status_label, "Wait player");
        assert!(view.actions.play);
        assert!(!view.actions.cancel);
        assert!(!view.actions.timeout);
        assert_eq!(view.player2, None);
    }

    #[test]
    fn creator_can_cancel_waiting_game() {
        let view = derive_at(CREATOR, &snapshot(GameStatus::Wait, 0), 0);
        assert!(view.actions.play);
        assert!(view.actions.cancel);
    }

    #[test]
    fn creator_can_claim_timeout_after_deadline() {
        let snap = snapshot(GameStatus::InProgress, 1_000);
        let view = DetailsView::derive(&game(), CREATOR, &snap, &token(), &clock(1_061));
        assert!(view.actions.timeout);
        assert!(!view.actions.play);
        assert_eq!(view.status_label, "Wait step Player 2");
        assert_eq!(view.player2, Some(OTHER));

        // Exactly at the deadline is not yet a timeout.
        let view = DetailsView::derive(&game(), CREATOR, &snap, &token(), &clock(1_060));
        assert!(!view.actions.timeout);
    }

    #[test]
    fn non_creator_never_sees_timeout() {
        let snap = snapshot(GameStatus::InProgress, 0);
        let view = DetailsView::derive(&game(), OTHER, &snap, &token(), &clock(u64::MAX));
        assert!(!view.actions.timeout);
    }

    #[test]
    fn finished_game_has_no_lifecycle_actions() {
        let view = derive_at(CREATOR, &snapshot(GameStatus::Finished, 0), 99_999);
        assert_eq!(
            view.actions,
            ActionSet {
                step: true,
                ..ActionSet::default()
            }
        );
        assert_eq!(view.status_label, "Finished Player 2");
    }

    #[test]
    fn no_side_to_move_keeps_bare_status() {
        let snap = GameStatusSnapshot {
            current_turn: Side::None,
            ..snapshot(GameStatus::Finished, 0)
        };
        assert_eq!(derive_at(OTHER, &snap, 0).status_label, "Finished");

        let snap = GameStatusSnapshot {
            current_turn: Side::None,
            ..snapshot(GameStatus::Canceled, 0)
        };
        let view = derive_at(CREATOR, &snap, 0);
        assert!(!view.status_label.contains("NONE"));
    }

    #[test]
    fn formats_rows() {
        let view = derive_at(OTHER, &snapshot(GameStatus::Wait, 0), 0);
        assert_eq!(view.bet, "2.5");
        assert_eq!(view.timeout, "60 sec.");
        assert_eq!(view.size, "3 x 3");
    }
}
