//! Play / cancel / timeout controls, each behind a confirmation modal.

use dioxus::prelude::*;
use tictactoe_core::details::ActionSet;
use tictactoe_core::protocol::GameAction;

use super::modal::ConfirmButton;
use crate::UiMessage;

#[component]
pub fn ActionBar(actions: ActionSet, busy: bool, stake: String, needs_approval: bool) -> Element {
    let coroutine = use_coroutine_handle::<UiMessage>();
    let send = move |action: GameAction| coroutine.send(UiMessage::Action(action));

    let play_description = if needs_approval {
        format!("Stake {stake} and join as Player 2. The token approval is sent first.")
    } else {
        format!("Stake {stake} and join as Player 2.")
    };

    rsx! {
        div { class: "flex flex-wrap items-center gap-2 mt-4",
            if actions.play {
                ConfirmButton {
                    label: "Play",
                    title: "Play Tic Tac Toe",
                    description: play_description,
                    busy,
                    on_confirm: move |_| send(GameAction::Play),
                }
            }
            if actions.cancel {
                ConfirmButton {
                    label: "Cancel",
                    title: "Cancel game",
                    description: "Withdraw the game and get the stake back. Nobody has joined yet.",
                    button_class: "bg-red-600 hover:bg-red-500",
                    busy,
                    on_confirm: move |_| send(GameAction::Cancel),
                }
            }
            if actions.timeout {
                ConfirmButton {
                    label: "Timeout",
                    title: "Claim timeout",
                    description: "The opponent ran out of time. Claim the game.",
                    button_class: "bg-orange-600 hover:bg-orange-500",
                    busy,
                    on_confirm: move |_| send(GameAction::Timeout),
                }
            }
            if busy {
                span { class: "text-sm text-gray-400 animate-pulse", "Waiting for confirmation…" }
            }
        }
    }
}
