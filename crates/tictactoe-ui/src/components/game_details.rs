//! The details page body once a wallet is connected.

use dioxus::prelude::*;
use tictactoe_core::Address;
use tictactoe_core::details::DetailsView;

use super::action_bar::ActionBar;
use super::details_list::DetailsList;
use super::error_list::ErrorList;
use super::move_table::MoveTable;
use super::page_title::PageTitle;
use super::step_modal::StepModal;
use crate::{DetailsSignals, UiMessage};

/// Which parts of the body render next to the error list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sections {
    loading: bool,
    moves: bool,
}

impl Sections {
    /// A failed metadata fetch ends the session, so nothing that depends on
    /// it renders afterwards.
    fn new(metadata_loaded: bool, metadata_failed: bool, list_ready: bool) -> Self {
        Self {
            loading: !list_ready && !metadata_failed,
            moves: metadata_loaded,
        }
    }
}

#[component]
pub fn GameDetails(signals: DetailsSignals, account: Address, chain_id: u64) -> Element {
    let coroutine = use_coroutine_handle::<UiMessage>();

    let errors = signals.errors.read().clone();
    let busy = *signals.busy.read();
    let moves = signals.moves.read().clone();

    // The list needs all four snapshots; until then only errors show.
    let loaded = {
        let metadata = signals.metadata.read();
        let factory = signals.factory.read();
        let status = signals.status.read();
        let token = signals.token.read();
        match (&*metadata, &*factory, &*status, &*token) {
            (Some(game), Some(factory), Some(status), Some(token)) => {
                let view = DetailsView::derive(game, account, status, token, factory);
                Some((game.clone(), view, token.clone()))
            }
            _ => None,
        }
    };

    let sections = Sections::new(
        signals.metadata.read().is_some(),
        errors.metadata.is_some(),
        loaded.is_some(),
    );

    rsx! {
        div { class: "max-w-3xl mx-auto p-6",
            PageTitle { title: "Blockchain Game Details" }
            ErrorList { errors }
            match loaded {
                Some((game, view, token)) => {
                    let actions = view.actions;
                    let size = game.params.size;
                    let stake = format!("{} {}", view.bet, token.symbol);
                    let needs_approval = token.allowance < game.params.coins;

                    rsx! {
                        div { class: "bg-gray-900 rounded-2xl p-5 shadow-lg",
                            DetailsList { game, view, token, chain_id }
                            ActionBar { actions, busy, stake, needs_approval }
                            if actions.step {
                                StepModal { size, busy }
                            }
                        }
                    }
                }
                None if sections.loading => rsx! {
                    p { class: "text-gray-400 animate-pulse", "Loading game…" }
                },
                None => rsx! {},
            }
            if sections.moves {
                div { class: "mt-8",
                    div { class: "flex items-center justify-between mb-2",
                        h2 { class: "text-xl font-semibold text-white", "Moves" }
                        button {
                            class: "px-3 py-1.5 bg-gray-700 hover:bg-gray-600 rounded-lg text-xs font-semibold text-white transition disabled:opacity-50",
                            disabled: busy,
                            onclick: move |_| coroutine.send(UiMessage::Refresh),
                            "Refresh"
                        }
                    }
                    match moves {
                        None => rsx! {
                            p { class: "text-gray-500 text-sm", "Loading moves…" }
                        },
                        Some(entries) if entries.is_empty() => rsx! {
                            p { class: "text-gray-500 text-sm", "No moves yet." }
                        },
                        Some(entries) => rsx! {
                            MoveTable { entries, chain_id }
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_metadata_hides_dependent_sections() {
        let sections = Sections::new(false, true, false);
        assert!(!sections.loading);
        assert!(!sections.moves);
    }

    #[test]
    fn moves_follow_metadata() {
        assert_eq!(
            Sections::new(false, false, false),
            Sections {
                loading: true,
                moves: false
            }
        );
        // A failing wrapper keeps the page loading while moves still show.
        assert_eq!(
            Sections::new(true, false, false),
            Sections {
                loading: true,
                moves: true
            }
        );
        assert!(!Sections::new(true, false, true).loading);
    }
}
