//! Definition list with the game's metadata and status.

use dioxus::prelude::*;
use tictactoe_core::address::shorten_address;
use tictactoe_core::details::DetailsView;
use tictactoe_core::explorer::address_link;
use tictactoe_core::game_state::TokenData;
use tictactoe_core::protocol::GameMetadata;

use super::explorer_link::ExplorerLink;

#[component]
fn Row(label: String, children: Element) -> Element {
    rsx! {
        div { class: "grid grid-cols-4 gap-2 py-1.5 border-b border-gray-800",
            dt { class: "text-gray-400", "{label}" }
            dd { class: "col-span-3", {children} }
        }
    }
}

#[component]
pub fn DetailsList(
    game: GameMetadata,
    view: DetailsView,
    token: TokenData,
    chain_id: u64,
) -> Element {
    let contract = game.address.to_checksum(None);
    let creator_link = address_link(&game.creator_address, chain_id);
    let creator_text = shorten_address(&game.creator_address);
    let token_link = address_link(&token.address, chain_id);
    let token_text = format!("{} ({})", token.name, token.symbol);
    let player2 = view
        .player2
        .map(|p2| (address_link(&p2, chain_id), shorten_address(&p2)));
    let DetailsView {
        status_label,
        bet,
        timeout,
        size,
        ..
    } = view;

    rsx! {
        dl { class: "flex flex-col",
            Row { label: "Type", "Tic Tac Toe" }
            Row { label: "Status", "{status_label}" }
            Row { label: "Contract Address",
                span { class: "font-mono break-all", "{contract}" }
            }
            Row { label: "Player1",
                ExplorerLink { href: creator_link, text: creator_text }
            }
            if let Some((href, text)) = player2 {
                Row { label: "Player2",
                    ExplorerLink { href, text }
                }
            }
            Row { label: "Bet",
                span { class: "mr-1", "{bet}" }
                ExplorerLink { href: token_link, text: token_text }
            }
            Row { label: "Timeout", "{timeout}" }
            Row { label: "Size", "{size}" }
        }
    }
}
