//! Move history built from `GameStep` events.

use dioxus::prelude::*;
use tictactoe_core::address::shorten_hash;
use tictactoe_core::explorer::transaction_link;
use tictactoe_core::game_state::MoveLogEntry;

use super::explorer_link::ExplorerLink;

/// One row per entry, in the order received.
#[component]
pub fn MoveTable(entries: Vec<MoveLogEntry>, chain_id: u64) -> Element {
    rsx! {
        table { class: "w-full text-sm",
            thead {
                tr { class: "text-left text-gray-400 border-b border-gray-700",
                    th { class: "py-1.5", "Block" }
                    th { class: "py-1.5", "Tx" }
                    th { class: "py-1.5", "Side" }
                    th { class: "py-1.5", "Cell" }
                }
            }
            tbody {
                for entry in entries.iter() {
                    {
                        let key = format!("{}-{}", entry.transaction_hash, entry.log_index);
                        let block = entry.block_number;
                        let tx_link = transaction_link(&entry.transaction_hash, chain_id);
                        let tx_text = shorten_hash(&entry.transaction_hash);
                        let side = entry.side.label();
                        let cell = entry.cell();

                        rsx! {
                            tr { key: "{key}", class: "border-b border-gray-800",
                                td { class: "py-1.5 font-mono", "{block}" }
                                td { class: "py-1.5",
                                    ExplorerLink { href: tx_link, text: tx_text }
                                }
                                td { class: "py-1.5", "{side}" }
                                td { class: "py-1.5", "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
