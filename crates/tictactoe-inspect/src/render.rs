//! Plain-text rendering of the details view and the move table.

use tictactoe_core::address::{shorten_address, shorten_hash};
use tictactoe_core::details::{ActionSet, DetailsView};
use tictactoe_core::game_state::{MoveLogEntry, TokenData};
use tictactoe_core::protocol::GameMetadata;

/// Label/value rows in the same order as the web page.
pub fn details_rows(
    game: &GameMetadata,
    view: &DetailsView,
    token: &TokenData,
) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Type", "Tic Tac Toe".to_string()),
        ("Status", view.status_label.clone()),
        ("Contract Address", game.address.to_checksum(None)),
        ("Player1", shorten_address(&game.creator_address)),
    ];
    if let Some(player2) = view.player2 {
        rows.push(("Player2", shorten_address(&player2)));
    }
    rows.push(("Bet", format!("{} {}", view.bet, token.symbol)));
    rows.push(("Timeout", view.timeout.clone()));
    rows.push(("Size", view.size.clone()));
    rows
}

/// Names of the actions the account could take, e.g. `play, cancel`.
pub fn action_names(actions: &ActionSet) -> String {
    [
        (actions.play, "play"),
        (actions.cancel, "cancel"),
        (actions.timeout, "timeout"),
        (actions.step, "step"),
    ]
    .iter()
    .filter(|(enabled, _)| *enabled)
    .map(|(_, name)| *name)
    .collect::<Vec<_>>()
    .join(", ")
}

pub fn format_rows(rows: &[(&'static str, String)]) -> String {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(label, value)| format!("{label:<width$}  {value}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub const MOVE_HEADER: &str = "Block       Tx             Side      Cell";

pub fn move_line(entry: &MoveLogEntry) -> String {
    format!(
        "{:<11} {:<14} {:<9} {}",
        entry.block_number,
        shorten_hash(&entry.transaction_hash),
        entry.side.label(),
        entry.cell()
    )
}
