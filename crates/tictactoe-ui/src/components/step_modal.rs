//! Modal collecting the row and column of the next move.

use dioxus::prelude::*;
use tictactoe_core::protocol::GameAction;

use super::modal::Modal;
use crate::UiMessage;

/// Parse the two inputs into a step on a `size` x `size` board.
pub fn parse_step(row: &str, col: &str, size: u8) -> Result<GameAction, String> {
    let row: u8 = row
        .trim()
        .parse()
        .map_err(|_| "Row must be a number".to_string())?;
    let col: u8 = col
        .trim()
        .parse()
        .map_err(|_| "Column must be a number".to_string())?;
    let action = GameAction::Step { row, col };
    action.check_cell(size).map_err(|e| e.to_string())?;
    Ok(action)
}

#[component]
pub fn StepModal(size: u8, busy: bool) -> Element {
    let coroutine = use_coroutine_handle::<UiMessage>();
    let mut open = use_signal(|| false);
    let mut row = use_signal(String::new);
    let mut col = use_signal(String::new);
    let mut validation_error = use_signal(String::new);

    let mut on_submit = move || match parse_step(&row.read(), &col.read(), size) {
        Ok(action) => {
            validation_error.set(String::new());
            open.set(false);
            coroutine.send(UiMessage::Action(action));
        }
        Err(e) => validation_error.set(e),
    };

    let val_err = validation_error.read().clone();
    let max = size.saturating_sub(1);

    rsx! {
        button {
            class: "mt-3 px-4 py-2 bg-blue-600 hover:bg-blue-500 rounded-lg font-semibold text-white transition disabled:opacity-50",
            disabled: busy,
            onclick: move |_| open.set(true),
            "Step"
        }
        if open() {
            Modal { title: "Make a step", on_close: move |_| open.set(false),
                div { class: "flex gap-3",
                    div { class: "flex-1 flex flex-col gap-1",
                        label { class: "text-sm text-gray-400", "Row (0-{max})" }
                        input {
                            class: "bg-gray-700 rounded-lg px-4 py-2 text-white outline-none focus:ring-2 focus:ring-emerald-500",
                            r#type: "number",
                            min: "0",
                            max: "{max}",
                            value: "{row}",
                            oninput: move |e| row.set(e.value()),
                        }
                    }
                    div { class: "flex-1 flex flex-col gap-1",
                        label { class: "text-sm text-gray-400", "Column (0-{max})" }
                        input {
                            class: "bg-gray-700 rounded-lg px-4 py-2 text-white outline-none focus:ring-2 focus:ring-emerald-500",
                            r#type: "number",
                            min: "0",
                            max: "{max}",
                            value: "{col}",
                            oninput: move |e| col.set(e.value()),
                        }
                    }
                }
                if !val_err.is_empty() {
                    p { class: "text-red-400 text-sm", "{val_err}" }
                }
                div { class: "flex justify-end",
                    button {
                        class: "px-4 py-2 bg-blue-600 hover:bg-blue-500 rounded-lg font-semibold text-white transition",
                        onclick: move |_| on_submit(),
                        "Send"
                    }
                }
            }
        }
    }
}
