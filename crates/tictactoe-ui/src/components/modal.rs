//! Confirmation dialog shared by the action buttons.

use dioxus::prelude::*;

#[component]
pub fn Modal(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-40 bg-black/60 flex items-center justify-center p-4",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-gray-800 w-full max-w-md rounded-2xl shadow-2xl p-6 flex flex-col gap-4",
                onclick: move |e| e.stop_propagation(),
                div { class: "flex items-center justify-between",
                    h3 { class: "text-lg font-semibold text-white", "{title}" }
                    button {
                        class: "text-gray-400 hover:text-white",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                {children}
            }
        }
    }
}

/// A button that opens a confirmation modal and reports the confirmation.
#[component]
pub fn ConfirmButton(
    label: String,
    title: String,
    description: String,
    #[props(default = "bg-emerald-600 hover:bg-emerald-500".to_string())] button_class: String,
    busy: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        button {
            class: "px-4 py-2 rounded-lg font-semibold text-white transition disabled:opacity-50 {button_class}",
            disabled: busy,
            onclick: move |_| open.set(true),
            "{label}"
        }
        if open() {
            Modal { title: title.clone(), on_close: move |_| open.set(false),
                p { class: "text-gray-300", "{description}" }
                div { class: "flex justify-end gap-3",
                    button {
                        class: "px-4 py-2 rounded-lg bg-gray-600 hover:bg-gray-500 text-white transition",
                        onclick: move |_| open.set(false),
                        "Close"
                    }
                    button {
                        class: "px-4 py-2 rounded-lg font-semibold text-white transition {button_class}",
                        onclick: move |_| {
                            open.set(false);
                            on_confirm.call(());
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}
