//! Transient notifications pinned to the bottom-right corner.

use dioxus::prelude::*;
use tictactoe_client::session::NoticeLevel;

use crate::ToastQueue;

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Info => "bg-sky-800 border-sky-600",
        NoticeLevel::Success => "bg-emerald-800 border-emerald-600",
        NoticeLevel::Error => "bg-red-800 border-red-600",
    }
}

/// Renders the queue provided by the root component.
#[component]
pub fn ToastStack() -> Element {
    let mut queue = use_context::<ToastQueue>();
    let toasts = queue.toasts().read().clone();

    rsx! {
        div { class: "fixed bottom-4 right-4 z-50 flex flex-col gap-2 w-80",
            for toast in toasts {
                {
                    let id = toast.id;
                    let class = level_class(toast.notice.level);
                    let text = toast.notice.text;

                    rsx! {
                        div {
                            key: "{id}",
                            class: "border rounded-lg shadow-lg px-4 py-3 text-sm text-white flex items-start gap-3 {class}",
                            p { class: "flex-1 break-words", "{text}" }
                            button {
                                class: "text-white/60 hover:text-white",
                                onclick: move |_| queue.dismiss(id),
                                "✕"
                            }
                        }
                    }
                }
            }
        }
    }
}
