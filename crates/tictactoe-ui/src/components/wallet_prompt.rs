//! Connect-wallet prompt rendered while no account is active.

use dioxus::prelude::*;

#[component]
pub fn WalletPrompt(available: bool, on_connect: EventHandler<()>) -> Element {
    rsx! {
        div { class: "bg-sky-900/40 border border-sky-700 rounded-xl p-5 flex flex-col gap-3",
            h4 { class: "text-lg font-semibold text-sky-300", "Connect your wallet!" }
            p { class: "text-gray-300",
                "If you don't have a wallet yet, you can select a provider and create one now."
            }
            if available {
                button {
                    class: "self-start bg-emerald-600 hover:bg-emerald-500 text-white font-semibold rounded-lg px-4 py-2 transition",
                    onclick: move |_| on_connect.call(()),
                    "Connect wallet"
                }
            } else {
                p { class: "text-sm text-gray-500", "No browser wallet detected." }
            }
        }
    }
}
