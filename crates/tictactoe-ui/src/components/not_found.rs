//! Shown for routes that do not name a valid game address.

use dioxus::prelude::*;

#[component]
pub fn NotFound() -> Element {
    rsx! {
        div { class: "min-h-[60vh] flex flex-col items-center justify-center gap-3 text-center",
            h1 { class: "text-6xl font-bold text-gray-500", "404" }
            p { class: "text-gray-400", "Page not found" }
            a { class: "text-emerald-400 hover:underline", href: "/", "Back to start" }
        }
    }
}
