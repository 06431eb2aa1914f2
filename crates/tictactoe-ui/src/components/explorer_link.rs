use dioxus::prelude::*;

/// Link to a block explorer, or plain text when the chain has no explorer.
#[component]
pub fn ExplorerLink(#[props(!optional)] href: Option<String>, text: String) -> Element {
    match href {
        Some(href) => rsx! {
            a {
                class: "text-emerald-400 hover:underline font-mono",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{text}"
            }
        },
        None => rsx! {
            span { class: "font-mono", "{text}" }
        },
    }
}
