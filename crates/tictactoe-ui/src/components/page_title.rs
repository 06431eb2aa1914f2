use dioxus::prelude::*;

#[component]
pub fn PageTitle(title: String) -> Element {
    rsx! {
        h1 { class: "text-3xl font-bold text-emerald-400 mb-6", "{title}" }
    }
}
