//! Per-collaborator error messages.

use dioxus::prelude::*;
use tictactoe_core::errors::{Collaborator, CollaboratorErrors};

fn source_label(source: Collaborator) -> &'static str {
    match source {
        Collaborator::Metadata => "Game data",
        Collaborator::Factory => "Factory",
        Collaborator::Game => "Game status",
        Collaborator::Token => "Token",
        Collaborator::Action => "Transaction",
    }
}

#[component]
pub fn ErrorList(errors: CollaboratorErrors) -> Element {
    if errors.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "flex flex-col gap-1 mb-4",
            for (source, message) in errors.iter() {
                {
                    let label = source_label(source);
                    rsx! {
                        p {
                            key: "{label}",
                            class: "bg-red-900/40 border border-red-700 rounded-lg px-3 py-2 text-sm text-red-300",
                            span { class: "font-semibold", "{label}: " }
                            "{message}"
                        }
                    }
                }
            }
        }
    }
}
