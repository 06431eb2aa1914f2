//! Browser entry point for the tic-tac-toe game explorer.

mod app;
mod wallet;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    tracing::info!("starting tic-tac-toe explorer");
    dioxus::launch(app::App);
}
