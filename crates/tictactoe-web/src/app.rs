//! Root application component for the web frontend.
//!
//! Owns the wallet connection, the toast queue and the router. Each valid
//! game route mounts a details loader whose coroutine runs one
//! [`DetailsSession`] against the explore API and the wallet's network.

use dioxus::prelude::*;
use futures_util::StreamExt;
use gloo_timers::future::TimeoutFuture;
use tictactoe_client::api::ExploreApi;
use tictactoe_client::chain::GameChain;
use tictactoe_client::config::{
    AppConfig, ENV_API_BASE, ENV_FROM_BLOCK, ENV_POLL_MS, ENV_TOAST_MS,
};
use tictactoe_client::http::GlooHttp;
use tictactoe_client::session::{DetailsSession, Notice, SessionParams};
use tictactoe_core::Address;
use tictactoe_core::page::PageState;
use tictactoe_ui::app_logic::run_details_page;
use tictactoe_ui::components::{game_details, not_found, page_title, toasts, wallet_prompt};
use tictactoe_ui::{ToastQueue, UiMessage, WalletState, use_details_signals};

use crate::wallet::{Eip1193Rpc, parse_accounts, parse_chain_id};

const TAILWIND_CSS: Asset = asset!(
    "/assets/tailwind.css",
    AssetOptions::css()
        .with_preload(true)
        .with_static_head(true)
);

/// How often toast ages are advanced.
const TOAST_TICK_MS: u32 = 250;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/game/:game_address")]
    GamePage { game_address: String },
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Wallet requests and provider notifications.
#[derive(Debug, Clone, PartialEq)]
pub enum WalletEvent {
    /// The user pressed "Connect wallet".
    Connect,
    AccountsChanged(Vec<Address>),
    ChainChanged(Option<u64>),
}

/// Configuration baked in at build time (`TICTACTOE_*` variables).
fn build_config() -> AppConfig {
    AppConfig::from_lookup(|key| {
        let value = match key {
            ENV_API_BASE => option_env!("TICTACTOE_API_BASE"),
            ENV_POLL_MS => option_env!("TICTACTOE_POLL_MS"),
            ENV_TOAST_MS => option_env!("TICTACTOE_TOAST_MS"),
            ENV_FROM_BLOCK => option_env!("TICTACTOE_FROM_BLOCK"),
            _ => None,
        };
        value.map(str::to_string)
    })
}

async fn sleep_ms(ms: u64) {
    TimeoutFuture::new(ms.min(u64::from(u32::MAX)) as u32).await;
}

/// Keep [`WalletState`] in sync with the injected provider.
async fn wallet_loop(
    mut rx: UnboundedReceiver<WalletEvent>,
    mut wallet: Signal<WalletState>,
    mut toasts: ToastQueue,
) {
    let Some(provider) = Eip1193Rpc::detect() else {
        tracing::info!("no wallet provider injected");
        return;
    };
    wallet.write().available = true;

    match provider.accounts().await {
        Ok(accounts) => wallet.write().account = accounts.first().copied(),
        Err(e) => tracing::warn!("eth_accounts failed: {e}"),
    }
    match provider.chain_id().await {
        Ok(chain_id) => wallet.write().chain_id = chain_id,
        Err(e) => tracing::warn!("eth_chainId failed: {e}"),
    }

    while let Some(event) = rx.next().await {
        match event {
            WalletEvent::Connect => match provider.request_accounts().await {
                Ok(accounts) => {
                    wallet.write().account = accounts.first().copied();
                    if let Ok(chain_id) = provider.chain_id().await {
                        wallet.write().chain_id = chain_id;
                    }
                }
                Err(e) => {
                    toasts.push(Notice::error(e.to_string()));
                }
            },
            WalletEvent::AccountsChanged(accounts) => {
                tracing::debug!(count = accounts.len(), "wallet accounts changed");
                wallet.write().account = accounts.first().copied();
            }
            WalletEvent::ChainChanged(chain_id) => {
                tracing::debug!(?chain_id, "wallet network changed");
                wallet.write().chain_id = chain_id;
            }
        }
    }
}

/// Root `<App>` component.
#[component]
pub fn App() -> Element {
    let config = use_context_provider(build_config);
    let toast_queue = use_context_provider(|| ToastQueue::new(config.toast_duration_ms));
    let wallet = use_context_provider(|| Signal::new(WalletState::default()));

    let wallet_events = use_coroutine(move |rx: UnboundedReceiver<WalletEvent>| {
        wallet_loop(rx, wallet, toast_queue)
    });

    // Provider notifications feed the same channel as the connect button.
    use_hook(move || {
        let Some(provider) = Eip1193Rpc::detect() else {
            return;
        };
        let accounts_tx = wallet_events.tx();
        let chain_tx = wallet_events.tx();
        let subscribed = provider
            .on("accountsChanged", move |value| {
                let accounts = parse_accounts(&value);
                let _ = accounts_tx.unbounded_send(WalletEvent::AccountsChanged(accounts));
            })
            .and_then(|()| {
                provider.on("chainChanged", move |value| {
                    let chain_id = parse_chain_id(&value);
                    let _ = chain_tx.unbounded_send(WalletEvent::ChainChanged(chain_id));
                })
            });
        if let Err(e) = subscribed {
            tracing::warn!("wallet events unavailable: {e}");
        }
    });

    use_future(move || {
        let mut toast_queue = toast_queue;
        async move {
            loop {
                TimeoutFuture::new(TOAST_TICK_MS).await;
                toast_queue.tick(u64::from(TOAST_TICK_MS));
            }
        }
    });

    rsx! {
        document::Stylesheet { href: TAILWIND_CSS }
        document::Title { "Tic Tac Toe Explorer" }
        div { class: "min-h-screen bg-gray-950 text-gray-100 font-sans",
            Router::<Route> {}
            toasts::ToastStack {}
        }
    }
}

/// `/game/:game_address`: route guard, then wallet gate, then the details.
#[component]
fn GamePage(game_address: String) -> Element {
    let wallet = use_context::<Signal<WalletState>>();
    let wallet_events = use_coroutine_handle::<WalletEvent>();
    let state = *wallet.read();

    match PageState::resolve(Some(game_address.as_str()), state.account, state.chain_id) {
        PageState::NotFound => rsx! {
            not_found::NotFound {}
        },
        PageState::ConnectWallet { .. } => rsx! {
            div { class: "max-w-3xl mx-auto p-6",
                page_title::PageTitle { title: "Blockchain Game Details" }
                wallet_prompt::WalletPrompt {
                    available: state.available,
                    on_connect: move |_| wallet_events.send(WalletEvent::Connect),
                }
            }
        },
        PageState::AwaitingNetwork { .. } => rsx! {},
        PageState::Ready {
            game_address,
            account,
            chain_id,
        } => rsx! {
            // A new key restarts the session when the wallet switches.
            GameDetailsLoader {
                key: "{game_address}-{account}-{chain_id}",
                game_address,
                account,
                chain_id,
            }
        },
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    tracing::debug!("no route for /{}", segments.join("/"));
    rsx! {
        not_found::NotFound {}
    }
}

/// Runs the details session for one game, account and network.
#[component]
fn GameDetailsLoader(game_address: Address, account: Address, chain_id: u64) -> Element {
    let config = use_context::<AppConfig>();
    let toast_queue = use_context::<ToastQueue>();
    let signals = use_details_signals();

    use_coroutine(move |rx: UnboundedReceiver<UiMessage>| {
        let config = config.clone();
        let mut toast_queue = toast_queue;
        async move {
            let Some(rpc) = Eip1193Rpc::detect() else {
                toast_queue.push(Notice::error("No wallet provider available"));
                return;
            };
            let session = DetailsSession::new(
                ExploreApi::new(GlooHttp, config.api_base.clone()),
                GameChain::new(rpc),
                SessionParams {
                    game_address,
                    account,
                    chain_id,
                    poll_interval_ms: config.poll_interval_ms,
                    logs_from_block: config.logs_from_block,
                },
            );
            tracing::info!(game = %game_address, chain_id, "loading game details");
            run_details_page(rx, session, signals, toast_queue, sleep_ms).await;
        }
    });

    rsx! {
        game_details::GameDetails { signals, account, chain_id }
    }
}
