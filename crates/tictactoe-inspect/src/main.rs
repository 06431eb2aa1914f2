//! Terminal viewer for a tic-tac-toe game: prints the details list and the
//! move table, optionally following new moves.
//!
//! ```text
//! tictactoe-inspect 0x1111…1111 --chain-id 11155111 --follow
//! ```

mod render;

use clap::Parser;
use futures_util::stream;
use tictactoe_client::api::ExploreApi;
use tictactoe_client::chain::GameChain;
use tictactoe_client::config::{
    AppConfig, ENV_API_BASE, ENV_FROM_BLOCK, ENV_POLL_MS, ENV_RPC_URL,
};
use tictactoe_client::http::{HttpRpc, ReqwestHttp};
use tictactoe_client::session::{
    DetailsSession, DetailsSink, Notice, NoticeLevel, SessionParams, SessionRequest,
};
use tictactoe_core::Address;
use tictactoe_core::address::parse_address;
use tictactoe_core::details::DetailsView;
use tictactoe_core::errors::Collaborator;
use tictactoe_core::game_state::{FactoryState, GameStatusSnapshot, MoveLogEntry, TokenData};
use tictactoe_core::protocol::GameMetadata;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe-inspect")]
#[command(about = "Show the details and moves of a tic-tac-toe game", long_about = None)]
struct Cli {
    /// Game contract address
    #[arg(value_parser = parse_address)]
    game: Address,

    /// Chain the game lives on
    #[arg(short, long, default_value_t = 1)]
    chain_id: u64,

    /// Explore API origin
    #[arg(long, env = ENV_API_BASE, default_value = "http://127.0.0.1:3000")]
    api: String,

    /// JSON-RPC endpoint of a node on the same chain
    #[arg(long, env = ENV_RPC_URL)]
    rpc: Option<String>,

    /// Account used to decide which actions are available
    #[arg(short, long, value_parser = parse_address)]
    account: Option<Address>,

    /// Keep polling and print new moves as they arrive
    #[arg(short, long)]
    follow: bool,

    /// Poll interval in milliseconds when following
    #[arg(long, env = ENV_POLL_MS)]
    poll_ms: Option<u64>,

    /// First block scanned for moves
    #[arg(long, env = ENV_FROM_BLOCK)]
    from_block: Option<u64>,
}

/// Prints what the session learns to stdout, problems to stderr.
struct TerminalSink {
    account: Address,
    metadata: Option<GameMetadata>,
    factory: Option<FactoryState>,
    status: Option<GameStatusSnapshot>,
    printed_moves: usize,
}

impl TerminalSink {
    fn new(account: Address) -> Self {
        Self {
            account,
            metadata: None,
            factory: None,
            status: None,
            printed_moves: 0,
        }
    }
}

impl DetailsSink for TerminalSink {
    fn metadata(&mut self, game: &GameMetadata) {
        self.metadata = Some(game.clone());
    }

    fn factory(&mut self, state: FactoryState) {
        self.factory = Some(state);
    }

    fn status(&mut self, snapshot: GameStatusSnapshot) {
        self.status = Some(snapshot);
    }

    // Token is the last read of a refresh, so the list is complete here.
    fn token(&mut self, token: TokenData) {
        let (Some(game), Some(factory), Some(status)) =
            (&self.metadata, &self.factory, &self.status)
        else {
            return;
        };
        let view = DetailsView::derive(game, self.account, status, &token, factory);
        println!("{}", render::format_rows(&render::details_rows(game, &view, &token)));
        println!("Actions  {}", render::action_names(&view.actions));
        println!();
    }

    fn moves(&mut self, entries: &[MoveLogEntry]) {
        if self.printed_moves == 0 {
            if entries.is_empty() {
                println!("No moves yet.");
                return;
            }
            println!("{}", render::MOVE_HEADER);
        }
        for entry in entries.iter().skip(self.printed_moves) {
            println!("{}", render::move_line(entry));
        }
        self.printed_moves = entries.len();
    }

    fn error(&mut self, source: Collaborator, message: Option<String>) {
        if let Some(message) = message {
            eprintln!("{source:?}: {message}");
        }
    }

    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => eprintln!("Error: {}", notice.text),
            NoticeLevel::Info | NoticeLevel::Success => println!("{}", notice.text),
        }
    }
}

async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

#[tokio::main]
async fn main() {
    // Initialise tracing (respects RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let defaults = AppConfig::default();
    let config = AppConfig {
        api_base: cli.api.trim_end_matches('/').to_string(),
        rpc_url: cli.rpc.unwrap_or(defaults.rpc_url),
        poll_interval_ms: cli.poll_ms.map_or(defaults.poll_interval_ms, |ms| ms.max(250)),
        logs_from_block: cli.from_block.unwrap_or(defaults.logs_from_block),
        ..defaults
    };
    let account = cli.account.unwrap_or(Address::ZERO);

    tracing::info!(
        game = %cli.game,
        chain_id = cli.chain_id,
        rpc = %config.rpc_url,
        "inspecting game"
    );

    let session = DetailsSession::new(
        ExploreApi::new(ReqwestHttp::new(), config.api_base.clone()),
        GameChain::new(HttpRpc::new(config.rpc_url.clone())),
        SessionParams {
            game_address: cli.game,
            account,
            chain_id: cli.chain_id,
            poll_interval_ms: config.poll_interval_ms,
            logs_from_block: config.logs_from_block,
        },
    );
    let mut sink = TerminalSink::new(account);

    // An empty request stream ends the session after the first log poll.
    if cli.follow {
        session.run(&mut sink, stream::pending::<SessionRequest>(), sleep_ms).await;
    } else {
        session.run(&mut sink, stream::empty::<SessionRequest>(), sleep_ms).await;
    }
}
