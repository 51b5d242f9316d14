//! paxboard binary: terminal setup, wiring, and the effect handler
//!
//! Wiring happens once here: the hub and the entity client are constructed
//! at startup and passed by reference (no globals), and the hub bridge
//! subscriptions are registered with explicit teardown after the loop ends.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use paxboard_core::{
    ChangeKind, EffectContext, EffectRuntime, EffectStoreWithMiddleware, Hub, HubKey,
    LoggingMiddleware,
};

use paxboard::action::Action;
use paxboard::api::HttpTransport;
use paxboard::client::PassengerClient;
use paxboard::components::{Board, BoardProps, Component};
use paxboard::effect::Effect;
use paxboard::model::{Passenger, PassengerPatch, ENTITY};
use paxboard::reducer::reducer;
use paxboard::state::AppState;

/// Terminal UI for a passenger roster service
#[derive(Parser, Debug)]
#[command(name = "paxboard")]
#[command(about = "Manage a passenger roster over its CRUD HTTP API")]
struct Args {
    /// Base URL of the passenger service API
    #[arg(long, default_value = "http://localhost:8080/api")]
    base_url: String,

    /// Value for the X-Auth-Token header
    #[arg(long, default_value = "123")]
    token: String,

    /// Append tracing output to this file (the terminal itself is in use)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(path: &Path) -> io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, args).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    args: Args,
) -> io::Result<()> {
    let hub = Arc::new(Hub::new());
    let transport = HttpTransport::new(args.base_url, args.token);
    let client = Arc::new(PassengerClient::new(transport, hub.clone()));

    let store = EffectStoreWithMiddleware::new(AppState::default(), reducer, LoggingMiddleware::new());
    let mut runtime = EffectRuntime::from_store(store);

    // Bridge hub publications into the action queue. The roster listens for
    // create (full re-fetch) and update (row replacement). Delete is not
    // wired: removal is unsupported in this UI (see DESIGN.md).
    let tx = runtime.action_tx();
    let create_sub = hub.subscribe(HubKey::new(ENTITY, ChangeKind::Create), move |p: &Passenger| {
        let _ = tx.send(Action::PassengerDidCreate(p.clone()));
    });
    let tx = runtime.action_tx();
    let update_sub = hub.subscribe(HubKey::new(ENTITY, ChangeKind::Update), move |p: &Passenger| {
        let _ = tx.send(Action::PassengerDidUpdate(p.clone()));
    });

    // Initial roster fetch
    runtime.enqueue(Action::RosterFetch);

    let ui = RefCell::new(Board::new());

    let result = runtime
        .run(
            terminal,
            |frame, area, state| {
                ui.borrow_mut().render(frame, area, BoardProps { state });
            },
            |event, state| ui.borrow_mut().map_event(event, state),
            |action| matches!(action, Action::Quit),
            |effect, ctx| handle_effect(effect, &client, ctx),
        )
        .await;

    hub.unsubscribe(create_sub);
    hub.unsubscribe(update_sub);

    result
}

/// Handle effects by spawning client calls as tasks.
///
/// The roster fetch uses a fixed key so a newer refresh supersedes an
/// in-flight one. Mutations use `spawn_each`: once issued they run to
/// completion, and their successes come back through the hub rather than
/// a task action.
fn handle_effect(
    effect: Effect,
    client: &Arc<PassengerClient<HttpTransport>>,
    ctx: &mut EffectContext<Action>,
) {
    match effect {
        Effect::FetchRoster => {
            let client = client.clone();
            ctx.tasks().spawn("roster", async move {
                match client.list().await {
                    Ok(passengers) => Some(Action::RosterDidLoad(passengers)),
                    Err(e) => Some(Action::RosterDidError(e.to_string())),
                }
            });
        }
        Effect::CreatePassenger { first_name } => {
            let client = client.clone();
            ctx.tasks().spawn_each("create", async move {
                match client.create(PassengerPatch::with_first_name(first_name)).await {
                    Ok(_) => None,
                    Err(e) => Some(Action::PassengerDidError(e.to_string())),
                }
            });
        }
        Effect::UpdateStatus { id, status } => {
            let client = client.clone();
            ctx.tasks().spawn_each("update", async move {
                match client.update(&id, PassengerPatch::with_status(status)).await {
                    Ok(_) => None,
                    Err(e) => Some(Action::PassengerDidError(e.to_string())),
                }
            });
        }
    }
}
