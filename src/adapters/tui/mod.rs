//! Terminal UI Adapter
//!
//! Drives `BrowserState` from terminal input with ratatui + crossterm.
//! A blocking thread reads keys and spawned tasks run fetches; both post
//! events onto one channel consumed by the loop below.

mod input;
mod terminal;
pub mod view;

pub use input::{map_event, map_key, spawn_key_reader};
pub use terminal::TerminalGuard;

use std::io;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::application::browser::{fetch_all, BrowserEvent, BrowserState, Command, FetchRequest};
use crate::application::RankingService;
use crate::ports::TokenSource;

/// Run an interactive session until the user quits
pub async fn run<S>(service: Arc<RankingService<S>>, state: BrowserState) -> io::Result<()>
where
    S: TokenSource + 'static,
{
    let mut guard = TerminalGuard::new()?;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let reader = spawn_key_reader(tx.clone());

    if let Command::FetchAll(request) = state.initial_command() {
        spawn_fetch(&service, request, &tx);
    }

    let mut state = state;
    let result = loop {
        if let Err(e) = guard.terminal_mut().draw(|f| view::draw(f, &state)) {
            break Err(e);
        }

        let Some(event) = rx.recv().await else {
            break Ok(());
        };

        let (next, command) = state.update(event);
        state = next;

        match command {
            Some(Command::Quit) => break Ok(()),
            Some(Command::FetchAll(request)) => spawn_fetch(&service, request, &tx),
            None => {}
        }
    };

    // closing the channel stops the reader thread
    drop(rx);
    let _ = reader.join();
    tracing::info!("Browser session ended");
    result
}

fn spawn_fetch<S>(
    service: &Arc<RankingService<S>>,
    request: FetchRequest,
    tx: &UnboundedSender<BrowserEvent>,
) where
    S: TokenSource + 'static,
{
    tracing::debug!(
        pairs = request.pair_count(),
        top_volume = request.top_volume,
        top_change = request.top_change,
        "Dispatching fetch-all"
    );
    let service = Arc::clone(service);
    let tx = tx.clone();
    tokio::spawn(async move {
        let event = fetch_all(&service, &request).await;
        // the loop may already be gone
        let _ = tx.send(event);
    });
}
