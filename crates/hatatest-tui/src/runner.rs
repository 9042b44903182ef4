//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use tokio::sync::mpsc;

use hatatest_api::ApiClient;
use hatatest_app::message::Message;
use hatatest_app::{AppState, Settings};
use hatatest_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI application against the configured backend.
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let api = Arc::new(ApiClient::new(&settings.server.base_url));
    info!("Using backend at {}", api.base_url());

    let mut term = ratatui::init();
    let mut state = AppState::with_settings(settings);

    // Unified message channel: background tasks report back through it.
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(256);

    // Eagerly load stats and the model catalog in parallel before the
    // first interactive frame.
    process_message(&mut state, Message::Bootstrap, &api, &msg_tx);

    let result = run_loop(&mut term, &mut state, &mut msg_rx, &msg_tx, &api);

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    msg_tx: &mpsc::Sender<Message>,
    api: &Arc<ApiClient>,
) -> Result<()> {
    while !state.should_quit() {
        // Drain completions from background tasks (non-blocking)
        while let Ok(message) = msg_rx.try_recv() {
            process_message(state, message, api, msg_tx);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, api, msg_tx);
        }
    }

    Ok(())
}

/// Fold a message (and any follow-ups) into the state and dispatch the
/// resulting actions onto background tasks.
fn process_message(
    state: &mut AppState,
    message: Message,
    api: &Arc<ApiClient>,
    msg_tx: &mpsc::Sender<Message>,
) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = hatatest_app::update(state, message);
        next = result.message;
        for action in result.actions {
            hatatest_app::handle_action(action, api, msg_tx);
        }
    }
}
