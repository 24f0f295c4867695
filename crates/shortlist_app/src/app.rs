//! Dispatch loop: owns the table state, folds messages through the reducer,
//! hands effects to the runner, and re-renders when the state is dirty.

use std::io::{self, BufRead};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use client_logging::{client_error, client_info};
use shortlist_client::{ApiError, ApiHandle};
use shortlist_core::{update, Msg, TableState, TableViewModel};

use crate::config::AppConfig;
use crate::effects::EffectRunner;
use crate::input::{self, InputCommand};
use crate::render;

pub fn run(config: AppConfig) -> Result<(), ApiError> {
    let api = ApiHandle::new(config.api_settings())?;
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(msg_tx.clone(), api);

    let shared = Arc::new(Mutex::new(TableState::with_page_size(config.page_size)));
    let quit = Arc::new(AtomicBool::new(false));
    spawn_input_thread(msg_tx.clone(), shared.clone(), quit.clone());

    client_info!("Browsing {}", config.base_url);
    let _ = msg_tx.send(Msg::Started);

    while !quit.load(Ordering::Relaxed) {
        match msg_rx.recv_timeout(Duration::from_millis(100)) {
            Ok(msg) => dispatch(&shared, &runner, &msg_tx, msg),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    client_info!("Shutting down");
    Ok(())
}

fn dispatch(
    shared: &Arc<Mutex<TableState>>,
    runner: &EffectRunner,
    msg_tx: &mpsc::Sender<Msg>,
    msg: Msg,
) {
    let (maybe_view, effects) = {
        let mut guard = shared.lock().expect("lock table state");
        let state = std::mem::take(&mut *guard);
        let (mut state, effects) = update(state, msg);
        let maybe_view = if state.consume_dirty() {
            Some(state.view())
        } else {
            None
        };
        *guard = state;
        (maybe_view, effects)
    };

    runner.enqueue(effects);

    if let Some(view) = maybe_view {
        for line in render::render(&view) {
            println!("{line}");
        }
        if view.alert.is_some() {
            // Shown once; clear it so the next redraw is alert-free.
            let _ = msg_tx.send(Msg::AlertDismissed);
        }
    }
}

fn spawn_input_thread(
    msg_tx: mpsc::Sender<Msg>,
    shared: Arc<Mutex<TableState>>,
    quit: Arc<AtomicBool>,
) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line.trim().is_empty() {
                continue;
            }
            let Some(command) = input::parse(&line) else {
                println!("{}", input::USAGE);
                continue;
            };
            if command == InputCommand::Quit {
                break;
            }
            let view = shared.lock().expect("lock table state").view();
            if let Some(msg) = handle_command(command, &view) {
                if msg_tx.send(msg).is_err() {
                    break;
                }
            }
        }
        quit.store(true, Ordering::Relaxed);
        // Wake the dispatch loop so it notices the flag.
        let _ = msg_tx.send(Msg::NoOp);
    });
}

/// Maps a parsed command to a message, resolving against the current view.
/// Commands that only inspect state are answered here directly.
fn handle_command(command: InputCommand, view: &TableViewModel) -> Option<Msg> {
    match command {
        InputCommand::Collections => {
            if view.collections.is_empty() {
                println!("no collections loaded yet");
            }
            for (index, collection) in view.collections.iter().enumerate() {
                println!("{}. {}", index + 1, collection.name);
            }
            None
        }
        InputCommand::Open(index) => match view.collections.get(index - 1) {
            Some(collection) => Some(Msg::CollectionSelected(collection.id.clone())),
            None => {
                println!("no collection #{index}");
                None
            }
        },
        InputCommand::Page(page) => Some(Msg::PageChanged {
            page: page - 1,
            page_size: view.page_size,
        }),
        InputCommand::PageSize(page_size) => Some(Msg::PageChanged { page: 0, page_size }),
        InputCommand::Select(ids) => Some(Msg::SelectionChanged(ids)),
        InputCommand::ClearSelection => Some(Msg::SelectionChanged(Vec::new())),
        InputCommand::Toggle(company_id) => {
            if !view.liked_ready {
                client_error!("Liked collection not resolved; ignoring toggle");
                return None;
            }
            Some(Msg::ToggleLike { company_id })
        }
        InputCommand::BulkLike | InputCommand::BulkUnlike if !view.liked_ready => {
            client_error!("Liked collection not resolved; ignoring bulk action");
            None
        }
        InputCommand::BulkLike => Some(Msg::BulkLikeClicked),
        InputCommand::BulkUnlike => Some(Msg::BulkUnlikeClicked),
        InputCommand::Refresh => Some(Msg::PageChanged {
            page: view.page,
            page_size: view.page_size,
        }),
        InputCommand::Help => {
            println!("{}", input::USAGE);
            None
        }
        InputCommand::Quit => None,
    }
}
