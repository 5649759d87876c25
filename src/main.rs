mod app;
mod config;
mod logging;
mod submission;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::*;
use crate::submission::client::{HttpBackend, ScriptBackend};
use crate::submission::view::ChannelView;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    if let Err(e) = logging::init(&cfg.logging) {
        eprintln!("Warning: {:#}", e);
    }
    info!(server = %cfg.server.base_url, "starting");

    let backend: Arc<dyn ScriptBackend> = Arc::new(HttpBackend::from_config(&cfg.server)?);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_app(&mut terminal, cfg, backend).await;

    restore_terminal()?;

    if let Err(e) = result {
        error!(error = %e, "exiting with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    backend: Arc<dyn ScriptBackend>,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();
    let period = cfg.progress.interval();
    let mut state = AppState::new(cfg);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_MS));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    terminal.draw(|f| ui::render(f, &state))?;

    while let Some(event) = event_rx.recv().await {
        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::CheckMovie { movie } => {
                    let backend = Arc::clone(&backend);
                    let tx = event_tx.clone();
                    tokio::spawn(async move {
                        let result = backend.check_movie(&movie).await;
                        let _ = tx.send(AppEvent::MovieChecked { movie, result });
                    });
                }
                Action::Submit { movie, prompt } => {
                    let backend = Arc::clone(&backend);
                    let tx = event_tx.clone();
                    tokio::spawn(async move {
                        let view = ChannelView::new(tx.clone(), AppEvent::Submission);
                        let result =
                            submission::submit(&movie, &prompt, &view, &*backend, period).await;
                        let _ = tx.send(AppEvent::SubmissionFinished {
                            result: result.map(|_| ()),
                        });
                    });
                }
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            info!("quitting");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
