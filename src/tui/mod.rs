//! TUI for browsing the portfolio.

pub mod app;
pub mod pages;
pub mod print;
pub mod state;
pub mod widgets;

use std::io::stdout;

use app::App;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::prelude::*;
use state::UiState;
use tokio::time::sleep;
use tracing::info;

use crate::{
    animation::{spawn_engine_loader, LoaderOptions},
    config::Settings,
    error::Result,
};

pub async fn run(settings: Settings) -> Result<()> {
    enable_raw_mode()?;
    stdout()
        .execute(EnterAlternateScreen)?
        .execute(EnableMouseCapture)?;

    let result = event_loop(settings).await;

    disable_raw_mode()?;
    stdout()
        .execute(DisableMouseCapture)?
        .execute(LeaveAlternateScreen)?;

    result
}

async fn event_loop(settings: Settings) -> Result<()> {
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let engine = spawn_engine_loader(LoaderOptions::from_env(settings.animations));
    let mut app = App::new(UiState::new(settings.page, settings.theme), engine);
    let mut event_stream = EventStream::new();
    info!(page = ?settings.page, theme = settings.theme.name(), "tui started");

    while !app.should_exit {
        terminal.draw(|frame| app.render(frame))?;

        tokio::select! {
            Some(Ok(event)) = event_stream.next() => {
                app.handle_event(&event);
            }
            () = sleep(app.frame_interval()) => {}
        }
    }

    info!("tui exited");
    Ok(())
}
