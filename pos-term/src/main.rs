//! POS staff terminal
//!
//! Run: cargo run -p pos-term
//! Configuration comes from the environment (POS_BASE_URL, POS_WS_URL,
//! POS_DATA_DIR, POS_STRICT_ERRORS); a `.env` file is honored.

mod app;
mod board;
mod form;
mod settings;
mod ui;

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::prelude::*;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pos_client::{FeedEvent, FeedHandle};

use crate::app::App;
use crate::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    let settings = Settings::from_env();
    let mut app = App::new(settings).await?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> anyhow::Result<()> {
    let mut events = crossterm::event::EventStream::new();

    loop {
        terminal.draw(|f| ui::draw(f, app))?;
        if app.should_quit {
            return Ok(());
        }

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(event)) => app.handle_event(event).await,
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {e}");
                        return Ok(());
                    }
                    None => return Ok(()),
                }
            }

            event = next_feed(&mut app.feed), if app.feed.is_some() => {
                app.on_feed_event(event).await;
            }
        }
    }
}

async fn next_feed(feed: &mut Option<FeedHandle>) -> Option<FeedEvent> {
    match feed {
        Some(handle) => handle.recv().await,
        None => std::future::pending().await,
    }
}
