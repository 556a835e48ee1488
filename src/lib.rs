pub mod action;
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod logging;
pub mod model;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::KeyCode;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tokio::sync::mpsc;

use action::{Action, InputEvent, IoEvent};
use api::ApiClient;
use app::App;
use config::AppConfig;
use event::spawn_input_reader;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run(config: AppConfig) -> Result<()> {
    let api_client = ApiClient::new(config.base_url);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (io_tx, mut io_rx) = mpsc::unbounded_channel::<IoEvent>();
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Create app
    let mut app = App::new(io_tx);
    app.init();

    let mut input_rx = spawn_input_reader();

    // Spawn network task. Commands are drained one at a time, so requests
    // go out in dispatch order; nothing is deduplicated or cancelled.
    tokio::spawn(async move {
        while let Some(io_event) = io_rx.recv().await {
            let result = handle_io_event(&api_client, io_event).await;
            let _ = action_tx.send(result);
        }
    });

    let result = event_loop(&mut terminal, &mut app, &mut input_rx, &mut action_rx).await;

    // Restore terminal on the error path too
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Draw, then wait for whichever comes first: a redraw tick, terminal
/// input, or a network completion.
async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    input_rx: &mut mpsc::UnboundedReceiver<InputEvent>,
    action_rx: &mut mpsc::UnboundedReceiver<Action>,
) -> Result<()> {
    let mut tick = tokio::time::interval(TICK_RATE);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        tokio::select! {
            _ = tick.tick() => {}
            input = input_rx.recv() => {
                match input {
                    Some(InputEvent::Key(key)) => {
                        handle_key_event(app, key);
                    }
                    Some(InputEvent::Resize(_, _)) => {
                        // Terminal re-draws on the next loop turn
                    }
                    None => anyhow::bail!("input channel closed"),
                }
            }
            Some(action) = action_rx.recv() => {
                app.update(action);
            }
        }

        if !app.running {
            return Ok(());
        }
    }
}

fn handle_key_event(app: &mut App, key: crossterm::event::KeyEvent) {
    if app.show_help {
        match key.code {
            KeyCode::Char('?') | KeyCode::Esc => {
                app.show_help = false;
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        // List navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }
        KeyCode::Enter => {
            app.select_highlighted();
        }

        // Box office actions
        KeyCode::Char('b') => {
            app.buy_ticket();
        }
        KeyCode::Char('d') => {
            app.delete_current();
        }
        KeyCode::Char('r') => {
            app.refresh();
        }

        _ => {}
    }
}

async fn handle_io_event(client: &ApiClient, event: IoEvent) -> Action {
    match event {
        IoEvent::FetchFilms => match client.fetch_films().await {
            Ok(films) => Action::FilmsLoaded(films),
            Err(e) => Action::FilmsFailed(e),
        },
        IoEvent::UpdateFilm(film) => {
            let id = film.id;
            match client.update_film(&film).await {
                Ok(updated) => Action::FilmUpdated(updated),
                Err(e) => Action::UpdateFailed(id, e),
            }
        }
        IoEvent::DeleteFilm(id) => match client.delete_film(id).await {
            Ok(()) => Action::FilmDeleted(id),
            Err(e) => Action::DeleteFailed(id, e),
        },
    }
}
