// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, lookup outcomes)
// - Spawning one lookup task per accepted submission
//
// One submission is processed at a time: the busy flag in App rejects a
// new submission while a lookup is outstanding, so at most one task and
// one pending outcome exist at any moment.

pub mod app;
pub mod components;
pub mod input;
pub mod search;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::events::LookupEvent;
use crate::logging::LogBuffer;
use crate::lookup::LookupClient;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use theme::ThemeKind;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done - including on error, so a failed draw never leaves the
/// shell in raw mode.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    let client = LookupClient::new(&config.endpoint, config.timeout())?;

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(log_buffer, ThemeKind::from_name(&config.theme));

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, client).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard and mouse input
/// 2. Timer ticks (spinner animation, periodic redraw)
/// 3. Lookup outcomes from the spawned request task
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: LookupClient,
) -> Result<()> {
    // Outcome channel: capacity 1 suffices since the busy flag keeps at
    // most one lookup in flight
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<LookupEvent>(1);

    // Ticker for periodic redraws and spinner animation
    let mut tick_interval = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => {
                            handle_key_event(app, key_event, &client, &outcome_tx);
                        }
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick for spinner animation
            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            // The outstanding lookup settled
            Some(outcome) = outcome_rx.recv() => {
                app.apply_outcome(outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Spawn the lookup task for an accepted submission
fn spawn_lookup(
    app: &mut App,
    client: &LookupClient,
    outcome_tx: &mpsc::Sender<LookupEvent>,
) {
    let Some(word) = app.submit() else {
        return;
    };

    let client = client.clone();
    let tx = outcome_tx.clone();
    tokio::spawn(async move {
        let outcome = client.lookup(&word).await;
        // The receiver lives as long as the event loop; if it is gone the
        // app is shutting down and the outcome is moot
        let _ = tx.send(LookupEvent { word, outcome }).await;
    });
}

/// Handle keyboard input
fn handle_key_event(
    app: &mut App,
    key_event: KeyEvent,
    client: &LookupClient,
    outcome_tx: &mpsc::Sender<LookupEvent>,
) {
    if key_event.kind == KeyEventKind::Release {
        app.input_handler.handle_key_release(key_event.code);
        return;
    }

    let key = key_event.code;

    // Ctrl shortcuts work regardless of other state
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        if matches!(key, KeyCode::Char('c') | KeyCode::Char('q')) {
            app.should_quit = true;
        }
        return;
    }

    // Help overlay absorbs input until dismissed
    if app.show_help {
        if matches!(key, KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter)
            && app.input_handler.handle_key_press(key)
        {
            app.show_help = false;
        }
        return;
    }

    match key {
        // Submission trigger: Enter is debounced so terminals that
        // report press+repeat for one keystroke cannot double-submit
        // (the busy flag would reject the second anyway)
        KeyCode::Enter => {
            if app.input_handler.handle_key_press(key) {
                spawn_lookup(app, client, outcome_tx);
            }
        }
        KeyCode::Esc => {
            if app.input_handler.handle_key_press(key) {
                app.clear();
            }
        }
        KeyCode::F(1) => {
            if app.input_handler.handle_key_press(key) {
                app.show_help = true;
            }
        }
        KeyCode::F(2) => {
            if app.input_handler.handle_key_press(key) {
                app.show_logs = !app.show_logs;
            }
        }
        KeyCode::F(3) => {
            if app.input_handler.handle_key_press(key) {
                app.theme = app.theme.next();
            }
        }

        // Results scrolling (hold-to-repeat via the input handler)
        KeyCode::Up => {
            if app.input_handler.handle_key_press(key) {
                app.scroll_up(1);
            }
        }
        KeyCode::Down => {
            if app.input_handler.handle_key_press(key) {
                app.scroll_down(1, usize::MAX);
            }
        }
        KeyCode::PageUp => {
            if app.input_handler.handle_key_press(key) {
                app.scroll_up(10);
            }
        }
        KeyCode::PageDown => {
            if app.input_handler.handle_key_press(key) {
                app.scroll_down(10, usize::MAX);
            }
        }

        // Line editing goes straight to the search bar; the terminal's
        // own key repeat is the desired behavior here
        KeyCode::Backspace => app.search.backspace(),
        KeyCode::Delete => app.search.delete(),
        KeyCode::Left => app.search.move_left(),
        KeyCode::Right => app.search.move_right(),
        KeyCode::Home => app.search.move_home(),
        KeyCode::End => app.search.move_end(),
        KeyCode::Char(c) => app.search.insert(c),

        _ => {}
    }
}

/// Handle mouse input - wheel scrolls the results panel
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    match mouse_event.kind {
        MouseEventKind::ScrollUp => app.scroll_up(2),
        MouseEventKind::ScrollDown => app.scroll_down(2, usize::MAX),
        _ => {}
    }
}
