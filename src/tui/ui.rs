// Screen layout - arranges the panels for the single search view
//
// Top to bottom: search bar, error banner (only while an error is
// displayed), results panel, optional logs panel, status bar. The help
// overlay draws on top of everything.

use super::app::{App, Display};
use super::components;
use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

/// Height of the logs panel when toggled on
const LOGS_PANEL_HEIGHT: u16 = 10;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let theme = app.theme.theme();

    // Apply theme background to the entire frame
    let bg_block = Block::default().style(Style::default().bg(theme.bg));
    f.render_widget(bg_block, f.area());

    let has_error = matches!(app.display, Display::Error(_));

    let mut constraints = vec![Constraint::Length(3)]; // search bar
    if has_error {
        constraints.push(Constraint::Length(3)); // error banner
    }
    constraints.push(Constraint::Min(5)); // results
    if app.show_logs {
        constraints.push(Constraint::Length(LOGS_PANEL_HEIGHT));
    }
    constraints.push(Constraint::Length(2)); // status bar

    let chunks = Layout::vertical(constraints).split(f.area());

    let mut idx = 0;
    components::render_search_bar(f, chunks[idx], app);
    idx += 1;

    if has_error {
        components::render_error_banner(f, chunks[idx], app);
        idx += 1;
    }

    components::render_results(f, chunks[idx], app);
    idx += 1;

    if app.show_logs {
        components::render_logs_panel(f, chunks[idx], app);
        idx += 1;
    }

    components::render_status_bar(f, chunks[idx], app);

    // Help overlay on top of everything
    if app.show_help {
        components::render_help_overlay(f, app);
    }
}
