// Status bar component
//
// Renders session statistics and key hints at the bottom: uptime, lookup
// counters, current theme, and the busy indicator.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar with session statistics
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();
    let stats = &app.stats;

    let busy_info = if app.busy {
        format!(" {} looking up…  │", app.spinner())
    } else {
        String::new()
    };

    let status_text = format!(
        "{} {} │ 🔎 {} ✓ {} ✗ {} │ {} │ F1 help  F2 logs  F3 theme  Esc clear  Ctrl+C quit",
        busy_info,
        stats.uptime_display(),
        stats.lookups,
        stats.found,
        stats.failed,
        app.theme.name(),
    );

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
