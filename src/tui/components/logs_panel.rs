// Logs panel component
//
// Shows the most recent captured tracing output when toggled with F2.
// Entries come from the in-memory log buffer; newest at the bottom.

use crate::logging::LogLevel;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the logs panel with the most recent entries that fit
pub fn render_logs_panel(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();
    let entries = app.log_buffer.get_all();

    let viewport = area.height.saturating_sub(2) as usize;
    let start = entries.len().saturating_sub(viewport);

    let lines: Vec<Line> = entries[start..]
        .iter()
        .map(|entry| {
            let level_color = match entry.level {
                LogLevel::Error => theme.log_error,
                LogLevel::Warn => theme.log_warn,
                LogLevel::Info => theme.log_info,
                LogLevel::Debug => theme.log_debug,
                LogLevel::Trace => theme.log_trace,
            };

            Line::from(vec![
                Span::styled(
                    format!("{} ", entry.timestamp.format("%H:%M:%S")),
                    Style::default().fg(theme.status_bar),
                ),
                Span::styled(
                    format!("{:5} ", entry.level.as_str()),
                    Style::default().fg(level_color),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(theme.fg)),
            ])
        })
        .collect();

    let logs = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Logs "),
    );

    f.render_widget(logs, area);
}
