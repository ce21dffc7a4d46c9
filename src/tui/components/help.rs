// Help overlay
//
// A centered modal listing keybindings, drawn on top of everything with
// `Clear` so the underlying panels don't bleed through.

use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const KEYS: &[(&str, &str)] = &[
    ("Enter", "Look up the typed word"),
    ("Esc", "Clear input and results"),
    ("Up/Down", "Scroll results"),
    ("PgUp/PgDn", "Scroll results by page"),
    ("F1", "Toggle this help"),
    ("F2", "Toggle logs panel"),
    ("F3", "Cycle theme"),
    ("Ctrl+C", "Quit"),
];

/// Render the help overlay centered in the frame
pub fn render_help_overlay(f: &mut Frame, app: &App) {
    let theme = app.theme.theme();
    let frame_area = f.area();

    let width = 44u16.min(frame_area.width.saturating_sub(4));
    let height = (KEYS.len() as u16 + 4).min(frame_area.height.saturating_sub(2));
    let x = frame_area.x + (frame_area.width.saturating_sub(width)) / 2;
    let y = frame_area.y + (frame_area.height.saturating_sub(height)) / 2;
    let area = Rect::new(x, y, width, height);

    let mut lines = vec![Line::default()];
    for (key, action) in KEYS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key:<10}"),
                Style::default()
                    .fg(theme.title)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*action, Style::default().fg(theme.fg)),
        ]));
    }

    let help = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .style(Style::default().bg(theme.bg))
            .title(" Help ")
            .title_alignment(Alignment::Center),
    );

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
