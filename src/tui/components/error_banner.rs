// Error banner component
//
// A dedicated region for failure messages, shown between the search bar
// and the results panel only while `Display::Error` is active. The
// results panel is blank whenever this renders - the two regions are
// mutually exclusive by construction of the `Display` enum.

use crate::tui::app::{App, Display};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the error banner. Expects to be called only when an error is
/// being displayed; renders nothing otherwise.
pub fn render_error_banner(f: &mut Frame, area: Rect, app: &App) {
    let Display::Error(message) = &app.display else {
        return;
    };

    let theme = app.theme.theme();

    let banner = Paragraph::new(message.as_str())
        .style(
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error)),
        );

    f.render_widget(banner, area);
}
