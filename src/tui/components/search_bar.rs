// Search bar component
//
// Renders the text input with its cursor, and swaps the title to a
// spinner while a lookup is outstanding so the busy state is visible
// right where the user is typing.

use crate::tui::app::App;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the search bar with the terminal cursor inside it
pub fn render_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme.theme();

    let title = if app.busy {
        format!(" {} Searching… ", app.spinner())
    } else {
        " Search ".to_string()
    };

    let border_color = if app.busy {
        theme.busy
    } else {
        theme.border_focused
    };

    let input = Paragraph::new(app.search.text())
        .style(Style::default().fg(theme.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(title)
                .title_style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD)),
        );

    f.render_widget(input, area);

    // Place the terminal cursor at the edit position (inside the border)
    let x = area.x + 1 + app.search.cursor_column();
    let y = area.y + 1;
    if x < area.right().saturating_sub(1) {
        f.set_cursor_position(Position::new(x, y));
    }
}
