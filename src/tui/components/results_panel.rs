// Results panel - renders one dictionary entry
//
// The panel content is rebuilt from the Entry on every frame by a pure
// function, so rendering the same entry twice always produces the same
// lines and prior content can never accumulate.
//
// Layout per entry:
//   word  /phonetic/          (phonetic omitted when absent or blank)
//
//   part of speech            (omitted when absent)
//     1. definition text
//        Example: usage text  (omitted when absent)

use crate::lookup::Entry;
use crate::tui::app::{App, Display};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Build the styled lines for a dictionary entry.
///
/// Meanings and definitions keep the order the API supplied - no
/// re-sorting.
pub fn entry_lines(entry: &Entry, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    // Header: word plus optional phonetic transcription
    let mut header = vec![Span::styled(
        entry.word.clone(),
        Style::default().fg(theme.word).add_modifier(Modifier::BOLD),
    )];
    if let Some(phonetic) = entry.display_phonetic() {
        header.push(Span::raw("  "));
        header.push(Span::styled(
            phonetic.to_string(),
            Style::default()
                .fg(theme.phonetic)
                .add_modifier(Modifier::ITALIC),
        ));
    }
    lines.push(Line::from(header));

    for meaning in &entry.meanings {
        lines.push(Line::default());

        if let Some(pos) = &meaning.part_of_speech {
            lines.push(Line::from(Span::styled(
                pos.clone(),
                Style::default()
                    .fg(theme.part_of_speech)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        for (i, definition) in meaning.definitions.iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}. ", i + 1),
                    Style::default().fg(theme.part_of_speech),
                ),
                Span::styled(
                    definition.definition.clone(),
                    Style::default().fg(theme.fg),
                ),
            ]));

            if let Some(example) = &definition.example {
                lines.push(Line::from(Span::styled(
                    format!("     Example: {example}"),
                    Style::default()
                        .fg(theme.example)
                        .add_modifier(Modifier::ITALIC),
                )));
            }
        }
    }

    lines
}

/// Render the results region.
///
/// Clamps the scroll offset against the content height, so the caller
/// can scroll freely and the view never runs past the last line.
pub fn render_results(f: &mut Frame, area: Rect, app: &mut App) {
    let theme = app.theme.theme();

    let lines = match &app.display {
        Display::Entry(entry) => entry_lines(entry, &theme),
        // The error banner owns failure display; the results region
        // stays blank so the two can never show at once.
        Display::Error(_) | Display::Empty => {
            if app.busy {
                vec![Line::default()]
            } else {
                vec![
                    Line::default(),
                    Line::from(Span::styled(
                        "  Type a word and press Enter to look it up.",
                        Style::default().fg(theme.status_bar),
                    )),
                ]
            }
        }
    };

    let viewport = area.height.saturating_sub(2) as usize;
    let max_scroll = lines.len().saturating_sub(viewport);
    app.scroll = app.scroll.min(max_scroll);

    let results = Paragraph::new(lines)
        .style(Style::default().fg(theme.fg))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll as u16, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Results "),
        );

    f.render_widget(results, area);
}
