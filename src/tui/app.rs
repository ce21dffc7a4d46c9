// TUI application state
//
// Owns everything the event loop mutates: the search bar, the busy flag,
// the display regions, session stats, and UI toggles. The submission
// state machine lives here so it can be tested without a terminal:
//
//   Idle -> Loading -> {Rendered | ErrorShown} -> Idle
//
// `Loading` is entered only from `Idle` on a valid non-empty input; the
// busy flag guarantees no second `Loading` before the current cycle
// settles.

use super::input::InputHandler;
use super::search::SearchInput;
use super::theme::ThemeKind;
use crate::events::{LookupEvent, Stats};
use crate::lookup::Entry;
use crate::logging::LogBuffer;

/// Validation message for empty submissions; never reaches the network layer
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a word to search.";

/// Spinner frames for the busy indicator
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// What the content area currently shows.
///
/// A single enum makes the spec's mutual-exclusion rule structural:
/// showing an error cannot leave a stale entry behind and vice versa.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Display {
    /// Nothing yet (startup, or cleared at the start of a lookup)
    #[default]
    Empty,
    /// The rendered entry for the last successful lookup
    Entry(Entry),
    /// A plain-text failure message in the error region
    Error(String),
}

/// Main application state for the TUI
pub struct App {
    /// Search bar line editor
    pub search: SearchInput,

    /// Busy flag: a lookup is outstanding. Serializes submissions.
    pub busy: bool,

    /// Current content of the result/error regions
    pub display: Display,

    /// Scroll offset into the rendered entry
    pub scroll: usize,

    /// Session counters
    pub stats: Stats,

    /// Current color theme
    pub theme: ThemeKind,

    /// Whether the logs panel is visible
    pub show_logs: bool,

    /// Whether the help overlay is visible
    pub show_help: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Input handler for debounce and hold-to-repeat
    pub input_handler: InputHandler,

    /// Log buffer for the logs panel
    pub log_buffer: LogBuffer,

    /// Animation frame counter for the busy spinner
    spinner_frame: usize,
}

impl App {
    pub fn new(log_buffer: LogBuffer, theme: ThemeKind) -> Self {
        Self {
            search: SearchInput::new(),
            busy: false,
            display: Display::default(),
            scroll: 0,
            stats: Stats::new(),
            theme,
            show_logs: false,
            show_help: false,
            should_quit: false,
            input_handler: InputHandler::default(),
            log_buffer,
            spinner_frame: 0,
        }
    }

    /// Handle a submission trigger (Enter in the search bar).
    ///
    /// Returns the normalized word to look up when a lookup should start.
    /// Returns `None` when the submission was rejected: empty input shows
    /// the validation message locally, and a submission while busy is
    /// ignored entirely so a second `Loading` can never begin.
    pub fn submit(&mut self) -> Option<String> {
        if self.busy {
            tracing::debug!("Submission ignored: lookup already in flight");
            return None;
        }

        let word = self.search.normalized();
        if word.is_empty() {
            self.display = Display::Error(EMPTY_INPUT_MESSAGE.to_string());
            return None;
        }

        // Enter Loading: disable further submissions and clear both
        // display regions before the request goes out.
        self.busy = true;
        self.display = Display::Empty;
        self.scroll = 0;
        self.stats.lookups += 1;

        tracing::info!(word, "Lookup started");
        Some(word)
    }

    /// Apply a settled lookup outcome.
    ///
    /// This is the single cleanup path for every spawned lookup - it runs
    /// on success and on failure, so the busy flag is always released and
    /// the interface stays usable after any error.
    pub fn apply_outcome(&mut self, event: LookupEvent) {
        self.busy = false;
        self.scroll = 0;

        match event.outcome {
            Ok(entry) => {
                tracing::info!(word = %event.word, "Lookup succeeded");
                self.stats.found += 1;
                self.display = Display::Entry(entry);
            }
            Err(err) => {
                self.stats.failed += 1;
                self.display = Display::Error(err.to_string());
            }
        }
    }

    /// Esc: clear the search bar and both display regions
    pub fn clear(&mut self) {
        self.search.clear();
        self.display = Display::Empty;
        self.scroll = 0;
    }

    /// Advance the spinner animation (called on every tick)
    pub fn tick_animation(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }

    /// Current spinner glyph for the busy indicator
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    /// Scroll down, clamped by the renderer against content height
    pub fn scroll_down(&mut self, lines: usize, max: usize) {
        self.scroll = (self.scroll + lines).min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::{LookupError, Entry};

    fn app() -> App {
        App::new(LogBuffer::new(), ThemeKind::Dark)
    }

    fn entry(word: &str) -> Entry {
        serde_json::from_value(serde_json::json!({"word": word})).unwrap()
    }

    fn type_word(app: &mut App, text: &str) {
        for c in text.chars() {
            app.search.insert(c);
        }
    }

    #[test]
    fn test_empty_submission_is_validation_error() {
        let mut app = app();
        assert_eq!(app.submit(), None);
        assert_eq!(app.display, Display::Error(EMPTY_INPUT_MESSAGE.to_string()));
        assert!(!app.busy);
        assert_eq!(app.stats.lookups, 0);
    }

    #[test]
    fn test_whitespace_only_submission_is_validation_error() {
        let mut app = app();
        type_word(&mut app, "   \t ");
        assert_eq!(app.submit(), None);
        assert_eq!(app.display, Display::Error(EMPTY_INPUT_MESSAGE.to_string()));
        assert_eq!(app.stats.lookups, 0);
    }

    #[test]
    fn test_submission_normalizes_and_enters_loading() {
        let mut app = app();
        type_word(&mut app, "  Ferret ");
        assert_eq!(app.submit(), Some("ferret".to_string()));
        assert!(app.busy);
        assert_eq!(app.display, Display::Empty);
        assert_eq!(app.stats.lookups, 1);
    }

    #[test]
    fn test_busy_flag_rejects_second_submission() {
        let mut app = app();
        type_word(&mut app, "cat");
        assert!(app.submit().is_some());

        // Second submission while the first is outstanding is ignored
        assert_eq!(app.submit(), None);
        assert_eq!(app.stats.lookups, 1);
    }

    #[test]
    fn test_success_outcome_renders_and_releases_busy() {
        let mut app = app();
        type_word(&mut app, "cat");
        let word = app.submit().unwrap();

        app.apply_outcome(LookupEvent {
            word,
            outcome: Ok(entry("cat")),
        });

        assert!(!app.busy);
        assert_eq!(app.display, Display::Entry(entry("cat")));
        assert_eq!(app.stats.found, 1);

        // The cycle returned to Idle: a new submission is accepted
        assert!(app.submit().is_some());
    }

    #[test]
    fn test_failure_outcome_shows_error_and_releases_busy() {
        let mut app = app();
        type_word(&mut app, "xyzzy");
        let word = app.submit().unwrap();

        app.apply_outcome(LookupEvent {
            word: word.clone(),
            outcome: Err(LookupError::NotFound { word }),
        });

        assert!(!app.busy);
        assert_eq!(
            app.display,
            Display::Error(
                "Word \"xyzzy\" not found. Please check your spelling and try again.".to_string()
            )
        );
        assert_eq!(app.stats.failed, 1);
    }

    #[test]
    fn test_error_replaces_result_and_result_replaces_error() {
        let mut app = app();

        // Render a result first
        type_word(&mut app, "cat");
        let word = app.submit().unwrap();
        app.apply_outcome(LookupEvent {
            word,
            outcome: Ok(entry("cat")),
        });

        // A failing lookup replaces it with the error - no stale entry
        let word = app.submit().unwrap();
        app.apply_outcome(LookupEvent {
            word,
            outcome: Err(LookupError::Network),
        });
        assert!(matches!(app.display, Display::Error(_)));

        // And a success replaces the error again
        let word = app.submit().unwrap();
        app.apply_outcome(LookupEvent {
            word,
            outcome: Ok(entry("cat")),
        });
        assert!(matches!(app.display, Display::Entry(_)));
    }

    #[test]
    fn test_clear_resets_input_and_display() {
        let mut app = app();
        type_word(&mut app, "cat");
        let word = app.submit().unwrap();
        app.apply_outcome(LookupEvent {
            word,
            outcome: Ok(entry("cat")),
        });

        app.clear();
        assert_eq!(app.search.text(), "");
        assert_eq!(app.display, Display::Empty);
    }
}
