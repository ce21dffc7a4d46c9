// UI components - the panels that make up the single search view
//
// Each component is a render function taking the frame, its area, and the
// app state, mirroring a region of the page: search bar, error banner,
// results panel, status bar, plus the ambient logs panel and help overlay.

mod error_banner;
mod help;
mod logs_panel;
mod results_panel;
mod search_bar;
mod status_bar;

pub use error_banner::render_error_banner;
pub use help::render_help_overlay;
pub use logs_panel::render_logs_panel;
pub use results_panel::{entry_lines, render_results};
pub use search_bar::render_search_bar;
pub use status_bar::render_status_bar;
