// Events that flow from the lookup task back to the TUI
//
// Each submission spawns one lookup task; its outcome is delivered over
// an mpsc channel and applied by the event loop. The busy flag guarantees
// at most one lookup is in flight, so outcomes always arrive in
// submission order.

use crate::lookup::LookupOutcome;
use std::time::Instant;

/// The settled result of one submission's lookup.
#[derive(Debug)]
pub struct LookupEvent {
    /// The normalized word that was looked up
    pub word: String,
    /// Success with the first entry variant, or a classified failure
    pub outcome: LookupOutcome,
}

/// Session counters for the status bar.
#[derive(Debug, Clone)]
pub struct Stats {
    pub lookups: usize,
    pub found: usize,
    pub failed: usize,
    start_time: Instant,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            lookups: 0,
            found: 0,
            failed: 0,
            start_time: Instant::now(),
        }
    }

    /// Uptime formatted as HH:MM:SS for the status bar
    pub fn uptime_display(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
