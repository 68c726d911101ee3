use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

/// Rescan cadence while input is idle, matching the original dashboard's
/// 2-second refresh.
pub const SCAN_INTERVAL: Duration = Duration::from_secs(2);

pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// A full scan interval passed without input; time to rescan.
    Tick,
}

/// Blocking event source that owns the scan cadence: keys and resizes come
/// through immediately, everything else (mouse, focus, paste) just waits
/// out the remainder of the interval instead of forcing an early rescan.
pub struct EventHandler {
    scan_interval: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            scan_interval: SCAN_INTERVAL,
        }
    }

    pub fn next(&self) -> std::io::Result<AppEvent> {
        let deadline = Instant::now() + self.scan_interval;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() || !event::poll(remaining)? {
                return Ok(AppEvent::Tick);
            }
            if let Some(ev) = relevant(event::read()?) {
                return Ok(ev);
            }
        }
    }
}

/// Which terminal events the app reacts to.
fn relevant(ev: CrosstermEvent) -> Option<AppEvent> {
    match ev {
        CrosstermEvent::Key(key) => Some(AppEvent::Key(key)),
        CrosstermEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}
