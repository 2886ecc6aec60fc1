//! Autosave Debounce
//!
//! Standard debounce over the WASM timer: each schedule cancels the
//! pending timer, so only the last write in a burst of edits executes.

use gloo_timers::callback::Timeout;

/// Delay between the last qualifying change and the storage write
pub const AUTOSAVE_DELAY_MS: u32 = 650;

pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Schedule `write` after the delay, cancelling any pending schedule
    pub fn schedule(&mut self, write: impl FnOnce() + 'static) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        self.pending = Some(Timeout::new(self.delay_ms, write));
    }

    /// Drop a pending schedule without running it (used before an
    /// explicit immediate save, which would otherwise double-write)
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(AUTOSAVE_DELAY_MS)
    }
}
