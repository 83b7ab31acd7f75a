use std::time::{Duration, Instant};

use tracing::debug;

/// Reports the time between its creation and its drop at debug level.
pub struct ScopedTimer {
    name: &'static str,
    started_at: Instant,
}

impl ScopedTimer {
    pub fn start(name: &'static str) -> Self {
        ScopedTimer {
            name,
            started_at: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        debug!("[{}]: {:?}", self.name, self.elapsed());
    }
}
