use std::time::{Duration, Instant};

/// Immutable timestamp captured once at process startup
///
/// The clock is `Copy` and read-only for the lifetime of the process; handlers
/// only ever derive an elapsed duration from it, so it can be shared across
/// concurrent requests without any locking.
#[derive(Debug, Clone, Copy)]
pub struct ProcessClock {
    started: Instant,
}

impl ProcessClock {
    /// Captures the current instant as the process start time
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Elapsed wall-clock duration since the clock was captured
    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }
}
