use std::time::{Duration, Instant};

/// Implements a simple performance timer used to measure search duration.
pub struct Timer;

impl Timer {
    /// Measures duration of given action.
    pub fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
        let start = Instant::now();
        let result = action();

        (result, Instant::now() - start)
    }
}
