#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

use crate::models::common::{Duration, Timestamp};
use crate::utils::compare_floats;
use std::cmp::Ordering;

/// Represents a time window: the earliest and the latest allowed arrival.
#[derive(Clone, Debug)]
pub struct TimeWindow {
    /// The earliest arrival time, an earlier arrival has to wait.
    pub start: Timestamp,
    /// The latest arrival time.
    pub end: Timestamp,
}

impl TimeWindow {
    /// Creates a new [`TimeWindow`].
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Checks whether time window is well formed.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite() && !self.end.is_nan() && self.start <= self.end
    }

    /// Returns waiting time required when arriving at given time or `None` if arrival is too late.
    pub fn waiting_time(&self, arrival: Timestamp) -> Option<Duration> {
        if compare_floats(arrival, self.end) == Ordering::Greater {
            None
        } else {
            Some((self.start - arrival).max(0.))
        }
    }
}

impl PartialEq<TimeWindow> for TimeWindow {
    fn eq(&self, other: &TimeWindow) -> bool {
        compare_floats(self.start, other.start) == Ordering::Equal
            && compare_floats(self.end, other.end) == Ordering::Equal
    }
}

