use std::cell::Cell;

use chrono::{DateTime, Duration, Utc};

/// Source of "now" for every timestamp the book writes.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock: every reading returns the current instant and then
/// moves forward by `step`.
#[derive(Debug)]
pub struct ManualClock {
    current: Cell<DateTime<Utc>>,
    step: Duration,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
        ManualClock {
            current: Cell::new(start),
            step,
        }
    }

    /// Starts at 2025-01-01T00:00:00Z and ticks one second per reading.
    pub fn ticking() -> Self {
        let start = DateTime::from_timestamp(1_735_689_600, 0).unwrap_or_default();
        Self::new(start, Duration::seconds(1))
    }

    pub fn set(&self, at: DateTime<Utc>) {
        self.current.set(at);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.current.get();
        self.current.set(now + self.step);
        now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_ticks() {
        let clock = ManualClock::ticking();
        let first = clock.now();
        let second = clock.now();

        assert_eq!(first.to_rfc3339(), "2025-01-01T00:00:00+00:00");
        assert_eq!(second - first, Duration::seconds(1));
    }

    #[test]
    fn test_manual_clock_set() {
        let clock = ManualClock::ticking();
        let at = DateTime::parse_from_rfc3339("2030-06-12T14:32:07Z")
            .unwrap()
            .with_timezone(&Utc);
        clock.set(at);
        assert_eq!(clock.now(), at);
    }
}
