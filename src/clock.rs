use chrono::{Local, NaiveDateTime};

use crate::domain::Clock;

/// Wall-clock local time.
#[derive(Default, Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Deterministic clock for tests: starts at a fixed instant and advances one
/// second per reading.
#[cfg(test)]
#[derive(Debug)]
pub struct SteppingClock {
    next: std::cell::Cell<NaiveDateTime>,
}

#[cfg(test)]
impl SteppingClock {
    pub fn starting_at(start: NaiveDateTime) -> Self {
        Self {
            next: std::cell::Cell::new(start),
        }
    }

    pub fn fixed_start() -> Self {
        let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 15)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap();
        Self::starting_at(start)
    }
}

#[cfg(test)]
impl Clock for SteppingClock {
    fn now(&self) -> NaiveDateTime {
        let current = self.next.get();
        self.next.set(current + chrono::TimeDelta::seconds(1));
        current
    }
}
