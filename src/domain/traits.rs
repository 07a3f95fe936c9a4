use chrono::NaiveDateTime;

use crate::domain::Error;

/// Line-oriented input the session reads from.
pub trait LineSource {
    /// Next line without its terminator, or `Ok(None)` once the input is exhausted.
    fn next_line(&mut self) -> Result<Option<String>, Error>;
}

/// Source of timestamps for transaction entries.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}
