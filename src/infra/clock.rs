use chrono::{DateTime, Utc};

/// Source of the current time, injected so interactors stay deterministic
/// under test.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Utc> {
        (*self).now()
    }
}

/// Wall-clock implementation used by the composition root.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
