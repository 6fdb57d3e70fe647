#[cfg(test)]
use std::cell::Cell;

#[cfg(test)]
use anyhow::Result;
#[cfg(test)]
use chrono::{DateTime, TimeZone, Utc};

#[cfg(test)]
use crate::infra::{
    clock::Clock,
    config::AppConfig,
    contracts::ConfigAdapter,
    id::IdGenerator,
};

#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

#[cfg(test)]
impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Frozen clock for deterministic interactor tests.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct StubClock {
    pub now: DateTime<Utc>,
}

#[cfg(test)]
impl StubClock {
    pub fn at_minute(minute: u32) -> Self {
        Self {
            now: Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
        }
    }
}

#[cfg(test)]
impl Clock for StubClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

/// Predictable id source: "id-1", "id-2", ...
#[cfg(test)]
#[derive(Debug, Default)]
pub struct SequentialIds {
    counter: Cell<u64>,
}

#[cfg(test)]
impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let next = self.counter.get() + 1;
        self.counter.set(next);
        format!("id-{next}")
    }
}
