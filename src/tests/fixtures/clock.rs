use crate::shared::core::primitives::{Clock, Millis};
use std::sync::atomic::{AtomicI64, Ordering};

pub const START_MILLIS: Millis = 1_700_000_000_000;

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicI64,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::at(START_MILLIS)
    }
}

impl ManualClock {
    pub fn at(millis: Millis) -> Self {
        Self {
            now: AtomicI64::new(millis),
        }
    }

    pub fn now(&self) -> Millis {
        self.now.load(Ordering::SeqCst)
    }

    pub fn set(&self, millis: Millis) {
        self.now.store(millis, Ordering::SeqCst);
    }

    pub fn advance_secs(&self, secs: i64) {
        self.now.fetch_add(secs * 1_000, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> Millis {
        self.now()
    }
}

#[cfg(test)]
mod manual_clock_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_move_only_when_advanced() {
        let clock = ManualClock::default();
        assert_eq!(clock.now_millis(), START_MILLIS);
        clock.advance_secs(125);
        assert_eq!(clock.now_millis(), START_MILLIS + 125_000);
        clock.set(42);
        assert_eq!(clock.now(), 42);
    }
}
