use chrono::Utc;

/// Epoch milliseconds. Every timestamp in the crate uses this unit.
pub type Millis = i64;

pub const MILLIS_PER_MINUTE: Millis = 60_000;

pub trait Clock: Send + Sync {
    fn now_millis(&self) -> Millis;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> Millis {
        Utc::now().timestamp_millis()
    }
}

/// Whole minutes between two instants, rounding half up. A negative span
/// (clock skew between writers) counts as zero.
pub fn elapsed_minutes(from: Millis, to: Millis) -> i64 {
    let elapsed = to.saturating_sub(from).max(0);
    (elapsed + MILLIS_PER_MINUTE / 2) / MILLIS_PER_MINUTE
}
