use crate::modules::time_tracking::core::events::v1::timer_stopped::StopReason;
use crate::modules::time_tracking::use_cases::stop_timer::command::StopTimer;

pub struct StopTimerBuilder {
    inner: StopTimer,
}

impl Default for StopTimerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl StopTimerBuilder {
    pub fn new() -> Self {
        Self {
            inner: StopTimer {
                control_id: "ctl-fixed-0001".into(),
                stopped_by: "user-fixed-0001".into(),
                description: None,
                reason: StopReason::Stop,
                stopped_at: 1_700_000_060_000,
            },
        }
    }

    pub fn stopped_by(mut self, v: impl Into<String>) -> Self {
        self.inner.stopped_by = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = Some(v.into());
        self
    }

    pub fn reason(mut self, v: StopReason) -> Self {
        self.inner.reason = v;
        self
    }

    pub fn stopped_at(mut self, v: i64) -> Self {
        self.inner.stopped_at = v;
        self
    }

    pub fn build(self) -> StopTimer {
        self.inner
    }
}
