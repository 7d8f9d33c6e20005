use crate::modules::time_tracking::use_cases::start_timer::command::StartTimer;

pub struct StartTimerBuilder {
    inner: StartTimer,
}

impl Default for StartTimerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl StartTimerBuilder {
    pub fn new() -> Self {
        Self {
            inner: StartTimer {
                control_id: "ctl-fixed-0001".into(),
                time_entry_id: "te-fixed-0001".into(),
                user_id: "user-fixed-0001".into(),
                started_at: 1_700_000_000_000,
            },
        }
    }

    pub fn time_entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_entry_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn started_at(mut self, v: i64) -> Self {
        self.inner.started_at = v;
        self
    }

    pub fn build(self) -> StartTimer {
        self.inner
    }
}
