//! Wall-clock discussion budget for one round.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct DiscussionTimer {
    budget: Duration,
    started: Instant,
}

impl DiscussionTimer {
    /// Starts a countdown of `secs` seconds; `None` when the timer is disabled.
    pub fn start(secs: u32) -> Option<Self> {
        (secs > 0).then(|| Self {
            budget: Duration::from_secs(u64::from(secs)),
            started: Instant::now(),
        })
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn remaining(&self) -> Duration {
        self.remaining_at(Instant::now())
    }

    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.budget
            .saturating_sub(now.saturating_duration_since(self.started))
    }
}
