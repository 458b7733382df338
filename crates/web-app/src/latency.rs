use std::time::Duration;

use crate::Settings;

/// The suspension a plan request goes through before its result is available.
#[allow(async_fn_in_trait)]
pub trait Latency {
    async fn wait(&self);
}

/// Waits on a browser timer.
///
/// A zero duration completes immediately on every target. Any other duration
/// relies on the JavaScript runtime and only works on `wasm32` in a browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerLatency {
    duration: Duration,
}

impl TimerLatency {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

impl From<&Settings> for TimerLatency {
    fn from(value: &Settings) -> Self {
        Self::new(value.latency())
    }
}

impl Latency for TimerLatency {
    async fn wait(&self) {
        if self.duration.is_zero() {
            return;
        }
        gloo_timers::future::sleep(self.duration).await;
    }
}
