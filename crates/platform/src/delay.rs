//! Blocking-wait primitives for the bring-up sequencer.

/// Millisecond wait source.
///
/// Bring-up is a strictly sequential protocol: every wait blocks the single
/// execution context (on an async executor, by awaiting the timer). There is
/// no cancellation; a probe that never answers is handled electrically, not
/// by timeout.
pub trait DelaySource {
    /// Wait for `ms` milliseconds.
    fn wait_ms(&mut self, ms: u32) -> impl core::future::Future<Output = ()>;
}

/// `embassy-time` backed delay source for executor-driven targets.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimerDelay;

impl DelaySource for TimerDelay {
    fn wait_ms(&mut self, ms: u32) -> impl core::future::Future<Output = ()> {
        embassy_time::Timer::after_millis(u64::from(ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn timer_delay_completes() {
        let mut delay = TimerDelay;
        delay.wait_ms(1).await;
    }
}
