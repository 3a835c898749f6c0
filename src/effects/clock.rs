use std::time::Duration;

use async_trait::async_trait;

/// Suspension used by timed effects.
///
/// Injected into the runner so tests can resolve timers without waiting.
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Wall-clock sleeping on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Resolves every sleep at once. Still yields, so the caller is suspended
/// and other tasks get to run first.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateClock;

#[async_trait]
impl Clock for ImmediateClock {
    async fn sleep(&self, _duration: Duration) {
        tokio::task::yield_now().await;
    }
}
