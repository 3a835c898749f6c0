use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::effects::Clock;

use super::{FactClient, LookupError};

/// Stand-in for the public numbers service, which is frequently down.
///
/// Waits `latency` on the injected clock to feel like a network call, then
/// returns placeholder text that names the number.
pub struct MockFactClient {
    clock: Arc<dyn Clock>,
    latency: Duration,
}

impl MockFactClient {
    pub fn new(clock: Arc<dyn Clock>, latency: Duration) -> Self {
        Self { clock, latency }
    }
}

#[async_trait]
impl FactClient for MockFactClient {
    fn name(&self) -> &'static str {
        "mock"
    }

    async fn fetch(&self, number: i64) -> Result<String, LookupError> {
        self.clock.sleep(self.latency).await;
        tracing::debug!(number, "Mock fact returned");
        Ok(format!(
            "{} : this text is a placeholder response from the mock fact service.",
            number
        ))
    }
}
