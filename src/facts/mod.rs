//! Number-fact lookup: the collaborator behind `FactRequested`.
//!
//! The store never talks to a client directly. The effect runner holds one
//! behind `Arc<dyn FactClient>` so the source can be swapped per run
//! (live HTTP, mock, or the deterministic static client used in tests).

mod error;
mod live;
mod mock;

use async_trait::async_trait;

pub use error::LookupError;
pub use live::LiveFactClient;
pub use mock::MockFactClient;

/// Source of facts about integers.
#[async_trait]
pub trait FactClient: Send + Sync {
    /// Returns the name of this client for logging.
    fn name(&self) -> &'static str;

    /// Fetch a fact about `number`.
    async fn fetch(&self, number: i64) -> Result<String, LookupError>;
}

/// Deterministic client: always answers `"{n} is a good number."`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticFactClient;

#[async_trait]
impl FactClient for StaticFactClient {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self, number: i64) -> Result<String, LookupError> {
        Ok(format!("{} is a good number.", number))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_client_is_deterministic() {
        let client = StaticFactClient;
        assert_eq!(client.fetch(7).await.unwrap(), "7 is a good number.");
        assert_eq!(client.fetch(-3).await.unwrap(), "-3 is a good number.");
    }
}
