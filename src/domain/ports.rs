use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Source of raw resource bytes.
pub trait ResourceStore: Send + Sync {
    fn read_resource(
        &self,
        path: &Path,
    ) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

/// Destination for outgoing reply text. Calls are delivered in order.
#[async_trait]
pub trait ReplySink: Send + Sync {
    async fn send_text(&self, text: &str) -> Result<()>;
}
