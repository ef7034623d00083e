//! Health check operations.

use super::FleetwiseClient;
use crate::error::Result;

impl FleetwiseClient {
    /// Check that the server is accepting connections.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        self.check_status(response, "livez").await.map(|_| ())
    }
}
