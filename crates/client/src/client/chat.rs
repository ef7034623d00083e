//! Assistant chat operations.

use fleetwise_core::assistant::{ChatReply, ChatRequest};

use super::FleetwiseClient;
use crate::error::Result;

impl FleetwiseClient {
    /// Ask the cost assistant a question.
    pub async fn chat(&self, message: impl Into<String>) -> Result<ChatReply> {
        let req = ChatRequest {
            message: message.into(),
        };
        let response = self
            .client
            .post(self.url("/api/chat"))
            .json(&req)
            .send()
            .await?;
        self.handle_response(response, "chat").await
    }
}
