use async_trait::async_trait;

use crate::api::models::{ChatReply, ChatRequest, HistoryRecord};
use crate::error::Result;

/// Backend operations the session controller depends on. A trait seam so
/// tests can substitute a scripted backend for the HTTP client.
#[async_trait]
pub trait ShujaaClientTrait: Send + Sync {
    /// `GET /api/chat/history/{user_id}` - stored turns, newest first.
    async fn fetch_history(&self, user_id: &str) -> Result<Vec<HistoryRecord>>;

    /// `POST /api/chat` - send one user message, receive the assistant
    /// reply.
    async fn send_message(&self, request: &ChatRequest) -> Result<ChatReply>;
}
