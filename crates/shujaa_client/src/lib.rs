pub mod api;
pub mod client_trait;
pub mod error;

pub use api::client::ShujaaClient;
pub use api::models::{ChatReply, ChatRequest, HealthStatus, HistoryRecord};
pub use chat_core::Config;
pub use client_trait::ShujaaClientTrait;
pub use error::ClientError;
