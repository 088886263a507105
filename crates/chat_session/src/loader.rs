//! History loader - seeds the transcript from the backend

use chat_core::Message;
use shujaa_client::{HistoryRecord, ShujaaClientTrait};
use tracing::{error, warn};

/// Fetch and order prior turns for `identity`.
///
/// Failures degrade to an empty transcript: a failed history load must never
/// block the chat from becoming usable. No re-fetch is attempted.
pub async fn load_history<C: ShujaaClientTrait>(client: &C, identity: &str) -> Vec<Message> {
    if identity.is_empty() {
        warn!("history load skipped: empty identity");
        return Vec::new();
    }

    match client.fetch_history(identity).await {
        Ok(records) => records_to_transcript(records),
        Err(err) => {
            error!("failed to load chat history: {err}");
            Vec::new()
        }
    }
}

/// Expand stored turn records into transcript order.
///
/// The backend returns newest-first; the transcript is oldest-first, each
/// record contributing the user message followed by the assistant answer.
pub fn records_to_transcript(mut records: Vec<HistoryRecord>) -> Vec<Message> {
    records.reverse();

    let mut transcript = Vec::with_capacity(records.len() * 2);
    for record in records {
        transcript.push(Message::user_at(record.message, record.timestamp));
        transcript.push(Message::assistant_at(
            record.response,
            record.is_offline,
            record.timestamp,
        ));
    }
    transcript
}
