//! End-to-end tests for ChatSession against a mock backend

use std::sync::Arc;

use chat_session::{
    quick_actions, ChatSession, Config, Connectivity, IdentityStore, InMemoryIdentityStorage,
    MessageOrigin, ShujaaClient, SubmitOutcome, OFFLINE_FALLBACK_NOTICE,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn session_for(server: &MockServer, identity: &str) -> ChatSession<ShujaaClient> {
    let config = Config {
        backend_url: server.uri(),
        request_timeout_secs: 5,
    };
    let client = Arc::new(ShujaaClient::new(&config).expect("client"));
    ChatSession::with_identity(client, identity)
}

#[tokio::test]
async fn test_end_to_end_first_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/chat/history/user_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "Drink water and rest in a quiet dark room.",
            "is_offline": false
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = session_for(&mock_server, "user_1");
    session.load_history().await;

    session.set_input("I have a headache").await;
    assert_eq!(session.submit().await, SubmitOutcome::Dispatched);

    let transcript = session.transcript().await;
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript[0].origin, MessageOrigin::User);
    assert_eq!(transcript[0].text, "I have a headache");
    assert_eq!(transcript[1].origin, MessageOrigin::Assistant);
    assert_eq!(transcript[1].text, "Drink water and rest in a quiet dark room.");
    assert!(!transcript[1].degraded);

    assert_eq!(session.connectivity().await, Connectivity::Online);
    assert!(!session.is_pending().await);
    // The input buffer was cleared by the dispatch.
    assert_eq!(session.input().await, "");
}

#[tokio::test]
async fn test_transcript_grows_by_two_per_successful_send() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "Noted.",
            "is_offline": false
        })))
        .mount(&mock_server)
        .await;

    let session = session_for(&mock_server, "user_1");

    for round in 1..=3usize {
        session.set_input(format!("message {round}")).await;
        assert_eq!(session.submit().await, SubmitOutcome::Dispatched);
        assert_eq!(session.transcript().await.len(), round * 2);
    }
}

#[tokio::test]
async fn test_history_loads_oldest_first() {
    let mock_server = MockServer::start().await;

    // Newest first, as the backend returns it.
    Mock::given(method("GET"))
        .and(path("/api/chat/history/user_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "r3",
                "user_id": "user_1",
                "message": "third question",
                "response": "third answer",
                "timestamp": "2025-06-03T12:00:00.000000"
            },
            {
                "id": "r2",
                "user_id": "user_1",
                "message": "second question",
                "response": "second answer",
                "timestamp": "2025-06-02T12:00:00.000000"
            },
            {
                "id": "r1",
                "user_id": "user_1",
                "message": "first question",
                "response": "first answer",
                "timestamp": "2025-06-01T12:00:00.000000"
            }
        ])))
        .mount(&mock_server)
        .await;

    let session = session_for(&mock_server, "user_1");
    session.load_history().await;

    let transcript = session.transcript().await;
    let texts: Vec<&str> = transcript.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "first question",
            "first answer",
            "second question",
            "second answer",
            "third question",
            "third answer",
        ]
    );
}

#[tokio::test]
async fn test_send_failure_appends_fallback_notice() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let session = session_for(&mock_server, "user_1");
    session.set_input("I need help").await;
    assert_eq!(session.submit().await, SubmitOutcome::Dispatched);

    let transcript = session.transcript().await;
    assert_eq!(transcript.len(), 2);
    // The user's optimistic message is never rolled back.
    assert_eq!(transcript[0].text, "I need help");

    let fallback = &transcript[1];
    assert_eq!(fallback.origin, MessageOrigin::Assistant);
    assert!(fallback.degraded);
    assert_eq!(fallback.text, OFFLINE_FALLBACK_NOTICE);
    assert!(fallback.text.contains("emergency services"));

    assert_eq!(session.connectivity().await, Connectivity::Degraded);
    assert!(!session.is_pending().await);
}

#[tokio::test]
async fn test_degraded_success_keeps_server_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "Cached guidance while the service is offline.",
            "is_offline": true
        })))
        .mount(&mock_server)
        .await;

    let session = session_for(&mock_server, "user_1");
    session.set_input("I feel sad").await;
    session.submit().await;

    let transcript = session.transcript().await;
    let reply = &transcript[1];
    assert!(reply.degraded);
    // Server-provided text, not the failure fallback.
    assert_eq!(reply.text, "Cached guidance while the service is offline.");
    assert_ne!(reply.text, OFFLINE_FALLBACK_NOTICE);

    assert_eq!(session.connectivity().await, Connectivity::Degraded);
}

#[tokio::test]
async fn test_connectivity_recovers_on_next_successful_send() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "Cached guidance.",
            "is_offline": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = session_for(&mock_server, "user_1");
    session.set_input("first").await;
    session.submit().await;
    assert_eq!(session.connectivity().await, Connectivity::Degraded);

    mock_server.reset().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "Live again.",
            "is_offline": false
        })))
        .mount(&mock_server)
        .await;

    session.set_input("second").await;
    session.submit().await;
    assert_eq!(session.connectivity().await, Connectivity::Online);
}

#[tokio::test]
async fn test_failed_history_load_keeps_chat_usable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/chat/history/user_1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "response": "Still here.",
            "is_offline": false
        })))
        .mount(&mock_server)
        .await;

    let session = session_for(&mock_server, "user_1");
    session.load_history().await;
    assert!(session.transcript().await.is_empty());

    session.set_input("hello").await;
    assert_eq!(session.submit().await, SubmitOutcome::Dispatched);
    assert_eq!(session.transcript().await.len(), 2);
}

#[tokio::test]
async fn test_empty_and_whitespace_submits_are_ignored() {
    let mock_server = MockServer::start().await;
    let session = session_for(&mock_server, "user_1");

    assert_eq!(session.submit().await, SubmitOutcome::EmptyInput);

    session.set_input("   ").await;
    assert_eq!(session.submit().await, SubmitOutcome::EmptyInput);

    assert!(session.transcript().await.is_empty());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_quick_action_populates_input_without_dispatch() {
    let mock_server = MockServer::start().await;
    let session = session_for(&mock_server, "user_1");

    let action = &quick_actions()[1];
    session.apply_quick_action(action).await;

    assert_eq!(session.input().await, "I have a headache");
    assert!(session.transcript().await.is_empty());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_session_resolves_identity_from_store() {
    let mock_server = MockServer::start().await;

    let config = Config {
        backend_url: mock_server.uri(),
        request_timeout_secs: 5,
    };
    let client = Arc::new(ShujaaClient::new(&config).expect("client"));
    let identities = IdentityStore::new(InMemoryIdentityStorage::new());

    let session = ChatSession::new(client, &identities).await;

    assert!(session.identity().starts_with("user_"));
    // The store hands the same identity to a second session.
    assert_eq!(identities.get_or_create().await, session.identity());
}
