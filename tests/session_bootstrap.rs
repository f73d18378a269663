//! Client session-bootstrap tests against a mock identity endpoint.

use std::time::Duration;

use apex_core::client::{ApiClient, ClientConfig, Session, SessionState, TokenStore};
use apex_core::shared::{MeResponse, Role, UserProfile};
use assert_matches::assert_matches;
use chrono::Utc;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn profile(email: &str) -> UserProfile {
    UserProfile {
        id: "user-1".to_string(),
        email: email.to_string(),
        name: None,
        role: Role::User,
        created_at: Utc::now(),
    }
}

fn session_for(server_url: &str) -> (TempDir, TokenStore, Session) {
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::with_path(dir.path().join("auth_token"));
    let session = Session::new(
        ApiClient::new(ClientConfig::with_server_url(server_url)),
        store.clone(),
    );
    (dir, store, session)
}

#[tokio::test]
async fn test_bootstrap_without_token_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (_dir, _store, session) = session_for(&server.uri());
    session.bootstrap().await;

    assert_matches!(session.state(), SessionState::Anonymous);
    assert!(!session.is_loading());
    // expect(0) is verified when the mock server drops
}

#[tokio::test]
async fn test_bootstrap_with_valid_token_authenticates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("Authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(MeResponse {
            user: profile("boot@b.com"),
        }))
        .expect(1)
        .mount(&server)
        .await;

    let (_dir, store, session) = session_for(&server.uri());
    store.save("tok-1").unwrap();

    session.bootstrap().await;

    assert_matches!(session.state(), SessionState::Authenticated(_));
    assert_eq!(session.user().unwrap().email, "boot@b.com");
    // A successful revalidation keeps the token
    assert_eq!(store.load().as_deref(), Some("tok-1"));
}

#[tokio::test]
async fn test_bootstrap_with_rejected_token_clears_it() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "Unauthorized"})),
        )
        .mount(&server)
        .await;

    let (_dir, store, session) = session_for(&server.uri());
    store.save("tok-stale").unwrap();

    session.bootstrap().await;

    assert_matches!(session.state(), SessionState::Anonymous);
    assert!(!session.is_loading());
    assert!(store.load().is_none());
}

#[tokio::test]
async fn test_bootstrap_network_failure_is_silent_logout() {
    // Nothing listens here; the call fails at the transport layer
    let (_dir, store, session) = session_for("http://127.0.0.1:9");
    store.save("tok-1").unwrap();

    session.bootstrap().await;

    assert_matches!(session.state(), SessionState::Anonymous);
    assert!(store.load().is_none());
}

#[tokio::test]
async fn test_late_bootstrap_success_does_not_override_logout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(MeResponse {
                    user: profile("slow@b.com"),
                })
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let (_dir, store, session) = session_for(&server.uri());
    store.save("tok-1").unwrap();

    let bootstrapping = {
        let session = session.clone();
        tokio::spawn(async move { session.bootstrap().await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    session.logout();
    bootstrapping.await.unwrap();

    // The logout happened after bootstrap started; the slow success must
    // not resurrect the session
    assert_matches!(session.state(), SessionState::Anonymous);
    assert!(store.load().is_none());
}

#[tokio::test]
async fn test_late_bootstrap_failure_does_not_clear_new_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"message": "Unauthorized"}))
                .set_delay(Duration::from_millis(200)),
        )
        .mount(&server)
        .await;

    let (_dir, store, session) = session_for(&server.uri());
    store.save("tok-old").unwrap();

    let bootstrapping = {
        let session = session.clone();
        tokio::spawn(async move { session.bootstrap().await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    session.login("tok-new", profile("fresh@b.com"));
    bootstrapping.await.unwrap();

    // The stale rejection must neither drop the session nor delete the
    // token saved by the newer login
    assert_matches!(session.state(), SessionState::Authenticated(_));
    assert_eq!(store.load().as_deref(), Some("tok-new"));
}

#[tokio::test]
async fn test_login_and_logout_make_no_network_calls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (_dir, store, session) = session_for(&server.uri());

    session.login("tok-1", profile("local@b.com"));
    assert_matches!(session.state(), SessionState::Authenticated(_));
    assert_eq!(store.load().as_deref(), Some("tok-1"));

    session.logout();
    assert_matches!(session.state(), SessionState::Anonymous);
    assert!(store.load().is_none());
}
