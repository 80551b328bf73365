//! Integration tests for the silo HTTP surface.
//!
//! These tests spawn the real router on an ephemeral port and verify:
//! - Session resolution from the session header
//! - Lenient gates (303 to login) vs strict gates (403)
//! - Fully-resolved JSON view bundles

use std::sync::Arc;

use reqwest::redirect::Policy;
use reqwest::StatusCode;
use serde_json::Value;
use silo_config::Config;
use silo_registry::{Manifest, MemoryRegistry};
use silo_server::{router, AppState, SessionStore, SESSION_HEADER};
use silo_store::{
    ArchiveRef, MemoryActivity, MemoryArchives, MemoryFeatured, MemoryUsers, Plan, User,
};

// ============================================================================
// Test Harness
// ============================================================================

struct TestServer {
    base: String,
    client: reqwest::Client,
}

impl TestServer {
    /// Spawn the router on an ephemeral port over seeded in-memory stores.
    async fn start() -> Self {
        let alice = User {
            id: "id-alice".into(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            disk_usage: 50 * (1 << 20),
            plan: Plan::Basic,
            disk_quota_override: None,
            scopes: vec![],
            archives: vec![ArchiveRef {
                key: "a1".into(),
                name: "a1-site".into(),
            }],
        };

        let mut registry = MemoryRegistry::new();
        registry.insert("a1", 3, Some(Manifest::titled("Alice's Site")), 1024);

        let sessions = Arc::new(SessionStore::default());
        sessions.insert("tok-alice", "alice", "csrf-alice");
        sessions.insert("tok-gone", "nobody", "csrf-gone");

        let state = AppState::new(
            Arc::new(Config::default()),
            Arc::new(MemoryUsers::from_users([alice])),
            Arc::new(MemoryArchives::default()),
            Arc::new(MemoryActivity::default()),
            Arc::new(MemoryFeatured::default()),
            Arc::new(registry),
            sessions,
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(state)).await.unwrap();
        });

        let client = reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .unwrap();

        Self {
            base: format!("http://{addr}"),
            client,
        }
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base, path))
            .send()
            .await
            .unwrap()
    }

    async fn get_authed(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base, path))
            .header(SESSION_HEADER, "tok-alice")
            .send()
            .await
            .unwrap()
    }
}

fn location(resp: &reqwest::Response) -> &str {
    resp.headers()["location"].to_str().unwrap()
}

// ============================================================================
// Frontpage
// ============================================================================

#[tokio::test]
async fn frontpage_anonymous_omits_quota_fields() {
    let server = TestServer::start().await;

    let resp = server.get("/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["peer_count"], 0);
    assert!(body.get("disk_usage").is_none());
    assert!(body.get("disk_quota").is_none());
    assert_eq!(body["user_archives"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn frontpage_session_user_gets_aggregated_archives() {
    let server = TestServer::start().await;

    let resp = server.get_authed("/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["peer_count"], 3);
    assert_eq!(body["disk_usage"], 50 * (1 << 20));
    assert_eq!(body["disk_usage_pct"], 50);

    let archives = body["user_archives"].as_array().unwrap();
    assert_eq!(archives.len(), 1);
    assert_eq!(archives[0]["key"], "a1");
    assert_eq!(archives[0]["title"], "Alice's Site");
}

#[tokio::test]
async fn stale_session_degrades_to_anonymous() {
    let server = TestServer::start().await;

    let resp = server
        .client
        .get(format!("{}/", server.base))
        .header(SESSION_HEADER, "tok-gone")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert!(body.get("disk_usage").is_none());
}

// ============================================================================
// Gates
// ============================================================================

#[tokio::test]
async fn account_redirects_anonymous_to_login() {
    let server = TestServer::start().await;

    let resp = server.get("/account").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/login?redirect=account");
}

#[tokio::test]
async fn account_renders_for_session_user() {
    let server = TestServer::start().await;

    let resp = server.get_authed("/account").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["disk_usage_pct"], 50);
    assert_eq!(body["csrf_token"], "csrf-alice");
}

#[tokio::test]
async fn strict_routes_reject_anonymous() {
    let server = TestServer::start().await;

    for path in [
        "/account/upgraded",
        "/account/cancel-plan",
        "/account/canceled-plan",
        "/account/update-email",
    ] {
        let resp = server.get(path).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{path}");
    }
}

#[tokio::test]
async fn reset_password_requires_continuation_params() {
    let server = TestServer::start().await;

    let forged = server.get("/reset-password?nonce=x").await;
    assert_eq!(forged.status(), StatusCode::FORBIDDEN);

    let valid = server.get("/reset-password?nonce=x&username=alice").await;
    assert_eq!(valid.status(), StatusCode::OK);
}

// ============================================================================
// Navigation
// ============================================================================

#[tokio::test]
async fn register_honors_pro_intent_for_session_user() {
    let server = TestServer::start().await;

    let plain = server.get_authed("/register").await;
    assert_eq!(plain.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&plain), "/account");

    let pro = server.get_authed("/register?pro=1").await;
    assert_eq!(pro.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&pro), "/account/upgrade");
}

#[tokio::test]
async fn profile_redirects_to_username() {
    let server = TestServer::start().await;

    let resp = server.get_authed("/profile").await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/alice");

    let anon = server.get("/profile").await;
    assert_eq!(anon.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&anon), "/login?redirect=profile");
}

#[tokio::test]
async fn explore_views() {
    let server = TestServer::start().await;

    let users = server.get("/explore").await;
    assert_eq!(users.status(), StatusCode::OK);
    let body: Value = users.json().await.unwrap();
    assert_eq!(body["view"], "users");
    assert_eq!(body["users"][0]["username"], "alice");

    let activity = server.get("/explore?view=activity").await;
    let body: Value = activity.json().await.unwrap();
    assert_eq!(body["view"], "activity");
    assert_eq!(body["activity_limit"], 25);
}

#[tokio::test]
async fn static_pages_render() {
    let server = TestServer::start().await;

    for (path, page) in [
        ("/about", "about"),
        ("/pricing", "pricing"),
        ("/terms", "terms"),
        ("/privacy", "privacy"),
        ("/acceptable-use", "acceptable-use"),
        ("/support", "support"),
    ] {
        let resp = server.get(path).await;
        assert_eq!(resp.status(), StatusCode::OK, "{path}");
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["page"], page);
    }
}
