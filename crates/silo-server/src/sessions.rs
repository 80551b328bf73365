//! Session-token resolution.
//!
//! Session creation, expiry, and CSRF token minting belong to the external
//! session middleware. This layer only resolves an opaque token from the
//! `x-silo-session` header into an explicit [`RequestContext`] so the page
//! controller never touches ambient request state.

use std::collections::HashMap;
use std::sync::RwLock;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use silo_pages::RequestContext;
use tracing::warn;

use crate::router::internal_error;
use crate::state::AppState;

/// Request header carrying the opaque session token.
pub const SESSION_HEADER: &str = "x-silo-session";

/// A resolved session entry.
#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub username: String,
    /// CSRF token minted alongside the session; passed through to
    /// form-bearing view bundles.
    pub csrf_token: String,
}

/// In-memory token-to-session map.
///
/// Lock discipline: the map is only touched synchronously; no lock is held
/// across an await point.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: RwLock<HashMap<String, SessionEntry>>,
}

impl SessionStore {
    /// Register a session token.
    pub fn insert(
        &self,
        token: impl Into<String>,
        username: impl Into<String>,
        csrf_token: impl Into<String>,
    ) {
        let entry = SessionEntry {
            username: username.into(),
            csrf_token: csrf_token.into(),
        };
        self.entries
            .write()
            .expect("session store lock poisoned")
            .insert(token.into(), entry);
    }

    /// Resolve a token. `None` for unknown or expired tokens.
    pub fn get(&self, token: &str) -> Option<SessionEntry> {
        self.entries
            .read()
            .expect("session store lock poisoned")
            .get(token)
            .cloned()
    }

    /// Destroy a session token.
    pub fn remove(&self, token: &str) -> bool {
        self.entries
            .write()
            .expect("session store lock poisoned")
            .remove(token)
            .is_some()
    }
}

/// Middleware: attach a [`RequestContext`] extension to every request.
///
/// An unknown token degrades to an anonymous context; only a store failure
/// while resolving the user aborts the request.
pub async fn resolve_session(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(SESSION_HEADER)
        .and_then(|h| h.to_str().ok())
        .map(str::to_owned);

    let ctx = match token.and_then(|t| state.sessions.get(&t)) {
        Some(entry) => match state.users.by_username(&entry.username).await {
            Ok(Some(user)) => RequestContext::authenticated(user).with_csrf(entry.csrf_token),
            Ok(None) => {
                // Session outlived the account; treat as anonymous.
                warn!(username = %entry.username, "session user no longer exists");
                RequestContext::anonymous()
            }
            Err(e) => return internal_error(&e).into_response(),
        },
        None => RequestContext::anonymous(),
    };

    request.extensions_mut().insert(ctx);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_remove() {
        let store = SessionStore::default();
        store.insert("tok-1", "alice", "csrf-1");

        let entry = store.get("tok-1").unwrap();
        assert_eq!(entry.username, "alice");
        assert_eq!(entry.csrf_token, "csrf-1");

        assert!(store.get("tok-2").is_none());
        assert!(store.remove("tok-1"));
        assert!(store.get("tok-1").is_none());
        assert!(!store.remove("tok-1"));
    }
}
