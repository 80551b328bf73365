//! Per-request context and the session gate.
//!
//! Upstream middleware resolves the session cookie/token and builds an
//! explicit [`RequestContext`] for every controller operation. Nothing here
//! reads ambient request state, which keeps the gates unit-testable without
//! a simulated request object.

use silo_store::User;

use crate::error::PageError;
use crate::outcome::Redirect;

/// Proof of authentication, carrying the resolved user record.
///
/// Presence alone implies "registered"; `user.is_pro()` implies the paid
/// tier. Creation and expiry are handled by the external session middleware.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
}

/// Explicit per-request context assembled by the HTTP layer.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub session: Option<Session>,
    /// CSRF token pass-through from the session middleware. Present on
    /// requests that may render a state-changing form.
    pub csrf_token: Option<String>,
}

impl RequestContext {
    /// Context for an anonymous visitor.
    #[inline]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for an authenticated request.
    #[inline]
    pub fn authenticated(user: User) -> Self {
        Self {
            session: Some(Session { user }),
            csrf_token: None,
        }
    }

    /// Attach a CSRF token.
    #[inline]
    pub fn with_csrf(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// The session user, if authenticated.
    #[inline]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// Strict gate: require a session or fail with [`PageError::Forbidden`].
    ///
    /// Used by routes only reachable from within an authenticated flow,
    /// where a missing session indicates tampering rather than navigation.
    pub fn require_session(&self) -> Result<&Session, PageError> {
        self.session.as_ref().ok_or(PageError::Forbidden)
    }

    /// Lenient gate: require a session or redirect to login with a hint
    /// naming `route` so the user is returned there afterward.
    pub fn session_or_login(&self, route: &str) -> Result<&Session, Redirect> {
        self.session.as_ref().ok_or_else(|| Redirect::login(route))
    }

    /// Whether the session user carries a capability tag. Anonymous
    /// requests never do.
    #[inline]
    pub fn has_scope(&self, scope: &str) -> bool {
        self.user().is_some_and(|u| u.has_scope(scope))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silo_store::{Plan, SCOPE_ADMIN_ARCHIVES};

    fn user(scopes: Vec<String>) -> User {
        User {
            id: "u1".into(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            disk_usage: 0,
            plan: Plan::Basic,
            disk_quota_override: None,
            scopes,
            archives: vec![],
        }
    }

    #[test]
    fn strict_gate_rejects_anonymous() {
        let ctx = RequestContext::anonymous();
        assert!(matches!(
            ctx.require_session(),
            Err(PageError::Forbidden)
        ));
    }

    #[test]
    fn strict_gate_passes_authenticated() {
        let ctx = RequestContext::authenticated(user(vec![]));
        assert!(ctx.require_session().is_ok());
    }

    #[test]
    fn lenient_gate_redirects_with_hint() {
        let ctx = RequestContext::anonymous();
        let err = ctx.session_or_login("new-archive").unwrap_err();
        assert_eq!(err.location, "/login?redirect=new-archive");
    }

    #[test]
    fn scope_check_requires_session_and_scope() {
        assert!(!RequestContext::anonymous().has_scope(SCOPE_ADMIN_ARCHIVES));

        let plain = RequestContext::authenticated(user(vec![]));
        assert!(!plain.has_scope(SCOPE_ADMIN_ARCHIVES));

        let admin = RequestContext::authenticated(user(vec![SCOPE_ADMIN_ARCHIVES.into()]));
        assert!(admin.has_scope(SCOPE_ADMIN_ARCHIVES));
    }
}
