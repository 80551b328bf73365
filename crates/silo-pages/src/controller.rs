//! The page controller.
//!
//! One operation per route. Each operation applies its session/lifecycle
//! gate, fetches the data it needs — independent sources concurrently —
//! and returns a fully-resolved view bundle or a redirect. The controller
//! owns no cross-request state.

use std::sync::Arc;

use serde::Deserialize;
use silo_config::Config;
use silo_registry::ArchiveRegistry;
use silo_store::{
    ActivityStore, ArchiveStore, FeaturedStore, ListOptions, UserStore, SCOPE_ADMIN_ARCHIVES,
};
use tracing::debug;

use crate::aggregate::{aggregate_user_archives, UserArchives};
use crate::error::PageError;
use crate::outcome::{PageOutcome, Redirect};
use crate::quota;
use crate::session::RequestContext;
use crate::view::*;

/// Number of entries on the admin-only popular listing.
pub const POPULAR_LIMIT: usize = 25;

/// Page size of the global activity feed.
pub const ACTIVITY_LIMIT: usize = 25;

// ── Query parameters ──────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FrontpageQuery {
    /// Email-verification confirmation flag.
    pub verified: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExploreQuery {
    pub view: Option<String>,
    /// Pagination cursor for the activity feed.
    pub start: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginQuery {
    pub reset: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResetPasswordQuery {
    pub nonce: Option<String>,
    pub username: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterQuery {
    /// Pro-signup intent flag.
    pub pro: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisterProQuery {
    /// Pending-user id from the upgrade-initiation step.
    pub id: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegisteredQuery {
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountQuery {
    pub updated: Option<String>,
}

// ── Controller ────────────────────────────────────────────────────

/// Page controller over the backing stores and the live registry.
///
/// Cheap to clone; all collaborators are shared.
#[derive(Clone)]
pub struct Pages {
    config: Arc<Config>,
    users: Arc<dyn UserStore>,
    archives: Arc<dyn ArchiveStore>,
    activity: Arc<dyn ActivityStore>,
    featured: Arc<dyn FeaturedStore>,
    registry: Arc<dyn ArchiveRegistry>,
}

impl Pages {
    pub fn new(
        config: Arc<Config>,
        users: Arc<dyn UserStore>,
        archives: Arc<dyn ArchiveStore>,
        activity: Arc<dyn ActivityStore>,
        featured: Arc<dyn FeaturedStore>,
        registry: Arc<dyn ArchiveRegistry>,
    ) -> Self {
        Self {
            config,
            users,
            archives,
            activity,
            featured,
            registry,
        }
    }

    /// `/` — featured archives, the admin-only popular listing, and the
    /// session user's aggregated archive usage, fetched concurrently.
    pub async fn frontpage(
        &self,
        ctx: &RequestContext,
        query: &FrontpageQuery,
    ) -> Result<FrontpageView, PageError> {
        let user = ctx.user();
        let user_quota = user.map(|u| quota::user_quota(&self.config, u));

        let (featured, popular, user_archives) = tokio::try_join!(
            async { self.featured.list().await.map_err(PageError::from) },
            async {
                if ctx.has_scope(SCOPE_ADMIN_ARCHIVES) {
                    let listings = self.archives.list(&ListOptions::popular(POPULAR_LIMIT)).await?;
                    Ok::<_, PageError>(Some(listings))
                } else {
                    // Feature degrades silently for non-admin sessions.
                    Ok(None)
                }
            },
            async {
                match user {
                    Some(u) => aggregate_user_archives(self.registry.as_ref(), &u.archives)
                        .await
                        .map_err(PageError::from),
                    None => Ok(UserArchives::default()),
                }
            },
        )?;

        debug!(
            archives = user_archives.archives.len(),
            peer_count = user_archives.peer_count,
            "frontpage aggregated"
        );

        Ok(FrontpageView {
            verified: query.verified.clone(),
            user_archives: user_archives.archives,
            featured,
            popular,
            disk_usage: user.map(|u| u.disk_usage),
            disk_quota: user_quota.map(|q| q.quota_bytes),
            disk_usage_pct: user_quota.map(|q| q.usage_pct()),
            peer_count: user_archives.peer_count,
        })
    }

    /// `/explore` — the global activity feed with `?view=activity`, the
    /// user listing otherwise.
    pub async fn explore(&self, query: &ExploreQuery) -> Result<ExploreView, PageError> {
        if query.view.as_deref() == Some("activity") {
            let activity = self
                .activity
                .list_global_events(&ListOptions::latest(ACTIVITY_LIMIT, query.start.clone()))
                .await?;
            return Ok(ExploreView::Activity {
                activity_limit: ACTIVITY_LIMIT,
                activity,
            });
        }

        let users = self.users.list(&ListOptions::default()).await?;
        Ok(ExploreView::Users {
            users: users
                .into_iter()
                .map(|u| UserSummary {
                    username: u.username,
                    archive_count: u.archives.len(),
                })
                .collect(),
        })
    }

    /// `/new-archive` — lenient gate; quota figures in whole MiB.
    pub fn new_archive(&self, ctx: &RequestContext) -> PageOutcome<NewArchiveView> {
        let session = match ctx.session_or_login("new-archive") {
            Ok(session) => session,
            Err(redirect) => return redirect.into(),
        };

        let user_quota = quota::user_quota(&self.config, &session.user);
        PageOutcome::page(NewArchiveView {
            disk_usage_mb: user_quota.used_mib(),
            disk_quota_mb: user_quota.quota_mib(),
            csrf_token: ctx.csrf_token.clone(),
        })
    }

    pub fn about(&self) -> StaticView {
        StaticView { page: "about" }
    }

    pub fn pricing(&self) -> StaticView {
        StaticView { page: "pricing" }
    }

    pub fn terms(&self) -> StaticView {
        StaticView { page: "terms" }
    }

    pub fn privacy(&self) -> StaticView {
        StaticView { page: "privacy" }
    }

    pub fn acceptable_use(&self) -> StaticView {
        StaticView {
            page: "acceptable-use",
        }
    }

    pub fn support(&self) -> StaticView {
        StaticView { page: "support" }
    }

    /// `/login` — already-authenticated visitors go to their account.
    pub fn login(&self, ctx: &RequestContext, query: &LoginQuery) -> PageOutcome<LoginView> {
        if ctx.session.is_some() {
            return Redirect::to("/account").into();
        }
        PageOutcome::page(LoginView {
            reset: query.reset.clone(),
            csrf_token: ctx.csrf_token.clone(),
        })
    }

    pub fn forgot_password(&self, ctx: &RequestContext) -> ForgotPasswordView {
        ForgotPasswordView {
            csrf_token: ctx.csrf_token.clone(),
        }
    }

    /// `/reset-password` — a reset link without both continuation
    /// parameters is treated as forged, not as "not found".
    pub fn reset_password(
        &self,
        ctx: &RequestContext,
        query: &ResetPasswordQuery,
    ) -> Result<ResetPasswordView, PageError> {
        if query.nonce.is_none() || query.username.is_none() {
            return Err(PageError::Forbidden);
        }
        Ok(ResetPasswordView {
            csrf_token: ctx.csrf_token.clone(),
        })
    }

    /// `/register` — the form must not be shown to an existing account; the
    /// `pro` intent flag picks the redirect target.
    pub fn register(&self, ctx: &RequestContext, query: &RegisterQuery) -> PageOutcome<RegisterView> {
        if ctx.session.is_some() {
            let target = if query.pro.is_some() {
                "/account/upgrade"
            } else {
                "/account"
            };
            return Redirect::to(target).into();
        }

        PageOutcome::page(RegisterView {
            is_open: self.config.registration.open,
            is_pro_signup: query.pro.is_some(),
            csrf_token: ctx.csrf_token.clone(),
        })
    }

    /// `/register-pro` — continuation of an out-of-band upgrade-initiation
    /// step; must never be reachable by guessing a URL.
    pub fn register_pro(
        &self,
        ctx: &RequestContext,
        query: &RegisterProQuery,
    ) -> Result<PageOutcome<RegisterProView>, PageError> {
        if ctx.session.is_some() {
            return Ok(Redirect::to("/account").into());
        }

        let (id, email) = match (&query.id, &query.email) {
            (Some(id), Some(email)) => (id.clone(), email.clone()),
            _ => return Err(PageError::Forbidden),
        };

        Ok(PageOutcome::page(RegisterProView {
            id,
            email,
            sales_tax_pct: self.config.stripe.as_ref().map(|s| s.sales_tax_pct),
            csrf_token: ctx.csrf_token.clone(),
        }))
    }

    pub fn registered(&self, query: &RegisteredQuery) -> RegisteredView {
        RegisteredView {
            email: query.email.clone(),
        }
    }

    /// `/profile` — convenience redirect to the session user's profile.
    pub fn profile_redirect(&self, ctx: &RequestContext) -> Redirect {
        match ctx.user() {
            Some(user) => Redirect::to(format!("/{}", user.username)),
            None => Redirect::login("profile"),
        }
    }

    /// `/account` — lenient gate, reachable from ordinary navigation.
    pub fn account(&self, ctx: &RequestContext, query: &AccountQuery) -> PageOutcome<AccountView> {
        let session = match ctx.session_or_login("account") {
            Ok(session) => session,
            Err(redirect) => return redirect.into(),
        };

        let user_quota = quota::user_quota(&self.config, &session.user);
        PageOutcome::page(AccountView {
            updated: query.updated.clone(),
            disk_usage: user_quota.used_bytes,
            disk_quota: user_quota.quota_bytes,
            disk_usage_pct: user_quota.usage_pct(),
            csrf_token: ctx.csrf_token.clone(),
        })
    }

    /// `/account/upgrade` — lenient: reachable from marketing links, so a
    /// missing session redirects rather than failing.
    pub fn account_upgrade(&self, ctx: &RequestContext) -> PageOutcome<AccountUpgradeView> {
        if ctx.session.is_none() {
            return Redirect::login("account/upgrade").into();
        }
        PageOutcome::page(AccountUpgradeView {
            sales_tax_pct: self.config.stripe.as_ref().map(|s| s.sales_tax_pct),
            csrf_token: ctx.csrf_token.clone(),
        })
    }

    /// `/account/upgraded` — strict: only reachable from within the
    /// upgrade flow.
    pub fn account_upgraded(&self, ctx: &RequestContext) -> Result<AccountUpgradedView, PageError> {
        ctx.require_session()?;
        Ok(AccountUpgradedView {})
    }

    pub fn account_cancel_plan(
        &self,
        ctx: &RequestContext,
    ) -> Result<AccountCancelPlanView, PageError> {
        ctx.require_session()?;
        Ok(AccountCancelPlanView {
            csrf_token: ctx.csrf_token.clone(),
        })
    }

    pub fn account_canceled_plan(
        &self,
        ctx: &RequestContext,
    ) -> Result<AccountCanceledPlanView, PageError> {
        ctx.require_session()?;
        Ok(AccountCanceledPlanView {})
    }

    /// `/account/change-password` — public: the password-recovery flow
    /// reuses this page with a nonce, so it cannot require a session.
    pub fn account_change_password(&self, ctx: &RequestContext) -> AccountChangePasswordView {
        AccountChangePasswordView {
            csrf_token: ctx.csrf_token.clone(),
        }
    }

    pub fn account_update_email(
        &self,
        ctx: &RequestContext,
    ) -> Result<AccountUpdateEmailView, PageError> {
        ctx.require_session()?;
        Ok(AccountUpdateEmailView {
            csrf_token: ctx.csrf_token.clone(),
        })
    }
}
