//! View-data bundles handed to the renderer.
//!
//! Rendering itself is out of scope; these types are the fully-resolved,
//! serializable contract between the controller and the external renderer.
//! Absent values serialize as absent fields, never as `false`/`null`
//! sentinels.

use serde::Serialize;
use silo_store::{ActivityEvent, ArchiveListing, FeaturedArchive};

use crate::aggregate::UserArchive;

/// The frontpage bundle.
#[derive(Debug, Clone, Serialize)]
pub struct FrontpageView {
    /// Email-verification flag passed through from the query string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<String>,
    pub user_archives: Vec<UserArchive>,
    pub featured: Vec<FeaturedArchive>,
    /// Popular listing; omitted unless the session user holds the admin
    /// scope.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popular: Option<Vec<ArchiveListing>>,
    /// Absent for anonymous visitors, never zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_usage: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_quota: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_usage_pct: Option<u8>,
    pub peer_count: u64,
}

/// The explore page: either the global activity feed or the user listing.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ExploreView {
    Activity {
        activity_limit: usize,
        activity: Vec<ActivityEvent>,
    },
    Users {
        users: Vec<UserSummary>,
    },
}

/// Public slice of a user record for the explore listing.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub username: String,
    pub archive_count: usize,
}

/// The new-archive form. Quota figures are reported in whole MiB.
#[derive(Debug, Clone, Serialize)]
pub struct NewArchiveView {
    pub disk_usage_mb: u64,
    pub disk_quota_mb: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
}

/// A purely static page, identified by template name.
#[derive(Debug, Clone, Serialize)]
pub struct StaticView {
    pub page: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginView {
    /// Set after a completed password reset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetPasswordView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterView {
    pub is_open: bool,
    pub is_pro_signup: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterProView {
    /// Pending-user id from the upgrade-initiation step.
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountView {
    /// Set after a successful settings update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    pub disk_usage: u64,
    pub disk_quota: u64,
    pub disk_usage_pct: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountUpgradeView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sales_tax_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountUpgradedView {}

#[derive(Debug, Clone, Serialize)]
pub struct AccountCancelPlanView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountCanceledPlanView {}

#[derive(Debug, Clone, Serialize)]
pub struct AccountChangePasswordView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountUpdateEmailView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf_token: Option<String>,
}
