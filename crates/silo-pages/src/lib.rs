//! Page controller, usage aggregation, and lifecycle gating for the silo
//! platform.
//!
//! This crate is the request-time core: it classifies sessions, enforces
//! the account lifecycle gates, fans out to the backing stores and the
//! live archive registry, and assembles fully-resolved view bundles for
//! the (external) renderer.
//!
//! # Example
//!
//! ```no_run
//! use silo_pages::{FrontpageQuery, Pages, RequestContext};
//!
//! # async fn example(pages: Pages) -> Result<(), silo_pages::PageError> {
//! let ctx = RequestContext::anonymous();
//! let view = pages.frontpage(&ctx, &FrontpageQuery::default()).await?;
//! assert_eq!(view.peer_count, 0);
//! # Ok(())
//! # }
//! ```

mod aggregate;
mod controller;
mod error;
mod outcome;
mod quota;
mod session;
mod view;

pub use aggregate::{aggregate_user_archives, UserArchive, UserArchives};
pub use controller::{
    AccountQuery, ExploreQuery, FrontpageQuery, LoginQuery, Pages, RegisterProQuery,
    RegisterQuery, RegisteredQuery, ResetPasswordQuery, ACTIVITY_LIMIT, POPULAR_LIMIT,
};
pub use error::PageError;
pub use outcome::{PageOutcome, Redirect};
pub use quota::{user_disk_quota, user_disk_quota_fraction, user_quota, DiskQuota};
pub use session::{RequestContext, Session};
pub use view::{
    AccountCancelPlanView, AccountCanceledPlanView, AccountChangePasswordView,
    AccountUpdateEmailView, AccountUpgradeView, AccountUpgradedView, AccountView, ExploreView,
    ForgotPasswordView, FrontpageView, LoginView, NewArchiveView, RegisterProView, RegisterView,
    RegisteredView, ResetPasswordView, StaticView, UserSummary,
};
