//! HTTP surface: route table, handlers, and response mapping.
//!
//! Handlers stay thin: extract query parameters and the request context,
//! call the page controller, and map its outcome onto HTTP. View bundles
//! are serialized as JSON for the (external) renderer; redirects become
//! 303 responses; `Forbidden` becomes 403.

use axum::extract::{Extension, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use metrics::counter;
use serde::Serialize;
use silo_pages::{
    AccountQuery, ExploreQuery, FrontpageQuery, LoginQuery, PageError, PageOutcome, Redirect,
    RegisterProQuery, RegisterQuery, RegisteredQuery, RequestContext, ResetPasswordQuery,
};
use tracing::error;

use crate::metrics::{FORBIDDEN_TOTAL, PAGES_RENDERED_TOTAL, REDIRECTS_TOTAL, RENDER_ERRORS_TOTAL};
use crate::sessions::resolve_session;
use crate::state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(frontpage))
        .route("/explore", get(explore))
        .route("/new-archive", get(new_archive))
        .route("/about", get(about))
        .route("/pricing", get(pricing))
        .route("/terms", get(terms))
        .route("/privacy", get(privacy))
        .route("/acceptable-use", get(acceptable_use))
        .route("/support", get(support))
        .route("/login", get(login))
        .route("/forgot-password", get(forgot_password))
        .route("/reset-password", get(reset_password))
        .route("/register", get(register))
        .route("/register-pro", get(register_pro))
        .route("/registered", get(registered))
        .route("/profile", get(profile_redirect))
        .route("/account", get(account))
        .route("/account/upgrade", get(account_upgrade))
        .route("/account/upgraded", get(account_upgraded))
        .route("/account/cancel-plan", get(account_cancel_plan))
        .route("/account/canceled-plan", get(account_canceled_plan))
        .route("/account/change-password", get(account_change_password))
        .route("/account/update-email", get(account_update_email))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            resolve_session,
        ))
        .with_state(state)
}

// ── Response mapping ──────────────────────────────────────────────

fn page<T: Serialize>(view: T) -> Response {
    counter!(PAGES_RENDERED_TOTAL).increment(1);
    Json(view).into_response()
}

fn see_other(redirect: Redirect) -> Response {
    counter!(REDIRECTS_TOTAL).increment(1);
    (
        StatusCode::SEE_OTHER,
        [(header::LOCATION, redirect.location)],
    )
        .into_response()
}

fn outcome<T: Serialize>(outcome: PageOutcome<T>) -> Response {
    match outcome {
        PageOutcome::Page(view) => page(view),
        PageOutcome::Redirect(redirect) => see_other(redirect),
    }
}

fn fail(err: PageError) -> Response {
    if err.is_forbidden() {
        counter!(FORBIDDEN_TOTAL).increment(1);
        return (
            StatusCode::FORBIDDEN,
            Json(serde_json::json!({"error": "forbidden"})),
        )
            .into_response();
    }
    internal_error(&err)
}

/// 500 response for store/registry failures. The page is either fully
/// resolved or not rendered at all, so nothing partial leaks here.
pub(crate) fn internal_error(err: &dyn std::fmt::Display) -> Response {
    counter!(RENDER_ERRORS_TOTAL).increment(1);
    error!("page render failed: {err}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({"error": "internal server error"})),
    )
        .into_response()
}

fn rendered<T: Serialize>(result: Result<T, PageError>) -> Response {
    match result {
        Ok(view) => page(view),
        Err(err) => fail(err),
    }
}

fn rendered_or_redirected<T: Serialize>(result: Result<PageOutcome<T>, PageError>) -> Response {
    match result {
        Ok(o) => outcome(o),
        Err(err) => fail(err),
    }
}

// ── Handlers ──────────────────────────────────────────────────────

async fn frontpage(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Query(query): Query<FrontpageQuery>,
) -> Response {
    rendered(state.pages.frontpage(&ctx, &query).await)
}

async fn explore(State(state): State<AppState>, Query(query): Query<ExploreQuery>) -> Response {
    rendered(state.pages.explore(&query).await)
}

async fn new_archive(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Response {
    outcome(state.pages.new_archive(&ctx))
}

async fn about(State(state): State<AppState>) -> Response {
    page(state.pages.about())
}

async fn pricing(State(state): State<AppState>) -> Response {
    page(state.pages.pricing())
}

async fn terms(State(state): State<AppState>) -> Response {
    page(state.pages.terms())
}

async fn privacy(State(state): State<AppState>) -> Response {
    page(state.pages.privacy())
}

async fn acceptable_use(State(state): State<AppState>) -> Response {
    page(state.pages.acceptable_use())
}

async fn support(State(state): State<AppState>) -> Response {
    page(state.pages.support())
}

async fn login(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Query(query): Query<LoginQuery>,
) -> Response {
    outcome(state.pages.login(&ctx, &query))
}

async fn forgot_password(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Response {
    page(state.pages.forgot_password(&ctx))
}

async fn reset_password(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Query(query): Query<ResetPasswordQuery>,
) -> Response {
    rendered(state.pages.reset_password(&ctx, &query))
}

async fn register(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Query(query): Query<RegisterQuery>,
) -> Response {
    outcome(state.pages.register(&ctx, &query))
}

async fn register_pro(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Query(query): Query<RegisterProQuery>,
) -> Response {
    rendered_or_redirected(state.pages.register_pro(&ctx, &query))
}

async fn registered(
    State(state): State<AppState>,
    Query(query): Query<RegisteredQuery>,
) -> Response {
    page(state.pages.registered(&query))
}

async fn profile_redirect(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Response {
    see_other(state.pages.profile_redirect(&ctx))
}

async fn account(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Query(query): Query<AccountQuery>,
) -> Response {
    outcome(state.pages.account(&ctx, &query))
}

async fn account_upgrade(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Response {
    outcome(state.pages.account_upgrade(&ctx))
}

async fn account_upgraded(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Response {
    rendered(state.pages.account_upgraded(&ctx))
}

async fn account_cancel_plan(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Response {
    rendered(state.pages.account_cancel_plan(&ctx))
}

async fn account_canceled_plan(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Response {
    rendered(state.pages.account_canceled_plan(&ctx))
}

async fn account_change_password(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Response {
    page(state.pages.account_change_password(&ctx))
}

async fn account_update_email(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Response {
    rendered(state.pages.account_update_email(&ctx))
}
