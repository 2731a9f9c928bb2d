use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Router,
};

/// Body returned by the liveness endpoint.
pub const LIVENESS_BODY: &str = "Bot is running!\n";

/// Liveness router.
///
/// There are no routes: every method and path falls through to the same handler
/// so any probe the hosting platform is configured with succeeds.
pub fn router() -> Router {
    Router::new().fallback(liveness)
}

async fn liveness() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain")],
        LIVENESS_BODY,
    )
}
