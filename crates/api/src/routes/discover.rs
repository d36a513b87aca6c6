//! Route definitions for the public `/discover` surface.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::discover;
use crate::state::AppState;

/// Routes mounted at `/discover`.
///
/// ```text
/// GET  /campaigns               -> list (public)
/// POST /campaigns/{id}/apply    -> apply (influencer auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/campaigns", get(discover::list))
        .route("/campaigns/{id}/apply", post(discover::apply))
}
