//! Route definitions for the store-side `/campaigns` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::campaign;
use crate::state::AppState;

/// Routes mounted at `/campaigns`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// GET    /{id}                  -> get_by_id
/// PATCH  /{id}                  -> update
/// DELETE /{id}                  -> delete
/// POST   /{id}/publish          -> publish
/// GET    /{id}/applications     -> applicants
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(campaign::list).post(campaign::create))
        .route(
            "/{id}",
            get(campaign::get_by_id)
                .patch(campaign::update)
                .delete(campaign::delete),
        )
        .route("/{id}/publish", post(campaign::publish))
        .route("/{id}/applications", get(campaign::applicants))
}
