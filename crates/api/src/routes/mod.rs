//! Route definitions.

pub mod campaigns;
pub mod discover;
pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /campaigns                          list, create (store auth)
/// /campaigns/{id}                     get, patch, delete
/// /campaigns/{id}/publish             one-way publish (POST)
/// /campaigns/{id}/applications        applicants for one campaign
/// /applications                       applicants across the store
///
/// /discover/campaigns                 public feed of published campaigns
/// /discover/campaigns/{id}/apply      influencer applies (POST, auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/campaigns", campaigns::router())
        .nest("/discover", discover::router())
        .route(
            "/applications",
            get(handlers::campaign::store_applications),
        )
}
