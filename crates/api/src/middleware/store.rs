//! Store-context extractor: the authenticated caller acting as their store.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use reachly_core::error::CoreError;
use reachly_core::types::DbId;
use reachly_db::repositories::StoreRepo;

use crate::error::AppError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// The resolved request context for store-side operations.
///
/// Extraction authenticates the caller and resolves their store row in one
/// step, so every downstream operation receives an explicit
/// `(user_id, store_id)` pair instead of re-reading ambient session state.
/// Callers without a registered store are rejected with 403.
#[derive(Debug, Clone, Copy)]
pub struct StoreContext {
    pub user_id: DbId,
    pub store_id: DbId,
}

impl FromRequestParts<AppState> for StoreContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        let store = StoreRepo::find_by_user_id(&state.pool, user.user_id)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Forbidden(
                    "No store is registered for this account".into(),
                ))
            })?;

        Ok(StoreContext {
            user_id: user.user_id,
            store_id: store.id,
        })
    }
}
