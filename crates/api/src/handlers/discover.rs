//! Handlers for the public `/discover` surface and influencer applications.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use reachly_core::types::DbId;
use reachly_db::models::application::Application;
use reachly_db::models::campaign::CampaignSummary;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::query::DiscoverParams;
use crate::response::{ok, Envelope, Pagination};
use crate::services::campaign as service;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DiscoverBody {
    pub campaigns: Vec<CampaignSummary>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct ApplicationBody {
    pub application: Application,
    pub message: &'static str,
}

/// GET /api/v1/discover/campaigns
///
/// Public: no authentication required.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<DiscoverParams>,
) -> AppResult<Json<Envelope<DiscoverBody>>> {
    let (campaigns, pagination) = service::discover_campaigns(&state, &params).await?;
    Ok(ok(DiscoverBody {
        campaigns,
        pagination,
    }))
}

/// POST /api/v1/discover/campaigns/{id}/apply
pub async fn apply(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<Envelope<ApplicationBody>>)> {
    let application = service::apply_to_campaign(&state, user.user_id, id).await?;
    Ok((
        StatusCode::CREATED,
        ok(ApplicationBody {
            application,
            message: "Application submitted",
        }),
    ))
}
