//! Handlers for the store-side `/campaigns` resource.
//!
//! Thin wrappers over [`crate::services::campaign`]: extract the request
//! context, delegate, and wrap the result in the success envelope.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use reachly_core::campaign::{CreateCampaign, UpdateCampaign};
use reachly_core::types::DbId;
use reachly_db::models::application::ApplicantSummary;
use reachly_db::models::campaign::{Campaign, CampaignSummary};

use crate::error::AppResult;
use crate::middleware::StoreContext;
use crate::query::CampaignListParams;
use crate::response::{ok, Envelope, Pagination};
use crate::services::campaign as service;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CampaignBody {
    pub campaign: Campaign,
}

#[derive(Debug, Serialize)]
pub struct CampaignMessageBody {
    pub campaign: Campaign,
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CampaignListBody {
    pub campaigns: Vec<CampaignSummary>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct ApplicationsBody {
    pub applications: Vec<ApplicantSummary>,
}

/// POST /api/v1/campaigns
pub async fn create(
    State(state): State<AppState>,
    ctx: StoreContext,
    Json(input): Json<CreateCampaign>,
) -> AppResult<(StatusCode, Json<Envelope<CampaignMessageBody>>)> {
    let campaign = service::create_campaign(&state, &ctx, input).await?;
    Ok((
        StatusCode::CREATED,
        ok(CampaignMessageBody {
            campaign,
            message: "Campaign created",
        }),
    ))
}

/// GET /api/v1/campaigns
pub async fn list(
    State(state): State<AppState>,
    ctx: StoreContext,
    Query(params): Query<CampaignListParams>,
) -> AppResult<Json<Envelope<CampaignListBody>>> {
    let (campaigns, pagination) = service::list_campaigns(&state, &ctx, &params).await?;
    Ok(ok(CampaignListBody {
        campaigns,
        pagination,
    }))
}

/// GET /api/v1/campaigns/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ctx: StoreContext,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<CampaignBody>>> {
    let campaign = service::get_campaign(&state, &ctx, id).await?;
    Ok(ok(CampaignBody { campaign }))
}

/// PATCH /api/v1/campaigns/{id}
pub async fn update(
    State(state): State<AppState>,
    ctx: StoreContext,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCampaign>,
) -> AppResult<Json<Envelope<CampaignMessageBody>>> {
    let campaign = service::update_campaign(&state, &ctx, id, input).await?;
    Ok(ok(CampaignMessageBody {
        campaign,
        message: "Campaign updated",
    }))
}

/// DELETE /api/v1/campaigns/{id}
pub async fn delete(
    State(state): State<AppState>,
    ctx: StoreContext,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<MessageBody>>> {
    service::delete_campaign(&state, &ctx, id).await?;
    Ok(ok(MessageBody {
        message: "Campaign deleted",
    }))
}

/// POST /api/v1/campaigns/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    ctx: StoreContext,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<CampaignMessageBody>>> {
    let campaign = service::publish_campaign(&state, &ctx, id).await?;
    Ok(ok(CampaignMessageBody {
        campaign,
        message: "Campaign published",
    }))
}

/// GET /api/v1/campaigns/{id}/applications
pub async fn applicants(
    State(state): State<AppState>,
    ctx: StoreContext,
    Path(id): Path<DbId>,
) -> AppResult<Json<Envelope<ApplicationsBody>>> {
    let applications = service::campaign_applicants(&state, &ctx, id).await?;
    Ok(ok(ApplicationsBody { applications }))
}

/// GET /api/v1/applications
pub async fn store_applications(
    State(state): State<AppState>,
    ctx: StoreContext,
) -> AppResult<Json<Envelope<ApplicationsBody>>> {
    let applications = service::store_applications(&state, &ctx).await?;
    Ok(ok(ApplicationsBody { applications }))
}
