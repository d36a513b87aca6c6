//! Campaign lifecycle operations.
//!
//! Every operation takes the explicit request context resolved by the
//! extractors ([`StoreContext`] for store-side calls, a bare user id for
//! influencer-side calls) and returns domain errors as values; the axum
//! boundary turns them into the JSON error envelope.
//!
//! Lifecycle rules enforced here: campaigns are created as drafts (or
//! published immediately on request), only drafts may be edited or
//! deleted, and publication is one-way.

use serde::Serialize;

use reachly_core::campaign::{
    self, CampaignStatus, CampaignType, CreateCampaign, UpdateCampaign,
};
use reachly_core::error::CoreError;
use reachly_core::payload::{merge_type_data, TypePayload};
use reachly_core::search;
use reachly_core::types::DbId;
use reachly_db::models::application::{ApplicantSummary, Application};
use reachly_db::models::campaign::{
    Campaign, CampaignChanges, CampaignListFilter, CampaignSummary, DiscoverFilter, NewCampaign,
};
use reachly_events::CampaignEvent;

use reachly_db::repositories::{ApplicationRepo, CampaignRepo, InfluencerRepo, ProductRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::StoreContext;
use crate::query::{CampaignListParams, DiscoverParams};
use crate::response::Pagination;
use crate::state::AppState;

/* --------------------------------------------------------------------------
Helpers
-------------------------------------------------------------------------- */

/// Stored status strings are CHECK-constrained; failure to parse one means
/// the row is corrupt, not that the request was bad.
fn parse_stored_status(raw: &str) -> AppResult<CampaignStatus> {
    CampaignStatus::parse(raw)
        .map_err(|_| AppError::InternalError(format!("campaign row carries unknown status '{raw}'")))
}

fn parse_stored_type(raw: &str) -> AppResult<CampaignType> {
    CampaignType::parse(raw)
        .map_err(|_| AppError::InternalError(format!("campaign row carries unknown type '{raw}'")))
}

fn ensure_owned(campaign: &Campaign, ctx: &StoreContext) -> AppResult<()> {
    if campaign.store_id == ctx.store_id {
        Ok(())
    } else {
        Err(CoreError::Forbidden("You do not own this campaign".into()).into())
    }
}

fn to_json<T: Serialize>(value: &T) -> AppResult<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| AppError::InternalError(format!("failed to serialize field: {e}")))
}

/* --------------------------------------------------------------------------
Store-side operations
-------------------------------------------------------------------------- */

/// Create a campaign for the caller's store.
///
/// Validates the common fields and the type-specific payload, verifies
/// that a referenced product belongs to the caller's store, and persists
/// as DRAFT -- or directly as PUBLISHED when `input.publish` is set.
pub async fn create_campaign(
    state: &AppState,
    ctx: &StoreContext,
    input: CreateCampaign,
) -> AppResult<Campaign> {
    let publish = input.publish;
    let validated = campaign::validate_create(&input).map_err(CoreError::Validation)?;

    let status = if publish {
        CampaignStatus::Published
    } else {
        CampaignStatus::Draft
    };

    let mut tx = state.pool.begin().await?;

    if let Some(product_id) = validated.type_payload.as_ref().and_then(TypePayload::product_id) {
        ProductRepo::find_owned(&mut *tx, product_id, ctx.store_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Product",
                id: product_id,
            })?;
    }

    let record = NewCampaign {
        store_id: ctx.store_id,
        title: validated.title,
        description: validated.description,
        budget: validated.budget,
        currency: validated.currency,
        duration_days: validated.duration_days,
        status: status.as_str().to_string(),
        campaign_type: validated.campaign_type.map(|t| t.as_str().to_string()),
        type_specific_data: validated.type_specific_data,
        targets: to_json(&validated.targets)?,
        platforms: validated.platforms,
        influencer_location: validated
            .influencer_location
            .as_ref()
            .map(to_json)
            .transpose()?,
    };

    let created = CampaignRepo::create(&mut *tx, &record).await?;
    tx.commit().await?;

    tracing::info!(
        campaign_id = created.id,
        store_id = ctx.store_id,
        status = %status,
        "Campaign created"
    );
    state.events.publish(CampaignEvent::created(
        created.id,
        ctx.store_id,
        status == CampaignStatus::Published,
    ));

    Ok(created)
}

/// List the caller's campaigns with optional status/type filters.
pub async fn list_campaigns(
    state: &AppState,
    ctx: &StoreContext,
    params: &CampaignListParams,
) -> AppResult<(Vec<CampaignSummary>, Pagination)> {
    let status = params
        .status
        .as_deref()
        .map(CampaignStatus::parse)
        .transpose()?;
    let campaign_type = params
        .campaign_type
        .as_deref()
        .map(CampaignType::parse)
        .transpose()?;

    let page = search::clamp_page(params.page);
    let limit = search::clamp_limit(params.limit);
    let filter = CampaignListFilter {
        status: status.map(|s| s.as_str().to_string()),
        campaign_type: campaign_type.map(|t| t.as_str().to_string()),
        limit,
        offset: search::page_offset(page, limit),
    };

    let campaigns = CampaignRepo::list_by_store(&state.pool, ctx.store_id, &filter).await?;
    let total = CampaignRepo::count_by_store(&state.pool, ctx.store_id, &filter).await?;

    Ok((campaigns, Pagination::new(page, limit, total)))
}

/// Fetch one campaign with an ownership check.
pub async fn get_campaign(state: &AppState, ctx: &StoreContext, id: DbId) -> AppResult<Campaign> {
    let campaign = CampaignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Campaign",
            id,
        })?;
    ensure_owned(&campaign, ctx)?;
    Ok(campaign)
}

/// Partially update a draft campaign.
///
/// The type-specific payload is shallow-merged over the stored one (new
/// keys win, all other stored keys survive) and the merged result is
/// validated against the effective campaign type -- which may itself be
/// changed while the campaign is still a draft.
pub async fn update_campaign(
    state: &AppState,
    ctx: &StoreContext,
    id: DbId,
    input: UpdateCampaign,
) -> AppResult<Campaign> {
    let validated = campaign::validate_update(&input).map_err(CoreError::Validation)?;

    let mut tx = state.pool.begin().await?;

    let existing = CampaignRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Campaign",
            id,
        })?;
    ensure_owned(&existing, ctx)?;

    let status = parse_stored_status(&existing.status)?;
    campaign::ensure_editable(status)?;

    let stored_type = existing
        .campaign_type
        .as_deref()
        .map(parse_stored_type)
        .transpose()?;
    let effective_type = validated.campaign_type.or(stored_type);

    let merged_payload = validated
        .type_specific_data
        .as_ref()
        .map(|update_data| merge_type_data(existing.type_specific_data.as_ref(), update_data));

    let mut type_payload = None;
    if let Some(merged) = &merged_payload {
        let Some(ty) = effective_type else {
            return Err(CoreError::validation(
                "type",
                "is required when type_specific_data is provided",
            )
            .into());
        };
        type_payload = Some(TypePayload::validate(ty, merged).map_err(CoreError::Validation)?);
    } else if validated.campaign_type.is_some() {
        // The type changed without new payload data; the stored payload
        // must still fit the new type.
        if let (Some(ty), Some(stored)) = (effective_type, existing.type_specific_data.as_ref()) {
            type_payload = Some(TypePayload::validate(ty, stored).map_err(CoreError::Validation)?);
        }
    }

    if let Some(product_id) = type_payload.as_ref().and_then(TypePayload::product_id) {
        ProductRepo::find_owned(&mut *tx, product_id, ctx.store_id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Product",
                id: product_id,
            })?;
    }

    let changes = CampaignChanges {
        title: validated.title,
        description: validated.description,
        budget: validated.budget,
        currency: validated.currency,
        duration_days: validated.duration_days,
        campaign_type: validated.campaign_type.map(|t| t.as_str().to_string()),
        type_specific_data: merged_payload,
        targets: validated.targets.as_ref().map(to_json).transpose()?,
        platforms: validated.platforms,
        influencer_location: validated
            .influencer_location
            .as_ref()
            .map(to_json)
            .transpose()?,
    };

    let updated = CampaignRepo::update(&mut *tx, id, &changes)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Campaign",
            id,
        })?;
    tx.commit().await?;

    tracing::info!(campaign_id = id, store_id = ctx.store_id, "Campaign updated");
    state
        .events
        .publish(CampaignEvent::updated(updated.id, ctx.store_id));

    Ok(updated)
}

/// Delete a draft campaign.
pub async fn delete_campaign(state: &AppState, ctx: &StoreContext, id: DbId) -> AppResult<()> {
    let mut tx = state.pool.begin().await?;

    let existing = CampaignRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Campaign",
            id,
        })?;
    ensure_owned(&existing, ctx)?;

    let status = parse_stored_status(&existing.status)?;
    campaign::ensure_deletable(status)?;

    CampaignRepo::delete(&mut *tx, id).await?;
    tx.commit().await?;

    tracing::info!(campaign_id = id, store_id = ctx.store_id, "Campaign deleted");
    state
        .events
        .publish(CampaignEvent::deleted(id, ctx.store_id));

    Ok(())
}

/// Publish a draft campaign. One-way: there is no unpublish.
pub async fn publish_campaign(
    state: &AppState,
    ctx: &StoreContext,
    id: DbId,
) -> AppResult<Campaign> {
    let mut tx = state.pool.begin().await?;

    let existing = CampaignRepo::find_by_id(&mut *tx, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Campaign",
            id,
        })?;
    ensure_owned(&existing, ctx)?;

    let status = parse_stored_status(&existing.status)?;
    campaign::ensure_publishable(status)?;
    campaign::ensure_publish_ready(&existing.title, existing.budget)?;

    let published = CampaignRepo::set_status(&mut *tx, id, CampaignStatus::Published)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Campaign",
            id,
        })?;
    tx.commit().await?;

    tracing::info!(campaign_id = id, store_id = ctx.store_id, "Campaign published");
    state
        .events
        .publish(CampaignEvent::published(id, ctx.store_id));

    Ok(published)
}

/// Applicants for one of the caller's campaigns.
pub async fn campaign_applicants(
    state: &AppState,
    ctx: &StoreContext,
    id: DbId,
) -> AppResult<Vec<ApplicantSummary>> {
    // Ownership gate before exposing applicant data.
    get_campaign(state, ctx, id).await?;
    Ok(ApplicationRepo::list_by_campaign(&state.pool, id).await?)
}

/// Applicants across every campaign of the caller's store.
pub async fn store_applications(
    state: &AppState,
    ctx: &StoreContext,
) -> AppResult<Vec<ApplicantSummary>> {
    Ok(ApplicationRepo::list_by_store(&state.pool, ctx.store_id).await?)
}

/* --------------------------------------------------------------------------
Public / influencer-side operations
-------------------------------------------------------------------------- */

/// Public discovery feed: published campaigns only, with optional
/// case-insensitive free-text search over title, description, and brand
/// name, plus a store-category filter.
pub async fn discover_campaigns(
    state: &AppState,
    params: &DiscoverParams,
) -> AppResult<(Vec<CampaignSummary>, Pagination)> {
    let page = search::clamp_page(params.page);
    let limit = search::clamp_limit(params.limit);

    let filter = DiscoverFilter {
        search: params.search.as_deref().and_then(search::like_pattern),
        category: params
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string),
        limit,
        offset: search::page_offset(page, limit),
    };

    let campaigns = CampaignRepo::list_published(&state.pool, &filter).await?;
    let total = CampaignRepo::count_published(&state.pool, &filter).await?;

    Ok((campaigns, Pagination::new(page, limit, total)))
}

/// An influencer applies to a published campaign.
///
/// Requires an influencer profile on the calling account; drafts do not
/// accept applications and duplicates are rejected.
pub async fn apply_to_campaign(
    state: &AppState,
    user_id: DbId,
    campaign_id: DbId,
) -> AppResult<Application> {
    let influencer = InfluencerRepo::find_by_user_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| {
            CoreError::Forbidden("No influencer profile is registered for this account".into())
        })?;

    let mut tx = state.pool.begin().await?;

    let campaign = CampaignRepo::find_by_id(&mut *tx, campaign_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Campaign",
            id: campaign_id,
        })?;

    let status = parse_stored_status(&campaign.status)?;
    if status != CampaignStatus::Published {
        return Err(CoreError::Conflict(
            "Only published campaigns accept applications".to_string(),
        )
        .into());
    }

    if ApplicationRepo::exists(&mut *tx, campaign_id, influencer.id).await? {
        return Err(CoreError::Conflict(
            "You have already applied to this campaign".to_string(),
        )
        .into());
    }

    let application = ApplicationRepo::create(&mut *tx, campaign_id, influencer.id).await?;
    tx.commit().await?;

    tracing::info!(
        campaign_id,
        influencer_id = influencer.id,
        "Application received"
    );
    state.events.publish(CampaignEvent::application_received(
        campaign_id,
        campaign.store_id,
    ));

    Ok(application)
}
