//! Campaign entity model and persistence DTOs.
//!
//! The request-side DTOs (`CreateCampaign` / `UpdateCampaign`) live in
//! `reachly_core::campaign` next to their validators; the structs here are
//! the row shape and the validated write records the repositories accept.

use serde::Serialize;
use sqlx::FromRow;

use reachly_core::types::{DbId, Timestamp};

/// A row from the `campaigns` table.
///
/// `status` and `campaign_type` are stored as upper-case strings (CHECK
/// constrained); parse with `reachly_core::campaign::CampaignStatus` /
/// `CampaignType` where the lifecycle rules need them.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    pub id: DbId,
    pub store_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub budget: f64,
    pub currency: String,
    pub duration_days: Option<i32>,
    pub status: String,
    #[serde(rename = "type")]
    pub campaign_type: Option<String>,
    pub type_specific_data: Option<serde_json::Value>,
    pub targets: serde_json::Value,
    pub platforms: Option<Vec<String>>,
    pub influencer_location: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated record for inserting a campaign.
#[derive(Debug, Clone)]
pub struct NewCampaign {
    pub store_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub budget: f64,
    pub currency: String,
    pub duration_days: Option<i32>,
    pub status: String,
    pub campaign_type: Option<String>,
    pub type_specific_data: Option<serde_json::Value>,
    pub targets: serde_json::Value,
    pub platforms: Option<Vec<String>>,
    pub influencer_location: Option<serde_json::Value>,
}

/// Validated field changes for a partial campaign update.
///
/// `None` leaves the stored value untouched. `type_specific_data` carries
/// the final payload (already shallow-merged with the stored one).
#[derive(Debug, Clone, Default)]
pub struct CampaignChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub currency: Option<String>,
    pub duration_days: Option<i32>,
    pub campaign_type: Option<String>,
    pub type_specific_data: Option<serde_json::Value>,
    pub targets: Option<serde_json::Value>,
    pub platforms: Option<Vec<String>>,
    pub influencer_location: Option<serde_json::Value>,
}

/// Filters for a store's own campaign listing. `limit`/`offset` are
/// expected to be pre-clamped by the caller.
#[derive(Debug, Clone)]
pub struct CampaignListFilter {
    pub status: Option<String>,
    pub campaign_type: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

/// Filters for the public discovery feed of published campaigns.
#[derive(Debug, Clone)]
pub struct DiscoverFilter {
    /// Pre-escaped `ILIKE` pattern (see `reachly_core::search::like_pattern`).
    pub search: Option<String>,
    pub category: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

/// A campaign listing row: the campaign plus its brand summary and the
/// number of influencers who applied.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CampaignSummary {
    pub id: DbId,
    pub store_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub budget: f64,
    pub currency: String,
    pub duration_days: Option<i32>,
    pub status: String,
    #[serde(rename = "type")]
    pub campaign_type: Option<String>,
    pub store_name: String,
    pub store_category: Option<String>,
    pub applicant_count: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
