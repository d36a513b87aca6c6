//! Campaign application (campaign ↔ influencer join) model and projections.

use serde::Serialize;
use sqlx::FromRow;

use reachly_core::types::{DbId, Timestamp};

/// A row from the `campaign_applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: DbId,
    pub campaign_id: DbId,
    pub influencer_id: DbId,
    pub applied_at: Timestamp,
}

/// An application joined with the applying influencer's public profile.
///
/// `social_accounts` is filled in by the repository in a second query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ApplicantSummary {
    pub application_id: DbId,
    pub campaign_id: DbId,
    pub campaign_title: String,
    pub influencer_id: DbId,
    pub display_name: String,
    pub niche: Option<String>,
    pub bio: Option<String>,
    pub applied_at: Timestamp,
    #[sqlx(skip)]
    pub social_accounts: Vec<SocialAccountSummary>,
}

/// The slice of a social account shown to stores reviewing applicants.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SocialAccountSummary {
    #[serde(skip_serializing)]
    pub influencer_id: DbId,
    pub platform: String,
    pub handle: String,
    pub followers: i64,
}
