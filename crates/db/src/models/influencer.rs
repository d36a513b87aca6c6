//! Influencer entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reachly_core::types::{DbId, Timestamp};

/// A row from the `influencers` table.
///
/// Like stores, influencer profiles hang off an external auth account id,
/// at most one per account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Influencer {
    pub id: DbId,
    pub user_id: DbId,
    pub display_name: String,
    pub niche: Option<String>,
    pub bio: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering an influencer profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateInfluencer {
    pub user_id: DbId,
    pub display_name: String,
    pub niche: Option<String>,
    pub bio: Option<String>,
}

/// A row from the `influencer_social_accounts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SocialAccount {
    pub id: DbId,
    pub influencer_id: DbId,
    pub platform: String,
    pub handle: String,
    pub followers: i64,
    pub created_at: Timestamp,
}

/// DTO for linking a social account to an influencer profile.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSocialAccount {
    pub influencer_id: DbId,
    pub platform: String,
    pub handle: String,
    pub followers: i64,
}
