//! Repository for the `influencers` and `influencer_social_accounts` tables.

use sqlx::PgExecutor;

use reachly_core::types::DbId;

use crate::models::influencer::{CreateInfluencer, CreateSocialAccount, Influencer, SocialAccount};

const COLUMNS: &str = "id, user_id, display_name, niche, bio, created_at, updated_at";

const ACCOUNT_COLUMNS: &str = "id, influencer_id, platform, handle, followers, created_at";

/// Provides CRUD operations for influencer profiles.
pub struct InfluencerRepo;

impl InfluencerRepo {
    /// Insert a new influencer profile, returning the created row.
    pub async fn create(
        ex: impl PgExecutor<'_>,
        input: &CreateInfluencer,
    ) -> Result<Influencer, sqlx::Error> {
        let query = format!(
            "INSERT INTO influencers (user_id, display_name, niche, bio)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Influencer>(&query)
            .bind(input.user_id)
            .bind(&input.display_name)
            .bind(&input.niche)
            .bind(&input.bio)
            .fetch_one(ex)
            .await
    }

    /// Find the influencer profile of an auth account, if any.
    pub async fn find_by_user_id(
        ex: impl PgExecutor<'_>,
        user_id: DbId,
    ) -> Result<Option<Influencer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM influencers WHERE user_id = $1");
        sqlx::query_as::<_, Influencer>(&query)
            .bind(user_id)
            .fetch_optional(ex)
            .await
    }

    /// Link a social account to an influencer profile.
    pub async fn add_social_account(
        ex: impl PgExecutor<'_>,
        input: &CreateSocialAccount,
    ) -> Result<SocialAccount, sqlx::Error> {
        let query = format!(
            "INSERT INTO influencer_social_accounts (influencer_id, platform, handle, followers)
             VALUES ($1, $2, $3, $4)
             RETURNING {ACCOUNT_COLUMNS}"
        );
        sqlx::query_as::<_, SocialAccount>(&query)
            .bind(input.influencer_id)
            .bind(&input.platform)
            .bind(&input.handle)
            .bind(input.followers)
            .fetch_one(ex)
            .await
    }

    /// List an influencer's social accounts, largest audience first.
    pub async fn list_social_accounts(
        ex: impl PgExecutor<'_>,
        influencer_id: DbId,
    ) -> Result<Vec<SocialAccount>, sqlx::Error> {
        let query = format!(
            "SELECT {ACCOUNT_COLUMNS} FROM influencer_social_accounts
             WHERE influencer_id = $1
             ORDER BY followers DESC"
        );
        sqlx::query_as::<_, SocialAccount>(&query)
            .bind(influencer_id)
            .fetch_all(ex)
            .await
    }
}
