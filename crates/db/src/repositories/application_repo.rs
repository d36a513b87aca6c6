//! Repository for the `campaign_applications` table.

use std::collections::HashMap;

use sqlx::{PgExecutor, PgPool};

use reachly_core::types::DbId;

use crate::models::application::{Application, ApplicantSummary, SocialAccountSummary};

const COLUMNS: &str = "id, campaign_id, influencer_id, applied_at";

/// Applicant projection shared by the per-campaign and per-store listings.
const APPLICANT_COLUMNS: &str = "a.id AS application_id, a.campaign_id, c.title AS campaign_title, \
     i.id AS influencer_id, i.display_name, i.niche, i.bio, a.applied_at";

/// Provides operations for campaign applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Record an influencer's application to a campaign.
    pub async fn create(
        ex: impl PgExecutor<'_>,
        campaign_id: DbId,
        influencer_id: DbId,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaign_applications (campaign_id, influencer_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(campaign_id)
            .bind(influencer_id)
            .fetch_one(ex)
            .await
    }

    /// Whether the influencer already applied to this campaign.
    pub async fn exists(
        ex: impl PgExecutor<'_>,
        campaign_id: DbId,
        influencer_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM campaign_applications
                 WHERE campaign_id = $1 AND influencer_id = $2
             )",
        )
        .bind(campaign_id)
        .bind(influencer_id)
        .fetch_one(ex)
        .await
    }

    /// Applicants for a single campaign, newest application first.
    pub async fn list_by_campaign(
        pool: &PgPool,
        campaign_id: DbId,
    ) -> Result<Vec<ApplicantSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {APPLICANT_COLUMNS}
             FROM campaign_applications a
             JOIN campaigns c ON c.id = a.campaign_id
             JOIN influencers i ON i.id = a.influencer_id
             WHERE a.campaign_id = $1
             ORDER BY a.applied_at DESC"
        );
        let mut applicants = sqlx::query_as::<_, ApplicantSummary>(&query)
            .bind(campaign_id)
            .fetch_all(pool)
            .await?;
        Self::attach_social_accounts(pool, &mut applicants).await?;
        Ok(applicants)
    }

    /// Applicants across every campaign of a store, newest first.
    pub async fn list_by_store(
        pool: &PgPool,
        store_id: DbId,
    ) -> Result<Vec<ApplicantSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {APPLICANT_COLUMNS}
             FROM campaign_applications a
             JOIN campaigns c ON c.id = a.campaign_id
             JOIN influencers i ON i.id = a.influencer_id
             WHERE c.store_id = $1
             ORDER BY a.applied_at DESC"
        );
        let mut applicants = sqlx::query_as::<_, ApplicantSummary>(&query)
            .bind(store_id)
            .fetch_all(pool)
            .await?;
        Self::attach_social_accounts(pool, &mut applicants).await?;
        Ok(applicants)
    }

    /// Fill in each applicant's social-account summaries with one query.
    async fn attach_social_accounts(
        pool: &PgPool,
        applicants: &mut [ApplicantSummary],
    ) -> Result<(), sqlx::Error> {
        if applicants.is_empty() {
            return Ok(());
        }

        let mut influencer_ids: Vec<DbId> =
            applicants.iter().map(|a| a.influencer_id).collect();
        influencer_ids.sort_unstable();
        influencer_ids.dedup();

        let accounts = sqlx::query_as::<_, SocialAccountSummary>(
            "SELECT influencer_id, platform, handle, followers
             FROM influencer_social_accounts
             WHERE influencer_id = ANY($1)
             ORDER BY followers DESC",
        )
        .bind(&influencer_ids)
        .fetch_all(pool)
        .await?;

        let mut by_influencer: HashMap<DbId, Vec<SocialAccountSummary>> = HashMap::new();
        for account in accounts {
            by_influencer
                .entry(account.influencer_id)
                .or_default()
                .push(account);
        }

        for applicant in applicants {
            if let Some(accounts) = by_influencer.get(&applicant.influencer_id) {
                applicant.social_accounts = accounts.clone();
            }
        }

        Ok(())
    }
}
