//! Repository for the `campaigns` table.

use sqlx::PgExecutor;

use reachly_core::campaign::CampaignStatus;
use reachly_core::types::DbId;

use crate::models::campaign::{
    Campaign, CampaignChanges, CampaignListFilter, CampaignSummary, DiscoverFilter, NewCampaign,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, store_id, title, description, budget, currency, duration_days, \
     status, campaign_type, type_specific_data, targets, platforms, influencer_location, \
     created_at, updated_at";

/// Listing projection: campaign columns plus brand summary and applicant
/// count. Requires `campaigns c`, `stores s`, and a LEFT JOIN on
/// `campaign_applications a` with `GROUP BY c.id, s.name, s.category`.
const SUMMARY_COLUMNS: &str = "c.id, c.store_id, c.title, c.description, c.budget, c.currency, \
     c.duration_days, c.status, c.campaign_type, \
     s.name AS store_name, s.category AS store_category, \
     COUNT(a.id) AS applicant_count, c.created_at, c.updated_at";

/// Provides CRUD and listing operations for campaigns.
pub struct CampaignRepo;

impl CampaignRepo {
    /// Insert a new campaign, returning the created row.
    pub async fn create(
        ex: impl PgExecutor<'_>,
        input: &NewCampaign,
    ) -> Result<Campaign, sqlx::Error> {
        let query = format!(
            "INSERT INTO campaigns (store_id, title, description, budget, currency, \
                 duration_days, status, campaign_type, type_specific_data, targets, \
                 platforms, influencer_location)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(input.store_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.budget)
            .bind(&input.currency)
            .bind(input.duration_days)
            .bind(&input.status)
            .bind(&input.campaign_type)
            .bind(&input.type_specific_data)
            .bind(&input.targets)
            .bind(&input.platforms)
            .bind(&input.influencer_location)
            .fetch_one(ex)
            .await
    }

    /// Find a campaign by its internal id.
    pub async fn find_by_id(
        ex: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM campaigns WHERE id = $1");
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .fetch_optional(ex)
            .await
    }

    /// Update a campaign. Only non-`None` fields in `changes` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        ex: impl PgExecutor<'_>,
        id: DbId,
        changes: &CampaignChanges,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET
                title = COALESCE($2, title),
                description = COALESCE($3, description),
                budget = COALESCE($4, budget),
                currency = COALESCE($5, currency),
                duration_days = COALESCE($6, duration_days),
                campaign_type = COALESCE($7, campaign_type),
                type_specific_data = COALESCE($8, type_specific_data),
                targets = COALESCE($9, targets),
                platforms = COALESCE($10, platforms),
                influencer_location = COALESCE($11, influencer_location),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(&changes.title)
            .bind(&changes.description)
            .bind(changes.budget)
            .bind(&changes.currency)
            .bind(changes.duration_days)
            .bind(&changes.campaign_type)
            .bind(&changes.type_specific_data)
            .bind(&changes.targets)
            .bind(&changes.platforms)
            .bind(&changes.influencer_location)
            .fetch_optional(ex)
            .await
    }

    /// Transition a campaign to a new lifecycle status.
    pub async fn set_status(
        ex: impl PgExecutor<'_>,
        id: DbId,
        status: CampaignStatus,
    ) -> Result<Option<Campaign>, sqlx::Error> {
        let query = format!(
            "UPDATE campaigns SET status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Campaign>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(ex)
            .await
    }

    /// Permanently delete a campaign. Returns `true` if a row was removed.
    pub async fn delete(ex: impl PgExecutor<'_>, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM campaigns WHERE id = $1")
            .bind(id)
            .execute(ex)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List a store's campaigns, newest first, with optional status/type
    /// filters.
    pub async fn list_by_store(
        ex: impl PgExecutor<'_>,
        store_id: DbId,
        filter: &CampaignListFilter,
    ) -> Result<Vec<CampaignSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM campaigns c
             JOIN stores s ON s.id = c.store_id
             LEFT JOIN campaign_applications a ON a.campaign_id = c.id
             WHERE c.store_id = $1
               AND ($2::text IS NULL OR c.status = $2)
               AND ($3::text IS NULL OR c.campaign_type = $3)
             GROUP BY c.id, s.name, s.category
             ORDER BY c.created_at DESC
             LIMIT $4 OFFSET $5"
        );
        sqlx::query_as::<_, CampaignSummary>(&query)
            .bind(store_id)
            .bind(&filter.status)
            .bind(&filter.campaign_type)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(ex)
            .await
    }

    /// Total rows the `list_by_store` filters would match, for pagination.
    pub async fn count_by_store(
        ex: impl PgExecutor<'_>,
        store_id: DbId,
        filter: &CampaignListFilter,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM campaigns c
             WHERE c.store_id = $1
               AND ($2::text IS NULL OR c.status = $2)
               AND ($3::text IS NULL OR c.campaign_type = $3)",
        )
        .bind(store_id)
        .bind(&filter.status)
        .bind(&filter.campaign_type)
        .fetch_one(ex)
        .await
    }

    /// List published campaigns for the public discovery feed.
    ///
    /// `filter.search` is an `ILIKE` pattern matched against the campaign
    /// title, description, and the owning store's name.
    pub async fn list_published(
        ex: impl PgExecutor<'_>,
        filter: &DiscoverFilter,
    ) -> Result<Vec<CampaignSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS}
             FROM campaigns c
             JOIN stores s ON s.id = c.store_id
             LEFT JOIN campaign_applications a ON a.campaign_id = c.id
             WHERE c.status = 'PUBLISHED'
               AND ($1::text IS NULL
                    OR c.title ILIKE $1
                    OR c.description ILIKE $1
                    OR s.name ILIKE $1)
               AND ($2::text IS NULL OR s.category = $2)
             GROUP BY c.id, s.name, s.category
             ORDER BY c.created_at DESC
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, CampaignSummary>(&query)
            .bind(&filter.search)
            .bind(&filter.category)
            .bind(filter.limit)
            .bind(filter.offset)
            .fetch_all(ex)
            .await
    }

    /// Total rows the `list_published` filters would match.
    pub async fn count_published(
        ex: impl PgExecutor<'_>,
        filter: &DiscoverFilter,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM campaigns c
             JOIN stores s ON s.id = c.store_id
             WHERE c.status = 'PUBLISHED'
               AND ($1::text IS NULL
                    OR c.title ILIKE $1
                    OR c.description ILIKE $1
                    OR s.name ILIKE $1)
               AND ($2::text IS NULL OR s.category = $2)",
        )
        .bind(&filter.search)
        .bind(&filter.category)
        .fetch_one(ex)
        .await
    }
}
