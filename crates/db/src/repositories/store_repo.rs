//! Repository for the `stores` table.

use sqlx::PgExecutor;

use reachly_core::types::DbId;

use crate::models::store::{CreateStore, Store};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, category, created_at, updated_at";

/// Provides CRUD operations for stores.
pub struct StoreRepo;

impl StoreRepo {
    /// Insert a new store, returning the created row.
    pub async fn create(ex: impl PgExecutor<'_>, input: &CreateStore) -> Result<Store, sqlx::Error> {
        let query = format!(
            "INSERT INTO stores (user_id, name, category)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Store>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .bind(&input.category)
            .fetch_one(ex)
            .await
    }

    /// Find the store owned by an auth account, if any.
    pub async fn find_by_user_id(
        ex: impl PgExecutor<'_>,
        user_id: DbId,
    ) -> Result<Option<Store>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stores WHERE user_id = $1");
        sqlx::query_as::<_, Store>(&query)
            .bind(user_id)
            .fetch_optional(ex)
            .await
    }

    /// Find a store by its internal id.
    pub async fn find_by_id(
        ex: impl PgExecutor<'_>,
        id: DbId,
    ) -> Result<Option<Store>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM stores WHERE id = $1");
        sqlx::query_as::<_, Store>(&query)
            .bind(id)
            .fetch_optional(ex)
            .await
    }
}
