//! Repository for the `products` table.

use sqlx::PgExecutor;

use reachly_core::types::DbId;

use crate::models::product::{CreateProduct, Product};

const COLUMNS: &str = "id, store_id, name, description, price, created_at, updated_at";

/// Provides CRUD operations for store products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a new product, returning the created row.
    pub async fn create(
        ex: impl PgExecutor<'_>,
        input: &CreateProduct,
    ) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products (store_id, name, description, price)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(input.store_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .fetch_one(ex)
            .await
    }

    /// Find a product by id, but only when the given store owns it.
    ///
    /// PRODUCT campaigns may only reference products of their own store;
    /// this is the query backing that check.
    pub async fn find_owned(
        ex: impl PgExecutor<'_>,
        id: DbId,
        store_id: DbId,
    ) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1 AND store_id = $2");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(store_id)
            .fetch_optional(ex)
            .await
    }

    /// List a store's products, newest first.
    pub async fn list_by_store(
        ex: impl PgExecutor<'_>,
        store_id: DbId,
    ) -> Result<Vec<Product>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM products WHERE store_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Product>(&query)
            .bind(store_id)
            .fetch_all(ex)
            .await
    }
}
