//! Product entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reachly_core::types::{DbId, Timestamp};

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub store_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding a product to a store's catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub store_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
}
