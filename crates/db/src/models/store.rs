//! Store (brand) entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reachly_core::types::{DbId, Timestamp};

/// A row from the `stores` table.
///
/// `user_id` is the external auth provider's account id; a unique index
/// guarantees one store per account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Store {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub category: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for registering a new store.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStore {
    pub user_id: DbId,
    pub name: String,
    pub category: Option<String>,
}
