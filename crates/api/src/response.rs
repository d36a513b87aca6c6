//! Shared response envelope types for API handlers.
//!
//! Every successful response is a `{"success": true, ...}` JSON object.
//! Use [`ok`] with a small body struct instead of ad-hoc
//! `serde_json::json!` literals to keep the serialization type-checked.

use axum::Json;
use serde::Serialize;

use reachly_core::search;

/// Standard success envelope: `{"success": true}` plus the flattened body.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(flatten)]
    pub body: T,
}

/// Wrap a body in the success envelope.
pub fn ok<T: Serialize>(body: T) -> Json<Envelope<T>> {
    Json(Envelope {
        success: true,
        body,
    })
}

/// Page metadata attached to listing responses.
#[derive(Debug, Clone, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        Self {
            page,
            limit,
            total,
            total_pages: search::total_pages(total, limit),
        }
    }
}
