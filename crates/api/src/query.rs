//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for a store's own campaign listing
/// (`?status=&type=&page=&limit=`).
///
/// `status` and `type` are validated against the domain enums in the
/// service layer; `page`/`limit` are clamped there.
#[derive(Debug, Default, Deserialize)]
pub struct CampaignListParams {
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub campaign_type: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for the public discovery feed
/// (`?search=&category=&page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct DiscoverParams {
    pub search: Option<String>,
    pub category: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
