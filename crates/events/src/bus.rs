//! In-process event bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] is the publish/subscribe hub for [`CampaignEvent`]s. It is
//! shared as `Arc<EventBus>` in the application state. Each event names the
//! listing route paths whose cached responses it invalidates, so a cache
//! layer only has to subscribe and drop the named paths.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;

use reachly_core::types::DbId;

/// Listing path for a store's own campaign dashboard.
pub const PATH_STORE_CAMPAIGNS: &str = "/campaigns";

/// Listing path for the public discovery feed of published campaigns.
pub const PATH_DISCOVER_CAMPAIGNS: &str = "/discover/campaigns";

// ---------------------------------------------------------------------------
// CampaignEvent
// ---------------------------------------------------------------------------

/// A campaign lifecycle event.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignEvent {
    /// Dot-separated event name, e.g. `"campaign.published"`.
    pub event_type: String,

    /// The campaign the event concerns.
    pub campaign_id: DbId,

    /// The store that owns the campaign.
    pub store_id: DbId,

    /// Listing route paths whose cached responses this event voids.
    pub invalidates: Vec<String>,

    /// When the event was created (UTC).
    pub timestamp: DateTime<Utc>,
}

impl CampaignEvent {
    fn new(event_type: &str, campaign_id: DbId, store_id: DbId, public: bool) -> Self {
        let mut invalidates = vec![PATH_STORE_CAMPAIGNS.to_string()];
        if public {
            invalidates.push(PATH_DISCOVER_CAMPAIGNS.to_string());
        }
        Self {
            event_type: event_type.to_string(),
            campaign_id,
            store_id,
            invalidates,
            timestamp: Utc::now(),
        }
    }

    /// A campaign was created. Touches the discovery feed only when it was
    /// created directly in the published state.
    pub fn created(campaign_id: DbId, store_id: DbId, published: bool) -> Self {
        Self::new("campaign.created", campaign_id, store_id, published)
    }

    /// A draft campaign was edited. Drafts are never publicly listed.
    pub fn updated(campaign_id: DbId, store_id: DbId) -> Self {
        Self::new("campaign.updated", campaign_id, store_id, false)
    }

    /// A draft campaign went live.
    pub fn published(campaign_id: DbId, store_id: DbId) -> Self {
        Self::new("campaign.published", campaign_id, store_id, true)
    }

    /// A draft campaign was deleted.
    pub fn deleted(campaign_id: DbId, store_id: DbId) -> Self {
        Self::new("campaign.deleted", campaign_id, store_id, false)
    }

    /// An influencer applied to a published campaign.
    pub fn application_received(campaign_id: DbId, store_id: DbId) -> Self {
        Self::new("campaign.application_received", campaign_id, store_id, false)
    }
}

// ---------------------------------------------------------------------------
// EventBus
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out event bus.
///
/// Wraps a [`broadcast::Sender`] so any number of subscribers can
/// independently receive every published [`CampaignEvent`]. Publishing
/// with zero subscribers is not an error.
pub struct EventBus {
    sender: broadcast::Sender<CampaignEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Returns the number of subscribers the event reached.
    pub fn publish(&self, event: CampaignEvent) -> usize {
        let event_type = event.event_type.clone();
        let campaign_id = event.campaign_id;
        match self.sender.send(event) {
            Ok(receivers) => {
                tracing::debug!(event_type = %event_type, campaign_id, receivers, "Published event");
                receivers
            }
            // Send only fails when there are no subscribers; that is fine.
            Err(_) => {
                tracing::trace!(event_type = %event_type, campaign_id, "No subscribers for event");
                0
            }
        }
    }

    /// Create a new independent subscription.
    pub fn subscribe(&self) -> broadcast::Receiver<CampaignEvent> {
        self.sender.subscribe()
    }

    /// Number of currently attached subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
