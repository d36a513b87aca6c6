//! Reachly in-process event infrastructure.
//!
//! Campaign mutations publish [`CampaignEvent`]s on the [`EventBus`] so
//! interested components (cached listing layers, future notification
//! delivery) can react without coupling to the service layer.

pub mod bus;

pub use bus::{CampaignEvent, EventBus, PATH_DISCOVER_CAMPAIGNS, PATH_STORE_CAMPAIGNS};
