//! Type-specific campaign payloads.
//!
//! Each campaign type carries its own payload shape, modeled as the
//! [`TypePayload`] sum type. Validation is dispatched on the campaign type
//! tag, so a payload that would be valid for a different type is still
//! rejected. Unknown keys are preserved: drafts accumulate ad-hoc fields
//! over their lifetime and updates merge shallowly on top of them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::campaign::CampaignType;
use crate::error::ValidationErrors;

/// Payload for PRODUCT campaigns: the store product being promoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    /// Id of a product owned by the campaign's store.
    pub product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for COUPON campaigns: the discount code influencers share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CouponPayload {
    pub code: String,
    pub discount_percent: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for VIDEO campaigns: the content brief for the creator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoPayload {
    pub brief: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_duration_secs: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload for PROFILE campaigns: the profile to be featured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePayload {
    pub profile_url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The type-specific portion of a campaign, one variant per campaign type.
#[derive(Debug, Clone, PartialEq)]
pub enum TypePayload {
    Product(ProductPayload),
    Coupon(CouponPayload),
    Video(VideoPayload),
    Profile(ProfilePayload),
}

impl TypePayload {
    /// Validate `data` under the payload shape for `campaign_type`.
    ///
    /// All violations are accumulated and reported against
    /// `type_specific_data.<field>` paths.
    pub fn validate(
        campaign_type: CampaignType,
        data: &Value,
    ) -> Result<TypePayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let Some(map) = data.as_object() else {
            errors.push("type_specific_data", "must be an object");
            return Err(errors);
        };

        let payload = match campaign_type {
            CampaignType::Product => validate_product(map, &mut errors).map(TypePayload::Product),
            CampaignType::Coupon => validate_coupon(map, &mut errors).map(TypePayload::Coupon),
            CampaignType::Video => validate_video(map, &mut errors).map(TypePayload::Video),
            CampaignType::Profile => validate_profile(map, &mut errors).map(TypePayload::Profile),
        };

        match payload {
            Some(payload) if errors.is_empty() => Ok(payload),
            _ => Err(errors),
        }
    }

    /// The product referenced by a PRODUCT payload, if this is one.
    pub fn product_id(&self) -> Option<i64> {
        match self {
            TypePayload::Product(p) => Some(p.product_id),
            _ => None,
        }
    }
}

/// Shallow-merge an update payload over the stored one.
///
/// Top-level keys from `update` win; all other stored keys are preserved.
/// When either side is not an object the update replaces the stored value
/// wholesale.
pub fn merge_type_data(existing: Option<&Value>, update: &Value) -> Value {
    match (existing.and_then(Value::as_object), update.as_object()) {
        (Some(existing), Some(update)) => {
            let mut merged = existing.clone();
            for (key, value) in update {
                merged.insert(key.clone(), value.clone());
            }
            Value::Object(merged)
        }
        _ => update.clone(),
    }
}

/* --------------------------------------------------------------------------
Per-variant field extraction
-------------------------------------------------------------------------- */

fn remaining(map: &Map<String, Value>, known: &[&str]) -> Map<String, Value> {
    map.iter()
        .filter(|(key, _)| !known.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

fn require_i64(
    map: &Map<String, Value>,
    key: &str,
    campaign_type: CampaignType,
    errors: &mut ValidationErrors,
) -> Option<i64> {
    match map.get(key) {
        None => {
            errors.push(
                format!("type_specific_data.{key}"),
                format!("is required for {campaign_type} campaigns"),
            );
            None
        }
        Some(value) => match value.as_i64() {
            Some(n) => Some(n),
            None => {
                errors.push(format!("type_specific_data.{key}"), "must be an integer");
                None
            }
        },
    }
}

fn require_string(
    map: &Map<String, Value>,
    key: &str,
    campaign_type: CampaignType,
    errors: &mut ValidationErrors,
) -> Option<String> {
    match map.get(key) {
        None => {
            errors.push(
                format!("type_specific_data.{key}"),
                format!("is required for {campaign_type} campaigns"),
            );
            None
        }
        Some(value) => match value.as_str() {
            Some(s) if !s.trim().is_empty() => Some(s.to_string()),
            Some(_) => {
                errors.push(format!("type_specific_data.{key}"), "must not be empty");
                None
            }
            None => {
                errors.push(format!("type_specific_data.{key}"), "must be a string");
                None
            }
        },
    }
}

fn optional_i64(
    map: &Map<String, Value>,
    key: &str,
    errors: &mut ValidationErrors,
) -> Option<i64> {
    match map.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => match value.as_i64() {
            Some(n) => Some(n),
            None => {
                errors.push(format!("type_specific_data.{key}"), "must be an integer");
                None
            }
        },
    }
}

fn validate_product(map: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<ProductPayload> {
    let product_id = require_i64(map, "product_id", CampaignType::Product, errors)?;
    if product_id <= 0 {
        errors.push("type_specific_data.product_id", "must be a positive id");
        return None;
    }

    let quantity = optional_i64(map, "quantity", errors);
    if let Some(quantity) = quantity {
        if quantity < 1 {
            errors.push("type_specific_data.quantity", "must be at least 1");
        }
    }

    Some(ProductPayload {
        product_id,
        quantity,
        extra: remaining(map, &["product_id", "quantity"]),
    })
}

fn validate_coupon(map: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<CouponPayload> {
    let code = require_string(map, "code", CampaignType::Coupon, errors);
    let discount_percent = require_i64(map, "discount_percent", CampaignType::Coupon, errors);

    if let Some(discount) = discount_percent {
        if !(1..=100).contains(&discount) {
            errors.push(
                "type_specific_data.discount_percent",
                "must be between 1 and 100",
            );
        }
    }

    Some(CouponPayload {
        code: code?,
        discount_percent: discount_percent?,
        extra: remaining(map, &["code", "discount_percent"]),
    })
}

fn validate_video(map: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<VideoPayload> {
    let brief = require_string(map, "brief", CampaignType::Video, errors)?;

    let min_duration_secs = optional_i64(map, "min_duration_secs", errors);
    if let Some(secs) = min_duration_secs {
        if secs <= 0 {
            errors.push(
                "type_specific_data.min_duration_secs",
                "must be greater than zero",
            );
        }
    }

    Some(VideoPayload {
        brief,
        min_duration_secs,
        extra: remaining(map, &["brief", "min_duration_secs"]),
    })
}

fn validate_profile(map: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<ProfilePayload> {
    let profile_url = require_string(map, "profile_url", CampaignType::Profile, errors)?;

    if !profile_url.starts_with("http://") && !profile_url.starts_with("https://") {
        errors.push(
            "type_specific_data.profile_url",
            "must be an http(s) URL",
        );
        return None;
    }

    Some(ProfilePayload {
        profile_url,
        extra: remaining(map, &["profile_url"]),
    })
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
