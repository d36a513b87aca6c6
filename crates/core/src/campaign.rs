//! Campaign domain rules: status lifecycle, campaign types, and field
//! validation for create/update payloads.
//!
//! Validators accumulate every violated field into [`ValidationErrors`]
//! instead of failing on the first problem, so API clients can fix a whole
//! form in one round trip. Nothing in this module touches storage.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationErrors};
use crate::payload::TypePayload;

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

/// Maximum length for a campaign title.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum length for a campaign description.
pub const MAX_DESCRIPTION_LENGTH: usize = 2_000;

/// Maximum length for a single target entry.
pub const MAX_TARGET_LENGTH: usize = 100;

/// Platforms a campaign can be promoted on.
pub const VALID_PLATFORMS: &[&str] = &[
    "instagram",
    "tiktok",
    "youtube",
    "facebook",
    "x",
    "twitch",
];

/* --------------------------------------------------------------------------
Status & type enums
-------------------------------------------------------------------------- */

/// Campaign lifecycle status.
///
/// Drafts may be edited, deleted, and published; publication is one-way.
/// `Completed` and `Paused` are representable in storage but no operation
/// currently transitions into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    Draft,
    Published,
    Completed,
    Paused,
}

impl CampaignStatus {
    pub const ALL: &'static [CampaignStatus] = &[
        CampaignStatus::Draft,
        CampaignStatus::Published,
        CampaignStatus::Completed,
        CampaignStatus::Paused,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "DRAFT",
            CampaignStatus::Published => "PUBLISHED",
            CampaignStatus::Completed => "COMPLETED",
            CampaignStatus::Paused => "PAUSED",
        }
    }

    /// Parse a status string, reporting the failure against `status`.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "DRAFT" => Ok(CampaignStatus::Draft),
            "PUBLISHED" => Ok(CampaignStatus::Published),
            "COMPLETED" => Ok(CampaignStatus::Completed),
            "PAUSED" => Ok(CampaignStatus::Paused),
            other => Err(CoreError::validation(
                "status",
                format!(
                    "Invalid status '{other}'. Must be one of: DRAFT, PUBLISHED, COMPLETED, PAUSED"
                ),
            )),
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of collaboration a campaign asks influencers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignType {
    Product,
    Coupon,
    Video,
    Profile,
}

impl CampaignType {
    pub const ALL: &'static [CampaignType] = &[
        CampaignType::Product,
        CampaignType::Coupon,
        CampaignType::Video,
        CampaignType::Profile,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignType::Product => "PRODUCT",
            CampaignType::Coupon => "COUPON",
            CampaignType::Video => "VIDEO",
            CampaignType::Profile => "PROFILE",
        }
    }

    /// Parse a type string, reporting the failure against `type`.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "PRODUCT" => Ok(CampaignType::Product),
            "COUPON" => Ok(CampaignType::Coupon),
            "VIDEO" => Ok(CampaignType::Video),
            "PROFILE" => Ok(CampaignType::Profile),
            other => Err(CoreError::validation(
                "type",
                format!(
                    "Invalid campaign type '{other}'. Must be one of: PRODUCT, COUPON, VIDEO, PROFILE"
                ),
            )),
        }
    }
}

impl std::fmt::Display for CampaignType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/* --------------------------------------------------------------------------
Lifecycle guards
-------------------------------------------------------------------------- */

/// Only drafts may be edited.
pub fn ensure_editable(status: CampaignStatus) -> Result<(), CoreError> {
    if status == CampaignStatus::Draft {
        Ok(())
    } else {
        Err(CoreError::Conflict(
            "Only draft campaigns can be edited".to_string(),
        ))
    }
}

/// Only drafts may be deleted.
pub fn ensure_deletable(status: CampaignStatus) -> Result<(), CoreError> {
    if status == CampaignStatus::Draft {
        Ok(())
    } else {
        Err(CoreError::Conflict(
            "Only draft campaigns can be deleted".to_string(),
        ))
    }
}

/// Only drafts may be published; publication is one-way.
pub fn ensure_publishable(status: CampaignStatus) -> Result<(), CoreError> {
    if status == CampaignStatus::Draft {
        Ok(())
    } else {
        Err(CoreError::Conflict(
            "Only draft campaigns can be published".to_string(),
        ))
    }
}

/// A campaign must carry a usable title and budget before going live.
pub fn ensure_publish_ready(title: &str, budget: f64) -> Result<(), CoreError> {
    let mut errors = ValidationErrors::new();
    if title.trim().is_empty() {
        errors.push("title", "is required to publish a campaign");
    }
    if !(budget > 0.0) {
        errors.push("budget", "must be greater than zero to publish a campaign");
    }
    errors.into_result()
}

/* --------------------------------------------------------------------------
Wire payloads
-------------------------------------------------------------------------- */

/// Marketing goals a campaign targets, grouped by funnel stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignTargets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awareness: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advocacy: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions: Option<Vec<String>>,
}

impl CampaignTargets {
    /// True when no group carries any entry.
    pub fn is_empty(&self) -> bool {
        let empty = |g: &Option<Vec<String>>| g.as_ref().map_or(true, |v| v.is_empty());
        empty(&self.awareness) && empty(&self.advocacy) && empty(&self.conversions)
    }
}

/// Where a campaign wants its influencers to be based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluencerLocation {
    pub country: String,
    pub city: String,
}

/// Request body for creating a campaign.
///
/// Every field is optional at the serde level so that missing required
/// fields surface as field-level validation errors rather than
/// deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCampaign {
    pub title: Option<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub currency: Option<String>,
    pub duration_days: Option<i32>,
    #[serde(rename = "type")]
    pub campaign_type: Option<String>,
    pub type_specific_data: Option<serde_json::Value>,
    pub targets: Option<CampaignTargets>,
    pub platforms: Option<Vec<String>>,
    pub influencer_location: Option<InfluencerLocation>,
    /// When true the campaign is created directly in PUBLISHED state.
    #[serde(default)]
    pub publish: bool,
}

/// Request body for partially updating a draft campaign.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCampaign {
    pub title: Option<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub currency: Option<String>,
    pub duration_days: Option<i32>,
    #[serde(rename = "type")]
    pub campaign_type: Option<String>,
    pub type_specific_data: Option<serde_json::Value>,
    pub targets: Option<CampaignTargets>,
    pub platforms: Option<Vec<String>>,
    pub influencer_location: Option<InfluencerLocation>,
}

/* --------------------------------------------------------------------------
Validated outputs
-------------------------------------------------------------------------- */

/// A fully validated and normalized creation payload.
#[derive(Debug, Clone)]
pub struct ValidatedCampaign {
    pub title: String,
    pub description: Option<String>,
    pub budget: f64,
    pub currency: String,
    pub duration_days: Option<i32>,
    pub campaign_type: Option<CampaignType>,
    pub type_specific_data: Option<serde_json::Value>,
    /// The parsed form of `type_specific_data`, when a type tag was given.
    pub type_payload: Option<TypePayload>,
    pub targets: CampaignTargets,
    pub platforms: Option<Vec<String>>,
    pub influencer_location: Option<InfluencerLocation>,
}

/// A validated partial update. `type_specific_data` is carried raw here;
/// it is validated against the effective campaign type only after the
/// shallow merge with the stored payload.
#[derive(Debug, Clone, Default)]
pub struct ValidatedUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub budget: Option<f64>,
    pub currency: Option<String>,
    pub duration_days: Option<i32>,
    pub campaign_type: Option<CampaignType>,
    pub type_specific_data: Option<serde_json::Value>,
    pub targets: Option<CampaignTargets>,
    pub platforms: Option<Vec<String>>,
    pub influencer_location: Option<InfluencerLocation>,
}

/* --------------------------------------------------------------------------
Field checks
-------------------------------------------------------------------------- */

fn check_title(title: &str, errors: &mut ValidationErrors) -> Option<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        errors.push("title", "must not be empty");
        return None;
    }
    if trimmed.len() > MAX_TITLE_LENGTH {
        errors.push(
            "title",
            format!("must be at most {MAX_TITLE_LENGTH} characters"),
        );
        return None;
    }
    Some(trimmed.to_string())
}

fn check_description(description: &str, errors: &mut ValidationErrors) -> Option<String> {
    if description.len() > MAX_DESCRIPTION_LENGTH {
        errors.push(
            "description",
            format!("must be at most {MAX_DESCRIPTION_LENGTH} characters"),
        );
        return None;
    }
    Some(description.to_string())
}

fn check_budget(budget: f64, errors: &mut ValidationErrors) -> Option<f64> {
    if !budget.is_finite() || budget <= 0.0 {
        errors.push("budget", "must be a number greater than zero");
        return None;
    }
    Some(budget)
}

/// Currency codes are normalized to uppercase before the shape check.
fn check_currency(currency: &str, errors: &mut ValidationErrors) -> Option<String> {
    let normalized = currency.trim().to_ascii_uppercase();
    if normalized.len() != 3 || !normalized.chars().all(|c| c.is_ascii_uppercase()) {
        errors.push("currency", "must be a 3-letter ISO currency code");
        return None;
    }
    Some(normalized)
}

fn check_duration(duration_days: i32, errors: &mut ValidationErrors) -> Option<i32> {
    if duration_days < 0 {
        errors.push("duration_days", "must be zero or greater");
        return None;
    }
    Some(duration_days)
}

fn check_targets(targets: &CampaignTargets, errors: &mut ValidationErrors) {
    if targets.is_empty() {
        errors.push(
            "targets",
            "at least one of awareness, advocacy or conversions must be provided",
        );
        return;
    }
    for (group, entries) in [
        ("awareness", &targets.awareness),
        ("advocacy", &targets.advocacy),
        ("conversions", &targets.conversions),
    ] {
        let Some(entries) = entries else { continue };
        for entry in entries {
            if entry.trim().is_empty() {
                errors.push(format!("targets.{group}"), "entries must not be empty");
            } else if entry.len() > MAX_TARGET_LENGTH {
                errors.push(
                    format!("targets.{group}"),
                    format!("entries must be at most {MAX_TARGET_LENGTH} characters"),
                );
            }
        }
    }
}

/// Platforms are normalized to lowercase and checked against the known set.
fn check_platforms(platforms: &[String], errors: &mut ValidationErrors) -> Option<Vec<String>> {
    let mut normalized = Vec::with_capacity(platforms.len());
    let mut ok = true;
    for platform in platforms {
        let lowered = platform.trim().to_ascii_lowercase();
        if VALID_PLATFORMS.contains(&lowered.as_str()) {
            normalized.push(lowered);
        } else {
            ok = false;
            errors.push(
                "platforms",
                format!(
                    "unknown platform '{platform}'. Must be one of: {}",
                    VALID_PLATFORMS.join(", ")
                ),
            );
        }
    }
    ok.then_some(normalized)
}

fn check_location(location: &InfluencerLocation, errors: &mut ValidationErrors) {
    if location.country.trim().is_empty() {
        errors.push("influencer_location.country", "must not be empty");
    }
    if location.city.trim().is_empty() {
        errors.push("influencer_location.city", "must not be empty");
    }
}

/// Parse the type tag and, when a payload accompanies it, validate the
/// payload under that type. A payload without a type tag is an error.
fn check_type_and_payload(
    campaign_type: &Option<String>,
    data: &Option<serde_json::Value>,
    errors: &mut ValidationErrors,
) -> (Option<CampaignType>, Option<TypePayload>) {
    let parsed = match campaign_type {
        Some(raw) => match CampaignType::parse(raw) {
            Ok(parsed) => Some(parsed),
            Err(CoreError::Validation(type_errors)) => {
                errors.extend(type_errors);
                None
            }
            Err(_) => None,
        },
        None => None,
    };

    let payload = match (parsed, data) {
        (Some(campaign_type), Some(data)) => match TypePayload::validate(campaign_type, data) {
            Ok(payload) => Some(payload),
            Err(payload_errors) => {
                errors.extend(payload_errors);
                None
            }
        },
        (None, Some(_)) if campaign_type.is_none() => {
            errors.push("type", "is required when type_specific_data is provided");
            None
        }
        _ => None,
    };

    (parsed, payload)
}

/* --------------------------------------------------------------------------
Validators
-------------------------------------------------------------------------- */

/// Validate a creation payload.
///
/// `title`, `budget`, `currency`, and `targets` are required; everything
/// else is validated only when present. Returns the normalized values or
/// the full list of violations.
pub fn validate_create(input: &CreateCampaign) -> Result<ValidatedCampaign, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = match &input.title {
        Some(title) => check_title(title, &mut errors),
        None => {
            errors.push("title", "is required");
            None
        }
    };

    let description = input
        .description
        .as_ref()
        .and_then(|d| check_description(d, &mut errors));

    let budget = match input.budget {
        Some(budget) => check_budget(budget, &mut errors),
        None => {
            errors.push("budget", "is required");
            None
        }
    };

    let currency = match &input.currency {
        Some(currency) => check_currency(currency, &mut errors),
        None => {
            errors.push("currency", "is required");
            None
        }
    };

    let duration_days = input
        .duration_days
        .and_then(|d| check_duration(d, &mut errors));

    let targets = match &input.targets {
        Some(targets) => {
            check_targets(targets, &mut errors);
            Some(targets.clone())
        }
        None => {
            errors.push("targets", "is required");
            None
        }
    };

    let platforms = input
        .platforms
        .as_ref()
        .and_then(|p| check_platforms(p, &mut errors));

    if let Some(location) = &input.influencer_location {
        check_location(location, &mut errors);
    }

    let (campaign_type, type_payload) =
        check_type_and_payload(&input.campaign_type, &input.type_specific_data, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    // The unwraps cannot fire: every `None` above pushed an error.
    Ok(ValidatedCampaign {
        title: title.unwrap(),
        description,
        budget: budget.unwrap(),
        currency: currency.unwrap(),
        duration_days,
        campaign_type,
        type_specific_data: input.type_specific_data.clone(),
        type_payload,
        targets: targets.unwrap(),
        platforms,
        influencer_location: input.influencer_location.clone(),
    })
}

/// Validate a partial update. Only fields that are present are checked.
///
/// The type-specific payload is intentionally NOT validated here — the
/// caller must merge it with the stored payload first and then run
/// [`TypePayload::validate`] against the effective campaign type.
pub fn validate_update(input: &UpdateCampaign) -> Result<ValidatedUpdate, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let title = input.title.as_ref().and_then(|t| check_title(t, &mut errors));
    let description = input
        .description
        .as_ref()
        .and_then(|d| check_description(d, &mut errors));
    let budget = input.budget.and_then(|b| check_budget(b, &mut errors));
    let currency = input
        .currency
        .as_ref()
        .and_then(|c| check_currency(c, &mut errors));
    let duration_days = input
        .duration_days
        .and_then(|d| check_duration(d, &mut errors));

    if let Some(targets) = &input.targets {
        check_targets(targets, &mut errors);
    }

    let platforms = input
        .platforms
        .as_ref()
        .and_then(|p| check_platforms(p, &mut errors));

    if let Some(location) = &input.influencer_location {
        check_location(location, &mut errors);
    }

    let campaign_type = match &input.campaign_type {
        Some(raw) => match CampaignType::parse(raw) {
            Ok(parsed) => Some(parsed),
            Err(CoreError::Validation(type_errors)) => {
                errors.extend(type_errors);
                None
            }
            Err(_) => None,
        },
        None => None,
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ValidatedUpdate {
        title,
        description,
        budget,
        currency,
        duration_days,
        campaign_type,
        type_specific_data: input.type_specific_data.clone(),
        targets: input.targets.clone(),
        platforms,
        influencer_location: input.influencer_location.clone(),
    })
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
