//! Pure normalization of raw profile records into display-ready payloads

use crate::asset_urls::{avatar_urls, banner_urls};
use crate::discord_api::RawProfile;
use crate::snowflake::snowflake_timestamp_iso;
use serde::Serialize;

/// Subscription tier, decoded from the small integer code on the wire.
/// Unknown codes collapse to `None` rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PremiumTier {
    None,
    NitroClassic,
    Nitro,
    NitroBasic,
}

impl PremiumTier {
    pub fn from_code(code: Option<u8>) -> Self {
        match code {
            Some(1) => PremiumTier::NitroClassic,
            Some(2) => PremiumTier::Nitro,
            Some(3) => PremiumTier::NitroBasic,
            _ => PremiumTier::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PremiumTier::None => "None",
            PremiumTier::NitroClassic => "Nitro Classic",
            PremiumTier::Nitro => "Nitro",
            PremiumTier::NitroBasic => "Nitro Basic",
        }
    }
}

/// Convert an optional 24-bit color integer to a lowercase `#rrggbb` string.
/// Absent in, absent out — never a default color.
pub fn int_to_hex_color(color: Option<u32>) -> Option<String> {
    color.map(|c| format!("#{c:06x}"))
}

/// Display-ready profile, the proxy's output contract. Absent optionals are
/// omitted from the JSON entirely; failure responses reuse the same shape
/// with empty placeholders for the required strings, so callers only branch
/// on `success`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedProfile {
    pub name: String,
    pub displayname: String,
    pub avatar_static: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_animated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_static: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_animated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_flags: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_bot: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_system: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mfa_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_type: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NormalizedProfile {
    /// Failure payload: same shape as success, required strings empty.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            name: String::new(),
            displayname: String::new(),
            avatar_static: String::new(),
            avatar_animated: None,
            discriminator: None,
            id: None,
            registered_at: None,
            banner_static: None,
            banner_animated: None,
            banner_color: None,
            accent_color: None,
            bio: None,
            public_flags: None,
            is_bot: None,
            is_system: None,
            mfa_enabled: None,
            locale: None,
            premium_type: None,
            success: false,
            error: Some(error.into()),
        }
    }
}

/// Derive the display-ready record from a raw profile and the requested
/// identifier. Pure and deterministic: every output field is a function of
/// the inputs, and the raw record is never mutated.
///
/// Asset URLs and the registration timestamp derive from the requested
/// identifier, matching the upstream URL shapes callers expect. A snowflake
/// that fails to decode drops `registered_at` without failing the record.
pub fn normalize_profile(raw: &RawProfile, user_id: &str) -> NormalizedProfile {
    let avatar = avatar_urls(user_id, raw.avatar.as_deref(), raw.discriminator.as_deref());
    let banner = banner_urls(user_id, raw.banner.as_deref());

    let (banner_static, banner_animated) = match banner {
        Some(urls) => (Some(urls.static_url), urls.animated_url),
        None => (None, None),
    };

    NormalizedProfile {
        name: raw.username.clone(),
        displayname: raw
            .global_name
            .clone()
            .unwrap_or_else(|| raw.username.clone()),
        avatar_static: avatar.static_url,
        avatar_animated: avatar.animated_url,
        discriminator: raw.discriminator.clone(),
        id: Some(raw.id.clone()),
        registered_at: snowflake_timestamp_iso(user_id),
        banner_static,
        banner_animated,
        banner_color: int_to_hex_color(raw.banner_color),
        accent_color: int_to_hex_color(raw.accent_color),
        bio: raw.bio.clone(),
        public_flags: raw.public_flags,
        is_bot: raw.bot,
        is_system: raw.system,
        mfa_enabled: raw.mfa_enabled,
        locale: raw.locale.clone(),
        premium_type: Some(PremiumTier::from_code(raw.premium_type).label().to_string()),
        success: true,
        error: None,
    }
}
