pub mod asset_urls;
pub mod discord_api;
pub mod profile_normalizer;
pub mod proxy_handlers;
pub mod public_flags;
pub mod snowflake;

#[cfg(test)]
mod tests;

pub use asset_urls::{asset_urls, avatar_urls, banner_urls, AssetKind, AssetUrls};
pub use discord_api::{
    DiscordApiClient, DiscordApiConfig, DiscordApiError, ProfileFetcher, RawProfile,
};
pub use profile_normalizer::{int_to_hex_color, normalize_profile, NormalizedProfile, PremiumTier};
pub use proxy_handlers::{router, AppState};
pub use public_flags::{badge_names, badge_summary};
pub use snowflake::{snowflake_timestamp, snowflake_timestamp_iso};
