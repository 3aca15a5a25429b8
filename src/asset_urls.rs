//! CDN URL resolution for avatar and banner assets

/// Base address for all Discord CDN assets.
pub const CDN_BASE_URL: &str = "https://cdn.discordapp.com";

/// Requested asset size, appended to every custom-asset URL.
const ASSET_SIZE_QUERY: &str = "size=1024";

/// Hash prefix marking an animated asset.
const ANIMATED_PREFIX: &str = "a_";

/// Asset kind, selecting the CDN path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Avatar,
    Banner,
}

impl AssetKind {
    fn path_segment(self) -> &'static str {
        match self {
            AssetKind::Avatar => "avatars",
            AssetKind::Banner => "banners",
        }
    }
}

/// Resolved URLs for one asset. The animated variant is only present when the
/// hash carries the `a_` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetUrls {
    pub static_url: String,
    pub animated_url: Option<String>,
}

/// Build the static (and, for animated hashes, animated) URL for a custom
/// asset hash owned by `user_id`.
pub fn asset_urls(kind: AssetKind, user_id: &str, hash: &str) -> AssetUrls {
    let segment = kind.path_segment();
    let static_url = format!("{CDN_BASE_URL}/{segment}/{user_id}/{hash}.png?{ASSET_SIZE_QUERY}");
    let animated_url = hash
        .starts_with(ANIMATED_PREFIX)
        .then(|| format!("{CDN_BASE_URL}/{segment}/{user_id}/{hash}.gif?{ASSET_SIZE_QUERY}"));

    AssetUrls {
        static_url,
        animated_url,
    }
}

/// Resolve avatar URLs. A missing hash falls back to one of the five built-in
/// default avatars, selected by `discriminator mod 5`; a missing or
/// unparseable discriminator counts as zero.
pub fn avatar_urls(user_id: &str, hash: Option<&str>, discriminator: Option<&str>) -> AssetUrls {
    match hash {
        Some(hash) => asset_urls(AssetKind::Avatar, user_id, hash),
        None => {
            let bucket = default_avatar_bucket(discriminator);
            AssetUrls {
                static_url: format!("{CDN_BASE_URL}/embed/avatars/{bucket}.png"),
                animated_url: None,
            }
        }
    }
}

/// Resolve banner URLs. There is no default banner, so a missing hash yields
/// no URLs at all.
pub fn banner_urls(user_id: &str, hash: Option<&str>) -> Option<AssetUrls> {
    hash.map(|hash| asset_urls(AssetKind::Banner, user_id, hash))
}

fn default_avatar_bucket(discriminator: Option<&str>) -> u32 {
    discriminator
        .and_then(|d| d.parse::<u32>().ok())
        .unwrap_or(0)
        % 5
}
