use crate::asset_urls::{asset_urls, avatar_urls, banner_urls, AssetKind};

const USER_ID: &str = "470573716711931905";

#[test]
fn test_animated_avatar_yields_both_urls() {
    let urls = avatar_urls(USER_ID, Some("a_abc123"), Some("0"));
    assert_eq!(
        urls.static_url,
        "https://cdn.discordapp.com/avatars/470573716711931905/a_abc123.png?size=1024"
    );
    assert_eq!(
        urls.animated_url.as_deref(),
        Some("https://cdn.discordapp.com/avatars/470573716711931905/a_abc123.gif?size=1024")
    );
}

#[test]
fn test_plain_avatar_yields_static_url_only() {
    let urls = avatar_urls(USER_ID, Some("abc123"), Some("0"));
    assert_eq!(
        urls.static_url,
        "https://cdn.discordapp.com/avatars/470573716711931905/abc123.png?size=1024"
    );
    assert_eq!(urls.animated_url, None);
}

#[test]
fn test_default_avatar_buckets() {
    let cases = [
        (Some("0"), 0),
        (Some("7"), 2),
        (Some("9999"), 4),
        (Some("not-a-number"), 0),
        (None, 0),
    ];

    for (discriminator, bucket) in cases {
        let urls = avatar_urls(USER_ID, None, discriminator);
        assert_eq!(
            urls.static_url,
            format!("https://cdn.discordapp.com/embed/avatars/{bucket}.png"),
            "discriminator {discriminator:?}"
        );
        assert_eq!(urls.animated_url, None);
    }
}

#[test]
fn test_missing_banner_yields_no_urls() {
    assert_eq!(banner_urls(USER_ID, None), None);
}

#[test]
fn test_banner_urls_use_banner_path() {
    let urls = banner_urls(USER_ID, Some("a_bannerhash")).expect("banner hash should resolve");
    assert_eq!(
        urls.static_url,
        "https://cdn.discordapp.com/banners/470573716711931905/a_bannerhash.png?size=1024"
    );
    assert_eq!(
        urls.animated_url.as_deref(),
        Some("https://cdn.discordapp.com/banners/470573716711931905/a_bannerhash.gif?size=1024")
    );
}

#[test]
fn test_asset_kind_selects_path_segment() {
    let avatar = asset_urls(AssetKind::Avatar, USER_ID, "h");
    let banner = asset_urls(AssetKind::Banner, USER_ID, "h");
    assert!(avatar.static_url.contains("/avatars/"));
    assert!(banner.static_url.contains("/banners/"));
}
