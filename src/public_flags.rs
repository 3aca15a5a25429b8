//! Badge names for the public-flags bitmask

/// Bit-to-badge table, in ascending bit order. Gaps are bits Discord has
/// retired or never exposed publicly.
const BADGE_TABLE: &[(u32, &str)] = &[
    (0, "Discord Employee"),
    (1, "Partnered Server Owner"),
    (2, "HypeSquad Events"),
    (3, "Bug Hunter Level 1"),
    (6, "House Bravery"),
    (7, "House Brilliance"),
    (8, "House Balance"),
    (9, "Early Supporter"),
    (10, "Team User"),
    (12, "System"),
    (13, "Bug Hunter Level 2"),
    (14, "Verified Bot"),
    (16, "Early Verified Bot Developer"),
    (17, "Discord Certified Moderator"),
    (18, "Bot HTTP Interactions"),
    (19, "Active Developer"),
    (22, "Quarantined"),
];

/// Placeholder shown when no known flag bit is set.
pub const NO_BADGES_PLACEHOLDER: &str = "No special flags";

/// Names of all badges whose bit is set, in ascending bit order. Bits outside
/// the table are ignored.
pub fn badge_names(flags: u32) -> Vec<&'static str> {
    BADGE_TABLE
        .iter()
        .filter(|(bit, _)| flags & (1 << bit) != 0)
        .map(|(_, name)| *name)
        .collect()
}

/// Display summary: badge names joined with `", "`, or the fixed placeholder
/// when none are set.
pub fn badge_summary(flags: u32) -> String {
    let names = badge_names(flags);
    if names.is_empty() {
        NO_BADGES_PLACEHOLDER.to_string()
    } else {
        names.join(", ")
    }
}
