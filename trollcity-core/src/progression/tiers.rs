//! XP → level → tier math.
//!
//! The table is compiled in: tiers are a product constant, unlike officer
//! payroll rates which are deployment tuning. Rows are contiguous and
//! sorted by ascending `min_xp`; levels interpolate linearly between one
//! tier's starting level and the next tier's.

use trollcity_common::models::progression::{LevelProgress, TierInfo};

/// Highest level an ordinary account can reach.
pub const MAX_LEVEL: u32 = 100;

/// Reserved level granted to admins past [`ADMIN_XP_THRESHOLD`], one above
/// the ordinary cap. Deliberate special case: there is no tier row for it.
pub const ADMIN_LEVEL: u32 = 101;
pub const ADMIN_XP_THRESHOLD: u64 = 101_000;

pub static TIERS: &[TierInfo] = &[
    TierInfo {
        start_level: 1,
        min_xp: 0,
        max_xp: Some(999),
        title: "Street Troll",
        perks: &["chat"],
    },
    TierInfo {
        start_level: 10,
        min_xp: 1_000,
        max_xp: Some(2_999),
        title: "Bridge Lurker",
        perks: &["chat", "entrance_ping"],
    },
    TierInfo {
        start_level: 20,
        min_xp: 3_000,
        max_xp: Some(6_999),
        title: "Gutter Goblin",
        perks: &["chat", "entrance_ping", "gift_combo_badge"],
    },
    TierInfo {
        start_level: 30,
        min_xp: 7_000,
        max_xp: Some(14_999),
        title: "Chaos Agent",
        perks: &["chat", "entrance_ping", "gift_combo_badge", "colored_name"],
    },
    TierInfo {
        start_level: 40,
        min_xp: 15_000,
        max_xp: Some(29_999),
        title: "Troll Knight",
        perks: &["colored_name", "entrance_effect"],
    },
    TierInfo {
        start_level: 50,
        min_xp: 30_000,
        max_xp: Some(44_999),
        title: "Troll Baron",
        perks: &["colored_name", "entrance_effect", "guest_seat_priority"],
    },
    TierInfo {
        start_level: 60,
        min_xp: 45_000,
        max_xp: Some(59_999),
        title: "Troll Duke",
        perks: &["colored_name", "entrance_effect", "guest_seat_priority"],
    },
    TierInfo {
        start_level: 70,
        min_xp: 60_000,
        max_xp: Some(74_999),
        title: "City Councilor",
        perks: &["entrance_effect", "guest_seat_priority", "council_badge"],
    },
    TierInfo {
        start_level: 80,
        min_xp: 75_000,
        max_xp: Some(89_999),
        title: "Mayor's Menace",
        perks: &["entrance_effect", "guest_seat_priority", "council_badge"],
    },
    TierInfo {
        start_level: 90,
        min_xp: 90_000,
        max_xp: Some(99_999),
        title: "Troll Royalty",
        perks: &["entrance_effect", "royal_badge", "golden_name"],
    },
    TierInfo {
        start_level: 100,
        min_xp: 100_000,
        max_xp: None,
        title: "Troll Legend",
        perks: &["entrance_effect", "royal_badge", "golden_name", "legend_banner"],
    },
];

/// Tier the given XP falls in. Scans from the top down so XP past the
/// nominal ceiling of the highest tier still resolves to it.
pub fn tier_from_xp(xp: u64) -> &'static TierInfo {
    TIERS
        .iter()
        .rev()
        .find(|tier| tier.min_xp <= xp)
        .unwrap_or(&TIERS[0])
}

/// Level number for the given XP, 1..=100 for ordinary accounts.
///
/// Admins crossing [`ADMIN_XP_THRESHOLD`] get [`ADMIN_LEVEL`] instead;
/// the same XP on a non-admin account stays capped at [`MAX_LEVEL`].
pub fn level_from_xp(xp: u64, is_admin: bool) -> u32 {
    if is_admin && xp >= ADMIN_XP_THRESHOLD {
        return ADMIN_LEVEL;
    }
    let idx = TIERS
        .iter()
        .rposition(|tier| tier.min_xp <= xp)
        .unwrap_or(0);
    let tier = &TIERS[idx];
    match TIERS.get(idx + 1) {
        None => MAX_LEVEL,
        Some(next) => {
            let xp_span = next.min_xp - tier.min_xp;
            let level_span = (next.start_level - tier.start_level) as u64;
            let offset = (xp - tier.min_xp) * level_span / xp_span;
            (tier.start_level + offset as u32).min(MAX_LEVEL)
        }
    }
}

/// XP at which `level` begins, inverting the interpolation above.
fn xp_floor_for_level(level: u32) -> u64 {
    let idx = TIERS
        .iter()
        .rposition(|tier| tier.start_level <= level)
        .unwrap_or(0);
    let tier = &TIERS[idx];
    match TIERS.get(idx + 1) {
        None => tier.min_xp,
        Some(next) => {
            let xp_span = next.min_xp - tier.min_xp;
            let level_span = (next.start_level - tier.start_level) as u64;
            tier.min_xp + (level - tier.start_level) as u64 * xp_span / level_span
        }
    }
}

/// Progress toward the next level. At or past the ordinary cap (and for
/// admins at [`ADMIN_LEVEL`]) the state is terminal: nothing needed, 100%.
pub fn xp_for_next_level(xp: u64, is_admin: bool) -> LevelProgress {
    let level = level_from_xp(xp, is_admin);
    if level >= MAX_LEVEL {
        return LevelProgress {
            current_xp: xp,
            xp_needed: 0,
            percent_progress: 100.0,
        };
    }
    let floor = xp_floor_for_level(level);
    let ceiling = xp_floor_for_level(level + 1);
    LevelProgress {
        current_xp: xp,
        xp_needed: ceiling - xp,
        percent_progress: (xp - floor) as f32 / (ceiling - floor) as f32 * 100.0,
    }
}
