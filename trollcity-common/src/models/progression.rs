/// One row of the static progression table. Rows are contiguous and sorted
/// by ascending `min_xp`; every XP value maps to exactly one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierInfo {
    /// Level a user holds when entering this tier.
    pub start_level: u32,
    /// Inclusive lower XP bound.
    pub min_xp: u64,
    /// Inclusive upper XP bound; `None` for the open-ended top tier.
    pub max_xp: Option<u64>,
    pub title: &'static str,
    pub perks: &'static [&'static str],
}

/// Progress toward the next level, for progress bars and level-up toasts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    pub current_xp: u64,
    /// XP still missing until the next level; 0 at the terminal level.
    pub xp_needed: u64,
    /// 0.0..=100.0, pinned to 100.0 at the terminal level.
    pub percent_progress: f32,
}
