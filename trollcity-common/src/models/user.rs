use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A Troll City account as the gifting core sees it. Created and destroyed
/// by the auth layer; the core only ever mutates the cached balance.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserProfile {
    pub user_id: Uuid,
    pub username: Option<String>,
    /// Cached coin balance. The remote ledger is authoritative; this value
    /// is refreshed after each successful spend.
    pub troll_coins: i64,
    pub xp: u64,
    /// 0 means the user is not an officer.
    pub officer_level: u32,
    /// When set and in the future, the user holds an active gifting perk.
    pub perk_expires_at: Option<DateTime<Utc>>,
    /// Creator-program members earn a receiver-side bonus on gifts.
    pub is_creator_program: bool,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
}

impl UserProfile {
    pub fn has_active_perk(&self, now: DateTime<Utc>) -> bool {
        self.perk_expires_at.map(|t| t > now).unwrap_or(false)
    }
}
