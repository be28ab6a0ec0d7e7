//! Explicit session state, passed into services instead of read from a
//! process-wide store. A fabricated session is all a test needs.

use tokio::sync::RwLock;
use trollcity_common::models::user::UserProfile;

pub struct SessionContext {
    user: RwLock<Option<UserProfile>>,
}

impl SessionContext {
    pub fn new(user: Option<UserProfile>) -> Self {
        Self {
            user: RwLock::new(user),
        }
    }

    pub fn anonymous() -> Self {
        Self::new(None)
    }

    /// Snapshot of the authenticated profile, if any.
    pub async fn current_user(&self) -> Option<UserProfile> {
        self.user.read().await.clone()
    }

    pub async fn cached_balance(&self) -> Option<i64> {
        self.user.read().await.as_ref().map(|u| u.troll_coins)
    }

    /// Overwrites the cached balance after an authoritative ledger read.
    /// No-op for anonymous sessions.
    pub async fn set_balance(&self, balance: i64) {
        if let Some(user) = self.user.write().await.as_mut() {
            user.troll_coins = balance;
        }
    }

    /// Replaces the whole profile, e.g. after a full re-fetch.
    pub async fn replace_profile(&self, profile: UserProfile) {
        *self.user.write().await = Some(profile);
    }
}
