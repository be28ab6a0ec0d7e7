//! Session-local gift combo tracking and cashback math.
//!
//! Combo counts are advisory: the map lives in this process only, is never
//! persisted, and overlapping sends from one user may race. A miscounted
//! combo costs at most a cosmetic bonus; the gift itself is ledger-side.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use trollcity_common::models::gift::BonusCondition;
use uuid::Uuid;

/// Consecutive sends closer together than this keep the streak alive.
const COMBO_WINDOW_MS: i64 = 10_000;

/// Gifts at or above this cost earn the flat high-value cashback.
const HIGH_VALUE_COST: i64 = 2_000;
/// Streak length at which the sustained-combo cashback kicks in.
const COMBO_STREAK_MIN: u32 = 20;

#[derive(Debug, Clone, Copy)]
struct ComboState {
    count: u32,
    last_send: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComboResult {
    pub combo_count: u32,
    pub cashback: i64,
    pub condition: Option<BonusCondition>,
}

/// One streak per sender, kept for the lifetime of this process.
#[derive(Default)]
pub struct ComboTracker {
    states: DashMap<Uuid, ComboState>,
}

impl ComboTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one send and returns the updated streak plus any cashback.
    ///
    /// The two cashback rules are mutually exclusive, high-value first: a
    /// single expensive gift pays 5% immediately regardless of streak,
    /// while cheap spam pays 150% only once the streak reaches 20. A send
    /// never qualifies for both.
    pub fn register_send(&self, sender_id: Uuid, gift_cost: i64, now: DateTime<Utc>) -> ComboResult {
        let mut entry = self.states.entry(sender_id).or_insert(ComboState {
            count: 0,
            last_send: now,
        });
        let within_window = entry.count > 0
            && now.signed_duration_since(entry.last_send).num_milliseconds() <= COMBO_WINDOW_MS;
        let combo_count = if within_window { entry.count + 1 } else { 1 };
        *entry = ComboState {
            count: combo_count,
            last_send: now,
        };
        drop(entry);

        let (cashback, condition) = if gift_cost >= HIGH_VALUE_COST {
            // floor(cost * 0.05)
            (gift_cost / 20, Some(BonusCondition::HighValueGift))
        } else if combo_count >= COMBO_STREAK_MIN {
            // floor(cost * 1.5)
            (gift_cost * 3 / 2, Some(BonusCondition::SustainedCombo))
        } else {
            (0, None)
        };

        ComboResult {
            combo_count,
            cashback,
            condition,
        }
    }
}
