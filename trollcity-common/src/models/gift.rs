// File: trollcity-common/src/models/gift.rs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ledger::MilestoneOutcome;

/// One entry of the gift catalog. Immutable once loaded for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GiftDefinition {
    pub gift_id: String,
    pub name: String,
    /// Coin cost, always positive.
    pub cost: i64,
    /// Category label, e.g. "Common" or "Family". May be empty for remote
    /// entries that never got one; callers fall back to a slug of the id.
    pub category: String,
    pub icon: String,
}

/// Everything the orchestrator needs to send one gift. The sender comes
/// from the session context, not from this request.
#[derive(Debug, Clone)]
pub struct GiftSendRequest {
    pub gift: GiftDefinition,
    /// Explicit target (a guest or a viewer). When absent the gift goes to
    /// the broadcaster.
    pub receiver_id: Option<Uuid>,
    pub broadcaster_id: Option<Uuid>,
    pub stream_id: Option<Uuid>,
    pub battle_id: Option<Uuid>,
}

/// Which rule produced a cashback bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BonusCondition {
    HighValueGift,
    SustainedCombo,
    ActivePerk,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusInfo {
    pub amount: i64,
    pub condition: BonusCondition,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelUpInfo {
    pub new_level: u32,
}

/// Uniform result of a gift send. `success == false` always carries an
/// `error`; descriptors are only populated on the enrichments that fired.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GiftSendResult {
    pub success: bool,
    pub error: Option<String>,
    pub bonus: Option<BonusInfo>,
    pub level_up: Option<LevelUpInfo>,
    pub milestone: Option<MilestoneOutcome>,
}

impl GiftSendResult {
    pub fn succeeded() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(reason.into()),
            ..Default::default()
        }
    }
}
