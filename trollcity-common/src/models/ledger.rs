// File: trollcity-common/src/models/ledger.rs
//
// Structured outcomes of the remote ledger procedures. The ledger reports
// business failures (not enough coins, unknown receiver) inside these
// payloads; transport failures surface as `Error` instead.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinType {
    Paid,
    Free,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpendOutcome {
    pub success: bool,
    /// Id of the ledger gift record created by the spend, when one was.
    pub gift_id: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreditOutcome {
    pub success: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MilestoneOutcome {
    pub bonus_awarded: bool,
    pub bonus_amount: Option<i64>,
    pub total_gifts: Option<i64>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XpLevelResult {
    pub leveled_up: bool,
    pub new_level: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct XpAwardOutcome {
    pub sender: Option<XpLevelResult>,
    pub receiver: Option<XpLevelResult>,
}
