use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Error;
use crate::models::ledger::{CoinType, CreditOutcome, MilestoneOutcome, SpendOutcome, XpAwardOutcome};

/// The remote system of record for every coin movement.
///
/// `spend_coins` is the one atomic operation: it debits the sender,
/// credits the receiver and writes the gift record in a single remote
/// transaction. Everything else here is enrichment the orchestrator treats
/// as best-effort.
#[async_trait]
pub trait LedgerService: Send + Sync {
    async fn spend_coins(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        amount: i64,
        source: &str,
        item_label: &str,
    ) -> Result<SpendOutcome, Error>;

    async fn credit_coins(
        &self,
        user_id: Uuid,
        amount: i64,
        credit_type: &str,
        coin_type: CoinType,
        description: &str,
        metadata: Option<serde_json::Value>,
    ) -> Result<CreditOutcome, Error>;

    /// Authoritative balance read, used to reconcile the session cache
    /// after a spend.
    async fn get_balance(&self, user_id: Uuid) -> Result<i64, Error>;

    /// Did the user's cumulative gifting just cross a payout milestone?
    async fn check_milestone(&self, user_id: Uuid) -> Result<MilestoneOutcome, Error>;

    /// Fire-and-forget activity record; the core ignores its outcome
    /// beyond logging.
    async fn record_lifecycle_event(
        &self,
        user_id: Uuid,
        event_type: &str,
        event_data: serde_json::Value,
    ) -> Result<(), Error>;

    async fn award_gift_xp(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        gift_cost: i64,
    ) -> Result<XpAwardOutcome, Error>;

    /// Follow-up update tagging a just-created gift record with the stream
    /// or battle it happened in.
    async fn attach_gift_context(
        &self,
        gift_record_id: &str,
        stream_id: Option<Uuid>,
        battle_id: Option<Uuid>,
    ) -> Result<(), Error>;
}
