//! The gift send orchestrator.
//!
//! One call to the ledger commits the spend; everything after it is
//! best-effort enrichment. Each enrichment step owns its failure: a dead
//! bonus credit or a lost war point is logged and swallowed, never allowed
//! to report an already-committed gift as failed.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, info, warn};
use uuid::Uuid;

use trollcity_common::models::gift::{
    BonusCondition, BonusInfo, GiftDefinition, GiftSendRequest, GiftSendResult, LevelUpInfo,
};
use trollcity_common::models::ledger::CoinType;
use trollcity_common::models::user::UserProfile;
use trollcity_common::traits::ledger_traits::LedgerService;
use trollcity_common::traits::profile_traits::ProfileRepository;
use trollcity_common::traits::war_traits::FamilyWarRepository;

use crate::catalog::{self, FAMILY_CATEGORY};
use crate::services::combo::ComboTracker;
use crate::services::session::SessionContext;

/// Per-transaction cap, mirroring the guard the ledger applies server-side.
const MAX_GIFT_COST: i64 = 1_000_000;

pub struct GiftService {
    ledger: Arc<dyn LedgerService + Send + Sync>,
    profiles: Arc<dyn ProfileRepository + Send + Sync>,
    wars: Arc<dyn FamilyWarRepository + Send + Sync>,
    combos: ComboTracker,
}

impl GiftService {
    pub fn new(
        ledger: Arc<dyn LedgerService + Send + Sync>,
        profiles: Arc<dyn ProfileRepository + Send + Sync>,
        wars: Arc<dyn FamilyWarRepository + Send + Sync>,
    ) -> Self {
        Self {
            ledger,
            profiles,
            wars,
            combos: ComboTracker::new(),
        }
    }

    /// Sends one gift. Never returns an `Err`: fatal problems (no session,
    /// short balance, rejected spend) come back as a failed result, and
    /// enrichment failures don't surface at all.
    pub async fn send_gift(
        &self,
        session: &SessionContext,
        request: &GiftSendRequest,
    ) -> GiftSendResult {
        let Some(sender) = session.current_user().await else {
            return GiftSendResult::failed("You must be logged in to send gifts");
        };

        let gift = &request.gift;
        if gift.cost <= 0 {
            return GiftSendResult::failed("Gift amount must be greater than 0");
        }
        if gift.cost > MAX_GIFT_COST {
            return GiftSendResult::failed("Gift amount exceeds the transaction limit");
        }
        // Cheap local short-circuit before any network call. The ledger
        // re-checks authoritatively on commit.
        if sender.troll_coins < gift.cost {
            return GiftSendResult::failed("Not enough Troll Coins!");
        }
        let Some(receiver_id) = request.receiver_id.or(request.broadcaster_id) else {
            return GiftSendResult::failed("Gift target not available");
        };

        // The one call that must not double-apply: debit, credit and gift
        // record happen in a single remote transaction.
        let gift_record_id = match self
            .ledger
            .spend_coins(sender.user_id, receiver_id, gift.cost, "gift", &gift.name)
            .await
        {
            Ok(outcome) if outcome.success => outcome.gift_id,
            Ok(outcome) => {
                let reason = outcome
                    .error
                    .unwrap_or_else(|| "Failed to send gift".to_string());
                info!("gift spend rejected for {}: {}", sender.user_id, reason);
                return GiftSendResult::failed(reason);
            }
            Err(e) => {
                warn!("gift spend failed for {}: {}", sender.user_id, e);
                return GiftSendResult::failed(e.to_string());
            }
        };

        let mut result = GiftSendResult::succeeded();

        self.attach_context(request, gift_record_id.as_deref()).await;
        self.refresh_sender_balance(session, sender.user_id).await;
        self.apply_combo_cashback(&sender, gift.cost, &mut result).await;
        self.apply_perk_bonus(&sender, gift.cost, &mut result).await;
        self.apply_creator_bonus(&sender, receiver_id, gift).await;
        self.score_family_war(receiver_id, gift).await;
        self.check_gift_milestone(session, sender.user_id, &mut result).await;
        self.record_progression(&sender, receiver_id, gift, &mut result).await;

        result
    }

    /// Tags the new gift record with the stream/battle it happened in.
    async fn attach_context(&self, request: &GiftSendRequest, gift_record_id: Option<&str>) {
        if request.stream_id.is_none() && request.battle_id.is_none() {
            return;
        }
        let Some(record_id) = gift_record_id else {
            debug!("spend returned no gift record id; skipping context attach");
            return;
        };
        if let Err(e) = self
            .ledger
            .attach_gift_context(record_id, request.stream_id, request.battle_id)
            .await
        {
            warn!("failed to attach context to gift {}: {}", record_id, e);
        }
    }

    /// Reconciles the session's cached balance with the ledger. On failure
    /// the stale cache stays; the ledger stays authoritative either way.
    async fn refresh_sender_balance(&self, session: &SessionContext, sender_id: Uuid) {
        match self.ledger.get_balance(sender_id).await {
            Ok(balance) => session.set_balance(balance).await,
            Err(e) => warn!("balance refresh failed for {}: {}", sender_id, e),
        }
    }

    async fn apply_combo_cashback(
        &self,
        sender: &UserProfile,
        gift_cost: i64,
        result: &mut GiftSendResult,
    ) {
        let combo = self
            .combos
            .register_send(sender.user_id, gift_cost, Utc::now());
        let Some(condition) = combo.condition else {
            return;
        };
        let message = match condition {
            BonusCondition::HighValueGift => {
                format!("High roller! {} coins back", combo.cashback)
            }
            _ => format!(
                "x{} combo! {} coins back",
                combo.combo_count, combo.cashback
            ),
        };
        match self
            .ledger
            .credit_coins(
                sender.user_id,
                combo.cashback,
                "reward",
                CoinType::Paid,
                &message,
                Some(json!({ "combo_count": combo.combo_count, "gift_cost": gift_cost })),
            )
            .await
        {
            Ok(outcome) if outcome.success => {
                result.bonus = Some(BonusInfo {
                    amount: combo.cashback,
                    condition,
                    message,
                });
            }
            Ok(outcome) => {
                warn!(
                    "cashback credit rejected for {}: {}",
                    sender.user_id,
                    outcome.error.unwrap_or_default()
                );
            }
            Err(e) => warn!("cashback credit failed for {}: {}", sender.user_id, e),
        }
    }

    /// Active-perk holders get 5% of the gift back. Fires independently of
    /// the combo cashback; the earlier bonus keeps the result slot.
    async fn apply_perk_bonus(
        &self,
        sender: &UserProfile,
        gift_cost: i64,
        result: &mut GiftSendResult,
    ) {
        if !sender.has_active_perk(Utc::now()) {
            return;
        }
        let amount = gift_cost * 5 / 100;
        if amount == 0 {
            debug!("perk bonus rounds to zero for cost {}", gift_cost);
            return;
        }
        let message = format!("Perk bonus: {} coins back", amount);
        match self
            .ledger
            .credit_coins(
                sender.user_id,
                amount,
                "reward",
                CoinType::Paid,
                &message,
                Some(json!({ "perk_expires_at": sender.perk_expires_at })),
            )
            .await
        {
            Ok(outcome) if outcome.success => {
                if result.bonus.is_none() {
                    result.bonus = Some(BonusInfo {
                        amount,
                        condition: BonusCondition::ActivePerk,
                        message,
                    });
                }
            }
            Ok(outcome) => {
                warn!(
                    "perk bonus rejected for {}: {}",
                    sender.user_id,
                    outcome.error.unwrap_or_default()
                );
            }
            Err(e) => warn!("perk bonus failed for {}: {}", sender.user_id, e),
        }
    }

    /// Creator-program members earn 10% on top of every gift they receive.
    async fn apply_creator_bonus(
        &self,
        sender: &UserProfile,
        receiver_id: Uuid,
        gift: &GiftDefinition,
    ) {
        let receiver = match self.profiles.get_profile(receiver_id).await {
            Ok(Some(profile)) => profile,
            Ok(None) => {
                debug!("receiver {} has no profile; skipping creator bonus", receiver_id);
                return;
            }
            Err(e) => {
                warn!("receiver profile lookup failed for {}: {}", receiver_id, e);
                return;
            }
        };
        if !receiver.is_creator_program {
            return;
        }
        let amount = gift.cost * 10 / 100;
        if amount == 0 {
            return;
        }
        if let Err(e) = self
            .ledger
            .credit_coins(
                receiver_id,
                amount,
                "creator_bonus",
                CoinType::Paid,
                &format!("Creator bonus on {}", gift.name),
                Some(json!({ "gift_id": gift.gift_id, "sender_id": sender.user_id })),
            )
            .await
        {
            warn!("creator bonus failed for {}: {}", receiver_id, e);
        }
    }

    /// Family-category gifts score war points for the receiver's family,
    /// and half of those points again as family XP.
    async fn score_family_war(&self, receiver_id: Uuid, gift: &GiftDefinition) {
        if !gift.category.eq_ignore_ascii_case(FAMILY_CATEGORY) {
            return;
        }
        let family_id = match self.wars.family_for_user(receiver_id).await {
            Ok(Some(family_id)) => family_id,
            Ok(None) => return,
            Err(e) => {
                warn!("family lookup failed for {}: {}", receiver_id, e);
                return;
            }
        };
        let war = match self.wars.active_war_for_family(family_id).await {
            Ok(Some(war)) if war.is_active => war,
            Ok(_) => {
                debug!("family {} has no active war", family_id);
                return;
            }
            Err(e) => {
                warn!("war lookup failed for family {}: {}", family_id, e);
                return;
            }
        };
        // round(cost / 100), at least one point per gift
        let points = ((gift.cost + 50) / 100).max(1);
        if let Err(e) = self.wars.add_war_points(war.war_id, family_id, points).await {
            warn!("war scoring failed for family {}: {}", family_id, e);
            return;
        }
        let family_xp = points / 2;
        if family_xp > 0 {
            if let Err(e) = self.wars.grant_family_xp(family_id, family_xp).await {
                warn!("family XP grant failed for {}: {}", family_id, e);
            }
        }
    }

    /// Did this send cross a cumulative-gifting milestone? If so the ledger
    /// already paid it out; pick up the new balance and report it.
    async fn check_gift_milestone(
        &self,
        session: &SessionContext,
        sender_id: Uuid,
        result: &mut GiftSendResult,
    ) {
        match self.ledger.check_milestone(sender_id).await {
            Ok(outcome) if outcome.bonus_awarded => {
                self.refresh_sender_balance(session, sender_id).await;
                result.milestone = Some(outcome);
            }
            Ok(_) => {}
            Err(e) => warn!("milestone check failed for {}: {}", sender_id, e),
        }
    }

    async fn record_progression(
        &self,
        sender: &UserProfile,
        receiver_id: Uuid,
        gift: &GiftDefinition,
        result: &mut GiftSendResult,
    ) {
        let event_data = json!({
            "gift_id": gift.gift_id,
            "category": catalog::category_key(gift),
            "cost": gift.cost,
            "receiver_id": receiver_id,
        });
        if let Err(e) = self
            .ledger
            .record_lifecycle_event(sender.user_id, "gift_sent", event_data)
            .await
        {
            warn!("lifecycle event failed for {}: {}", sender.user_id, e);
        }

        match self
            .ledger
            .award_gift_xp(sender.user_id, receiver_id, gift.cost)
            .await
        {
            Ok(award) => {
                if let Some(sender_award) = award.sender {
                    if sender_award.leveled_up {
                        result.level_up = Some(LevelUpInfo {
                            new_level: sender_award.new_level,
                        });
                    }
                }
            }
            Err(e) => warn!("gift XP award failed for {}: {}", sender.user_id, e),
        }
    }
}
