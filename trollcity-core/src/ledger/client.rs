// File: trollcity-core/src/ledger/client.rs
//
// HTTP implementation of the LedgerService boundary. Each method maps to
// one remote stored procedure; parameter names follow the procedures'
// signatures, so they are part of the wire contract.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use uuid::Uuid;

use trollcity_common::Error;
use trollcity_common::models::ledger::{
    CoinType, CreditOutcome, MilestoneOutcome, SpendOutcome, XpAwardOutcome,
};
use trollcity_common::traits::ledger_traits::LedgerService;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct LedgerClientConfig {
    pub base_url: String,
    pub service_key: String,
}

impl LedgerClientConfig {
    /// Reads `TROLLCITY_LEDGER_URL` and `TROLLCITY_LEDGER_KEY`, loading a
    /// `.env` file first when one is present.
    pub fn from_env() -> Result<Self, Error> {
        let _ = dotenv::dotenv();
        let base_url = std::env::var("TROLLCITY_LEDGER_URL")
            .map_err(|_| Error::Config("TROLLCITY_LEDGER_URL is not set".into()))?;
        let service_key = std::env::var("TROLLCITY_LEDGER_KEY")
            .map_err(|_| Error::Config("TROLLCITY_LEDGER_KEY is not set".into()))?;
        Ok(Self {
            base_url,
            service_key,
        })
    }
}

pub struct RpcLedgerClient {
    http: Client,
    config: LedgerClientConfig,
}

impl RpcLedgerClient {
    pub fn new(config: LedgerClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    async fn call<T: DeserializeOwned>(&self, procedure: &str, params: Value) -> Result<T, Error> {
        let url = format!(
            "{}/rpc/{}",
            self.config.base_url.trim_end_matches('/'),
            procedure
        );
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.config.service_key)
            .json(&params)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Error::Ledger(format!(
                "{} returned HTTP {}",
                procedure,
                response.status()
            )));
        }
        Ok(response.json::<T>().await?)
    }
}

pub(crate) fn spend_params(
    sender_id: Uuid,
    receiver_id: Uuid,
    amount: i64,
    source: &str,
    item_label: &str,
) -> Value {
    json!({
        "p_sender_id": sender_id,
        "p_receiver_id": receiver_id,
        "p_coin_amount": amount,
        "p_source": source,
        "p_item": item_label,
    })
}

#[async_trait]
impl LedgerService for RpcLedgerClient {
    async fn spend_coins(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        amount: i64,
        source: &str,
        item_label: &str,
    ) -> Result<SpendOutcome, Error> {
        self.call(
            "spend_coins",
            spend_params(sender_id, receiver_id, amount, source, item_label),
        )
        .await
    }

    async fn credit_coins(
        &self,
        user_id: Uuid,
        amount: i64,
        credit_type: &str,
        coin_type: CoinType,
        description: &str,
        metadata: Option<Value>,
    ) -> Result<CreditOutcome, Error> {
        self.call(
            "credit_coins",
            json!({
                "p_user_id": user_id,
                "p_amount": amount,
                "p_type": credit_type,
                "p_coin_type": coin_type,
                "p_description": description,
                "p_metadata": metadata.unwrap_or(Value::Null),
            }),
        )
        .await
    }

    async fn get_balance(&self, user_id: Uuid) -> Result<i64, Error> {
        self.call("get_balance", json!({ "p_user_id": user_id }))
            .await
    }

    async fn check_milestone(&self, user_id: Uuid) -> Result<MilestoneOutcome, Error> {
        self.call("check_gift_milestone", json!({ "p_user_id": user_id }))
            .await
    }

    async fn record_lifecycle_event(
        &self,
        user_id: Uuid,
        event_type: &str,
        event_data: Value,
    ) -> Result<(), Error> {
        let _: Value = self
            .call(
                "record_lifecycle_event",
                json!({
                    "p_user_id": user_id,
                    "p_event_type": event_type,
                    "p_event_data": event_data,
                }),
            )
            .await?;
        Ok(())
    }

    async fn award_gift_xp(
        &self,
        sender_id: Uuid,
        receiver_id: Uuid,
        gift_cost: i64,
    ) -> Result<XpAwardOutcome, Error> {
        self.call(
            "award_gift_xp",
            json!({
                "p_sender_id": sender_id,
                "p_receiver_id": receiver_id,
                "p_gift_cost": gift_cost,
            }),
        )
        .await
    }

    async fn attach_gift_context(
        &self,
        gift_record_id: &str,
        stream_id: Option<Uuid>,
        battle_id: Option<Uuid>,
    ) -> Result<(), Error> {
        let _: Value = self
            .call(
                "attach_gift_context",
                json!({
                    "p_gift_id": gift_record_id,
                    "p_stream_id": stream_id,
                    "p_battle_id": battle_id,
                }),
            )
            .await?;
        Ok(())
    }
}
