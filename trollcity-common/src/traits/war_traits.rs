use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Error;
use crate::models::war::FamilyWar;

/// Family membership and war scoreboard, kept by the families backend.
#[async_trait]
pub trait FamilyWarRepository: Send + Sync {
    async fn family_for_user(&self, user_id: Uuid) -> Result<Option<Uuid>, Error>;

    async fn active_war_for_family(&self, family_id: Uuid) -> Result<Option<FamilyWar>, Error>;

    async fn add_war_points(&self, war_id: Uuid, family_id: Uuid, points: i64) -> Result<(), Error>;

    async fn grant_family_xp(&self, family_id: Uuid, xp: i64) -> Result<(), Error>;
}
