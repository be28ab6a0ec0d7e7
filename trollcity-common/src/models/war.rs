use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An active head-to-head competition between two troll families. Gifts in
/// the Family category score points for the receiver's side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyWar {
    pub war_id: Uuid,
    pub family_a: Uuid,
    pub family_b: Uuid,
    pub is_active: bool,
    pub starts_at: DateTime<Utc>,
    pub ends_at: Option<DateTime<Utc>>,
}
