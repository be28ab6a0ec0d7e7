// trollcity-common/src/models/mod.rs

pub mod gift;
pub mod ledger;
pub mod officer;
pub mod progression;
pub mod user;
pub mod war;

pub use gift::{BonusCondition, BonusInfo, GiftDefinition, GiftSendRequest, GiftSendResult, LevelUpInfo};
pub use ledger::{CoinType, CreditOutcome, MilestoneOutcome, SpendOutcome, XpAwardOutcome, XpLevelResult};
pub use officer::{OfficerLevelConfig, OfficerPayrollConfig};
pub use progression::{LevelProgress, TierInfo};
pub use user::UserProfile;
pub use war::FamilyWar;
