// File: trollcity-common/src/models/officer.rs

use serde::{Deserialize, Serialize};

/// One officer rank of the payroll table.
///
/// The conversion rate and per-hour accrual are deployment tuning, not
/// code: production currently ships zeros here while the figures are being
/// decided, and the real numbers arrive through a config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerLevelConfig {
    pub level: u32,
    pub title: String,
    /// Fraction of one work credit paid out as one coin, e.g. 0.005.
    pub conversion_rate: f64,
    /// Work credits accrued per hour of duty.
    pub credits_per_hour: f64,
    /// Flat bonus applied on top of the converted base, e.g. 0.10.
    pub bonus_rate: f64,
    pub badge: Option<String>,
}

/// Injectable payroll table. Invariant: sorted by ascending level, and
/// conversion rates never decrease with level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerPayrollConfig {
    pub levels: Vec<OfficerLevelConfig>,
}

impl OfficerPayrollConfig {
    /// Rate row for `level`, falling back to the lowest configured rank so
    /// payout lookups never fail on an unrecognized level.
    pub fn level_config(&self, level: u32) -> Option<&OfficerLevelConfig> {
        self.levels
            .iter()
            .find(|l| l.level == level)
            .or_else(|| self.levels.first())
    }

    pub fn from_json(raw: &str) -> Result<Self, crate::Error> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), crate::Error> {
        if self.levels.is_empty() {
            return Err(crate::Error::Config(
                "officer payroll table must have at least one level".into(),
            ));
        }
        let mut previous_rate = f64::MIN;
        for row in &self.levels {
            if row.conversion_rate < previous_rate {
                return Err(crate::Error::Config(format!(
                    "officer level {} has a lower conversion rate than the rank below it",
                    row.level
                )));
            }
            previous_rate = row.conversion_rate;
        }
        Ok(())
    }
}

impl Default for OfficerPayrollConfig {
    fn default() -> Self {
        let rank = |level: u32, title: &str, badge: &str| OfficerLevelConfig {
            level,
            title: title.to_string(),
            // Placeholder figures pending payroll tuning.
            conversion_rate: 0.0,
            credits_per_hour: 0.0,
            bonus_rate: 0.10,
            badge: Some(badge.to_string()),
        };
        Self {
            levels: vec![
                rank(1, "Cadet", "🎓"),
                rank(2, "Patrol Officer", "🚔"),
                rank(3, "Sergeant", "🎖️"),
                rank(4, "Lieutenant", "⭐"),
                rank(5, "Captain", "🌟"),
                rank(6, "Commander", "👮"),
            ],
        }
    }
}
