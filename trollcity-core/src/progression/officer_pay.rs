//! Officer work-credit → paid-coin conversion.

use trollcity_common::models::officer::OfficerPayrollConfig;

/// Converts accrued work credits into a coin payout for the given rank.
///
/// The base is floored before the bonus is taken, and the bonus is floored
/// again; the bonus is a strict function of the already-truncated base.
/// Existing ledger records were written with this ordering, so it must not
/// change. Unknown ranks pay at the lowest configured rate rather than
/// failing; an empty table pays nothing.
pub fn convert_owc_to_paid_coins(owc: f64, officer_level: u32, payroll: &OfficerPayrollConfig) -> i64 {
    if owc <= 0.0 {
        return 0;
    }
    let Some(rank) = payroll.level_config(officer_level) else {
        return 0;
    };
    let base = (owc * rank.conversion_rate).floor() as i64;
    let bonus = (base as f64 * rank.bonus_rate).floor() as i64;
    base + bonus
}
