pub mod ledger_traits;
pub mod profile_traits;
pub mod war_traits;
