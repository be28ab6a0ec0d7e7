pub mod officer_pay;
pub mod tiers;
