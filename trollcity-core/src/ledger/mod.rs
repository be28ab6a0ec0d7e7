pub mod client;

pub use client::{LedgerClientConfig, RpcLedgerClient};
