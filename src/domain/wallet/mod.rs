//! Wallet domain — accounts, balances, prices, transactions, webhooks.

pub mod client;
pub mod errors;
pub mod sign_info;
pub mod wire;

pub use client::Wallet;
