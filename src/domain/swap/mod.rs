//! DEX aggregator domain — quotes, swaps, approvals, discovery, history.

pub mod client;
pub mod errors;
pub mod wire;

pub use client::Swap;
