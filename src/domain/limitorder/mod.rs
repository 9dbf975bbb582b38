//! Limit order domain — create, list, inspect and cancel DEX limit orders.

pub mod client;
pub mod wire;

pub use client::LimitOrder;
