//! Cross-chain bridging domain — discovery, quoting, status tracking.

pub mod client;
pub mod errors;
pub mod wire;

pub use client::CrossChain;
