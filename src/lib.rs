//! # OKX OS SDK
//!
//! A typed Rust client for the OKX OS (Web3) REST API: DEX aggregation,
//! cross-chain bridging, limit orders, and wallet services.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — errors, endpoint constants (always available)
//! 2. **HTTP transport** — request signing, the response envelope, and the
//!    [`Transport`](http::Transport) capability domain modules depend on
//! 3. **Domain modules** — vertical slices: swap, cross-chain, limit orders,
//!    wallet; each a thin typed wrapper over the transport
//! 4. **High-Level Client** — [`OkxClient`](client::OkxClient) with nested
//!    sub-client accessors
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use okxos_sdk::prelude::*;
//!
//! let client = OkxClient::builder("api-key", "secret-key", "passphrase")
//!     .project_id("my-project")
//!     .build()?;
//!
//! let chains = client.swap().supported_chains(None).await?;
//! let quote = client.swap().quote(&QuoteRequest {
//!     chain_id: "1".into(),
//!     amount: "1000000".into(),
//!     from_token_address: "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee".into(),
//!     to_token_address: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".into(),
//!     ..Default::default()
//! }).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// General API error-code predicates shared by all domains.
pub mod errcode;

/// Endpoint URL constants.
pub mod network;

// ── Layer 2: HTTP transport ──────────────────────────────────────────────────

/// Signed HTTP transport: credentials, envelope codec, request dispatch.
pub mod http;

// ── Layer 3: Domain modules ──────────────────────────────────────────────────

/// Domain modules (vertical slices): sub-clients and wire types.
pub mod domain;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `OkxClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::{ApiError, SdkError};

    // Transport capability + params
    pub use crate::http::{OkxHttp, Params, Transport};

    // High-level client + sub-clients
    pub use crate::client::{
        CrossChain, LimitOrder, OkxClient, OkxClientBuilder, Swap, Wallet,
    };

    // Domain types — swap
    pub use crate::domain::swap::wire::{
        ApproveTransactionRequest, ApproveTransactionResult, ChainInfo, LiquiditySource,
        QuoteRequest, QuoteResult, SwapInstructionsRequest, SwapInstructionsResult, SwapRequest,
        SwapResult, TokenListEntry, TransactionStatusRequest, TransactionStatusResult, Tx,
    };

    // Domain types — cross-chain
    pub use crate::domain::crosschain::wire::{
        BridgeInfo, CrossChainQuoteRequest, CrossChainQuoteResult, CrossChainTransactionStatus,
        TokenPair,
    };

    // Domain types — limit orders
    pub use crate::domain::limitorder::wire::{
        CreateOrderRequest, ListOrdersRequest, OrderData, OrderDetail,
    };

    // Domain types — wallet
    pub use crate::domain::wallet::sign_info::SignInfo;
    pub use crate::domain::wallet::wire::{
        AccountAddress, AddressType, CreateAccountRequest, SubscribeRequest, TokenBalance,
        TokenPrice, ValidateAddressResult,
    };

    // Network
    pub use crate::network::DEFAULT_API_URL;
}
