//! Wire types for the cross-chain bridge endpoints.

use serde::{Deserialize, Serialize};

/// A chain supported for bridging, from `GET /supported/chain`.
///
/// Unlike the aggregator's chain listing, the id here is a string.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChainInfo {
    pub chain_id: String,
    pub chain_name: String,
    pub dex_token_approve_address: String,
}

/// A supported bridge, from `GET /supported/bridges`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BridgeInfo {
    pub bridge_name: String,
    pub bridge_id: i64,
    pub required_other_native_fee: bool,
    pub logo: String,
    pub supported_chains: Vec<String>,
}

/// A token tradable directly across the bridge, from `GET /supported/tokens`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenInfo {
    pub chain_id: String,
    pub decimals: i64,
    pub token_contract_address: String,
    pub token_logo_url: String,
    pub token_name: String,
    pub token_symbol: String,
}

/// A bridgeable token pair, from `GET /supported/bridge-tokens-pairs`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenPair {
    pub from_chain_id: String,
    pub to_chain_id: String,
    pub from_token_address: String,
    pub to_token_address: String,
    pub from_token_symbol: String,
    pub to_token_symbol: String,
}

/// Route preference for [`CrossChainQuoteRequest::sort`].
///
/// 0 (default) sorts by best return, 1 by fastest route, 2 by lowest fee;
/// zero is treated as unset and omitted from the request.
pub type RouteSort = i32;

/// Parameters for `GET /quote`.
#[derive(Debug, Clone, Default)]
pub struct CrossChainQuoteRequest {
    pub from_chain_id: String,
    pub to_chain_id: String,
    pub from_token_address: String,
    pub to_token_address: String,
    pub amount: String,
    pub slippage: String,
    pub sort: RouteSort,
    pub fee_percent: String,
    /// Bridge names to restrict routing to.
    pub allow_bridge: Vec<String>,
    /// Bridge names to exclude from routing.
    pub deny_bridge: Vec<String>,
    pub price_impact_protection_percentage: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteTokenInfo {
    pub decimals: i64,
    pub token_contract_address: String,
    pub token_symbol: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DexProtocol {
    pub percent: String,
    pub dex_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubRouter {
    pub dex_protocol: Option<DexProtocol>,
    pub from_token: Option<QuoteTokenInfo>,
    pub to_token: Option<QuoteTokenInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DexRouter {
    pub router: String,
    pub router_percent: String,
    pub sub_router_list: Vec<SubRouter>,
}

/// The bridge leg of a route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BridgeRouter {
    pub bridge_id: i64,
    pub bridge_name: String,
    pub cross_chain_fee: String,
    pub cross_chain_fee_token_address: String,
    pub other_native_fee: String,
    pub estimate_gas_fee: String,
    pub estimated_time: String,
}

/// One candidate route in a quote.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Route {
    pub estimate_time: String,
    pub estimate_gas_fee: String,
    pub from_chain_network_fee: String,
    pub to_chain_network_fee: String,
    pub to_token_amount: String,
    pub minimum_received: String,
    pub need_approve: i32,
    pub router: Option<BridgeRouter>,
    pub from_dex_router_list: Vec<DexRouter>,
    pub to_dex_router_list: Vec<DexRouter>,
}

/// Routing result from `GET /quote`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrossChainQuoteResult {
    pub from_chain_id: String,
    pub to_chain_id: String,
    pub from_token_amount: String,
    pub from_token: QuoteTokenInfo,
    pub to_token: QuoteTokenInfo,
    pub router_list: Vec<Route>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrossChainFee {
    pub symbol: String,
    pub address: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrossChainInfo {
    pub memo: String,
    pub destination_chain_gasfee: String,
    pub detail_status: String,
    pub status: String,
}

/// Parameters for `GET /status`.
#[derive(Debug, Clone, Default)]
pub struct TransactionStatusRequest {
    /// Transaction hash on the source chain.
    pub hash: String,
    /// Source chain id; optional.
    pub chain_id: String,
}

/// Final status of a cross-chain swap, from `GET /status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrossChainTransactionStatus {
    pub from_chain_id: String,
    pub to_chain_id: String,
    pub from_tx_hash: String,
    pub to_tx_hash: String,
    pub from_amount: String,
    pub from_token_address: String,
    pub to_amount: String,
    pub to_token_address: String,
    pub error_msg: String,
    pub bridge_hash: String,
    pub refund_chain_id: String,
    pub refund_token_address: String,
    pub refund_tx_hash: String,
    pub source_chain_gasfee: String,
    pub cross_chain_fee: CrossChainFee,
    pub symbol: String,
    pub address: String,
    pub amount: String,
    pub cross_chain_info: CrossChainInfo,
}
