//! Wire types for the DEX aggregator endpoints.
//!
//! Amounts, gas values and chain ids travel as decimal strings unless the
//! wire itself uses a number; fields mirror the API's camelCase names.

use serde::{Deserialize, Serialize};

/// A chain supported by the aggregator, from `GET /supported/chain`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChainInfo {
    pub chain_id: i64,
    pub chain_name: String,
    pub dex_token_approve_address: String,
}

/// A liquidity source, from `GET /get-liquidity`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LiquiditySource {
    pub id: String,
    pub name: String,
    pub logo: String,
}

/// A token known to the aggregator, from `GET /all-tokens`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenListEntry {
    pub decimals: String,
    pub token_contract_address: String,
    pub token_logo_url: String,
    pub token_name: String,
    pub token_symbol: String,
}

/// Parameters for `GET /quote`.
#[derive(Debug, Clone, Default)]
pub struct QuoteRequest {
    pub chain_id: String,
    /// Input amount in the token's minimal divisible units.
    pub amount: String,
    pub from_token_address: String,
    pub to_token_address: String,
    /// Liquidity pool ids to restrict the quote to.
    pub dex_ids: Vec<String>,
    /// Allowed price impact, between 0 and 1.0.
    pub price_impact_protection_percentage: String,
    /// Share of `from_token_amount` routed to the referrer.
    pub fee_percent: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DexProtocol {
    pub percent: String,
    pub dex_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenInfo {
    pub decimal: String,
    pub is_honey_pot: bool,
    pub tax_rate: String,
    pub token_contract_address: String,
    pub token_symbol: String,
    pub token_unit_price: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubRouter {
    pub dex_protocol: Vec<DexProtocol>,
    pub from_token: Option<TokenInfo>,
    pub to_token: Option<TokenInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DexRouter {
    pub router: String,
    pub router_percent: String,
    pub sub_router_list: Vec<SubRouter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteCompare {
    pub amount_out: String,
    pub dex_logo: String,
    pub dex_name: String,
    pub trade_fee: String,
}

/// Routing result from `GET /quote`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuoteResult {
    pub chain_id: String,
    pub dex_router_list: Vec<DexRouter>,
    pub estimate_gas_fee: String,
    pub from_token: TokenInfo,
    pub from_token_amount: String,
    pub price_impact_pct: String,
    pub quote_compare_list: Vec<QuoteCompare>,
    pub to_token: TokenInfo,
    pub to_token_amount: String,
    pub trade_fee: String,
}

/// Parameters for `GET /swap`.
///
/// The required fields come first; every optional field is sent only when
/// set (non-empty string, non-empty list, or `true` for `auto_slippage`).
#[derive(Debug, Clone, Default)]
pub struct SwapRequest {
    pub chain_id: String,
    pub amount: String,
    pub from_token_address: String,
    pub to_token_address: String,
    /// Acceptable slippage, between 0 and 1.
    pub slippage: String,
    pub user_wallet_address: String,
    pub referrer_address: String,
    /// Recipient of the purchased token; defaults to the wallet address.
    pub swap_receiver_address: String,
    pub fee_percent: String,
    pub gas_limit: String,
    /// Target gas price level: `average`, `fast` or `slow`.
    pub gas_level: String,
    pub dex_ids: Vec<String>,
    pub price_impact_protection_percentage: String,
    /// Hex-encoded 64-byte memo appended to the calldata, `0x`-prefixed.
    pub call_data_memo: String,
    pub to_token_referrer_address: String,
    /// Solana compute unit price, analogous to gas price.
    pub compute_unit_price: String,
    /// Solana compute unit limit, analogous to gas limit.
    pub compute_unit_limit: String,
    pub from_token_referrer_wallet_address: String,
    pub to_token_referrer_wallet_address: String,
    /// When true the API overrides `slippage` with its own recommendation.
    pub auto_slippage: bool,
    /// Upper bound for the auto slippage recommendation.
    pub max_auto_slippage: String,
}

/// A transaction ready for signing, from `GET /swap`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Tx {
    pub data: String,
    pub from: String,
    pub gas: String,
    pub gas_price: String,
    pub max_priority_fee_per_gas: String,
    pub min_receive_amount: String,
    pub signature_data: Vec<String>,
    pub to: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwapResult {
    pub router_result: Option<QuoteResult>,
    pub tx: Option<Tx>,
}

/// Parameters for `GET /swap-instruction` (Solana).
#[derive(Debug, Clone, Default)]
pub struct SwapInstructionsRequest {
    pub chain_id: String,
    pub amount: String,
    pub from_token_address: String,
    pub to_token_address: String,
    pub slippage: String,
    pub user_wallet_address: String,
    pub swap_receiver_address: String,
    pub fee_percent: String,
    pub from_token_referrer_wallet_address: String,
    pub to_token_referrer_wallet_address: String,
    pub dex_ids: Vec<String>,
    pub price_impact_protection_percentage: String,
    pub compute_unit_price: String,
    pub compute_unit_limit: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstructionAccount {
    pub is_signer: bool,
    pub is_writable: bool,
    pub pubkey: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstructionInfo {
    pub data: String,
    pub accounts: Vec<InstructionAccount>,
    pub program_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SwapInstructionsResult {
    pub address_lookup_table_account: Vec<String>,
    pub instruction_lists: Vec<InstructionInfo>,
}

/// Parameters for `GET /approve-transaction`.
#[derive(Debug, Clone, Default)]
pub struct ApproveTransactionRequest {
    pub chain_id: String,
    pub token_contract_address: String,
    /// Allowance to grant, in minimal divisible units.
    pub approve_amount: String,
}

/// ERC-20 approve calldata, from `GET /approve-transaction`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApproveTransactionResult {
    pub data: String,
    pub dex_contract_address: String,
    pub gas_limit: String,
    pub gas_price: String,
}

/// Parameters for `GET /history`.
#[derive(Debug, Clone, Default)]
pub struct TransactionStatusRequest {
    pub chain_id: String,
    pub tx_hash: String,
    /// Restrict the lookup to transactions made under the current API key.
    pub is_from_my_project: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenDetail {
    pub symbol: String,
    pub amount: String,
    pub token_address: String,
}

/// Final status of a single-chain swap, from `GET /history`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionStatusResult {
    pub chain_id: String,
    pub hash: String,
    pub height: String,
    pub tx_time: String,
    pub status: String,
    pub tx_type: String,
    pub from_address: String,
    pub from_token_details: Option<TokenDetail>,
    pub to_token_details: Option<TokenDetail>,
    pub referal_amount: String,
    pub error_msg: String,
    pub gas_limit: String,
    pub gas_used: String,
    pub gas_price: String,
    pub tx_fee: String,
}
