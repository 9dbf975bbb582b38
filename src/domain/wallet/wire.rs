//! Wire types for the wallet endpoints.

use serde::{Deserialize, Serialize};

// ─── Accounts ────────────────────────────────────────────────────────────────

/// A chain/address pair tracked by a wallet account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountAddress {
    pub chain_index: String,
    pub address: String,
}

/// Body of `POST /account/create-wallet-account`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub addresses: Vec<AccountAddress>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateAccountResult {
    pub account_id: String,
}

/// Direction of an address-set update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateType {
    Add,
    Delete,
}

/// Body of `POST /account/update-wallet-account`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAccountRequest {
    pub account_id: String,
    pub update_type: UpdateType,
    pub addresses: Vec<AccountAddress>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Account {
    pub account_id: String,
    pub account_type: String,
}

/// One page of accounts, from `GET /account/accounts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccountsPage {
    pub accounts: Vec<Account>,
    pub cursor: String,
}

// ─── Assets ──────────────────────────────────────────────────────────────────

/// Parameters for `GET /asset/total-value-by-address`.
#[derive(Debug, Clone, Default)]
pub struct TotalValueByAddressRequest {
    pub address: String,
    /// Chains to aggregate over; up to 50.
    pub chains: Vec<String>,
    /// `0` all assets, `1` tokens only, `2` DeFi only.
    pub asset_type: String,
    /// Filter risky airdrop tokens; the API filters by default.
    pub exclude_risk_token: Option<bool>,
}

/// Total asset valuation in USD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TotalValueResult {
    pub total_value: String,
}

/// Parameters for `GET /asset/all-token-balances-by-address`.
#[derive(Debug, Clone, Default)]
pub struct AllTokenBalancesByAddressRequest {
    pub address: String,
    pub chains: Vec<String>,
    /// `0` filters risky airdrop tokens (default), `1` does not.
    pub filter: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenBalance {
    pub chain_index: String,
    pub token_address: String,
    pub address: String,
    pub symbol: String,
    pub balance: String,
    pub token_price: String,
    pub token_type: String,
    pub transfer_amount: String,
    pub available_amount: String,
    pub is_risk_token: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenBalanceResult {
    pub token_assets: Vec<TokenBalance>,
    pub time_stamp: String,
}

/// A token identified by contract address and chain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenAddress {
    pub token_address: String,
    pub chain_index: String,
}

/// Body of `POST /asset/token-balances-by-address`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenBalancesByAddressRequest {
    pub address: String,
    pub token_addresses: Vec<TokenAddress>,
    pub filter: String,
}

/// Parameters for `GET /asset/total-value`.
#[derive(Debug, Clone, Default)]
pub struct TotalValueByAccountRequest {
    pub account_id: String,
    pub chains: Vec<String>,
    pub asset_type: String,
    pub exclude_risk_token: Option<bool>,
}

/// Parameters for `GET /asset/wallet-all-token-balances`.
#[derive(Debug, Clone, Default)]
pub struct AllTokenBalancesByAccountRequest {
    pub account_id: String,
    pub chains: Vec<String>,
    pub filter: String,
}

/// Body of `POST /asset/token-balances`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenBalancesByAccountRequest {
    pub account_id: String,
    pub token_addresses: Vec<TokenAddress>,
}

// ─── Chains and prices ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SupportedChain {
    pub name: String,
    pub logo_url: String,
    pub short_name: String,
    pub chain_index: String,
}

/// One token in a price lookup, for both index and real-time prices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenPriceRequest {
    pub chain_index: String,
    pub token_address: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenPrice {
    pub chain_index: String,
    pub token_address: String,
    pub price: String,
    pub time: String,
}

/// Parameters for `GET /token/historical-price`.
///
/// Inscription tokens use prefixed addresses, e.g. `btc-brc20-ordi` or
/// `btc-runesMain-840000:2`; an empty address queries the native token.
#[derive(Debug, Clone, Default)]
pub struct HistoricalTokenPriceRequest {
    pub chain_index: String,
    pub token_address: String,
    /// Entries per page, default 50, maximum 200.
    pub limit: i64,
    pub cursor: i64,
    /// Unix millisecond timestamps bounding the query window.
    pub begin: i64,
    pub end: i64,
    /// `1m`, `5m`, `30m`, `1h` or `1d` (default).
    pub period: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoricalTokenPriceResult {
    pub cursor: String,
    pub prices: Vec<TokenPrice>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SocialUrls {
    pub messageboard: Vec<String>,
    pub github: Vec<String>,
    pub twitter: Vec<String>,
    pub chat: Vec<String>,
    pub reddit: Vec<String>,
}

/// Token project metadata, from `GET /token/token-detail`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectInformation {
    pub logo_url: String,
    pub official_website: String,
    pub social_urls: SocialUrls,
    pub decimals: String,
    pub token_address: String,
    pub chain_index: String,
    pub chain_name: String,
    pub symbol: String,
    pub max_supply: String,
    pub total_supply: String,
    pub volume24h: String,
    pub market_cap: String,
}

// ─── Pre-transaction ─────────────────────────────────────────────────────────

/// Address classification returned by `GET /pre-transaction/validate-address`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressType(pub String);

impl AddressType {
    /// `0`: invalid address format.
    pub fn is_invalid(&self) -> bool {
        self.0 == "0"
    }

    /// `1`: valid user address.
    pub fn is_user_address(&self) -> bool {
        self.0 == "1"
    }

    /// `2`: valid contract address.
    pub fn is_contract_address(&self) -> bool {
        self.0 == "2"
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidateAddressResult {
    pub address_type: AddressType,
    pub hit_blacklist: bool,
    /// Tag type for blacklisted addresses, such as phishing or contract
    /// vulnerabilities.
    pub tag: String,
}

/// Body of `POST /pre-transaction/broadcast-transaction`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BroadcastTransactionRequest {
    pub signed_tx: String,
    pub chain_index: String,
    pub address: String,
    pub account_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BroadcastTransactionResult {
    pub order_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NonceResult {
    pub nonce: String,
    pub pending_nonce: String,
}

/// Parameters for `GET /pre-transaction/sui-object`.
#[derive(Debug, Clone, Default)]
pub struct SuiObjectRequest {
    pub chain_index: String,
    pub address: String,
    pub token_address: String,
    /// Entries per page, maximum 50.
    pub limit: String,
    pub cursor: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuiObject {
    pub amount: String,
    /// Digest of the last transaction that included this object as output.
    pub digest: String,
    pub version: String,
    pub object_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuiObjectResult {
    pub token_address: String,
    pub cursor: String,
    pub objects: Vec<SuiObject>,
}

/// Body of `POST /pre-transaction/sign-info`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SignInfoRequest {
    pub chain_index: String,
    pub from_addr: String,
    pub to_addr: String,
    /// Native token amount in the chain's smallest unit; required for
    /// mainnet coin transfers or the gas limit estimate will be off.
    pub tx_amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext_json: Option<ExtJson>,
}

/// Chain-specific extension parameters for sign-info requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExtJson {
    /// EVM only: calldata to include.
    pub input_data: String,
    /// EVM only: `1` BRC-20, `2` ARC-20, `3` Runes, `4` ordi_nft.
    pub protocol: String,
    /// Solana only.
    pub token_address: String,
    /// Tron only: `1` owner permission (default), `2` witness permission.
    pub permission_type: String,
    /// Tron only: required for contract interaction, 30000000 by default.
    pub fee_limit: String,
}

// ─── Post-transaction ────────────────────────────────────────────────────────

/// Parameters for `GET /post-transaction/orders`. Every filter is optional.
#[derive(Debug, Clone, Default)]
pub struct TransactionOrdersRequest {
    pub address: String,
    pub account_id: String,
    pub chain_index: String,
    /// `1` pending, `2` success, `3` failed.
    pub tx_status: String,
    pub order_id: String,
    pub cursor: String,
    pub limit: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionOrder {
    pub chain_index: i64,
    pub address: String,
    pub account_id: String,
    pub order_id: String,
    pub tx_status: String,
    pub tx_hash: String,
    pub limit: String,
}

/// Parameters for `GET /post-transaction/transactions-by-address`.
#[derive(Debug, Clone, Default)]
pub struct TransactionHistoryByAddressRequest {
    pub address: String,
    pub chains: Vec<String>,
    /// Empty queries main-chain balances only; unset queries all tokens.
    pub token_address: String,
    /// Unix millisecond timestamps bounding the query window.
    pub begin: String,
    pub end: String,
    pub cursor: String,
    /// Number of records, defaults to the most recent 20.
    pub limit: String,
    pub exclude_risk_token: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressBalance {
    pub address: String,
    pub amount: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionHistory {
    pub chain_index: String,
    pub tx_hash: String,
    /// EVM tier type: `0` outer main-chain transfer, `1` contract inner
    /// transfer, `2` token transfer.
    pub i_type: String,
    pub method_id: String,
    pub nonce: String,
    pub tx_time: String,
    pub from: Vec<AddressBalance>,
    pub to: Vec<AddressBalance>,
    pub token_address: String,
    pub amount: String,
    pub symbol: String,
    pub tx_fee: String,
    /// `success`, `fail` or `pending`.
    pub tx_status: String,
    pub hit_blacklist: bool,
    pub tag: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TransactionHistoryPage {
    pub transaction_list: Vec<TransactionHistory>,
    pub cursor: String,
}

// ─── Webhooks ────────────────────────────────────────────────────────────────

/// One subscription in a `POST /webhook/subscribe` batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubscribeRequest {
    pub url: String,
    /// `block`, `token_issuance` or `fee_fluctuation`.
    #[serde(rename = "type")]
    pub kind: String,
    pub chain_index: String,
    pub name: String,
    /// Only applicable when `kind` is `fee_fluctuation`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_change_filter: Option<FeeChangeFilter>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeeChangeFilter {
    pub min_change: String,
    pub max_change: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubscribeResult {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnsubscribeRequest {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UnsubscribeResult {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub chain_index: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: String,
}
