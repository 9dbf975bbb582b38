//! Wire types for the limit order endpoints.

use serde::{Deserialize, Serialize};

/// The signed order payload submitted with `POST /save-order`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderData {
    pub salt: String,
    pub maker_token: String,
    pub taker_token: String,
    pub maker: String,
    pub receiver: String,
    pub allowed_sender: String,
    pub making_amount: String,
    pub taking_amount: String,
    pub min_return: String,
    pub dead_line: String,
    pub partially_able: bool,
}

/// Body of `POST /save-order`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub order_hash: String,
    pub chain_id: String,
    pub signature: String,
    pub data: OrderData,
}

/// An order as the API reports it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderDetail {
    pub chain_id: String,
    pub create_time: String,
    pub expire_time: String,
    pub maker_asset_address: String,
    pub maker_rate: String,
    pub maker_token_address: String,
    pub making_amount: String,
    pub order_hash: String,
    pub receiver: String,
    pub remaining_maker_amount: String,
    pub salt: String,
    pub signature: String,
    pub status: String,
    pub taker_asset_address: String,
    pub taker_rate: String,
    pub taker_token_address: String,
    pub taking_amount: String,
}

/// Parameters for `GET /all`. Optional filters are sent only when set.
#[derive(Debug, Clone, Default)]
pub struct ListOrdersRequest {
    pub chain_id: String,
    pub page: String,
    pub limit: String,
    /// Comma-separated status filter.
    pub statuses: String,
    pub taker_asset: String,
    pub maker_asset: String,
}
