//! Wallet sub-client.

use crate::domain::{first_or_not_found, list_or_empty};
use crate::error::SdkError;
use crate::http::{Params, Transport};

use super::sign_info::SignInfo;
use super::wire::{
    AccountsPage, AllTokenBalancesByAccountRequest, AllTokenBalancesByAddressRequest,
    BroadcastTransactionRequest, BroadcastTransactionResult, CreateAccountRequest,
    CreateAccountResult, HistoricalTokenPriceRequest, HistoricalTokenPriceResult, NonceResult,
    ProjectInformation, SignInfoRequest, SubscribeRequest, SubscribeResult, Subscription,
    SuiObjectRequest, SuiObjectResult, SupportedChain, TokenBalanceResult,
    TokenBalancesByAccountRequest, TokenBalancesByAddressRequest, TokenPrice, TokenPriceRequest,
    TotalValueByAccountRequest, TotalValueByAddressRequest, TotalValueResult,
    TransactionHistoryByAddressRequest, TransactionHistoryPage, TransactionOrder,
    TransactionOrdersRequest, UnsubscribeRequest, UnsubscribeResult, UpdateAccountRequest,
    ValidateAddressResult,
};

/// Sub-client for `/api/v5/wallet/...`.
pub struct Wallet<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> Wallet<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    // ── Accounts ─────────────────────────────────────────────────────────────

    /// Registers a wallet account over a set of chain/address pairs.
    pub async fn create_account(
        &self,
        req: &CreateAccountRequest,
    ) -> Result<CreateAccountResult, SdkError> {
        let results = self
            .transport
            .post("/api/v5/wallet/account/create-wallet-account", req)
            .await?;
        first_or_not_found(results)
    }

    pub async fn delete_account(&self, account_id: &str) -> Result<(), SdkError> {
        let _: Option<serde_json::Value> = self
            .transport
            .post(
                "/api/v5/wallet/account/delete-account",
                &serde_json::json!({ "accountId": account_id }),
            )
            .await?;
        Ok(())
    }

    /// Adds or removes addresses from an account.
    pub async fn update_account(&self, req: &UpdateAccountRequest) -> Result<(), SdkError> {
        let _: Option<serde_json::Value> = self
            .transport
            .post("/api/v5/wallet/account/update-wallet-account", req)
            .await?;
        Ok(())
    }

    /// One page of accounts under the current project.
    pub async fn accounts(
        &self,
        limit: &str,
        cursor: Option<&str>,
    ) -> Result<AccountsPage, SdkError> {
        let mut params = Params::new();
        params.insert("limit", limit);
        params.insert_nonempty("cursor", cursor.unwrap_or_default());
        let results = self
            .transport
            .get("/api/v5/wallet/account/accounts", &params)
            .await?;
        first_or_not_found(results)
    }

    // ── Assets ───────────────────────────────────────────────────────────────

    /// Total USD valuation of an address across chains.
    pub async fn total_value_by_address(
        &self,
        req: &TotalValueByAddressRequest,
    ) -> Result<TotalValueResult, SdkError> {
        let mut params = Params::new();
        params
            .insert("address", &req.address)
            .insert("chains", req.chains.join(","))
            .insert("assetType", &req.asset_type);
        if let Some(exclude) = req.exclude_risk_token {
            params.insert("excludeRiskToken", exclude.to_string());
        }
        let results = self
            .transport
            .get("/api/v5/wallet/asset/total-value-by-address", &params)
            .await?;
        first_or_not_found(results)
    }

    /// All token balances held by an address.
    pub async fn all_token_balances_by_address(
        &self,
        req: &AllTokenBalancesByAddressRequest,
    ) -> Result<TokenBalanceResult, SdkError> {
        let mut params = Params::new();
        params
            .insert("address", &req.address)
            .insert("chains", req.chains.join(","))
            .insert("filter", &req.filter);
        let results = self
            .transport
            .get("/api/v5/wallet/asset/all-token-balances-by-address", &params)
            .await?;
        first_or_not_found(results)
    }

    /// Balances for specific tokens held by an address.
    pub async fn token_balances_by_address(
        &self,
        req: &TokenBalancesByAddressRequest,
    ) -> Result<TokenBalanceResult, SdkError> {
        let results = self
            .transport
            .post("/api/v5/wallet/asset/token-balances-by-address", req)
            .await?;
        first_or_not_found(results)
    }

    /// Total USD valuation of an account.
    pub async fn total_value_by_account(
        &self,
        req: &TotalValueByAccountRequest,
    ) -> Result<TotalValueResult, SdkError> {
        let mut params = Params::new();
        params
            .insert("accountId", &req.account_id)
            .insert("chains", req.chains.join(","))
            .insert("assetType", &req.asset_type);
        if let Some(exclude) = req.exclude_risk_token {
            params.insert("excludeRiskToken", exclude.to_string());
        }
        let results = self
            .transport
            .get("/api/v5/wallet/asset/total-value", &params)
            .await?;
        first_or_not_found(results)
    }

    /// All token balances held by an account.
    pub async fn account_all_token_balances(
        &self,
        req: &AllTokenBalancesByAccountRequest,
    ) -> Result<TokenBalanceResult, SdkError> {
        let mut params = Params::new();
        params.insert("accountId", &req.account_id);
        params
            .insert_joined("chains", &req.chains)
            .insert_nonempty("filter", &req.filter);
        let results = self
            .transport
            .get("/api/v5/wallet/asset/wallet-all-token-balances", &params)
            .await?;
        first_or_not_found(results)
    }

    /// Balances for specific tokens held by an account.
    pub async fn token_balances_by_account(
        &self,
        req: &TokenBalancesByAccountRequest,
    ) -> Result<TokenBalanceResult, SdkError> {
        let results = self
            .transport
            .post("/api/v5/wallet/asset/token-balances", req)
            .await?;
        first_or_not_found(results)
    }

    // ── Chains and prices ────────────────────────────────────────────────────

    /// Blockchains the wallet services support.
    pub async fn supported_chains(&self) -> Result<Vec<SupportedChain>, SdkError> {
        let results = self
            .transport
            .get("/api/v5/wallet/chain/supported-chains", &Params::new())
            .await?;
        Ok(list_or_empty(results))
    }

    /// Index prices for a batch of tokens.
    pub async fn token_index_price(
        &self,
        req: &[TokenPriceRequest],
    ) -> Result<Vec<TokenPrice>, SdkError> {
        let results = self
            .transport
            .post("/api/v5/wallet/token/current-price", req)
            .await?;
        Ok(list_or_empty(results))
    }

    /// Real-time market prices for a batch of tokens.
    pub async fn real_time_token_price(
        &self,
        req: &[TokenPriceRequest],
    ) -> Result<Vec<TokenPrice>, SdkError> {
        let results = self
            .transport
            .post("/api/v5/wallet/token/real-time-price", req)
            .await?;
        Ok(list_or_empty(results))
    }

    /// One page of historical prices for a token.
    pub async fn historical_token_price(
        &self,
        req: &HistoricalTokenPriceRequest,
    ) -> Result<HistoricalTokenPriceResult, SdkError> {
        let mut params = Params::new();
        params
            .insert("chainIndex", &req.chain_index)
            .insert("tokenAddress", &req.token_address)
            .insert("limit", req.limit.to_string())
            .insert("cursor", req.cursor.to_string())
            .insert("begin", req.begin.to_string())
            .insert("end", req.end.to_string())
            .insert("period", &req.period);
        let result = self
            .transport
            .get("/api/v5/wallet/token/historical-price", &params)
            .await?;
        result.ok_or(SdkError::ResultsNotFound)
    }

    /// Project metadata for a token.
    pub async fn project_information(
        &self,
        chain_index: &str,
        token_address: &str,
    ) -> Result<ProjectInformation, SdkError> {
        let mut params = Params::new();
        params
            .insert("chainIndex", chain_index)
            .insert("tokenAddress", token_address);
        let results = self
            .transport
            .get("/api/v5/wallet/token/token-detail", &params)
            .await?;
        first_or_not_found(results)
    }

    // ── Pre-transaction ──────────────────────────────────────────────────────

    /// Classifies an address and checks it against the blacklist.
    pub async fn validate_address(
        &self,
        chain_index: &str,
        address: &str,
    ) -> Result<ValidateAddressResult, SdkError> {
        let mut params = Params::new();
        params
            .insert("chainIndex", chain_index)
            .insert("address", address);
        let results = self
            .transport
            .get("/api/v5/wallet/pre-transaction/validate-address", &params)
            .await?;
        first_or_not_found(results)
    }

    /// Current and pending nonce for an address.
    pub async fn nonce(&self, chain_index: &str, address: &str) -> Result<NonceResult, SdkError> {
        let mut params = Params::new();
        params
            .insert("chainIndex", chain_index)
            .insert("address", address);
        let results = self
            .transport
            .get("/api/v5/wallet/pre-transaction/nonce", &params)
            .await?;
        first_or_not_found(results)
    }

    /// One page of Sui objects held by an address.
    pub async fn sui_object(&self, req: &SuiObjectRequest) -> Result<SuiObjectResult, SdkError> {
        let mut params = Params::new();
        params
            .insert("chainIndex", &req.chain_index)
            .insert("address", &req.address)
            .insert("tokenAddress", &req.token_address);
        params
            .insert_nonempty("limit", &req.limit)
            .insert_nonempty("cursor", &req.cursor);
        let results = self
            .transport
            .get("/api/v5/wallet/pre-transaction/sui-object", &params)
            .await?;
        first_or_not_found(results)
    }

    /// Signing material for a prospective transaction. The chain family is
    /// resolved from the payload shape; see [`SignInfo`].
    pub async fn sign_info(&self, req: &SignInfoRequest) -> Result<SignInfo, SdkError> {
        let results = self
            .transport
            .post("/api/v5/wallet/pre-transaction/sign-info", req)
            .await?;
        first_or_not_found(results)
    }

    /// Submits a signed transaction for broadcasting.
    pub async fn broadcast_transaction(
        &self,
        req: &BroadcastTransactionRequest,
    ) -> Result<BroadcastTransactionResult, SdkError> {
        let results = self
            .transport
            .post("/api/v5/wallet/pre-transaction/broadcast-transaction", req)
            .await?;
        first_or_not_found(results)
    }

    // ── Post-transaction ─────────────────────────────────────────────────────

    /// Broadcast orders matching the filters. An empty result set is
    /// reported as [`SdkError::ResultsNotFound`].
    pub async fn transaction_orders(
        &self,
        req: &TransactionOrdersRequest,
    ) -> Result<Vec<TransactionOrder>, SdkError> {
        let mut params = Params::new();
        params
            .insert_nonempty("address", &req.address)
            .insert_nonempty("accountId", &req.account_id)
            .insert_nonempty("chainIndex", &req.chain_index)
            .insert_nonempty("txStatus", &req.tx_status)
            .insert_nonempty("orderId", &req.order_id)
            .insert_nonempty("cursor", &req.cursor)
            .insert_nonempty("limit", &req.limit);
        let results: Option<Vec<TransactionOrder>> = self
            .transport
            .get("/api/v5/wallet/post-transaction/orders", &params)
            .await?;
        match results {
            Some(orders) if !orders.is_empty() => Ok(orders),
            _ => Err(SdkError::ResultsNotFound),
        }
    }

    /// One page of transaction history for an address.
    pub async fn transaction_history_by_address(
        &self,
        req: &TransactionHistoryByAddressRequest,
    ) -> Result<TransactionHistoryPage, SdkError> {
        let mut params = Params::new();
        params.insert("address", &req.address);
        params
            .insert_joined("chains", &req.chains)
            .insert_nonempty("tokenAddress", &req.token_address)
            .insert_nonempty("begin", &req.begin)
            .insert_nonempty("end", &req.end)
            .insert_nonempty("cursor", &req.cursor)
            .insert_nonempty("limit", &req.limit);
        if let Some(exclude) = req.exclude_risk_token {
            params.insert("excludeRiskToken", exclude.to_string());
        }
        let results = self
            .transport
            .get(
                "/api/v5/wallet/post-transaction/transactions-by-address",
                &params,
            )
            .await?;
        first_or_not_found(results)
    }

    // ── Webhooks ─────────────────────────────────────────────────────────────

    /// Registers a batch of webhook subscriptions.
    pub async fn subscribe(
        &self,
        req: &[SubscribeRequest],
    ) -> Result<Vec<SubscribeResult>, SdkError> {
        let results = self
            .transport
            .post("/api/v5/wallet/webhook/subscribe", req)
            .await?;
        Ok(list_or_empty(results))
    }

    /// Removes a batch of webhook subscriptions.
    pub async fn unsubscribe(
        &self,
        req: &[UnsubscribeRequest],
    ) -> Result<Vec<UnsubscribeResult>, SdkError> {
        let results = self
            .transport
            .post("/api/v5/wallet/webhook/unsubscribe", req)
            .await?;
        Ok(list_or_empty(results))
    }

    /// Active webhook subscriptions.
    pub async fn subscriptions(&self) -> Result<Vec<Subscription>, SdkError> {
        let results = self
            .transport
            .get("/api/v5/wallet/webhook/subscriptions", &Params::new())
            .await?;
        Ok(list_or_empty(results))
    }
}
