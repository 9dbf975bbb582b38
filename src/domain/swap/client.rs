//! DEX aggregator sub-client.

use crate::domain::{first_or_not_found, list_or_empty};
use crate::error::SdkError;
use crate::http::{Params, Transport};

use super::wire::{
    ApproveTransactionRequest, ApproveTransactionResult, ChainInfo, LiquiditySource, QuoteRequest,
    QuoteResult, SwapInstructionsRequest, SwapInstructionsResult, SwapRequest, SwapResult,
    TokenListEntry, TransactionStatusRequest, TransactionStatusResult,
};

/// Sub-client for `/api/v5/dex/aggregator/...`.
pub struct Swap<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> Swap<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Chains the aggregator can swap on, optionally filtered to one chain.
    pub async fn supported_chains(
        &self,
        chain_id: Option<i64>,
    ) -> Result<Vec<ChainInfo>, SdkError> {
        let mut params = Params::new();
        if let Some(chain_id) = chain_id.filter(|id| *id != 0) {
            params.insert("chainId", chain_id.to_string());
        }
        let results = self
            .transport
            .get("/api/v5/dex/aggregator/supported/chain", &params)
            .await?;
        Ok(list_or_empty(results))
    }

    /// Liquidity sources available on a chain.
    pub async fn liquidity(&self, chain_id: i64) -> Result<Vec<LiquiditySource>, SdkError> {
        let mut params = Params::new();
        params.insert("chainId", chain_id.to_string());
        let results = self
            .transport
            .get("/api/v5/dex/aggregator/get-liquidity", &params)
            .await?;
        Ok(list_or_empty(results))
    }

    /// Tokens the aggregator lists for a chain. Tokens outside this list can
    /// still be quoted and swapped.
    pub async fn supported_tokens(&self, chain_id: i64) -> Result<Vec<TokenListEntry>, SdkError> {
        let mut params = Params::new();
        params.insert("chainId", chain_id.to_string());
        let results = self
            .transport
            .get("/api/v5/dex/aggregator/all-tokens", &params)
            .await?;
        Ok(list_or_empty(results))
    }

    /// Best routing for a prospective swap.
    pub async fn quote(&self, req: &QuoteRequest) -> Result<QuoteResult, SdkError> {
        let mut params = Params::new();
        params
            .insert("chainId", &req.chain_id)
            .insert("amount", &req.amount)
            .insert("fromTokenAddress", &req.from_token_address)
            .insert("toTokenAddress", &req.to_token_address)
            .insert("dexIds", req.dex_ids.join(","))
            .insert(
                "priceImpactProtectionPercentage",
                &req.price_impact_protection_percentage,
            )
            .insert("feePercent", &req.fee_percent);
        let results = self
            .transport
            .get("/api/v5/dex/aggregator/quote", &params)
            .await?;
        first_or_not_found(results)
    }

    /// Routing plus a ready-to-sign transaction calling the DEX router.
    ///
    /// Wrapped pairs (e.g. ETH/WETH) are not supported on EVM chains, and on
    /// Solana the commission address must hold some SOL beforehand.
    pub async fn swap(&self, req: &SwapRequest) -> Result<SwapResult, SdkError> {
        let mut params = Params::new();
        params
            .insert("chainId", &req.chain_id)
            .insert("amount", &req.amount)
            .insert("fromTokenAddress", &req.from_token_address)
            .insert("toTokenAddress", &req.to_token_address)
            .insert("slippage", &req.slippage)
            .insert("userWalletAddress", &req.user_wallet_address);
        params
            .insert_nonempty("referrerAddress", &req.referrer_address)
            .insert_nonempty("swapReceiverAddress", &req.swap_receiver_address)
            .insert_nonempty("feePercent", &req.fee_percent)
            .insert_nonempty("gaslimit", &req.gas_limit)
            .insert_nonempty("gasLevel", &req.gas_level)
            .insert_joined("dexIds", &req.dex_ids)
            .insert_nonempty(
                "priceImpactProtectionPercentage",
                &req.price_impact_protection_percentage,
            )
            .insert_nonempty("callDataMemo", &req.call_data_memo)
            .insert_nonempty("toTokenReferrerAddress", &req.to_token_referrer_address)
            .insert_nonempty("computeUnitPrice", &req.compute_unit_price)
            .insert_nonempty("computeUnitLimit", &req.compute_unit_limit)
            .insert_nonempty(
                "fromTokenReferrerWalletAddress",
                &req.from_token_referrer_wallet_address,
            )
            .insert_nonempty(
                "toTokenReferrerWalletAddress",
                &req.to_token_referrer_wallet_address,
            );
        if req.auto_slippage {
            params.insert("autoSlippage", "true");
        }
        params.insert_nonempty("maxAutoSlippage", &req.max_auto_slippage);

        let results = self
            .transport
            .get("/api/v5/dex/aggregator/swap", &params)
            .await?;
        first_or_not_found(results)
    }

    /// Swap instructions for building a Solana transaction manually.
    pub async fn swap_instructions(
        &self,
        req: &SwapInstructionsRequest,
    ) -> Result<SwapInstructionsResult, SdkError> {
        let mut params = Params::new();
        params
            .insert("chainId", &req.chain_id)
            .insert("amount", &req.amount)
            .insert("fromTokenAddress", &req.from_token_address)
            .insert("toTokenAddress", &req.to_token_address)
            .insert("slippage", &req.slippage)
            .insert("userWalletAddress", &req.user_wallet_address);
        params
            .insert_nonempty("swapReceiverAddress", &req.swap_receiver_address)
            .insert_nonempty("feePercent", &req.fee_percent)
            .insert_nonempty(
                "fromTokenReferrerWalletAddress",
                &req.from_token_referrer_wallet_address,
            )
            .insert_nonempty(
                "toTokenReferrerWalletAddress",
                &req.to_token_referrer_wallet_address,
            )
            .insert_joined("dexIds", &req.dex_ids)
            .insert_nonempty(
                "priceImpactProtectionPercentage",
                &req.price_impact_protection_percentage,
            )
            .insert_nonempty("computeUnitPrice", &req.compute_unit_price)
            .insert_nonempty("computeUnitLimit", &req.compute_unit_limit);

        let result = self
            .transport
            .get("/api/v5/dex/aggregator/swap-instruction", &params)
            .await?;
        result.ok_or(SdkError::ResultsNotFound)
    }

    /// ERC-20 approve calldata granting the DEX router an allowance.
    pub async fn approve_transaction(
        &self,
        req: &ApproveTransactionRequest,
    ) -> Result<ApproveTransactionResult, SdkError> {
        let mut params = Params::new();
        params
            .insert("chainId", &req.chain_id)
            .insert("tokenContractAddress", &req.token_contract_address)
            .insert("approveAmount", &req.approve_amount);
        let results = self
            .transport
            .get("/api/v5/dex/aggregator/approve-transaction", &params)
            .await?;
        first_or_not_found(results)
    }

    /// Final status of a single-chain swap by transaction hash.
    pub async fn transaction_status(
        &self,
        req: &TransactionStatusRequest,
    ) -> Result<TransactionStatusResult, SdkError> {
        let mut params = Params::new();
        params
            .insert("chainId", &req.chain_id)
            .insert("txHash", &req.tx_hash);
        if req.is_from_my_project {
            params.insert("isFromMyProject", "true");
        }
        let result = self
            .transport
            .get("/api/v5/dex/aggregator/history", &params)
            .await?;
        result.ok_or(SdkError::ResultsNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::MockTransport;

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    #[test]
    fn test_quote_unwraps_singular_array() {
        let mock = MockTransport::with_response(
            r#"{"code":"0","msg":"","data":[{"chainId":"1","fromTokenAmount":"100","toTokenAmount":"300"}]}"#,
        );
        let quote = block_on(Swap::new(&mock).quote(&QuoteRequest {
            chain_id: "1".into(),
            amount: "100".into(),
            from_token_address: "0xeeee".into(),
            to_token_address: "0xa0b8".into(),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(quote.to_token_amount, "300");

        let call = mock.last_call();
        assert_eq!(call.method, "GET");
        assert_eq!(call.path, "/api/v5/dex/aggregator/quote");
        assert_eq!(
            call.query,
            "amount=100&chainId=1&dexIds=&feePercent=&fromTokenAddress=0xeeee&priceImpactProtectionPercentage=&toTokenAddress=0xa0b8"
        );
    }

    #[test]
    fn test_quote_empty_array_is_not_found() {
        let mock = MockTransport::with_response(r#"{"code":"0","msg":"","data":[]}"#);
        let err = block_on(Swap::new(&mock).quote(&QuoteRequest::default())).unwrap_err();
        assert!(matches!(err, SdkError::ResultsNotFound));
    }

    #[test]
    fn test_swap_omits_unset_optionals() {
        let mock = MockTransport::with_response(r#"{"code":"0","msg":"","data":[{}]}"#);
        block_on(Swap::new(&mock).swap(&SwapRequest {
            chain_id: "1".into(),
            amount: "100".into(),
            from_token_address: "0xeeee".into(),
            to_token_address: "0xa0b8".into(),
            slippage: "0.05".into(),
            user_wallet_address: "0x3f6a".into(),
            ..Default::default()
        }))
        .unwrap();

        let query = mock.last_call().query;
        assert!(!query.contains("feePercent"));
        assert!(!query.contains("autoSlippage"));
        assert!(!query.contains("dexIds"));
        assert!(query.contains("slippage=0.05"));
    }

    #[test]
    fn test_swap_sends_auto_slippage_and_dex_ids() {
        let mock = MockTransport::with_response(r#"{"code":"0","msg":"","data":[{}]}"#);
        block_on(Swap::new(&mock).swap(&SwapRequest {
            chain_id: "1".into(),
            amount: "100".into(),
            from_token_address: "0xeeee".into(),
            to_token_address: "0xa0b8".into(),
            slippage: "0.05".into(),
            user_wallet_address: "0x3f6a".into(),
            dex_ids: vec!["1".into(), "50".into()],
            auto_slippage: true,
            max_auto_slippage: "0.1".into(),
            ..Default::default()
        }))
        .unwrap();

        let query = mock.last_call().query;
        assert!(query.contains("autoSlippage=true"));
        assert!(query.contains("dexIds=1%2C50"));
        assert!(query.contains("maxAutoSlippage=0.1"));
    }

    #[test]
    fn test_supported_chains_filter() {
        let mock = MockTransport::with_response(
            r#"{"code":"0","msg":"","data":[{"chainId":1,"chainName":"Ethereum","dexTokenApproveAddress":"0x40aa"}]}"#,
        );
        let chains = block_on(Swap::new(&mock).supported_chains(Some(1))).unwrap();
        assert_eq!(chains.len(), 1);
        assert_eq!(mock.last_call().query, "chainId=1");

        let chains = block_on(Swap::new(&mock).supported_chains(None)).unwrap();
        assert_eq!(chains[0].chain_name, "Ethereum");
        assert_eq!(mock.last_call().query, "");
    }

    #[test]
    fn test_transaction_status_flag_only_when_true() {
        let mock = MockTransport::with_response(
            r#"{"code":"0","msg":"","data":{"chainId":"1","hash":"0xabc","status":"success"}}"#,
        );
        let status = block_on(Swap::new(&mock).transaction_status(&TransactionStatusRequest {
            chain_id: "1".into(),
            tx_hash: "0xabc".into(),
            is_from_my_project: false,
        }))
        .unwrap();
        assert_eq!(status.status, "success");
        assert!(!mock.last_call().query.contains("isFromMyProject"));

        block_on(Swap::new(&mock).transaction_status(&TransactionStatusRequest {
            chain_id: "1".into(),
            tx_hash: "0xabc".into(),
            is_from_my_project: true,
        }))
        .unwrap();
        assert!(mock.last_call().query.contains("isFromMyProject=true"));
    }
}
