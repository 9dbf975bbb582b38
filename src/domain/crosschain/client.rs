//! Cross-chain bridging sub-client.

use crate::domain::{first_or_not_found, list_or_empty};
use crate::error::SdkError;
use crate::http::{Params, Transport};

use super::wire::{
    BridgeInfo, ChainInfo, CrossChainQuoteRequest, CrossChainQuoteResult,
    CrossChainTransactionStatus, TokenInfo, TokenPair, TransactionStatusRequest,
};

/// Sub-client for `/api/v5/dex/cross-chain/...`.
pub struct CrossChain<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> CrossChain<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Chains supported for bridging, optionally filtered to one chain.
    pub async fn supported_chains(
        &self,
        chain_id: Option<&str>,
    ) -> Result<Vec<ChainInfo>, SdkError> {
        let mut params = Params::new();
        params.insert_nonempty("chainId", chain_id.unwrap_or_default());
        let results = self
            .transport
            .get("/api/v5/dex/cross-chain/supported/chain", &params)
            .await?;
        Ok(list_or_empty(results))
    }

    /// Bridges available for routing, optionally filtered to one chain.
    pub async fn supported_bridges(
        &self,
        chain_id: Option<&str>,
    ) -> Result<Vec<BridgeInfo>, SdkError> {
        let mut params = Params::new();
        params.insert_nonempty("chainId", chain_id.unwrap_or_default());
        let results = self
            .transport
            .get("/api/v5/dex/cross-chain/supported/bridges", &params)
            .await?;
        Ok(list_or_empty(results))
    }

    /// Tokens tradable directly across the bridge.
    pub async fn supported_tokens(
        &self,
        chain_id: Option<&str>,
    ) -> Result<Vec<TokenInfo>, SdkError> {
        let mut params = Params::new();
        params.insert_nonempty("chainId", chain_id.unwrap_or_default());
        let results = self
            .transport
            .get("/api/v5/dex/cross-chain/supported/tokens", &params)
            .await?;
        Ok(list_or_empty(results))
    }

    /// Token pairs bridgeable from the given source chain.
    pub async fn bridge_token_pairs(
        &self,
        from_chain_id: &str,
    ) -> Result<Vec<TokenPair>, SdkError> {
        let mut params = Params::new();
        params.insert("fromChainId", from_chain_id);
        let results = self
            .transport
            .get(
                "/api/v5/dex/cross-chain/supported/bridge-tokens-pairs",
                &params,
            )
            .await?;
        Ok(list_or_empty(results))
    }

    /// Candidate routes for a cross-chain swap.
    pub async fn quote(
        &self,
        req: &CrossChainQuoteRequest,
    ) -> Result<CrossChainQuoteResult, SdkError> {
        let mut params = Params::new();
        params
            .insert("fromChainId", &req.from_chain_id)
            .insert("toChainId", &req.to_chain_id)
            .insert("fromTokenAddress", &req.from_token_address)
            .insert("toTokenAddress", &req.to_token_address)
            .insert("amount", &req.amount)
            .insert("slippage", &req.slippage);
        if req.sort != 0 {
            params.insert("sort", req.sort.to_string());
        }
        params
            .insert_nonempty("feePercent", &req.fee_percent)
            .insert_joined("allowBridge", &req.allow_bridge)
            .insert_joined("denyBridge", &req.deny_bridge)
            .insert_nonempty(
                "priceImpactProtectionPercentage",
                &req.price_impact_protection_percentage,
            );

        let results = self
            .transport
            .get("/api/v5/dex/cross-chain/quote", &params)
            .await?;
        first_or_not_found(results)
    }

    /// Final status of a cross-chain swap by source-chain transaction hash.
    pub async fn transaction_status(
        &self,
        req: &TransactionStatusRequest,
    ) -> Result<CrossChainTransactionStatus, SdkError> {
        let mut params = Params::new();
        params.insert("hash", &req.hash);
        params.insert_nonempty("chainId", &req.chain_id);
        let results = self
            .transport
            .get("/api/v5/dex/cross-chain/status", &params)
            .await?;
        first_or_not_found(results)
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
    fn test_quote_omits_zero_sort_and_joins_bridges() {
        let mock = MockTransport::with_response(
            r#"{"code":"0","msg":"","data":[{"fromChainId":"1","toChainId":"137"}]}"#,
        );
        let result = block_on(CrossChain::new(&mock).quote(&CrossChainQuoteRequest {
            from_chain_id: "1".into(),
            to_chain_id: "137".into(),
            from_token_address: "0xa0b8".into(),
            to_token_address: "0x2791".into(),
            amount: "1000000".into(),
            slippage: "0.01".into(),
            allow_bridge: vec!["cBridge".into(), "Stargate".into()],
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(result.to_chain_id, "137");

        let query = mock.last_call().query;
        assert!(!query.contains("sort"));
        assert!(query.contains("allowBridge=cBridge%2CStargate"));
        assert!(!query.contains("denyBridge"));
    }

    #[test]
    fn test_quote_sends_nonzero_sort() {
        let mock = MockTransport::with_response(r#"{"code":"0","msg":"","data":[{}]}"#);
        block_on(CrossChain::new(&mock).quote(&CrossChainQuoteRequest {
            from_chain_id: "1".into(),
            to_chain_id: "137".into(),
            amount: "1".into(),
            slippage: "0.01".into(),
            sort: 1,
            ..Default::default()
        }))
        .unwrap();
        assert!(mock.last_call().query.contains("sort=1"));
    }

    #[test]
    fn test_transaction_status_requires_hash_only() {
        let mock = MockTransport::with_response(
            r#"{"code":"0","msg":"","data":[{"fromTxHash":"0xabc","toTxHash":"0xdef"}]}"#,
        );
        let status =
            block_on(CrossChain::new(&mock).transaction_status(&TransactionStatusRequest {
                hash: "0xabc".into(),
                chain_id: String::new(),
            }))
            .unwrap();
        assert_eq!(status.to_tx_hash, "0xdef");
        assert_eq!(mock.last_call().query, "hash=0xabc");
    }

    #[test]
    fn test_supported_lists_default_to_empty() {
        let mock = MockTransport::with_response(r#"{"code":"0","msg":"","data":null}"#);
        let bridges = block_on(CrossChain::new(&mock).supported_bridges(None)).unwrap();
        assert!(bridges.is_empty());
    }
}
