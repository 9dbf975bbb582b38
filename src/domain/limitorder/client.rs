//! Limit order sub-client.
//!
//! The limit order endpoints live under `/dex/aggregator/limit-order/...`
//! without the `/api/v5` prefix.

use crate::domain::first_or_not_found;
use crate::error::SdkError;
use crate::http::{Params, Transport};

use super::wire::{CreateOrderRequest, ListOrdersRequest, OrderDetail};

/// Sub-client for `/dex/aggregator/limit-order/...`.
pub struct LimitOrder<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> LimitOrder<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Submits a signed limit order.
    pub async fn create_order(&self, req: &CreateOrderRequest) -> Result<OrderDetail, SdkError> {
        let results = self
            .transport
            .post("/dex/aggregator/limit-order/save-order", req)
            .await?;
        first_or_not_found(results)
    }

    /// Orders matching the filters. An empty result set is reported as
    /// [`SdkError::ResultsNotFound`].
    pub async fn list_orders(
        &self,
        req: &ListOrdersRequest,
    ) -> Result<Vec<OrderDetail>, SdkError> {
        let mut params = Params::new();
        params.insert("chainId", &req.chain_id);
        params
            .insert_nonempty("page", &req.page)
            .insert_nonempty("limit", &req.limit)
            .insert_nonempty("statuses", &req.statuses)
            .insert_nonempty("takerAsset", &req.taker_asset)
            .insert_nonempty("makerAsset", &req.maker_asset);
        let results: Option<Vec<OrderDetail>> = self
            .transport
            .get("/dex/aggregator/limit-order/all", &params)
            .await?;
        match results {
            Some(orders) if !orders.is_empty() => Ok(orders),
            _ => Err(SdkError::ResultsNotFound),
        }
    }

    /// A single order by hash, or `None` when the order does not exist.
    pub async fn order(
        &self,
        chain_id: &str,
        order_hash: &str,
    ) -> Result<Option<OrderDetail>, SdkError> {
        let mut params = Params::new();
        params
            .insert("chainId", chain_id)
            .insert("orderHash", order_hash);
        let results: Option<Vec<OrderDetail>> = self
            .transport
            .get("/dex/aggregator/limit-order/detail", &params)
            .await?;
        Ok(results.and_then(|v| v.into_iter().next()))
    }

    /// Calldata for cancelling an order on-chain.
    pub async fn cancel_order_calldata(&self, order_hash: &str) -> Result<String, SdkError> {
        let mut params = Params::new();
        params.insert("orderHash", order_hash);
        let calldata: Option<String> = self
            .transport
            .get("/dex/aggregator/limit-order/cancel/calldata", &params)
            .await?;
        calldata.ok_or(SdkError::ResultsNotFound)
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
    fn test_create_order_posts_body() {
        let mock = MockTransport::with_response(
            r#"{"code":"0","msg":"","data":[{"orderHash":"0xhash","status":"1"}]}"#,
        );
        let detail = block_on(LimitOrder::new(&mock).create_order(&CreateOrderRequest {
            order_hash: "0xhash".into(),
            chain_id: "1".into(),
            signature: "0xsig".into(),
            ..Default::default()
        }))
        .unwrap();
        assert_eq!(detail.order_hash, "0xhash");

        let call = mock.last_call();
        assert_eq!(call.method, "POST");
        assert_eq!(call.path, "/dex/aggregator/limit-order/save-order");
        assert!(call.body.contains(r#""orderHash":"0xhash""#));
    }

    #[test]
    fn test_list_orders_empty_is_not_found() {
        let mock = MockTransport::with_response(r#"{"code":"0","msg":"","data":[]}"#);
        let err = block_on(LimitOrder::new(&mock).list_orders(&ListOrdersRequest {
            chain_id: "1".into(),
            ..Default::default()
        }))
        .unwrap_err();
        assert!(matches!(err, SdkError::ResultsNotFound));
    }

    #[test]
    fn test_order_absent_is_none() {
        let mock = MockTransport::with_response(r#"{"code":"0","msg":"","data":[]}"#);
        let order = block_on(LimitOrder::new(&mock).order("1", "0xhash")).unwrap();
        assert!(order.is_none());
        assert_eq!(mock.last_call().query, "chainId=1&orderHash=0xhash");
    }

    #[test]
    fn test_cancel_order_calldata_decodes_bare_string() {
        let mock = MockTransport::with_response(r#"{"code":"0","msg":"","data":"0xdeadbeef"}"#);
        let calldata = block_on(LimitOrder::new(&mock).cancel_order_calldata("0xhash")).unwrap();
        assert_eq!(calldata, "0xdeadbeef");
    }
}
