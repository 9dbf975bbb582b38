//! The high-level `OkxClient` and its builder.

use crate::error::SdkError;
use crate::http::{Credential, OkxHttp};
use crate::network::DEFAULT_API_URL;

pub use crate::domain::crosschain::client::CrossChain;
pub use crate::domain::limitorder::client::LimitOrder;
pub use crate::domain::swap::client::Swap;
pub use crate::domain::wallet::client::Wallet;

/// The primary entry point.
///
/// Wraps one signed transport and exposes the domain sub-clients. Cheap to
/// clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct OkxClient {
    http: OkxHttp,
}

impl OkxClient {
    /// Starts building a client from the three credential parts.
    pub fn builder(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> OkxClientBuilder {
        OkxClientBuilder {
            credential: Credential::new(api_key, secret_key, passphrase),
            base_url: None,
            http_client: None,
            headers: Vec::new(),
        }
    }

    /// DEX aggregator swaps and quotes.
    pub fn swap(&self) -> Swap<'_, OkxHttp> {
        Swap::new(&self.http)
    }

    /// Cross-chain bridging.
    pub fn cross_chain(&self) -> CrossChain<'_, OkxHttp> {
        CrossChain::new(&self.http)
    }

    /// DEX limit orders.
    pub fn limit_order(&self) -> LimitOrder<'_, OkxHttp> {
        LimitOrder::new(&self.http)
    }

    /// Wallet services: accounts, balances, prices, transactions, webhooks.
    pub fn wallet(&self) -> Wallet<'_, OkxHttp> {
        Wallet::new(&self.http)
    }

    /// The underlying transport, for callers that need raw access.
    pub fn http(&self) -> &OkxHttp {
        &self.http
    }
}

/// Builder for [`OkxClient`].
#[derive(Debug)]
pub struct OkxClientBuilder {
    credential: Credential,
    base_url: Option<String>,
    http_client: Option<reqwest::Client>,
    headers: Vec<(String, String)>,
}

impl OkxClientBuilder {
    /// Overrides the API base URL (defaults to the production endpoint).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Supplies a preconfigured `reqwest` client (proxies, pools, UA).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Adds a header to every request. Headers are applied in insertion
    /// order after the auth headers, so later values win on duplicates.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attaches an `OK-ACCESS-PROJECT` header identifying the project.
    pub fn project_id(self, project_id: impl Into<String>) -> Self {
        self.header("OK-ACCESS-PROJECT", project_id)
    }

    pub fn build(self) -> Result<OkxClient, SdkError> {
        let client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder().build()?,
        };
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Ok(OkxClient {
            http: OkxHttp::new(base_url, client, self.credential, self.headers),
        })
    }
}
