//! The concrete signed HTTP transport.

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{envelope, Credential, Params, Transport};
use crate::error::SdkError;

/// Signed HTTP transport over `reqwest`.
///
/// Assembles the request path (query keys sorted), signs the exact bytes
/// that go on the wire, attaches the auth headers, and decodes the response
/// envelope. Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct OkxHttp {
    base_url: String,
    client: reqwest::Client,
    credential: Credential,
    headers: Vec<(String, String)>,
}

impl OkxHttp {
    /// `headers` are extra header pairs appended after the auth headers, so
    /// a duplicate name overrides the earlier value.
    pub fn new(
        base_url: impl Into<String>,
        client: reqwest::Client,
        credential: Credential,
        headers: Vec<(String, String)>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client,
            credential,
            headers,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Option<&Params>,
        body: Vec<u8>,
    ) -> Result<Option<T>, SdkError> {
        let mut request_path = path.to_string();
        if let Some(params) = params {
            if !params.is_empty() {
                request_path.push('?');
                request_path.push_str(&params.encode());
            }
        }

        let timestamp = Credential::timestamp();
        let signature = self
            .credential
            .sign(&timestamp, method.as_str(), &request_path, &body);

        tracing::debug!(method = %method, path = %request_path, "sending request");

        let mut request = self
            .client
            .request(method, format!("{}{}", self.base_url, request_path))
            .header("OK-ACCESS-KEY", self.credential.api_key())
            .header("OK-ACCESS-PASSPHRASE", self.credential.passphrase())
            .header("OK-ACCESS-TIMESTAMP", &timestamp)
            .header("OK-ACCESS-SIGN", &signature)
            .header(CONTENT_TYPE, "application/json");
        for (name, value) in &self.headers {
            request = request.header(name, value);
        }
        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!(status = %status, len = bytes.len(), "received response");

        // Errors are reported through the envelope code, not the HTTP
        // status, so the body is decoded regardless of status.
        envelope::decode(&bytes)
    }
}

impl Transport for OkxHttp {
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
    ) -> Result<Option<T>, SdkError> {
        self.request(Method::GET, path, Some(params), Vec::new())
            .await
    }

    async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, SdkError> {
        let body = serde_json::to_vec(body).map_err(SdkError::Encode)?;
        self.request(Method::POST, path, None, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let http = OkxHttp::new(
            "https://www.okx.com/",
            reqwest::Client::new(),
            Credential::new("k", "s", "p"),
            Vec::new(),
        );
        assert_eq!(http.base_url(), "https://www.okx.com");
    }
}
