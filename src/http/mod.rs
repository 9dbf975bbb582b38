//! Signed HTTP transport layer.
//!
//! [`Transport`] is the only capability domain modules depend on; the
//! concrete [`OkxHttp`] implements it by signing, dispatching and decoding
//! the uniform response envelope. Tests substitute a mock implementation.

pub mod client;
pub mod credential;
pub mod envelope;

pub use client::OkxHttp;
pub use credential::Credential;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::SdkError;

/// The `GET`/`POST` capability surface consumed by domain modules.
///
/// Both verbs decode the response envelope: a non-zero envelope code maps to
/// [`SdkError::Api`], a zero code with absent/null `data` resolves to
/// `Ok(None)` (void operations), and present `data` is decoded into `T`.
pub trait Transport {
    /// Sends a signed GET request with the given query parameters.
    fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
    ) -> impl std::future::Future<Output = Result<Option<T>, SdkError>>;

    /// Sends a signed POST request with a JSON body.
    fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> impl std::future::Future<Output = Result<Option<T>, SdkError>>;
}

// ─── Params ──────────────────────────────────────────────────────────────────

/// Query parameters with deterministic encoding.
///
/// The signature is computed over the exact request path + query that is
/// sent, so the encoding must produce the same bytes for equal parameter
/// sets: [`Params::encode`] sorts keys lexicographically before escaping.
#[derive(Debug, Clone, Default)]
pub struct Params(Vec<(&'static str, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        self.0.push((key, value.into()));
        self
    }

    /// Inserts the pair only when the value is non-empty, mirroring the
    /// wire convention that optional parameters are omitted entirely.
    pub fn insert_nonempty(&mut self, key: &'static str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.insert(key, value);
        }
        self
    }

    /// Inserts a comma-joined list parameter when the list is non-empty.
    pub fn insert_joined(&mut self, key: &'static str, values: &[String]) -> &mut Self {
        if !values.is_empty() {
            self.insert(key, values.join(","));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// URL-encodes the parameters as `k=v&k=v`, keys sorted
    /// lexicographically.
    pub fn encode(&self) -> String {
        let mut pairs: Vec<&(&str, String)> = self.0.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(b.0));
        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

// ─── Test support ────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod testing {
    //! A scripted [`Transport`] that feeds canned envelope bodies through
    //! the real envelope codec and records every call for assertions.

    use std::cell::RefCell;

    use serde::de::DeserializeOwned;
    use serde::Serialize;

    use super::{envelope, Params, Transport};
    use crate::error::SdkError;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) struct RecordedCall {
        pub method: &'static str,
        pub path: String,
        pub query: String,
        pub body: String,
    }

    #[derive(Default)]
    pub(crate) struct MockTransport {
        responses: RefCell<Vec<String>>,
        pub calls: RefCell<Vec<RecordedCall>>,
    }

    impl MockTransport {
        /// A transport that answers every call with the same envelope body.
        pub fn with_response(body: &str) -> Self {
            let mock = Self::default();
            mock.responses.borrow_mut().push(body.to_string());
            mock
        }

        fn next_response(&self) -> String {
            let mut responses = self.responses.borrow_mut();
            if responses.len() > 1 {
                responses.remove(0)
            } else {
                responses[0].clone()
            }
        }

        pub fn last_call(&self) -> RecordedCall {
            self.calls.borrow().last().expect("no calls recorded").clone()
        }
    }

    impl Transport for MockTransport {
        async fn get<T: DeserializeOwned>(
            &self,
            path: &str,
            params: &Params,
        ) -> Result<Option<T>, SdkError> {
            self.calls.borrow_mut().push(RecordedCall {
                method: "GET",
                path: path.to_string(),
                query: params.encode(),
                body: String::new(),
            });
            envelope::decode(self.next_response().as_bytes())
        }

        async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
            &self,
            path: &str,
            body: &B,
        ) -> Result<Option<T>, SdkError> {
            let body = serde_json::to_string(body).map_err(SdkError::Encode)?;
            self.calls.borrow_mut().push(RecordedCall {
                method: "POST",
                path: path.to_string(),
                query: String::new(),
                body,
            });
            envelope::decode(self.next_response().as_bytes())
        }
    }
}
