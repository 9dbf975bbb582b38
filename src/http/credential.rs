//! API credentials and request signing.

use std::fmt;

use base64::prelude::*;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// OKX OS API credentials.
///
/// Holds the API key, the HMAC secret, and the passphrase chosen at key
/// creation. The secret and passphrase are redacted from `Debug` output.
#[derive(Clone)]
pub struct Credential {
    api_key: String,
    secret_key: Box<[u8]>,
    passphrase: String,
}

impl Credential {
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
        passphrase: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into().into_bytes().into_boxed_slice(),
            passphrase: passphrase.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn passphrase(&self) -> &str {
        &self.passphrase
    }

    /// The current UTC time formatted as an ISO-8601 timestamp with
    /// millisecond precision, e.g. `2024-03-01T09:30:00.123Z`.
    ///
    /// This exact shape is part of the signing contract: the server rejects
    /// signatures whose timestamp deviates from it.
    pub fn timestamp() -> String {
        Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
    }

    /// Signs one request.
    ///
    /// The signing buffer is the concatenation of timestamp, upper-case
    /// method, the request path including any encoded query string, and the
    /// raw body bytes (empty for GET). The signature is the standard-base64
    /// HMAC-SHA256 of that buffer under the secret key.
    pub fn sign(&self, timestamp: &str, method: &str, request_path: &str, body: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.secret_key)
            .expect("HMAC accepts keys of any length");
        mac.update(timestamp.as_bytes());
        mac.update(method.as_bytes());
        mac.update(request_path.as_bytes());
        mac.update(body);
        BASE64_STANDARD.encode(mac.finalize().into_bytes())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(stringify!(Credential))
            .field("api_key", &self.api_key)
            .field("secret_key", &"<redacted>")
            .field("passphrase", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_known_vector() {
        let credential = Credential::new("key", "S", "phrase");
        let signature = credential.sign(
            "2021-01-01T00:00:00.000Z",
            "GET",
            "/api/v5/dex/aggregator/quote?chainId=1&amount=100",
            b"",
        );
        assert_eq!(signature, "b3AB6ZspiDfbOKk/YpZcQzpeTyvHKxNuJ06cxFTFasA=");
    }

    #[test]
    fn test_sign_get_with_sorted_query() {
        let credential = Credential::new("test-api-key", "test-secret-key", "test-passphrase");
        let signature = credential.sign(
            "2024-03-01T09:30:00.123Z",
            "GET",
            "/api/v5/dex/aggregator/supported/chain?chainId=1",
            b"",
        );
        assert_eq!(signature, "C66kOTk0P3Q8v24gGz7e48k9kbJRchdyVpjrkaLvBkk=");
    }

    #[test]
    fn test_sign_post_includes_body() {
        let credential = Credential::new("test-api-key", "test-secret-key", "test-passphrase");
        let signature = credential.sign(
            "2024-03-01T09:30:00.123Z",
            "POST",
            "/api/v5/wallet/asset/total-value-by-address",
            br#"{"addresses":[]}"#,
        );
        assert_eq!(signature, "Okq7GAsndNeW9RguXv6uFNxuqrli7q2iAyWgc5v1v9s=");
    }

    #[test]
    fn test_timestamp_format() {
        let ts = Credential::timestamp();
        // 2024-03-01T09:30:00.123Z
        assert_eq!(ts.len(), 24);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[10..11], "T");
        assert_eq!(&ts[19..20], ".");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let credential = Credential::new("visible", "hidden-secret", "hidden-phrase");
        let out = format!("{credential:?}");
        assert!(out.contains("visible"));
        assert!(!out.contains("hidden-secret"));
        assert!(!out.contains("hidden-phrase"));
    }
}
