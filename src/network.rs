//! Endpoint URL constants for the OKX OS SDK.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "https://www.okx.com";
