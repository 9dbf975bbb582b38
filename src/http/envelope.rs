//! Response envelope codec.
//!
//! Every endpoint wraps its payload in `{"code", "msg", "data"}`. The code
//! arrives as a string on most endpoints and as a number on a few, so the
//! codec accepts both.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::error::{ApiError, SdkError};

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(deserialize_with = "code_from_int_or_string")]
    code: i64,
    #[serde(default, alias = "message")]
    msg: String,
    #[serde(default)]
    data: Option<serde_json::Value>,
}

/// Decodes a raw response body.
///
/// A non-zero code becomes [`SdkError::Api`] and `data` is not inspected.
/// A zero code with absent or null `data` is a void success (`Ok(None)`);
/// otherwise `data` is decoded into `T`.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<Option<T>, SdkError> {
    let envelope: Envelope = serde_json::from_slice(body).map_err(SdkError::Decode)?;
    if envelope.code != 0 {
        return Err(ApiError::new(envelope.code, envelope.msg).into());
    }
    match envelope.data {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(data) => serde_json::from_value(data).map(Some).map_err(SdkError::Decode),
    }
}

fn code_from_int_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Int(i64),
        Str(String),
    }

    match Code::deserialize(deserializer)? {
        Code::Int(n) => Ok(n),
        Code::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_payload() {
        let body = br#"{"code":"0","msg":"","data":[{"chainId":"1"}]}"#;
        let data: Option<Vec<serde_json::Value>> = decode(body).unwrap();
        assert_eq!(data.unwrap().len(), 1);
    }

    #[test]
    fn test_decode_accepts_numeric_code() {
        let body = br#"{"code":0,"msg":"success","data":["x"]}"#;
        let data: Option<Vec<String>> = decode(body).unwrap();
        assert_eq!(data, Some(vec!["x".to_string()]));
    }

    #[test]
    fn test_decode_void_success() {
        let body = br#"{"code":"0","msg":""}"#;
        let data: Option<Vec<String>> = decode(body).unwrap();
        assert!(data.is_none());

        let body = br#"{"code":"0","msg":"","data":null}"#;
        let data: Option<Vec<String>> = decode(body).unwrap();
        assert!(data.is_none());
    }

    #[test]
    fn test_decode_error_code() {
        let body = br#"{"code":"50011","msg":"Rate limit reached","data":[]}"#;
        let err = decode::<Vec<String>>(body).unwrap_err();
        match err {
            SdkError::Api(e) => {
                assert_eq!(e.code, 50011);
                assert_eq!(e.message, "Rate limit reached");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_message_alias() {
        let body = br#"{"code":"81452","message":"Insufficient balance"}"#;
        let err = decode::<Vec<String>>(body).unwrap_err();
        assert_eq!(err.api_code(), Some(81452));
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode::<Vec<String>>(b"<html>bad gateway</html>").unwrap_err();
        assert!(matches!(err, SdkError::Decode(_)));
    }

    #[test]
    fn test_decode_shape_mismatch() {
        let body = br#"{"code":"0","msg":"","data":{"not":"an array"}}"#;
        let err = decode::<Vec<String>>(body).unwrap_err();
        assert!(matches!(err, SdkError::Decode(_)));
    }
}
