//! General API error-code predicates.
//!
//! The envelope's numeric codes are the API's error taxonomy. Callers test
//! membership with [`is`] (or the named predicates below) instead of
//! matching on the error representation directly; each domain module adds
//! its own subsystem table in its `errors` submodule.

use crate::error::SdkError;

/// Returns true if `err` is an API error with the given envelope code.
pub fn is(err: &SdkError, code: i64) -> bool {
    err.api_code() == Some(code)
}

/// 50001 Service temporarily unavailable, try again
pub fn is_service_unavailable(err: &SdkError) -> bool {
    is(err, 50001)
}

/// 50011 Rate limit reached. Please refer to API documentation and throttle
/// requests accordingly
pub fn is_rate_limit_reached(err: &SdkError) -> bool {
    is(err, 50011)
}

/// 50014 Parameter {param0} cannot be empty
pub fn is_parameter_cannot_be_empty(err: &SdkError) -> bool {
    is(err, 50014)
}

/// 50026 System error. Try again later
pub fn is_system_error(err: &SdkError) -> bool {
    is(err, 50026)
}

/// 50113 Invalid signature
pub fn is_invalid_signature(err: &SdkError) -> bool {
    is(err, 50113)
}

/// 51000 Parameter {param0} error
pub fn is_parameter_error(err: &SdkError) -> bool {
    is(err, 51000)
}

/// 80000 Repeated request
pub fn is_repeated_request(err: &SdkError) -> bool {
    is(err, 80000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_is_matches_code() {
        let err: SdkError = ApiError::new(50011, "Rate limit reached").into();
        assert!(is(&err, 50011));
        assert!(is_rate_limit_reached(&err));
        assert!(!is_service_unavailable(&err));
        assert!(!is_invalid_signature(&err));
    }

    #[test]
    fn test_is_false_for_non_api_errors() {
        assert!(!is(&SdkError::ResultsNotFound, 50011));
    }
}
