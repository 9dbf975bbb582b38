//! Domain modules — vertical slices over the signed transport.
//!
//! Each slice owns its sub-client (`client.rs`), wire types (`wire.rs`) and,
//! where the API defines subsystem error codes, an `errors` predicate module.

pub mod crosschain;
pub mod limitorder;
pub mod swap;
pub mod wallet;

use crate::error::SdkError;

/// Unwraps a singular endpoint's one-element `data` array.
///
/// An empty array means "no row" and maps to [`SdkError::ResultsNotFound`].
pub(crate) fn first_or_not_found<T>(results: Option<Vec<T>>) -> Result<T, SdkError> {
    results
        .and_then(|v| v.into_iter().next())
        .ok_or(SdkError::ResultsNotFound)
}

/// Unwraps a list endpoint's `data` array, treating absent data as empty.
pub(crate) fn list_or_empty<T>(results: Option<Vec<T>>) -> Vec<T> {
    results.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_or_not_found() {
        assert_eq!(first_or_not_found(Some(vec![7])).unwrap(), 7);
        assert!(matches!(
            first_or_not_found::<i32>(Some(vec![])),
            Err(SdkError::ResultsNotFound)
        ));
        assert!(matches!(
            first_or_not_found::<i32>(None),
            Err(SdkError::ResultsNotFound)
        ));
    }

    #[test]
    fn test_list_or_empty() {
        assert_eq!(list_or_empty(Some(vec![1, 2])), vec![1, 2]);
        assert!(list_or_empty::<i32>(None).is_empty());
    }
}
