//! DEX aggregator error-code predicates.

use crate::errcode::is;
use crate::error::SdkError;

/// 80001 CallData exceeds the maximum limit. Try again in 5 minutes.
pub fn is_call_data_exceeds_max_limit(err: &SdkError) -> bool {
    is(err, 80001)
}

/// 80002 Requested token Object count has reached the limit
pub fn is_token_limit_reached(err: &SdkError) -> bool {
    is(err, 80002)
}

/// 80003 Requested native token Object count has reached the limit
pub fn is_native_token_limit_reached(err: &SdkError) -> bool {
    is(err, 80003)
}

/// 80004 Timeout when querying SUI Object
pub fn is_timeout_querying_sui_object(err: &SdkError) -> bool {
    is(err, 80004)
}

/// 82000 Not enough Sui objects under the address for swapping
pub fn is_sui_objects_not_enough(err: &SdkError) -> bool {
    is(err, 82000)
}

/// 82001 Insufficient liquidity
pub fn is_insufficient_liquidity(err: &SdkError) -> bool {
    is(err, 82001)
}

/// 82112 The value difference from this transaction's quote route is higher
/// than the protection threshold (default 90%), adjustable via
/// `priceImpactProtectionPercentage`
pub fn is_value_difference(err: &SdkError) -> bool {
    is(err, 82112)
}

/// 82120 Detected honeypot or high-risk tokens with a 100% buy/sell tax;
/// the transaction was intercepted
pub fn is_transaction_intercepted(err: &SdkError) -> bool {
    is(err, 82120)
}
