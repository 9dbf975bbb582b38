//! Cross-chain error-code predicates.

use crate::errcode::is;
use crate::error::SdkError;

/// 82000 Insufficient liquidity
pub fn is_insufficient_liquidity(err: &SdkError) -> bool {
    is(err, 82000)
}

/// 82001 The commission service is not available during the upgrade
pub fn is_commission_service_not_available(err: &SdkError) -> bool {
    is(err, 82001)
}

/// 82102 Minimum amount is {0}
pub fn is_minimum_amount(err: &SdkError) -> bool {
    is(err, 82102)
}

/// 82103 Maximum amount is {0}
pub fn is_maximum_amount(err: &SdkError) -> bool {
    is(err, 82103)
}

/// 82104 This token is not supported
pub fn is_token_not_supported(err: &SdkError) -> bool {
    is(err, 82104)
}

/// 82105 This chain is not supported
pub fn is_chain_not_supported(err: &SdkError) -> bool {
    is(err, 82105)
}

/// 82112 The value difference from this transaction's quote route is higher
/// than the protection threshold, which may cause asset loss
pub fn is_value_difference(err: &SdkError) -> bool {
    is(err, 82112)
}

/// 82114 The slippage too low, suggest {0}
pub fn is_slippage_too_low(err: &SdkError) -> bool {
    is(err, 82114)
}

/// 82115 The chain has not token pairs
pub fn is_chain_has_no_token_pairs(err: &SdkError) -> bool {
    is(err, 82115)
}

/// 82116 No suitable cross-chain bridge found
pub fn is_bridge_not_found(err: &SdkError) -> bool {
    is(err, 82116)
}
