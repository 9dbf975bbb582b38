//! Wallet error-code predicates.

use crate::errcode::is;
use crate::error::SdkError;

/// 81104 Blockchain not supported
pub fn is_blockchain_not_supported(err: &SdkError) -> bool {
    is(err, 81104)
}

/// 81105 Wallet verification error
pub fn is_wallet_verification_error(err: &SdkError) -> bool {
    is(err, 81105)
}

/// 81106 Address must be in lowercase
pub fn is_address_must_be_lowercase(err: &SdkError) -> bool {
    is(err, 81106)
}

/// 81107 Too many wallet addresses
pub fn is_too_many_wallet_addresses(err: &SdkError) -> bool {
    is(err, 81107)
}

/// 81108 Wallet type mismatch
pub fn is_wallet_type_mismatch(err: &SdkError) -> bool {
    is(err, 81108)
}

/// 81109 Address update error
pub fn is_address_update_error(err: &SdkError) -> bool {
    is(err, 81109)
}

/// 81150 Chain not supported in this interface
pub fn is_chain_not_supported(err: &SdkError) -> bool {
    is(err, 81150)
}

/// 81151 Token address incorrect
pub fn is_token_address_incorrect(err: &SdkError) -> bool {
    is(err, 81151)
}

/// 81152 Token does not exist
pub fn is_token_does_not_exist(err: &SdkError) -> bool {
    is(err, 81152)
}

/// 81153 This token is a platform token, no need to add
pub fn is_token_is_platform_token(err: &SdkError) -> bool {
    is(err, 81153)
}

/// 81157 Blockchain and address do not match
pub fn is_blockchain_and_address_mismatch(err: &SdkError) -> bool {
    is(err, 81157)
}

/// 81158 Token protocol not supported
pub fn is_token_protocol_not_supported(err: &SdkError) -> bool {
    is(err, 81158)
}

/// 81159 Data caching, please try again later
pub fn is_data_caching(err: &SdkError) -> bool {
    is(err, 81159)
}

/// 81201 Transaction not found
pub fn is_transaction_not_found(err: &SdkError) -> bool {
    is(err, 81201)
}

/// 81202 Transaction still pending
pub fn is_transaction_still_pending(err: &SdkError) -> bool {
    is(err, 81202)
}

/// 81203 Transaction extjson parameters not found
pub fn is_extjson_parameters_not_found(err: &SdkError) -> bool {
    is(err, 81203)
}

/// 81302 FromAddress does not belong to the account ID
pub fn is_from_address_mismatch_account(err: &SdkError) -> bool {
    is(err, 81302)
}

/// 81351 Insufficient balance to pay
pub fn is_insufficient_balance_to_pay(err: &SdkError) -> bool {
    is(err, 81351)
}

/// 81353 Address is illegal
pub fn is_address_illegal(err: &SdkError) -> bool {
    is(err, 81353)
}

/// 81451 Node return failed
pub fn is_node_return_failed(err: &SdkError) -> bool {
    is(err, 81451)
}
