//! Signing-material payloads from `POST /pre-transaction/sign-info`.
//!
//! The response carries no discriminant; the payload shape alone says which
//! chain family it belongs to. [`SignInfo`] resolves that by trial decode
//! with unknown fields rejected, in the fixed order EVM, UTXO, Solana, Tron.

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Eip1559Protocol {
    pub base_fee: String,
    pub fast_priority_fee: String,
    pub safe_priority_fee: String,
    pub suggest_gas_price: String,
    pub propose_priority_fee: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GasPrice {
    pub normal: String,
    pub min: String,
    pub max: String,
    pub supported_eip1559: bool,
    pub eip1559_protocol: Option<Eip1559Protocol>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SignInfoEvm {
    pub gas_limit: String,
    pub nonce: String,
    pub gas_price: Option<GasPrice>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SignInfoUtxo {
    pub normal_fee_rate: String,
    pub max_fee_rate: String,
    pub min_fee_rate: String,
    pub inscription_output: String,
    pub min_output: String,
    pub normal_cost: String,
    pub max_cost: String,
    pub min_cost: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PriorityFee {
    pub normal_unit_price: String,
    pub min_unit_price: String,
    pub max_unit_price: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenAccountInfo {
    pub lamports: String,
    /// Owner (from) address.
    pub owner_address: String,
    /// Token mint address.
    pub mint_address: String,
    pub token_account_address: String,
    pub decimal: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SignInfoSolana {
    pub base_fee: String,
    pub priority_fee: Option<PriorityFee>,
    pub recent_block_hash: String,
    pub last_valid_block_height: String,
    pub from_address_rent: String,
    pub to_address_rent: String,
    pub token_account_info: Option<TokenAccountInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SignInfoTron {
    pub fee: String,
    /// Bytes 6..8 of the reference block height, replay protection.
    pub ref_block_bytes: String,
    /// Bytes 8..16 of the reference block hash.
    pub ref_block_hash: String,
    pub expiration: String,
    pub timestamp: String,
}

/// Chain-family signing material, resolved by payload shape.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SignInfo {
    Evm(SignInfoEvm),
    Utxo(SignInfoUtxo),
    Solana(SignInfoSolana),
    Tron(SignInfoTron),
}

impl SignInfo {
    pub fn as_evm(&self) -> Option<&SignInfoEvm> {
        match self {
            SignInfo::Evm(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_utxo(&self) -> Option<&SignInfoUtxo> {
        match self {
            SignInfo::Utxo(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_solana(&self) -> Option<&SignInfoSolana> {
        match self {
            SignInfo::Solana(info) => Some(info),
            _ => None,
        }
    }

    pub fn as_tron(&self) -> Option<&SignInfoTron> {
        match self {
            SignInfo::Tron(info) => Some(info),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for SignInfo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        if let Ok(evm) = serde_json::from_value::<SignInfoEvm>(value.clone()) {
            return Ok(SignInfo::Evm(evm));
        }
        if let Ok(utxo) = serde_json::from_value::<SignInfoUtxo>(value.clone()) {
            return Ok(SignInfo::Utxo(utxo));
        }
        if let Ok(solana) = serde_json::from_value::<SignInfoSolana>(value.clone()) {
            return Ok(SignInfo::Solana(solana));
        }
        serde_json::from_value::<SignInfoTron>(value)
            .map(SignInfo::Tron)
            .map_err(serde::de::Error::custom)
    }
}
