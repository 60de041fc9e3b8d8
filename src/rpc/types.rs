use crate::abi::StateMutability;
use crate::access::{AllowRule, PolicyVersion, StatusScheme, WalletStatus};
use alloy_primitives::{Address, B256, U256};
use serde::Serialize;

/// Response for `access_walletStatus`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletStatusResponse {
    pub wallet: Address,
    pub status: WalletStatus,
    /// Stored status code; absent for system wallets, which are not read
    pub code: Option<U256>,
    pub slot: B256,
    pub system_wallet: bool,
}

/// Response for `access_checkTransfer`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferCheckResponse {
    pub allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<AllowRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Response for `access_policy`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyResponse {
    pub policy: PolicyVersion,
    pub access_control_contract: Address,
    pub owner_contract: Address,
    pub mapping_slot: U256,
    pub status_codes: StatusScheme,
    pub system_wallet_count: usize,
}

/// Response for `access_describeCall`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallDescription {
    pub name: String,
    pub signature: String,
    pub selector: String,
    pub state_mutability: StateMutability,
}
