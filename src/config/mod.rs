//! Access-control configuration.
//!
//! Everything the evaluator needs to know about the chain: which contract
//! revision to enforce, where the contracts live, which wallets are trusted,
//! and how to read status codes. Loaded once at startup from JSON (or built
//! from defaults) and validated before the evaluator is constructed.

pub mod errors;

pub use errors::ConfigError;

use crate::access::{PolicyVersion, StatusScheme, SystemWalletSet, WalletStatus};
use crate::constants::{ACCESS_CONTROL_ADDRESS, OWNER_CONTRACT_ADDRESS};
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Access-control configuration.
///
/// ```json
/// {
///   "policy": "directional",
///   "contract": "0x0000000000000000000000000000000000000a22",
///   "slotIndex": 4,
///   "systemWallets": ["0x0000000000000000000000000000000000000a11"],
///   "statusCodes": { "0": "unlisted", "1": "whitelisted", "2": "sendGreylisted", "3": "receiveGreylisted" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccessControlConfig {
    /// Contract revision whose rules are enforced
    pub policy: PolicyVersion,
    /// Address of the access-control contract
    pub contract: Address,
    /// Address of the owner contract
    pub owner_contract: Address,
    /// Declared slot of the status mapping (defaults per policy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_index: Option<u64>,
    /// Always-trusted infrastructure wallets
    pub system_wallets: SystemWalletSet,
    /// Code → status table (defaults per policy)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_codes: Option<StatusScheme>,
}

impl Default for AccessControlConfig {
    fn default() -> Self {
        Self::for_policy(PolicyVersion::default())
    }
}

impl AccessControlConfig {
    /// Default deployment for the given contract revision.
    pub fn for_policy(policy: PolicyVersion) -> Self {
        Self {
            policy,
            contract: ACCESS_CONTROL_ADDRESS,
            owner_contract: OWNER_CONTRACT_ADDRESS,
            slot_index: None,
            system_wallets: SystemWalletSet::default(),
            status_codes: None,
        }
    }

    /// Override the system wallet set.
    pub fn with_system_wallets(mut self, wallets: SystemWalletSet) -> Self {
        self.system_wallets = wallets;
        self
    }

    /// Override the declared mapping slot.
    pub fn with_slot_index(mut self, slot_index: u64) -> Self {
        self.slot_index = Some(slot_index);
        self
    }

    /// Override the code → status table.
    pub fn with_status_codes(mut self, scheme: StatusScheme) -> Self {
        self.status_codes = Some(scheme);
        self
    }

    /// Parse a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load and parse a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Declared slot of the status mapping.
    pub fn mapping_slot(&self) -> U256 {
        self.slot_index
            .map(U256::from)
            .unwrap_or_else(|| self.policy.default_mapping_slot())
    }

    /// Effective code → status table.
    pub fn scheme(&self) -> StatusScheme {
        self.status_codes
            .clone()
            .unwrap_or_else(|| self.policy.default_scheme())
    }

    /// Check the configuration is internally consistent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.contract == Address::ZERO {
            return Err(ConfigError::MissingContract);
        }
        if self.system_wallets.is_empty() {
            return Err(ConfigError::NoSystemWallets);
        }
        if self.system_wallets.contains(Some(&Address::ZERO)) {
            return Err(ConfigError::ZeroSystemWallet);
        }

        let scheme = self.scheme();
        let zero_status = scheme.classify(U256::ZERO);
        if zero_status == WalletStatus::Unrecognized {
            return Err(ConfigError::MissingZeroCode);
        }
        if zero_status != self.policy.unwritten_status() {
            return Err(ConfigError::ZeroCodeMismatch {
                status: zero_status,
                expected: self.policy.unwritten_status(),
                policy: self.policy,
            });
        }
        if scheme.code_of(WalletStatus::Whitelisted).is_none() {
            return Err(ConfigError::MissingWhitelistedCode);
        }
        let mut seen = BTreeSet::new();
        for (code, status) in scheme.iter() {
            if !self.policy.understands(status) {
                return Err(ConfigError::UnsupportedStatus {
                    code,
                    status,
                    policy: self.policy,
                });
            }
            if !seen.insert(status) {
                return Err(ConfigError::DuplicateStatus { status });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_SYSTEM_WALLETS, TOKEN_ADDRESS};
    use alloy_primitives::address;

    #[test]
    fn test_default_config_is_directional_and_valid() {
        let config = AccessControlConfig::default();
        assert_eq!(config.policy, PolicyVersion::Directional);
        assert_eq!(config.mapping_slot(), U256::from(4));
        assert_eq!(config.system_wallets.len(), DEFAULT_SYSTEM_WALLETS.len());
        config.validate().unwrap();
    }

    #[test]
    fn test_legacy_config_uses_slot_3() {
        let config = AccessControlConfig::for_policy(PolicyVersion::Legacy);
        assert_eq!(config.mapping_slot(), U256::from(3));
        config.validate().unwrap();
    }

    #[test]
    fn test_slot_override() {
        let config = AccessControlConfig::for_policy(PolicyVersion::Legacy).with_slot_index(7);
        assert_eq!(config.mapping_slot(), U256::from(7));
    }

    #[test]
    fn test_zero_contract_rejected() {
        let mut config = AccessControlConfig::default();
        config.contract = Address::ZERO;
        assert!(matches!(config.validate(), Err(ConfigError::MissingContract)));
    }

    #[test]
    fn test_empty_system_wallets_rejected() {
        let config = AccessControlConfig::default().with_system_wallets(SystemWalletSet::new([]));
        assert!(matches!(config.validate(), Err(ConfigError::NoSystemWallets)));
    }

    #[test]
    fn test_zero_system_wallet_rejected() {
        let config = AccessControlConfig::default()
            .with_system_wallets(SystemWalletSet::new([TOKEN_ADDRESS, Address::ZERO]));
        assert!(matches!(config.validate(), Err(ConfigError::ZeroSystemWallet)));
    }

    #[test]
    fn test_scheme_without_zero_code_rejected() {
        let config = AccessControlConfig::default().with_status_codes(StatusScheme::new([
            (1, WalletStatus::Whitelisted),
            (2, WalletStatus::SendGreylisted),
        ]));
        assert!(matches!(config.validate(), Err(ConfigError::MissingZeroCode)));
    }

    #[test]
    fn test_directional_zero_code_must_be_unlisted() {
        for zero in [WalletStatus::Whitelisted, WalletStatus::SendGreylisted] {
            let scheme = if zero == WalletStatus::Whitelisted {
                StatusScheme::new([(0, zero), (2, WalletStatus::SendGreylisted)])
            } else {
                StatusScheme::new([(0, zero), (1, WalletStatus::Whitelisted)])
            };
            let config = AccessControlConfig::default().with_status_codes(scheme);
            match config.validate() {
                Err(ConfigError::ZeroCodeMismatch { status, expected, policy }) => {
                    assert_eq!(status, zero);
                    assert_eq!(expected, WalletStatus::Unlisted);
                    assert_eq!(policy, PolicyVersion::Directional);
                }
                other => panic!("unexpected result {other:?}"),
            }
        }
    }

    #[test]
    fn test_legacy_zero_code_must_be_blacklisted() {
        let config = AccessControlConfig::for_policy(PolicyVersion::Legacy).with_status_codes(
            StatusScheme::new([(0, WalletStatus::Whitelisted), (2, WalletStatus::Greylisted)]),
        );
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroCodeMismatch { expected: WalletStatus::Blacklisted, .. })
        ));
    }

    #[test]
    fn test_scheme_without_whitelist_rejected() {
        let config = AccessControlConfig::default()
            .with_status_codes(StatusScheme::new([(0, WalletStatus::Unlisted)]));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingWhitelistedCode)
        ));
    }

    #[test]
    fn test_legacy_rejects_directional_statuses() {
        let config = AccessControlConfig::for_policy(PolicyVersion::Legacy).with_status_codes(
            StatusScheme::new([
                (0, WalletStatus::Blacklisted),
                (1, WalletStatus::Whitelisted),
                (2, WalletStatus::SendGreylisted),
            ]),
        );
        match config.validate() {
            Err(ConfigError::UnsupportedStatus { code, status, policy }) => {
                assert_eq!(code, 2);
                assert_eq!(status, WalletStatus::SendGreylisted);
                assert_eq!(policy, PolicyVersion::Legacy);
            }
            other => panic!("expected UnsupportedStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_status_rejected() {
        let config = AccessControlConfig::default().with_status_codes(StatusScheme::new([
            (0, WalletStatus::Unlisted),
            (1, WalletStatus::Whitelisted),
            (9, WalletStatus::Whitelisted),
        ]));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateStatus {
                status: WalletStatus::Whitelisted
            })
        ));
    }

    #[test]
    fn test_parse_json_config() {
        let json = r#"{
            "policy": "v1",
            "contract": "0x00000000000000000000000000000000000000c1",
            "systemWallets": ["0x00000000000000000000000000000000000000f1"],
            "statusCodes": { "0": "blacklisted", "1": "whitelisted", "5": "greylisted" }
        }"#;
        let config = AccessControlConfig::from_json_str(json).unwrap();
        assert_eq!(config.policy, PolicyVersion::Legacy);
        assert_eq!(config.contract, address!("00000000000000000000000000000000000000c1"));
        assert_eq!(config.owner_contract, OWNER_CONTRACT_ADDRESS);
        assert_eq!(config.mapping_slot(), U256::from(3));
        assert!(config
            .system_wallets
            .contains(Some(&address!("00000000000000000000000000000000000000f1"))));
        assert_eq!(
            config.scheme().classify(U256::from(5)),
            WalletStatus::Greylisted
        );
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_empty_json_uses_defaults() {
        let config = AccessControlConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AccessControlConfig::default());
    }

    #[test]
    fn test_parse_unknown_policy_fails() {
        assert!(matches!(
            AccessControlConfig::from_json_str(r#"{"policy": "v3"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_config_json_roundtrip_keeps_overrides() {
        let config = AccessControlConfig::for_policy(PolicyVersion::Legacy).with_slot_index(9);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"slotIndex\":9"));
        assert_eq!(AccessControlConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = AccessControlConfig::load(Path::new("/nonexistent/access.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
