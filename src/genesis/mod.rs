//! Genesis seeding for the access-control contracts.
//!
//! Pre-populates the owner and access-control contracts' storage in a genesis
//! alloc so a fresh chain (or an offline `wac` session) starts with known
//! wallet classifications.
//!
//! Storage layout reference (Solidity):
//!   - owner contract, slot 0: owner address
//!   - access-control contract, keccak256(pad32(wallet) ++ pad32(mapping slot)): status code

use crate::config::AccessControlConfig;
use crate::onchain::{encode_address, encode_u256, mapping_address_slot, owner_slots, slot_key};
use alloy_genesis::{Genesis, GenesisAccount};
use alloy_primitives::{Address, B256, U256};
use std::collections::BTreeMap;

/// Status-mapping storage for the given `(wallet, code)` pairs.
///
/// Zero codes are skipped: an unwritten slot already reads as zero.
pub fn status_storage(mapping_slot: U256, codes: &[(Address, u64)]) -> BTreeMap<B256, B256> {
    codes
        .iter()
        .filter(|(_, code)| *code != 0)
        .map(|(wallet, code)| {
            (
                mapping_address_slot(*wallet, mapping_slot),
                encode_u256(U256::from(*code)),
            )
        })
        .collect()
}

/// Returns allocs for the owner and access-control contracts.
pub fn access_control_alloc(
    config: &AccessControlConfig,
    owner: Address,
    codes: &[(Address, u64)],
) -> BTreeMap<Address, GenesisAccount> {
    let mut contracts = BTreeMap::new();

    // --- Owner ---
    let mut owner_storage = BTreeMap::new();
    owner_storage.insert(slot_key(owner_slots::OWNER), encode_address(owner));
    contracts.insert(
        config.owner_contract,
        GenesisAccount {
            balance: U256::ZERO,
            nonce: Some(1),
            code: None,
            storage: Some(owner_storage),
            private_key: None,
        },
    );

    // --- Access control ---
    contracts.insert(
        config.contract,
        GenesisAccount {
            balance: U256::ZERO,
            nonce: Some(1),
            code: None,
            storage: Some(status_storage(config.mapping_slot(), codes)),
            private_key: None,
        },
    );

    contracts
}

/// Add the access-control allocs to `genesis`, replacing any existing entries
/// for the two contracts.
pub fn seed_genesis(
    mut genesis: Genesis,
    config: &AccessControlConfig,
    owner: Address,
    codes: &[(Address, u64)],
) -> Genesis {
    genesis
        .alloc
        .extend(access_control_alloc(config, owner, codes));
    genesis
}
