//! On-chain Access-Control Storage Readers
//!
//! Locates a wallet's record inside the access-control contract's status
//! mapping and reads it back without executing any bytecode.
//!
//! Architecture:
//!   wallet address + declared mapping slot
//!   ↓
//!   keccak256(pad32(wallet) ++ pad32(slot))  →  storage key
//!   ↓
//!   StorageReader (MDBX state / genesis alloc / in-memory)  →  raw 32-byte word
//!   ↓
//!   status code (U256, zero when never written)
//!
//! Storage layout must match the deployed access-control contract.

pub mod errors;
pub mod helpers;
pub mod providers;
pub mod readers;
pub mod slots;

pub use errors::StateReadError;
pub use helpers::{
    decode_address, decode_u256, encode_address, encode_u256, mapping_address_slot, slot_key,
};
pub use providers::{
    GenesisStorageReader, InMemoryStorage, LatestStateReader, StateProviderStorageReader,
};
pub use readers::{read_current_owner, resolve_status};
pub use slots::{access_control_slots, owner_slots};

use alloy_primitives::{Address, B256};

/// Trait for reading contract storage slots.
///
/// In production: implemented by the state provider (MDBX database)
/// In tests: implemented by `InMemoryStorage` and `GenesisStorageReader`
pub trait StorageReader {
    /// Read a storage slot value from a contract address.
    ///
    /// `Ok(None)` means the slot was never written. `Err` means the state
    /// could not be consulted and must not be read as zero.
    fn read_storage(&self, address: Address, slot: B256) -> Result<Option<B256>, StateReadError>;
}

impl<T: StorageReader + ?Sized> StorageReader for &T {
    fn read_storage(&self, address: Address, slot: B256) -> Result<Option<B256>, StateReadError> {
        (**self).read_storage(address, slot)
    }
}

impl<T: StorageReader + ?Sized> StorageReader for Box<T> {
    fn read_storage(&self, address: Address, slot: B256) -> Result<Option<B256>, StateReadError> {
        (**self).read_storage(address, slot)
    }
}

/// Source of readers over the latest state.
pub trait StorageReaderFactory: Send + Sync {
    /// Open a reader over the current head state.
    fn latest_reader(&self) -> Result<Box<dyn StorageReader + Send + '_>, StateReadError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ACCESS_CONTROL_ADDRESS, OWNER_CONTRACT_ADDRESS};
    use alloy_primitives::{address, b256, Keccak256, U256};
    use std::collections::BTreeSet;

    /// Reader whose backing state is gone.
    struct OfflineStorage;

    impl StorageReader for OfflineStorage {
        fn read_storage(&self, _address: Address, _slot: B256) -> Result<Option<B256>, StateReadError> {
            Err(StateReadError::Unavailable("node is syncing".to_string()))
        }
    }

    const WALLET_A: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
    const WALLET_B: Address = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");

    // =========================================================================
    // Storage slot constant tests
    // =========================================================================

    #[test]
    fn test_access_control_slot_values() {
        assert_eq!(access_control_slots::LEGACY_STATUS_MAPPING, U256::from(3));
        assert_eq!(access_control_slots::DIRECTIONAL_STATUS_MAPPING, U256::from(4));
        assert_eq!(owner_slots::OWNER, U256::ZERO);
    }

    // =========================================================================
    // Mapping slot computation
    // =========================================================================

    #[test]
    fn test_mapping_slot_zero_key_zero_slot() {
        // keccak256 of 64 zero bytes
        assert_eq!(
            mapping_address_slot(Address::ZERO, U256::ZERO),
            b256!("ad3228b676f7d3cd4284a5443f17f1962b36e491b30a40b2405849e597ba5fb5")
        );
    }

    #[test]
    fn test_mapping_slot_known_vectors() {
        assert_eq!(
            mapping_address_slot(WALLET_A, U256::from(4)),
            b256!("e33a36353cdfbeb15ea87d592415c9f9fa566b043dc4b5f31833f39fada62b14")
        );
        assert_eq!(
            mapping_address_slot(WALLET_A, U256::from(3)),
            b256!("ca0453669a7127ce38f304ce121e552d78c30286022ebefeef6884684816084d")
        );
        assert_eq!(
            mapping_address_slot(WALLET_B, U256::from(4)),
            b256!("7e51757636fce8762192798d4f0d3665fd8eadbf6482618fd333cd1e3ddbbe67")
        );
    }

    #[test]
    fn test_mapping_slot_matches_manual_abi_encode() {
        let mut buf = [0u8; 64];
        buf[12..32].copy_from_slice(WALLET_A.as_slice());
        buf[63] = 4;
        let mut hasher = Keccak256::new();
        hasher.update(buf);
        assert_eq!(mapping_address_slot(WALLET_A, U256::from(4)), hasher.finalize());
    }

    #[test]
    fn test_mapping_slot_key_order_matters() {
        let mut buf = [0u8; 64];
        buf[31] = 4;
        buf[44..64].copy_from_slice(WALLET_A.as_slice());
        let mut hasher = Keccak256::new();
        hasher.update(buf);
        assert_ne!(mapping_address_slot(WALLET_A, U256::from(4)), hasher.finalize());
    }

    #[test]
    fn test_mapping_slot_deterministic() {
        let first = mapping_address_slot(WALLET_A, U256::from(4));
        let _ = mapping_address_slot(WALLET_B, U256::from(4));
        assert_eq!(first, mapping_address_slot(WALLET_A, U256::from(4)));
    }

    #[test]
    fn test_mapping_slot_different_addresses_different_slots() {
        let slots: BTreeSet<B256> = (1u8..=200)
            .map(|i| mapping_address_slot(Address::with_last_byte(i), U256::from(4)))
            .collect();
        assert_eq!(slots.len(), 200);
    }

    #[test]
    fn test_mapping_slot_different_base_different_slots() {
        assert_ne!(
            mapping_address_slot(WALLET_A, access_control_slots::LEGACY_STATUS_MAPPING),
            mapping_address_slot(WALLET_A, access_control_slots::DIRECTIONAL_STATUS_MAPPING)
        );
    }

    // =========================================================================
    // Encoding helpers
    // =========================================================================

    #[test]
    fn test_encode_address_is_left_padded() {
        let encoded = encode_address(WALLET_A);
        assert!(encoded[..12].iter().all(|b| *b == 0));
        assert_eq!(&encoded[12..], WALLET_A.as_slice());
        assert_eq!(decode_address(encoded), WALLET_A);
    }

    #[test]
    fn test_decode_u256_big_endian() {
        let value = b256!("0000000000000000000000000000000000000000000000000000000000000103");
        assert_eq!(decode_u256(value), U256::from(0x103));
    }

    #[test]
    fn test_slot_key_is_big_endian_index() {
        assert_eq!(
            slot_key(U256::from(4)),
            b256!("0000000000000000000000000000000000000000000000000000000000000004")
        );
    }

    // =========================================================================
    // resolve_status
    // =========================================================================

    #[test]
    fn test_resolve_status_roundtrip() {
        let mut storage = InMemoryStorage::new();
        storage.set_status(ACCESS_CONTROL_ADDRESS, U256::from(4), WALLET_A, 3);

        let code = resolve_status(&storage, ACCESS_CONTROL_ADDRESS, WALLET_A, U256::from(4)).unwrap();
        assert_eq!(code, U256::from(3));
    }

    #[test]
    fn test_resolve_status_unwritten_is_zero() {
        let storage = InMemoryStorage::new();
        let code = resolve_status(&storage, ACCESS_CONTROL_ADDRESS, WALLET_B, U256::from(4)).unwrap();
        assert_eq!(code, U256::ZERO);
    }

    #[test]
    fn test_resolve_status_wrong_slot_index_misses() {
        let mut storage = InMemoryStorage::new();
        storage.set_status(ACCESS_CONTROL_ADDRESS, U256::from(4), WALLET_A, 1);

        let code = resolve_status(&storage, ACCESS_CONTROL_ADDRESS, WALLET_A, U256::from(3)).unwrap();
        assert_eq!(code, U256::ZERO);
    }

    #[test]
    fn test_resolve_status_other_contract_misses() {
        let mut storage = InMemoryStorage::new();
        storage.set_status(OWNER_CONTRACT_ADDRESS, U256::from(4), WALLET_A, 1);

        let code = resolve_status(&storage, ACCESS_CONTROL_ADDRESS, WALLET_A, U256::from(4)).unwrap();
        assert_eq!(code, U256::ZERO);
    }

    #[test]
    fn test_resolve_status_propagates_unavailable_state() {
        let err = resolve_status(&OfflineStorage, ACCESS_CONTROL_ADDRESS, WALLET_A, U256::from(4))
            .unwrap_err();
        assert!(matches!(err, StateReadError::Unavailable(_)));
    }

    #[test]
    fn test_resolve_status_through_reference() {
        let mut storage = InMemoryStorage::new();
        storage.set_status(ACCESS_CONTROL_ADDRESS, U256::from(4), WALLET_A, 2);
        let by_ref: &dyn StorageReader = &storage;

        let code = resolve_status(&by_ref, ACCESS_CONTROL_ADDRESS, WALLET_A, U256::from(4)).unwrap();
        assert_eq!(code, U256::from(2));
    }

    // =========================================================================
    // Owner contract
    // =========================================================================

    #[test]
    fn test_read_current_owner() {
        let owner = address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
        let mut storage = InMemoryStorage::new();
        storage.set(OWNER_CONTRACT_ADDRESS, slot_key(owner_slots::OWNER), encode_address(owner));

        assert_eq!(read_current_owner(&storage, OWNER_CONTRACT_ADDRESS).unwrap(), owner);
    }

    #[test]
    fn test_read_current_owner_unset_is_zero() {
        let storage = InMemoryStorage::new();
        assert_eq!(
            read_current_owner(&storage, OWNER_CONTRACT_ADDRESS).unwrap(),
            Address::ZERO
        );
    }

    #[test]
    fn test_read_current_owner_unavailable() {
        assert!(read_current_owner(&OfflineStorage, OWNER_CONTRACT_ADDRESS).is_err());
    }

    // =========================================================================
    // Readers and factories
    // =========================================================================

    #[test]
    fn test_in_memory_storage_len() {
        let mut storage = InMemoryStorage::new();
        assert!(storage.is_empty());
        storage.set_status(ACCESS_CONTROL_ADDRESS, U256::from(4), WALLET_A, 1);
        storage.set_status(ACCESS_CONTROL_ADDRESS, U256::from(4), WALLET_A, 2);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn test_in_memory_factory_reads_same_state() {
        let mut storage = InMemoryStorage::new();
        storage.set_status(ACCESS_CONTROL_ADDRESS, U256::from(4), WALLET_B, 1);

        let reader = storage.latest_reader().unwrap();
        let code = resolve_status(&reader, ACCESS_CONTROL_ADDRESS, WALLET_B, U256::from(4)).unwrap();
        assert_eq!(code, U256::from(1));
    }

    #[test]
    fn test_genesis_reader_nonexistent_address() {
        let genesis = alloy_genesis::Genesis::default();
        let reader = GenesisStorageReader::from_genesis(&genesis);
        assert_eq!(
            reader
                .read_storage(ACCESS_CONTROL_ADDRESS, B256::ZERO)
                .unwrap(),
            None
        );
    }
}
