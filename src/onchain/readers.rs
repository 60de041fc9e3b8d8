use super::helpers::{decode_address, decode_u256, mapping_address_slot, slot_key};
use super::slots::owner_slots;
use super::{StateReadError, StorageReader};
use alloy_primitives::{Address, U256};

/// Read the raw status code stored for `wallet` in the mapping declared at
/// `mapping_slot` of `contract`.
///
/// A slot that was never written reads as zero. Reader failures are returned
/// as-is so the caller decides between retrying and rejecting.
pub fn resolve_status(
    reader: &impl StorageReader,
    contract: Address,
    wallet: Address,
    mapping_slot: U256,
) -> Result<U256, StateReadError> {
    let slot = mapping_address_slot(wallet, mapping_slot);
    Ok(reader
        .read_storage(contract, slot)?
        .map(decode_u256)
        .unwrap_or(U256::ZERO))
}

/// Read the current chain owner from slot 0 of the owner contract.
///
/// Returns the zero address if the slot was never written.
pub fn read_current_owner(
    reader: &impl StorageReader,
    owner_contract: Address,
) -> Result<Address, StateReadError> {
    Ok(reader
        .read_storage(owner_contract, slot_key(owner_slots::OWNER))?
        .map(decode_address)
        .unwrap_or(Address::ZERO))
}
