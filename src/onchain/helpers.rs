use alloy_primitives::{Address, Keccak256, B256, U256};

/// Compute the storage slot for a Solidity `mapping(address => uint256)` entry.
///
/// For `walletStatus[addr]` declared at mapping slot 4:
///   slot = keccak256(abi.encode(addr, 4))
///
/// The key comes first and the declared slot second; swapping them yields a
/// different (and wrong) slot.
pub fn mapping_address_slot(key: Address, mapping_slot: U256) -> B256 {
    let mut hasher = Keccak256::new();
    hasher.update(encode_address(key));
    hasher.update(B256::from(mapping_slot.to_be_bytes()));
    hasher.finalize()
}

/// Convert a plain slot index into a storage key.
pub fn slot_key(slot: U256) -> B256 {
    B256::from(slot.to_be_bytes())
}

/// Decode an address from a B256 storage value (left-padded with zeros).
pub fn decode_address(value: B256) -> Address {
    Address::from_slice(&value[12..32])
}

/// Decode an unsigned integer from a B256 storage value.
pub fn decode_u256(value: B256) -> U256 {
    U256::from_be_bytes(value.0)
}

/// Encode an unsigned integer into a B256 storage value.
pub fn encode_u256(value: U256) -> B256 {
    B256::from(value.to_be_bytes())
}

/// Encode an address into a B256 storage value (left-padded).
pub fn encode_address(addr: Address) -> B256 {
    let mut bytes = [0u8; 32];
    bytes[12..32].copy_from_slice(addr.as_slice());
    B256::from(bytes)
}
