/// Wallet access-control contract storage layout.
///
/// The status mapping moved from slot 3 to slot 4 when the contract gained
/// directional greylisting.
pub mod access_control_slots {
    use alloy_primitives::U256;

    /// slot 3: walletStatus mapping base, first revision (mapping(address => uint256))
    pub const LEGACY_STATUS_MAPPING: U256 = U256::from_limbs([3, 0, 0, 0]);
    /// slot 4: walletStatus mapping base, directional revision (mapping(address => uint256))
    pub const DIRECTIONAL_STATUS_MAPPING: U256 = U256::from_limbs([4, 0, 0, 0]);
}

/// Owner contract storage layout.
pub mod owner_slots {
    use alloy_primitives::U256;

    /// slot 0: owner (address)
    pub const OWNER: U256 = U256::from_limbs([0, 0, 0, 0]);
}
