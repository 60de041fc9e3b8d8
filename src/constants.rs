use alloy_primitives::{address, Address};

/// Owner contract address (holds the current chain owner at slot 0)
pub const OWNER_CONTRACT_ADDRESS: Address = address!("0000000000000000000000000000000000000A11");
/// Wallet access-control contract address (holds the per-wallet status mapping)
pub const ACCESS_CONTROL_ADDRESS: Address = address!("0000000000000000000000000000000000000A22");
/// Native token contract address
pub const TOKEN_ADDRESS: Address = address!("0000000000000000000000000000000000000A33");
/// Main faucet contract address
pub const FAUCET_ADDRESS: Address = address!("0000000000000000000000000000000000000A44");
/// Treasury contract address
pub const TREASURY_ADDRESS: Address = address!("0000000000000000000000000000000000000A55");

/// Default system wallets: the protocol's own infrastructure contracts.
pub const DEFAULT_SYSTEM_WALLETS: [Address; 5] = [
    OWNER_CONTRACT_ADDRESS,
    ACCESS_CONTROL_ADDRESS,
    TOKEN_ADDRESS,
    FAUCET_ADDRESS,
    TREASURY_ADDRESS,
];

/// Status codes written by the first access-control contract revision.
pub mod legacy_codes {
    /// Zero value: never whitelisted
    pub const BLACKLISTED: u64 = 0;
    pub const WHITELISTED: u64 = 1;
    pub const GREYLISTED: u64 = 2;
}

/// Status codes written by the directional access-control contract revision.
pub mod directional_codes {
    /// Zero value: never classified
    pub const UNLISTED: u64 = 0;
    pub const WHITELISTED: u64 = 1;
    /// May only send to system wallets
    pub const SEND_GREYLISTED: u64 = 2;
    /// May not receive from restricted senders
    pub const RECEIVE_GREYLISTED: u64 = 3;
}
