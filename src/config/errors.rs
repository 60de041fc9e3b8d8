use crate::abi::AbiError;
use crate::access::{PolicyVersion, WalletStatus};
use std::path::PathBuf;
use thiserror::Error;

/// Startup configuration errors. Raised before the node accepts any transaction.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The access-control contract address was left as zero
    #[error("Access-control contract address is not set")]
    MissingContract,

    /// No system wallets configured
    #[error("System wallet set is empty")]
    NoSystemWallets,

    /// The zero address was listed as a system wallet
    #[error("The zero address cannot be a system wallet")]
    ZeroSystemWallet,

    /// Status scheme has no entry for code 0, the value of unwritten slots
    #[error("Status codes must map code 0 (unwritten slots)")]
    MissingZeroCode,

    /// Code 0 maps to something other than the policy's status for unwritten slots
    #[error("Code 0 maps to {status}, but unwritten slots must read as {expected} under the {policy} policy")]
    ZeroCodeMismatch {
        /// Status code 0 was mapped to
        status: WalletStatus,
        /// Status the policy gives unwritten slots
        expected: WalletStatus,
        /// Selected policy
        policy: PolicyVersion,
    },

    /// Status scheme has no whitelisted code
    #[error("Status codes must include a whitelisted code")]
    MissingWhitelistedCode,

    /// Status scheme uses a status the selected policy does not understand
    #[error("Status code {code} maps to {status}, which the {policy} policy does not understand")]
    UnsupportedStatus {
        /// Offending code
        code: u64,
        /// Status it was mapped to
        status: WalletStatus,
        /// Selected policy
        policy: PolicyVersion,
    },

    /// Two codes map to the same status
    #[error("Status {status} is assigned to more than one code")]
    DuplicateStatus {
        /// Status listed twice
        status: WalletStatus,
    },

    /// Config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Config file is not valid JSON for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// Embedded contract ABI failed validation
    #[error("Invalid contract ABI: {0}")]
    InvalidAbi(#[from] AbiError),
}
