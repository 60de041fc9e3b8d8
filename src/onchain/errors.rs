use alloy_primitives::{Address, B256};
use thiserror::Error;

/// Errors raised while reading contract storage from the host chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateReadError {
    /// No state could be opened at all (node not synced, database closed)
    #[error("State unavailable: {0}")]
    Unavailable(String),

    /// The state was open but a single slot read failed
    #[error("Failed to read slot {slot} of {address}: {reason}")]
    SlotRead {
        /// Contract that was being read
        address: Address,
        /// Storage slot that failed
        slot: B256,
        /// Provider error message
        reason: String,
    },
}
