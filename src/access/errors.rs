use super::decision::DenyReason;
use crate::onchain::StateReadError;
use thiserror::Error;

/// Errors surfaced by admission checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Wallet statuses could not be read; the transaction must not be admitted
    #[error(transparent)]
    State(#[from] StateReadError),

    /// The decision table refused the transaction
    #[error(transparent)]
    Denied(#[from] DenyReason),
}

impl AccessError {
    /// Whether this is a policy refusal rather than a state failure.
    pub const fn is_denial(&self) -> bool {
        matches!(self, Self::Denied(_))
    }
}
