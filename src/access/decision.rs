use super::status::WalletStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One side of a transfer as seen by the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Party {
    /// Classification read from the access-control contract
    pub status: WalletStatus,
    /// Whether the address is a system wallet
    pub is_system: bool,
}

impl Party {
    /// An ordinary wallet with the given status.
    pub const fn wallet(status: WalletStatus) -> Self {
        Self {
            status,
            is_system: false,
        }
    }

    /// A system wallet. System wallets always read as whitelisted.
    pub const fn system() -> Self {
        Self {
            status: WalletStatus::Whitelisted,
            is_system: true,
        }
    }
}

/// The rule that admitted a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AllowRule {
    /// Sender is a system wallet
    SystemSender,
    /// Whitelisted sender deploying a contract
    WhitelistedCreation,
    /// Both parties whitelisted
    BothWhitelisted,
    /// Neither party restricted in the relevant direction
    Unrestricted,
    /// Restricted sender settling with a system wallet
    RestrictedToSystem,
}

impl fmt::Display for AllowRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::SystemSender => "sender is a system wallet",
            Self::WhitelistedCreation => "whitelisted sender creating a contract",
            Self::BothWhitelisted => "sender and receiver are whitelisted",
            Self::Unrestricted => "neither party is restricted",
            Self::RestrictedToSystem => "restricted sender paying a system wallet",
        })
    }
}

/// Why a transaction was refused. Surfaced to the submitter as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DenyReason {
    #[error("transaction is not allowed because sender is blacklisted")]
    SenderBlacklisted,
    #[error("transaction is not allowed because receiver is blacklisted")]
    ReceiverBlacklisted,
    #[error("transaction is not allowed because sender is greylisted")]
    SenderGreylisted,
    #[error("transaction is not allowed because receiver is greylisted")]
    ReceiverGreylisted,
    #[error("transaction is not allowed because sender has an unrecognized status")]
    SenderUnrecognized,
    #[error("transaction is not allowed because receiver has an unrecognized status")]
    ReceiverUnrecognized,
    #[error("transaction is not allowed because sender is not whitelisted")]
    SenderNotWhitelisted,
    #[error("transaction is not allowed")]
    NotPermitted,
}

impl DenyReason {
    /// Reason naming the sender's restriction.
    pub(crate) const fn for_sender(status: WalletStatus) -> Self {
        match status {
            WalletStatus::Blacklisted => Self::SenderBlacklisted,
            WalletStatus::Unrecognized => Self::SenderUnrecognized,
            WalletStatus::Greylisted | WalletStatus::SendGreylisted => Self::SenderGreylisted,
            _ => Self::SenderNotWhitelisted,
        }
    }

    /// Reason naming the receiver's restriction.
    pub(crate) const fn for_receiver(status: WalletStatus) -> Self {
        match status {
            WalletStatus::Blacklisted => Self::ReceiverBlacklisted,
            WalletStatus::Unrecognized => Self::ReceiverUnrecognized,
            WalletStatus::Greylisted | WalletStatus::ReceiveGreylisted => Self::ReceiverGreylisted,
            _ => Self::NotPermitted,
        }
    }
}

/// Verdict for a single transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allowed(AllowRule),
    Denied(DenyReason),
}

impl Decision {
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }

    /// The rule that admitted the transaction, if it was admitted.
    pub const fn rule(&self) -> Option<AllowRule> {
        match self {
            Self::Allowed(rule) => Some(*rule),
            Self::Denied(_) => None,
        }
    }

    /// The refusal reason, if the transaction was refused.
    pub const fn reason(&self) -> Option<DenyReason> {
        match self {
            Self::Allowed(_) => None,
            Self::Denied(reason) => Some(*reason),
        }
    }

    /// Convert into a `Result`, treating denial as an error.
    pub fn into_result(self) -> Result<AllowRule, DenyReason> {
        match self {
            Self::Allowed(rule) => Ok(rule),
            Self::Denied(reason) => Err(reason),
        }
    }
}
