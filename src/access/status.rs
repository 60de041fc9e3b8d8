use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Access tier recorded for a wallet in the access-control contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WalletStatus {
    /// Never classified
    Unlisted,
    /// May send to and receive from anyone
    Whitelisted,
    /// Restricted in both directions; may still settle with system wallets
    Greylisted,
    /// May only send to system wallets
    SendGreylisted,
    /// May only receive from unrestricted senders
    ReceiveGreylisted,
    /// Restricted in both directions
    Blacklisted,
    /// A code the configured scheme does not know about
    Unrecognized,
}

impl WalletStatus {
    /// Whether this wallet is limited in whom it may send to.
    ///
    /// Unknown codes count as restricted so a contract upgrade can never
    /// open a wallet up before the node learns the new code.
    pub const fn is_send_restricted(self) -> bool {
        matches!(
            self,
            Self::Greylisted | Self::SendGreylisted | Self::Blacklisted | Self::Unrecognized
        )
    }

    /// Whether this wallet is limited in whom it may receive from.
    pub const fn is_receive_restricted(self) -> bool {
        matches!(
            self,
            Self::Greylisted | Self::ReceiveGreylisted | Self::Blacklisted | Self::Unrecognized
        )
    }

    pub const fn is_whitelisted(self) -> bool {
        matches!(self, Self::Whitelisted)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unlisted => "unlisted",
            Self::Whitelisted => "whitelisted",
            Self::Greylisted => "greylisted",
            Self::SendGreylisted => "send-greylisted",
            Self::ReceiveGreylisted => "receive-greylisted",
            Self::Blacklisted => "blacklisted",
            Self::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for WalletStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric code → status table for one revision of the access-control contract.
///
/// Serialized as a JSON object keyed by code, e.g. `{"0": "unlisted", "1": "whitelisted"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusScheme {
    codes: BTreeMap<u64, WalletStatus>,
}

impl StatusScheme {
    /// Build a scheme from `(code, status)` pairs. Later pairs win on duplicate codes.
    pub fn new(codes: impl IntoIterator<Item = (u64, WalletStatus)>) -> Self {
        Self {
            codes: codes.into_iter().collect(),
        }
    }

    /// Interpret a raw storage value.
    pub fn classify(&self, code: U256) -> WalletStatus {
        u64::try_from(code)
            .ok()
            .and_then(|code| self.codes.get(&code).copied())
            .unwrap_or(WalletStatus::Unrecognized)
    }

    /// The code assigned to `status`, if any.
    pub fn code_of(&self, status: WalletStatus) -> Option<u64> {
        self.codes
            .iter()
            .find(|(_, s)| **s == status)
            .map(|(code, _)| *code)
    }

    /// Iterate `(code, status)` pairs in ascending code order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, WalletStatus)> + '_ {
        self.codes.iter().map(|(code, status)| (*code, *status))
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
