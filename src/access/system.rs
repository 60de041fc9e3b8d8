use crate::constants::DEFAULT_SYSTEM_WALLETS;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Addresses of the protocol's own infrastructure contracts.
///
/// Built once from configuration and handed to the evaluator; membership never
/// depends on chain state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemWalletSet {
    wallets: BTreeSet<Address>,
}

impl SystemWalletSet {
    /// Create a set from the given addresses.
    pub fn new(wallets: impl IntoIterator<Item = Address>) -> Self {
        Self {
            wallets: wallets.into_iter().collect(),
        }
    }

    /// Whether `address` is a system wallet. `None` (contract creation) never is.
    pub fn contains(&self, address: Option<&Address>) -> bool {
        address.is_some_and(|addr| self.wallets.contains(addr))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.wallets.iter()
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }
}

impl Default for SystemWalletSet {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_WALLETS)
    }
}

impl FromIterator<Address> for SystemWalletSet {
    fn from_iter<I: IntoIterator<Item = Address>>(iter: I) -> Self {
        Self::new(iter)
    }
}
