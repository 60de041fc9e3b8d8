//! Versioned decision tables.
//!
//! The access-control contract has shipped two incompatible revisions. Which
//! one a node enforces is chosen at configuration time; the two are never
//! merged.
//!
//! | | `legacy` (v1) | `directional` (v2) |
//! |---|---|---|
//! | status mapping slot | 3 | 4 |
//! | zero code | blacklisted | unlisted |
//! | default stance | deny unless whitelisted | allow unless restricted |

use super::decision::{AllowRule, Decision, DenyReason, Party};
use super::status::{StatusScheme, WalletStatus};
use crate::constants::{directional_codes, legacy_codes};
use crate::onchain::access_control_slots;
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which access-control contract revision the node enforces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyVersion {
    /// First revision: whitelist / greylist / blacklist, zero means blacklisted.
    #[serde(alias = "v1")]
    Legacy,
    /// Directional revision: send/receive greylisting, zero means unlisted.
    #[default]
    #[serde(alias = "v2")]
    Directional,
}

impl PolicyVersion {
    /// Slot at which this revision declares its status mapping.
    pub const fn default_mapping_slot(self) -> U256 {
        match self {
            Self::Legacy => access_control_slots::LEGACY_STATUS_MAPPING,
            Self::Directional => access_control_slots::DIRECTIONAL_STATUS_MAPPING,
        }
    }

    /// Code table written by this revision of the contract.
    pub fn default_scheme(self) -> StatusScheme {
        match self {
            Self::Legacy => StatusScheme::new([
                (legacy_codes::BLACKLISTED, WalletStatus::Blacklisted),
                (legacy_codes::WHITELISTED, WalletStatus::Whitelisted),
                (legacy_codes::GREYLISTED, WalletStatus::Greylisted),
            ]),
            Self::Directional => StatusScheme::new([
                (directional_codes::UNLISTED, WalletStatus::Unlisted),
                (directional_codes::WHITELISTED, WalletStatus::Whitelisted),
                (directional_codes::SEND_GREYLISTED, WalletStatus::SendGreylisted),
                (directional_codes::RECEIVE_GREYLISTED, WalletStatus::ReceiveGreylisted),
            ]),
        }
    }

    /// Status a never-written slot reads as.
    pub const fn unwritten_status(self) -> WalletStatus {
        match self {
            Self::Legacy => WalletStatus::Blacklisted,
            Self::Directional => WalletStatus::Unlisted,
        }
    }

    /// Whether this revision's rules give `status` a meaning.
    pub const fn understands(self, status: WalletStatus) -> bool {
        match self {
            Self::Legacy => matches!(
                status,
                WalletStatus::Whitelisted | WalletStatus::Greylisted | WalletStatus::Blacklisted
            ),
            Self::Directional => !matches!(status, WalletStatus::Unrecognized),
        }
    }

    /// Run this revision's decision table. First matching rule wins.
    pub fn decide(self, sender: Party, receiver: Option<Party>) -> Decision {
        if sender.is_system {
            return Decision::Allowed(AllowRule::SystemSender);
        }
        match self {
            Self::Legacy => decide_legacy(sender, receiver),
            Self::Directional => decide_directional(sender, receiver),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legacy => "legacy",
            Self::Directional => "directional",
        }
    }
}

fn decide_legacy(sender: Party, receiver: Option<Party>) -> Decision {
    use WalletStatus::{Blacklisted, Greylisted, Unrecognized};

    let Some(receiver) = receiver else {
        return if sender.status.is_whitelisted() {
            Decision::Allowed(AllowRule::WhitelistedCreation)
        } else {
            Decision::Denied(DenyReason::for_sender(sender.status))
        };
    };

    let reason = match (sender.status, receiver.status) {
        (s, r) if s.is_whitelisted() && r.is_whitelisted() => {
            return Decision::Allowed(AllowRule::BothWhitelisted)
        }
        (Greylisted, _) if receiver.is_system => {
            return Decision::Allowed(AllowRule::RestrictedToSystem)
        }
        (Blacklisted, _) => DenyReason::SenderBlacklisted,
        (_, Blacklisted) => DenyReason::ReceiverBlacklisted,
        (Greylisted, _) => DenyReason::SenderGreylisted,
        (_, Greylisted) => DenyReason::ReceiverGreylisted,
        (Unrecognized, _) => DenyReason::SenderUnrecognized,
        (_, Unrecognized) => DenyReason::ReceiverUnrecognized,
        _ => DenyReason::NotPermitted,
    };
    Decision::Denied(reason)
}

fn decide_directional(sender: Party, receiver: Option<Party>) -> Decision {
    let sender_restricted = sender.status.is_send_restricted();
    let receiver_restricted = receiver.is_some_and(|r| r.status.is_receive_restricted());

    if sender.status.is_whitelisted() {
        match receiver {
            None => return Decision::Allowed(AllowRule::WhitelistedCreation),
            Some(r) if r.status.is_whitelisted() => {
                return Decision::Allowed(AllowRule::BothWhitelisted)
            }
            Some(_) => {}
        }
    }
    if !sender_restricted && !receiver_restricted {
        return Decision::Allowed(AllowRule::Unrestricted);
    }
    if sender_restricted && receiver.is_some_and(|r| r.is_system) {
        return Decision::Allowed(AllowRule::RestrictedToSystem);
    }

    let reason = match receiver {
        _ if sender_restricted => DenyReason::for_sender(sender.status),
        Some(r) => DenyReason::for_receiver(r.status),
        None => DenyReason::NotPermitted,
    };
    Decision::Denied(reason)
}

impl fmt::Display for PolicyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PolicyVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" | "v1" => Ok(Self::Legacy),
            "directional" | "v2" => Ok(Self::Directional),
            other => Err(format!("unknown policy version '{other}' (expected legacy|v1|directional|v2)")),
        }
    }
}
