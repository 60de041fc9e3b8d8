//! Wallet Access-Control Evaluation
//!
//! Decides whether a sender may transact with a receiver using the status
//! codes the access-control contract records for each wallet.
//!
//! Architecture:
//!   AccessEvaluator::check(sender, receiver)
//!     → system wallet? → allowed, no state read
//!     → resolve_status(sender), resolve_status(receiver)   (onchain)
//!     → StatusScheme::classify                              (code → WalletStatus)
//!     → PolicyVersion::decide                               (ordered rule table)
//!   ↓
//!   Decision::Allowed(rule) | Decision::Denied(reason)

pub mod decision;
pub mod errors;
pub mod evaluator;
pub mod policy;
pub mod status;
pub mod system;

pub use decision::{AllowRule, Decision, DenyReason, Party};
pub use errors::AccessError;
pub use evaluator::{AccessEvaluator, TransactionParties};
pub use policy::PolicyVersion;
pub use status::{StatusScheme, WalletStatus};
pub use system::SystemWalletSet;
