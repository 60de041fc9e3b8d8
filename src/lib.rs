//! # Wallet access control for a Reth-based chain
//!
//! Decides whether a transaction may enter the pool or a block by reading
//! per-wallet statuses straight out of an access-control contract's storage.
//! Two contract revisions are supported: the legacy whitelist / greylist /
//! blacklist contract and the directional contract with separate send and
//! receive greylisting.

pub mod abi;
pub mod access;
pub mod cli;
pub mod config;
pub mod constants;
pub mod genesis;
pub mod onchain;
pub mod output;
pub mod pool;
pub mod rpc;
