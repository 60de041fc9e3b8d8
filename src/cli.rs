use crate::access::PolicyVersion;
use alloy_primitives::Address;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the wallet access-control tool
#[derive(Parser, Debug)]
#[command(name = "wac", about = "Wallet access-control inspector and dry-run RPC")]
pub struct Cli {
    /// Access-control config file (JSON). Built-in defaults are used when omitted.
    #[arg(long, global = true, env = "WAC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Contract revision to enforce: `legacy` (v1) or `directional` (v2).
    ///
    /// Overrides the policy in `--config`. The mapping slot and status codes
    /// follow the policy unless the config file pins them.
    #[arg(long, global = true)]
    pub policy: Option<PolicyVersion>,

    /// Genesis file whose alloc provides contract storage.
    ///
    /// Without it every wallet reads as never written.
    #[arg(long, global = true)]
    pub genesis: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the storage slot holding a wallet's status.
    Slot {
        wallet: Address,

        /// Mapping slot to hash against instead of the configured one.
        #[arg(long)]
        slot_index: Option<u64>,
    },

    /// Print the classification of one or more wallets.
    Status {
        #[arg(required = true)]
        wallets: Vec<Address>,
    },

    /// Dry-run the admission check for a transfer.
    Check {
        /// Transaction sender
        #[arg(long)]
        from: Address,

        /// Transaction receiver; omit for a contract creation
        #[arg(long)]
        to: Option<Address>,
    },

    /// Print the owner recorded in the owner contract.
    Owner,

    /// List the configured system wallets.
    Wallets,

    /// List the token contract's functions and selectors.
    Abi {
        /// Only list view/pure functions
        #[arg(long)]
        read_only: bool,
    },

    /// Print a genesis file with the access-control storage seeded.
    ///
    /// Starts from `--genesis` when given, otherwise from an empty genesis.
    Genesis {
        /// Owner written to slot 0 of the owner contract
        #[arg(long)]
        owner: Address,

        /// Status assignments as `<address>=<code>`, comma-separated.
        /// Example: `--set 0xaaaa...=1,0xbbbb...=3`
        #[arg(long = "set", value_delimiter = ',', value_parser = parse_assignment)]
        assignments: Vec<(Address, u64)>,
    },

    /// Serve the `access_*` JSON-RPC namespace over the genesis state.
    Serve {
        /// HTTP RPC listen address
        #[arg(long, default_value = "127.0.0.1")]
        http_addr: String,

        /// HTTP RPC port
        #[arg(long, default_value = "8547")]
        http_port: u16,
    },
}

/// Parse an `<address>=<code>` status assignment.
pub fn parse_assignment(s: &str) -> Result<(Address, u64), String> {
    let (wallet, code) = s
        .split_once('=')
        .ok_or_else(|| format!("expected <address>=<code>, got `{s}`"))?;
    let wallet = wallet
        .trim()
        .parse::<Address>()
        .map_err(|e| format!("invalid address `{wallet}`: {e}"))?;
    let code = code
        .trim()
        .parse::<u64>()
        .map_err(|e| format!("invalid status code `{code}`: {e}"))?;
    Ok((wallet, code))
}
