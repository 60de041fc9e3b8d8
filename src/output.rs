//! Colored console output for the `wac` tool.
//!
//! Color scheme: blue+bold headers, cyan values, green for allowed / OK,
//! red for denied, yellow for restricted statuses and warnings, dimmed
//! secondary text.

use crate::abi::AbiFunction;
use crate::access::{Decision, PolicyVersion, SystemWalletSet, WalletStatus};
use alloy_primitives::{hex, Address, B256, U256};
use colored::{ColoredString, Colorize};
use std::path::Path;

// ── Helpers ────────────────────────────────────────────────────────

/// Format a 4-byte selector as `0x`-prefixed hex.
pub fn format_selector(selector: [u8; 4]) -> String {
    hex::encode_prefixed(selector)
}

/// Format a receiver, rendering contract creation as `(create)`.
pub fn format_receiver(receiver: Option<&Address>) -> String {
    match receiver {
        Some(to) => to.to_string(),
        None => "(create)".to_string(),
    }
}

/// Format a stored status code; system wallets have none.
pub fn format_code(code: Option<U256>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "-".to_string(),
    }
}

fn colored_status(status: WalletStatus) -> ColoredString {
    let label = status.as_str();
    if status.is_whitelisted() {
        label.green()
    } else if status == WalletStatus::Unrecognized || status == WalletStatus::Blacklisted {
        label.red().bold()
    } else if status.is_send_restricted() || status.is_receive_restricted() {
        label.yellow()
    } else {
        label.cyan()
    }
}

// ── Banner & Sources ───────────────────────────────────────────────

/// Print the banner with the enforced policy and where statuses live.
pub fn print_banner(policy: PolicyVersion, contract: &Address, mapping_slot: U256) {
    println!();
    println!("{}", "=== Wallet Access Control ===".blue().bold());
    println!("  Policy:       {}", policy.to_string().cyan());
    println!("  Contract:     {}", format!("{contract}").cyan());
    println!("  Mapping slot: {}", mapping_slot.to_string().cyan());
}

/// Print which config file was loaded.
pub fn print_config_source(path: Option<&Path>) {
    match path {
        Some(path) => println!(
            "  Config:       {}",
            path.display().to_string().dimmed()
        ),
        None => println!("  Config:       {}", "built-in defaults".dimmed()),
    }
}

/// Print which genesis file backs state reads.
pub fn print_state_source(path: Option<&Path>, accounts: usize) {
    match path {
        Some(path) => println!(
            "  State:        {} ({} accounts)",
            path.display().to_string().dimmed(),
            accounts.to_string().cyan()
        ),
        None => println!(
            "  {} No --genesis given; every wallet reads as never written.",
            "WARNING:".yellow().bold()
        ),
    }
}

// ── Queries ────────────────────────────────────────────────────────

/// Print the storage slot holding a wallet's status.
pub fn print_slot(wallet: &Address, mapping_slot: U256, slot: &B256) {
    println!();
    println!(
        "  {} @ mapping slot {}",
        format!("{wallet}").cyan(),
        mapping_slot.to_string().dimmed()
    );
    println!("    {}", format!("{slot}").cyan());
}

/// Print one wallet's classification.
pub fn print_status(wallet: &Address, status: WalletStatus, code: Option<U256>, system: bool) {
    println!(
        "  {}  {:<18} code {}{}",
        format!("{wallet}").cyan(),
        colored_status(status),
        format_code(code).dimmed(),
        if system { " (system)".dimmed().to_string() } else { String::new() }
    );
}

/// Print an admission verdict.
pub fn print_decision(sender: &Address, receiver: Option<&Address>, decision: &Decision) {
    println!();
    println!(
        "  {} -> {}",
        format!("{sender}").cyan(),
        format_receiver(receiver).cyan()
    );
    match decision {
        Decision::Allowed(rule) => {
            println!("  {} {}", "ALLOWED".green().bold(), rule.to_string().dimmed())
        }
        Decision::Denied(reason) => println!("  {} {}", "DENIED".red().bold(), reason),
    }
}

/// Print the owner recorded in the owner contract.
pub fn print_owner(owner_contract: &Address, owner: &Address) {
    println!();
    println!(
        "  Owner contract {}: owner {}",
        format!("{owner_contract}").dimmed(),
        format!("{owner}").cyan()
    );
    if owner.is_zero() {
        println!(
            "  {} owner slot is unset",
            "WARNING:".yellow().bold()
        );
    }
}

/// Print the system wallet list.
pub fn print_system_wallets(wallets: &SystemWalletSet) {
    println!();
    println!(
        "{} ({}):",
        "System wallets".blue().bold(),
        wallets.len().to_string().cyan()
    );
    for (i, wallet) in wallets.iter().enumerate() {
        println!(
            "  {}. {}",
            (i + 1).to_string().dimmed(),
            format!("{wallet}").cyan()
        );
    }
}

/// Print one ABI function with its selector.
pub fn print_abi_function(function: &AbiFunction) {
    let mutability = format!("{:?}", function.state_mutability).to_lowercase();
    println!(
        "  {}  {} {}",
        format_selector(function.selector).cyan(),
        function.signature,
        if function.is_read_only() { mutability.green() } else { mutability.dimmed() }
    );
}

// ── RPC ────────────────────────────────────────────────────────────

/// Print that a custom RPC namespace was registered.
pub fn print_rpc_registered(namespace: &str) {
    println!(
        "  {} {} RPC namespace registered",
        "OK".green().bold(),
        namespace.cyan()
    );
}

/// Print the "running" message with the RPC URL.
pub fn print_running(http_addr: &str, http_port: u16) {
    println!();
    println!(
        "{}",
        "Access RPC running. Press Ctrl+C to stop.".green().bold()
    );
    println!(
        "  HTTP RPC: {}",
        format!("http://{http_addr}:{http_port}").cyan()
    );
}

/// Print a shutdown message with the reason.
pub fn print_shutdown(reason: &str) {
    println!();
    println!("  {} {}", "SHUTDOWN".yellow().bold(), reason.yellow(),);
}

/// Print a generic informational message.
pub fn print_info(msg: &str) {
    println!("  {} {}", "INFO".blue().bold(), msg,);
}

// ── Tests ───────────────────────────────────────────────────────────
