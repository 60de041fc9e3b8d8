use wallet_access_node::abi::ContractAbi;
use wallet_access_node::access::AccessEvaluator;
use wallet_access_node::cli::{Cli, Command};
use wallet_access_node::config::{AccessControlConfig, ConfigError};
use wallet_access_node::genesis::seed_genesis;
use wallet_access_node::onchain::{mapping_address_slot, read_current_owner, GenesisStorageReader};
use wallet_access_node::output;
use wallet_access_node::rpc::{AccessApiServer, AccessRpc};

use alloy_genesis::Genesis;
use alloy_primitives::U256;
use clap::Parser;
use jsonrpsee::server::Server;
use std::path::Path;
use std::sync::Arc;

fn load_genesis(path: &Path) -> eyre::Result<Genesis> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read genesis {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&json)?)
}

/// Main entry point for the `wac` tool
#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize tracing
    reth_tracing::init_test_tracing();

    let cli = Cli::parse();

    // Load and validate configuration before touching any state
    let mut config = match &cli.config {
        Some(path) => AccessControlConfig::load(path)?,
        None => AccessControlConfig::default(),
    };
    if let Some(policy) = cli.policy {
        config.policy = policy;
    }
    let evaluator = Arc::new(AccessEvaluator::new(config.clone())?);
    let abi = Arc::new(ContractAbi::token().map_err(ConfigError::from)?);

    let genesis = match &cli.genesis {
        Some(path) => load_genesis(path)?,
        None => Genesis::default(),
    };

    // Emits JSON on stdout, so no banner
    if let Command::Genesis { owner, assignments } = &cli.command {
        let seeded = seed_genesis(genesis, &config, *owner, assignments);
        println!("{}", serde_json::to_string_pretty(&seeded)?);
        return Ok(());
    }

    output::print_banner(evaluator.policy(), &evaluator.contract(), evaluator.mapping_slot());
    output::print_config_source(cli.config.as_deref());
    output::print_state_source(cli.genesis.as_deref(), genesis.alloc.len());

    let state = GenesisStorageReader::from_genesis(&genesis);

    match cli.command {
        Command::Slot { wallet, slot_index } => {
            let mapping_slot = slot_index.map(U256::from).unwrap_or(evaluator.mapping_slot());
            output::print_slot(&wallet, mapping_slot, &mapping_address_slot(wallet, mapping_slot));
        }
        Command::Status { wallets } => {
            println!();
            for wallet in wallets {
                let system = evaluator.is_system(Some(&wallet));
                let code = if system { None } else { Some(evaluator.resolve_code(&state, wallet)?) };
                let status = evaluator.wallet_status(&state, wallet)?;
                output::print_status(&wallet, status, code, system);
            }
        }
        Command::Check { from, to } => {
            let decision = evaluator.check(&state, from, to)?;
            output::print_decision(&from, to.as_ref(), &decision);
        }
        Command::Owner => {
            let owner = read_current_owner(&state, evaluator.owner_contract())?;
            output::print_owner(&evaluator.owner_contract(), &owner);
        }
        Command::Wallets => output::print_system_wallets(evaluator.system_wallets()),
        Command::Abi { read_only } => {
            println!();
            for function in abi.functions().filter(|f| !read_only || f.is_read_only()) {
                output::print_abi_function(function);
            }
            output::print_info(&format!("{} events declared", abi.events().len()));
        }
        Command::Serve { http_addr, http_port } => {
            let server = Server::builder().build(format!("{http_addr}:{http_port}")).await?;
            let rpc = AccessRpc::new(evaluator.clone(), state, abi.clone());
            let handle = server.start(rpc.into_rpc());
            output::print_rpc_registered("access_*");
            output::print_running(&http_addr, http_port);

            tokio::signal::ctrl_c().await?;
            output::print_shutdown("received Ctrl+C");
            handle.stop()?;
            handle.stopped().await;
        }
        Command::Genesis { .. } => {}
    }

    Ok(())
}
