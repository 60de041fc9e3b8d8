use alloy_primitives::{Address, Bytes};
use jsonrpsee::{core::RpcResult, proc_macros::rpc};

use super::types::{CallDescription, PolicyResponse, TransferCheckResponse, WalletStatusResponse};

/// The `access_*` RPC namespace definition.
#[rpc(server, namespace = "access")]
pub trait AccessApi {
    /// Returns a wallet's access-control classification at the latest block.
    #[method(name = "walletStatus")]
    async fn wallet_status(&self, wallet: Address) -> RpcResult<WalletStatusResponse>;

    /// Dry-runs the admission check for a transfer without submitting anything.
    #[method(name = "checkTransfer")]
    async fn check_transfer(
        &self,
        from: Address,
        to: Option<Address>,
    ) -> RpcResult<TransferCheckResponse>;

    /// Returns the configured system wallets.
    #[method(name = "systemWallets")]
    async fn system_wallets(&self) -> RpcResult<Vec<Address>>;

    /// Returns the enforced policy and where statuses are read from.
    #[method(name = "policy")]
    async fn policy(&self) -> RpcResult<PolicyResponse>;

    /// Returns the current owner recorded in the owner contract.
    #[method(name = "owner")]
    async fn owner(&self) -> RpcResult<Address>;

    /// Identifies a read-only token contract call from its calldata.
    #[method(name = "describeCall")]
    async fn describe_call(&self, input: Bytes) -> RpcResult<Option<CallDescription>>;
}
