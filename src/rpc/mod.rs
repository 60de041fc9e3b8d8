//! Access RPC Namespace
//!
//! Read-only methods for inspecting wallet classifications and dry-running
//! the admission check. Registered as the `access_*` namespace.

pub mod api;
pub mod types;

pub use api::AccessApiServer;
pub use types::{CallDescription, PolicyResponse, TransferCheckResponse, WalletStatusResponse};

use crate::abi::ContractAbi;
use crate::access::AccessEvaluator;
use crate::onchain::{read_current_owner, StateReadError, StorageReaderFactory};
use alloy_primitives::{hex, Address, Bytes};
use jsonrpsee::core::RpcResult;
use jsonrpsee::types::{ErrorObject, ErrorObjectOwned};
use std::sync::Arc;

/// Error code returned when chain state cannot be read.
pub const STATE_UNAVAILABLE_CODE: i32 = -32000;

fn state_error(err: StateReadError) -> ErrorObjectOwned {
    ErrorObject::owned(STATE_UNAVAILABLE_CODE, err.to_string(), None::<()>)
}

/// Implementation of the `access_*` RPC namespace.
pub struct AccessRpc<F> {
    evaluator: Arc<AccessEvaluator>,
    state: F,
    abi: Arc<ContractAbi>,
}

impl<F> AccessRpc<F> {
    /// Create a new AccessRpc instance.
    pub fn new(evaluator: Arc<AccessEvaluator>, state: F, abi: Arc<ContractAbi>) -> Self {
        Self { evaluator, state, abi }
    }
}

#[async_trait::async_trait]
impl<F> AccessApiServer for AccessRpc<F>
where
    F: StorageReaderFactory + 'static,
{
    async fn wallet_status(&self, wallet: Address) -> RpcResult<WalletStatusResponse> {
        let reader = self.state.latest_reader().map_err(state_error)?;
        let system_wallet = self.evaluator.is_system(Some(&wallet));
        let code = if system_wallet {
            None
        } else {
            Some(self.evaluator.resolve_code(&reader, wallet).map_err(state_error)?)
        };
        let status = self.evaluator.wallet_status(&reader, wallet).map_err(state_error)?;

        Ok(WalletStatusResponse {
            wallet,
            status,
            code,
            slot: self.evaluator.status_slot(wallet),
            system_wallet,
        })
    }

    async fn check_transfer(
        &self,
        from: Address,
        to: Option<Address>,
    ) -> RpcResult<TransferCheckResponse> {
        let decision = match self.evaluator.stateless_decision(from) {
            Some(decision) => decision,
            None => {
                let reader = self.state.latest_reader().map_err(state_error)?;
                self.evaluator.check(&reader, from, to).map_err(state_error)?
            }
        };
        Ok(TransferCheckResponse {
            allowed: decision.is_allowed(),
            rule: decision.rule(),
            reason: decision.reason().map(|r| r.to_string()),
        })
    }

    async fn system_wallets(&self) -> RpcResult<Vec<Address>> {
        Ok(self.evaluator.system_wallets().iter().copied().collect())
    }

    async fn policy(&self) -> RpcResult<PolicyResponse> {
        Ok(PolicyResponse {
            policy: self.evaluator.policy(),
            access_control_contract: self.evaluator.contract(),
            owner_contract: self.evaluator.owner_contract(),
            mapping_slot: self.evaluator.mapping_slot(),
            status_codes: self.evaluator.scheme().clone(),
            system_wallet_count: self.evaluator.system_wallets().len(),
        })
    }

    async fn owner(&self) -> RpcResult<Address> {
        let reader = self.state.latest_reader().map_err(state_error)?;
        read_current_owner(&reader, self.evaluator.owner_contract()).map_err(state_error)
    }

    async fn describe_call(&self, input: Bytes) -> RpcResult<Option<CallDescription>> {
        Ok(self.abi.decode_read_only_call(&input).map(|f| CallDescription {
            name: f.name.clone(),
            signature: f.signature.clone(),
            selector: hex::encode_prefixed(f.selector),
            state_mutability: f.state_mutability,
        }))
    }
}
