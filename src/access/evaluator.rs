use super::decision::{AllowRule, Decision, Party};
use super::errors::AccessError;
use super::policy::PolicyVersion;
use super::status::{StatusScheme, WalletStatus};
use super::system::SystemWalletSet;
use crate::config::{AccessControlConfig, ConfigError};
use crate::onchain::{mapping_address_slot, resolve_status, StateReadError, StorageReader};
use alloy_consensus::transaction::Recovered;
use alloy_primitives::{Address, B256, U256};
use tracing::{debug, warn};

/// Exposes the two parties of a host-chain transaction.
pub trait TransactionParties {
    /// Recovered sender.
    fn sender(&self) -> Address;

    /// Receiver, or `None` for contract creation.
    fn receiver(&self) -> Option<Address>;
}

impl TransactionParties for (Address, Option<Address>) {
    fn sender(&self) -> Address {
        self.0
    }

    fn receiver(&self) -> Option<Address> {
        self.1
    }
}

impl<T: alloy_consensus::Transaction> TransactionParties for Recovered<T> {
    fn sender(&self) -> Address {
        self.signer()
    }

    fn receiver(&self) -> Option<Address> {
        self.inner().to()
    }
}

/// Decides whether a transfer may enter the pool or a block.
///
/// Holds only immutable configuration, so one instance can be shared behind an
/// `Arc` by every admission path without locking.
#[derive(Debug, Clone)]
pub struct AccessEvaluator {
    policy: PolicyVersion,
    contract: Address,
    owner_contract: Address,
    mapping_slot: U256,
    scheme: StatusScheme,
    system_wallets: SystemWalletSet,
}

impl AccessEvaluator {
    /// Validate `config` and build an evaluator from it.
    pub fn new(config: AccessControlConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            policy: config.policy,
            contract: config.contract,
            owner_contract: config.owner_contract,
            mapping_slot: config.mapping_slot(),
            scheme: config.scheme(),
            system_wallets: config.system_wallets,
        })
    }

    pub fn policy(&self) -> PolicyVersion {
        self.policy
    }

    /// Access-control contract address.
    pub fn contract(&self) -> Address {
        self.contract
    }

    /// Owner contract address.
    pub fn owner_contract(&self) -> Address {
        self.owner_contract
    }

    /// Declared slot of the status mapping.
    pub fn mapping_slot(&self) -> U256 {
        self.mapping_slot
    }

    pub fn scheme(&self) -> &StatusScheme {
        &self.scheme
    }

    pub fn system_wallets(&self) -> &SystemWalletSet {
        &self.system_wallets
    }

    pub fn is_system(&self, address: Option<&Address>) -> bool {
        self.system_wallets.contains(address)
    }

    /// Storage slot holding `wallet`'s status.
    pub fn status_slot(&self, wallet: Address) -> B256 {
        mapping_address_slot(wallet, self.mapping_slot)
    }

    /// Raw status code stored for `wallet`. Zero when never written.
    pub fn resolve_code(
        &self,
        reader: &impl StorageReader,
        wallet: Address,
    ) -> Result<U256, StateReadError> {
        resolve_status(reader, self.contract, wallet, self.mapping_slot)
    }

    /// Classification of `wallet`. System wallets are whitelisted without a state read.
    pub fn wallet_status(
        &self,
        reader: &impl StorageReader,
        wallet: Address,
    ) -> Result<WalletStatus, StateReadError> {
        Ok(self.party(reader, wallet)?.status)
    }

    fn party(&self, reader: &impl StorageReader, wallet: Address) -> Result<Party, StateReadError> {
        if self.is_system(Some(&wallet)) {
            return Ok(Party::system());
        }
        let code = self.resolve_code(reader, wallet)?;
        Ok(Party::wallet(self.scheme.classify(code)))
    }

    /// Run the decision table over already-resolved parties. Pure and total.
    pub fn evaluate(&self, sender: Party, receiver: Option<Party>) -> Decision {
        self.policy.decide(sender, receiver)
    }

    /// Verdict reachable without reading state: system senders are always allowed.
    ///
    /// Callers that open a state snapshot per check consult this first so a
    /// system sender is never blocked by unavailable state.
    pub fn stateless_decision(&self, sender: Address) -> Option<Decision> {
        self.is_system(Some(&sender))
            .then_some(Decision::Allowed(AllowRule::SystemSender))
    }

    /// Resolve both parties against `reader` and decide.
    ///
    /// State failures are returned as errors and never read as a status.
    pub fn check(
        &self,
        reader: &impl StorageReader,
        sender: Address,
        receiver: Option<Address>,
    ) -> Result<Decision, StateReadError> {
        if let Some(decision) = self.stateless_decision(sender) {
            return Ok(decision);
        }

        let resolved = self.party(reader, sender).and_then(|sender_party| {
            let receiver_party = receiver.map(|to| self.party(reader, to)).transpose()?;
            Ok((sender_party, receiver_party))
        });
        let (sender_party, receiver_party) = match resolved {
            Ok(parties) => parties,
            Err(err) => {
                warn!(target: "access", %sender, ?receiver, %err, "wallet status unavailable");
                return Err(err);
            }
        };

        let decision = self.evaluate(sender_party, receiver_party);
        if let Decision::Denied(reason) = decision {
            debug!(
                target: "access",
                %sender,
                ?receiver,
                sender_status = %sender_party.status,
                receiver_status = ?receiver_party.map(|p| p.status),
                %reason,
                "transaction denied"
            );
        }
        Ok(decision)
    }

    /// Decide for any host transaction type.
    pub fn check_transaction<T: TransactionParties>(
        &self,
        reader: &impl StorageReader,
        tx: &T,
    ) -> Result<Decision, StateReadError> {
        self.check(reader, tx.sender(), tx.receiver())
    }

    /// Whether `tx`, sent by `sender`, may be admitted.
    pub fn is_transaction_allowed<T: alloy_consensus::Transaction>(
        &self,
        tx: &T,
        sender: Address,
        reader: &impl StorageReader,
    ) -> Result<bool, StateReadError> {
        Ok(self.check(reader, sender, tx.to())?.is_allowed())
    }

    /// Like [`Self::check`], with denial turned into an error carrying the reason.
    pub fn ensure_allowed(
        &self,
        reader: &impl StorageReader,
        sender: Address,
        receiver: Option<Address>,
    ) -> Result<AllowRule, AccessError> {
        Ok(self.check(reader, sender, receiver)?.into_result()?)
    }
}
