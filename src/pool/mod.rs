//! Transaction pool admission guard.
//!
//! Sits between the node's transaction pool and the access-control
//! evaluator. Every candidate transaction is checked against the latest state
//! before it is accepted into the pool or packed into a block.
//!
//! ```text
//!   eth_sendRawTransaction / p2p gossip / payload builder
//!     → AdmissionGuard::admit            (one state snapshot per call)
//!       → AccessEvaluator::check
//!         → LatestStateReader (MDBX) / InMemoryStorage (tests)
//! ```

use crate::access::{AccessError, AccessEvaluator, AllowRule, Decision, DenyReason};
use crate::onchain::{StateReadError, StorageReaderFactory};
use alloy_primitives::Address;
use reth_transaction_pool::PoolTransaction;
use std::sync::Arc;
use tracing::{debug, trace};

/// Transactions split by the access-control verdict.
#[derive(Debug)]
pub struct Partitioned<T> {
    /// Transactions that may proceed
    pub admitted: Vec<T>,
    /// Transactions refused, with the reason to report back
    pub rejected: Vec<(T, DenyReason)>,
}

impl<T> Default for Partitioned<T> {
    fn default() -> Self {
        Self {
            admitted: Vec::new(),
            rejected: Vec::new(),
        }
    }
}

/// Applies the access-control decision to pool transactions.
#[derive(Debug, Clone)]
pub struct AdmissionGuard<F> {
    evaluator: Arc<AccessEvaluator>,
    state: F,
}

impl<F: StorageReaderFactory> AdmissionGuard<F> {
    /// Create a guard reading from `state`.
    pub fn new(evaluator: Arc<AccessEvaluator>, state: F) -> Self {
        Self { evaluator, state }
    }

    pub fn evaluator(&self) -> &AccessEvaluator {
        &self.evaluator
    }

    /// Decide for a sender/receiver pair against the latest state.
    pub fn check_parties(
        &self,
        sender: Address,
        receiver: Option<Address>,
    ) -> Result<Decision, StateReadError> {
        if let Some(decision) = self.evaluator.stateless_decision(sender) {
            return Ok(decision);
        }
        let reader = self.state.latest_reader()?;
        self.evaluator.check(&reader, sender, receiver)
    }

    /// Decide for a pooled transaction.
    pub fn check_pool_transaction<T: PoolTransaction>(
        &self,
        tx: &T,
    ) -> Result<Decision, StateReadError> {
        self.check_parties(tx.sender(), tx.to())
    }

    /// Admit a pooled transaction or return why it may not enter.
    ///
    /// Unreadable state rejects the transaction; the caller may retry later.
    pub fn admit<T: PoolTransaction>(&self, tx: &T) -> Result<AllowRule, AccessError> {
        let rule = self.check_pool_transaction(tx)?.into_result()?;
        trace!(target: "access::pool", hash = %tx.hash(), %rule, "transaction admitted");
        Ok(rule)
    }

    /// Split a batch by verdict using a single state snapshot.
    ///
    /// `parties` extracts sender and receiver from each item. The snapshot is
    /// opened on the first item that needs it; if it cannot be opened, or a
    /// read fails, the error is returned and nothing is admitted.
    pub fn partition_by<T>(
        &self,
        txs: impl IntoIterator<Item = T>,
        parties: impl Fn(&T) -> (Address, Option<Address>),
    ) -> Result<Partitioned<T>, StateReadError> {
        let mut snapshot = None;
        let mut out = Partitioned::default();
        for tx in txs {
            let (sender, receiver) = parties(&tx);
            let decision = match self.evaluator.stateless_decision(sender) {
                Some(decision) => decision,
                None => {
                    let reader = match snapshot.take() {
                        Some(reader) => reader,
                        None => self.state.latest_reader()?,
                    };
                    let decision = self.evaluator.check(&reader, sender, receiver)?;
                    snapshot = Some(reader);
                    decision
                }
            };
            match decision {
                Decision::Allowed(_) => out.admitted.push(tx),
                Decision::Denied(reason) => out.rejected.push((tx, reason)),
            }
        }
        if !out.rejected.is_empty() {
            debug!(
                target: "access::pool",
                admitted = out.admitted.len(),
                rejected = out.rejected.len(),
                "filtered transaction batch"
            );
        }
        Ok(out)
    }

    /// Split pooled transactions by verdict, e.g. before packing a block.
    pub fn partition_pool_transactions<T: PoolTransaction>(
        &self,
        txs: impl IntoIterator<Item = T>,
    ) -> Result<Partitioned<T>, StateReadError> {
        self.partition_by(txs, |tx| (tx.sender(), tx.to()))
    }
}
