use super::helpers::{encode_u256, mapping_address_slot};
use super::{StateReadError, StorageReader, StorageReaderFactory};
use alloy_primitives::{Address, B256, U256};
use reth_storage_api::{StateProvider, StateProviderBox, StateProviderFactory};
use std::collections::BTreeMap;

/// Wraps a Reth `StateProvider` reference to implement the `StorageReader` trait.
///
/// This is the production adapter that reads from the live database. Provider
/// errors surface as [`StateReadError::SlotRead`]; they are never folded into
/// a zero value.
///
/// # Usage
/// ```ignore
/// let state = provider.latest()?;
/// let reader = StateProviderStorageReader(state.as_ref());
/// let status = evaluator.wallet_status(&reader, wallet)?;
/// ```
pub struct StateProviderStorageReader<'a>(pub &'a dyn StateProvider);

impl<'a> StorageReader for StateProviderStorageReader<'a> {
    fn read_storage(&self, address: Address, slot: B256) -> Result<Option<B256>, StateReadError> {
        self.0
            .storage(address, slot)
            .map(|value| value.map(encode_u256))
            .map_err(|e| StateReadError::SlotRead {
                address,
                slot,
                reason: e.to_string(),
            })
    }
}

/// An owned boxed state provider, as returned by `StateProviderFactory::latest`.
struct BoxedStateReader(StateProviderBox);

impl StorageReader for BoxedStateReader {
    fn read_storage(&self, address: Address, slot: B256) -> Result<Option<B256>, StateReadError> {
        StateProviderStorageReader(self.0.as_ref()).read_storage(address, slot)
    }
}

/// Hands out readers over the latest canonical state of a Reth provider.
///
/// Used by the `access_*` RPC namespace and the pool admission guard, which
/// must evaluate against the current head rather than a pinned snapshot.
#[derive(Debug, Clone)]
pub struct LatestStateReader<P> {
    provider: P,
}

impl<P> LatestStateReader<P> {
    /// Wrap a state provider factory.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

impl<P> StorageReaderFactory for LatestStateReader<P>
where
    P: StateProviderFactory + Send + Sync,
{
    fn latest_reader(&self) -> Result<Box<dyn StorageReader + Send + '_>, StateReadError> {
        let state = self
            .provider
            .latest()
            .map_err(|e| StateReadError::Unavailable(e.to_string()))?;
        Ok(Box::new(BoxedStateReader(state)))
    }
}

/// A StorageReader that reads from the genesis configuration's alloc.
///
/// This lets us verify wallet statuses seeded into genesis without needing a
/// running node. It is also what the `wac` CLI evaluates against.
#[derive(Debug, Clone)]
pub struct GenesisStorageReader {
    /// The genesis alloc to read from
    alloc: BTreeMap<Address, alloy_genesis::GenesisAccount>,
}

impl GenesisStorageReader {
    /// Create a reader from a genesis configuration.
    pub fn from_genesis(genesis: &alloy_genesis::Genesis) -> Self {
        Self {
            alloc: genesis.alloc.clone(),
        }
    }
}

impl StorageReader for GenesisStorageReader {
    fn read_storage(&self, address: Address, slot: B256) -> Result<Option<B256>, StateReadError> {
        Ok(self
            .alloc
            .get(&address)
            .and_then(|account| account.storage.as_ref())
            .and_then(|storage| storage.get(&slot).copied()))
    }
}

impl StorageReaderFactory for GenesisStorageReader {
    fn latest_reader(&self) -> Result<Box<dyn StorageReader + Send + '_>, StateReadError> {
        Ok(Box::new(self))
    }
}

/// Writable in-memory contract storage.
///
/// Stands in for the chain state in tests and offline tooling.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    storage: BTreeMap<(Address, B256), B256>,
}

impl InMemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a raw slot value.
    pub fn set(&mut self, address: Address, slot: B256, value: B256) {
        self.storage.insert((address, slot), value);
    }

    /// Write a status code for `wallet` into the mapping declared at `mapping_slot`
    /// of `contract`.
    pub fn set_status(&mut self, contract: Address, mapping_slot: U256, wallet: Address, code: u64) {
        let slot = mapping_address_slot(wallet, mapping_slot);
        self.set(contract, slot, encode_u256(U256::from(code)));
    }

    /// Number of written slots.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether nothing has been written yet.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

impl StorageReader for InMemoryStorage {
    fn read_storage(&self, address: Address, slot: B256) -> Result<Option<B256>, StateReadError> {
        Ok(self.storage.get(&(address, slot)).copied())
    }
}

impl StorageReaderFactory for InMemoryStorage {
    fn latest_reader(&self) -> Result<Box<dyn StorageReader + Send + '_>, StateReadError> {
        Ok(Box::new(self))
    }
}
