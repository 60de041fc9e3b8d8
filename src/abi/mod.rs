//! Token contract ABI
//!
//! The token contract's ABI ships embedded in the binary. It is parsed and
//! checked once at startup; a malformed ABI stops the node with a
//! [`ConfigError`](crate::config::ConfigError) instead of failing later inside a
//! request handler. After loading it is only used to recognise read-only
//! calls by selector.

pub mod errors;

pub use alloy_json_abi::StateMutability;
pub use errors::AbiError;

use alloy_json_abi::{Function, JsonAbi, Param};
use std::collections::BTreeMap;

/// Embedded token contract ABI (JSON).
pub const TOKEN_ABI_JSON: &str = include_str!("token.json");

/// A validated ABI function, indexed by selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbiFunction {
    pub name: String,
    pub inputs: Vec<Param>,
    pub outputs: Vec<Param>,
    pub state_mutability: StateMutability,
    /// Canonical signature, e.g. `balanceOf(address)`
    pub signature: String,
    pub selector: [u8; 4],
}

impl AbiFunction {
    fn from_json(function: &Function) -> Self {
        Self {
            name: function.name.clone(),
            inputs: function.inputs.clone(),
            outputs: function.outputs.clone(),
            state_mutability: function.state_mutability,
            signature: function.signature(),
            selector: function.selector().0,
        }
    }

    /// Whether calling this function cannot change state.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self.state_mutability,
            StateMutability::View | StateMutability::Pure
        )
    }
}

/// A parsed and validated contract ABI.
#[derive(Debug, Clone)]
pub struct ContractAbi {
    functions: BTreeMap<[u8; 4], AbiFunction>,
    events: Vec<String>,
}

impl ContractAbi {
    /// Parse and validate an ABI JSON document.
    pub fn parse(json: &str) -> Result<Self, AbiError> {
        let abi: JsonAbi = serde_json::from_str(json)?;
        if abi.is_empty() {
            return Err(AbiError::Empty);
        }

        let mut functions: BTreeMap<[u8; 4], AbiFunction> = BTreeMap::new();
        for function in abi.functions() {
            validate_function(function)?;
            let function = AbiFunction::from_json(function);
            if let Some(existing) = functions.get(&function.selector) {
                return Err(AbiError::DuplicateSelector {
                    first: existing.signature.clone(),
                    second: function.signature,
                });
            }
            functions.insert(function.selector, function);
        }
        let events = abi.events().map(|event| event.signature()).collect();
        Ok(Self { functions, events })
    }

    /// Parse the embedded token contract ABI.
    pub fn token() -> Result<Self, AbiError> {
        Self::parse(TOKEN_ABI_JSON)
    }

    /// Look a function up by name (first overload wins).
    pub fn function(&self, name: &str) -> Option<&AbiFunction> {
        self.functions.values().find(|f| f.name == name)
    }

    /// Look a function up by its 4-byte selector.
    pub fn by_selector(&self, selector: [u8; 4]) -> Option<&AbiFunction> {
        self.functions.get(&selector)
    }

    /// Identify the function targeted by `calldata`.
    pub fn decode_call(&self, calldata: &[u8]) -> Option<&AbiFunction> {
        let selector: [u8; 4] = calldata.get(..4)?.try_into().ok()?;
        self.by_selector(selector)
    }

    /// Identify `calldata` only if it targets a read-only function.
    pub fn decode_read_only_call(&self, calldata: &[u8]) -> Option<&AbiFunction> {
        self.decode_call(calldata).filter(|f| f.is_read_only())
    }

    /// All functions, ordered by selector.
    pub fn functions(&self) -> impl Iterator<Item = &AbiFunction> {
        self.functions.values()
    }

    /// Read-only functions, ordered by selector.
    pub fn read_only_functions(&self) -> impl Iterator<Item = &AbiFunction> {
        self.functions().filter(|f| f.is_read_only())
    }

    /// Canonical event signatures.
    pub fn events(&self) -> &[String] {
        &self.events
    }
}

fn validate_function(function: &Function) -> Result<(), AbiError> {
    if function.name.is_empty() {
        return Err(AbiError::MissingName);
    }
    if let Some(param) = function
        .inputs
        .iter()
        .chain(&function.outputs)
        .find(|p| p.ty.is_empty())
    {
        return Err(AbiError::EmptyType {
            function: function.name.clone(),
            param: param.name.clone(),
        });
    }
    Ok(())
}
