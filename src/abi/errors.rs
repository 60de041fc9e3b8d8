use thiserror::Error;

/// Errors found while validating a contract ABI.
#[derive(Debug, Error)]
pub enum AbiError {
    /// Not valid ABI JSON
    #[error("Malformed ABI JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// ABI has no entries
    #[error("ABI has no entries")]
    Empty,

    /// A function has an empty name
    #[error("ABI function has no name")]
    MissingName,

    /// A parameter has an empty type
    #[error("Parameter '{param}' of {function} has no type")]
    EmptyType {
        /// Function name
        function: String,
        /// Parameter name
        param: String,
    },

    /// Two functions hash to the same selector
    #[error("Functions {first} and {second} share a selector")]
    DuplicateSelector {
        /// Signature already registered
        first: String,
        /// Signature that collided
        second: String,
    },
}
