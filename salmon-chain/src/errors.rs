//  ERRORS.rs
//    by Lut99
//
//  Created:
//    14 Feb 2023, 13:12:55
//  Last edited:
//    15 Feb 2023, 10:08:31
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines errors that occur in the `salmon-chain` crate.
//

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FResult};


/***** LIBRARY *****/
/// Errors that relate to reading or writing the world state.
#[derive(Debug)]
pub enum StateError {
    /// Failed to read the value stored under the given key.
    ReadError{ key: String, err: Box<dyn Error + Send + Sync> },
    /// Failed to write the value stored under the given key.
    WriteError{ key: String, err: Box<dyn Error + Send + Sync> },
    /// Failed to iterate over a range of keys.
    RangeError{ start: String, end: String, err: Box<dyn Error + Send + Sync> },
}

impl Display for StateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        use StateError::*;
        match self {
            ReadError{ key, err }         => write!(f, "Failed to read state entry '{}': {}", key, err),
            WriteError{ key, err }        => write!(f, "Failed to write state entry '{}': {}", key, err),
            RangeError{ start, end, err } => write!(f, "Failed to iterate over state range ['{}', '{}'): {}", start, end, err),
        }
    }
}

impl Error for StateError {}



/// Errors that relate to running a contract function.
#[derive(Debug)]
pub enum ContractError {
    /// The function was called with the wrong number of arguments.
    IllegalArgCount{ function: &'static str, got: usize, expected: &'static str },
    /// The given function is not part of the invoked contract.
    UnknownFunction{ raw: String },

    /// The seed count passed to the ledger initialization did not parse as a number.
    IllegalCount{ raw: String, err: std::num::ParseIntError },
    /// The agreed price did not parse as a number.
    IllegalPrice{ raw: String, err: std::num::ParseFloatError },

    /// No record is stored under the given id.
    MissingRecord{ what: &'static str, id: String },
    /// Failed to serialize a record for storage.
    RecordSerializeError{ what: &'static str, err: serde_json::Error },
    /// Failed to deserialize a stored record.
    RecordDeserializeError{ what: &'static str, id: String, err: serde_json::Error },

    /// The world state failed underneath us.
    StateError{ err: StateError },
}

impl Display for ContractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        use ContractError::*;
        match self {
            IllegalArgCount{ function, got, expected } => write!(f, "Incorrect number of arguments for '{}': got {}, expecting {}", function, got, expected),
            UnknownFunction{ raw }                     => write!(f, "No function '{}' in this contract", raw),

            IllegalCount{ raw, err } => write!(f, "Cannot parse seed count '{}' as a number: {}", raw, err),
            IllegalPrice{ raw, err } => write!(f, "Cannot parse price '{}' as a number: {}", raw, err),

            MissingRecord{ what, id }               => write!(f, "No {} recorded under id '{}'", what, id),
            RecordSerializeError{ what, err }       => write!(f, "Failed to serialize {} record: {}", what, err),
            RecordDeserializeError{ what, id, err } => write!(f, "Failed to deserialize {} record '{}': {}", what, id, err),

            StateError{ err } => write!(f, "World state failure: {}", err),
        }
    }
}

impl Error for ContractError {}

impl From<StateError> for ContractError {
    #[inline]
    fn from(err: StateError) -> Self { Self::StateError{ err } }
}
