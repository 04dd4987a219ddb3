//  ERRORS.rs
//    by Lut99
//
//  Created:
//    15 Feb 2023, 11:05:29
//  Last edited:
//    15 Feb 2023, 11:41:17
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines errors that occur in the `salmon-ctl` crate.
//

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FResult};
use std::path::PathBuf;

use salmon_cfg::errors::ProfileConfigError;
use salmon_chain::errors::ContractError;


/***** LIBRARY *****/
/// Errors that relate to loading and saving world-state snapshots.
#[derive(Debug)]
pub enum StoreError {
    /// Failed to read the given snapshot file.
    FileReadError{ path: PathBuf, err: std::io::Error },
    /// Failed to parse the given snapshot file as JSON.
    FileParseError{ path: PathBuf, err: serde_json::Error },

    /// Failed to serialize the state.
    StateSerializeError{ err: serde_json::Error },
    /// Failed to create the given snapshot file.
    FileCreateError{ path: PathBuf, err: std::io::Error },
    /// Failed to write to the given snapshot file.
    FileWriteError{ path: PathBuf, err: std::io::Error },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        use StoreError::*;
        match self {
            FileReadError{ path, err }  => write!(f, "Failed to read the state snapshot '{}': {}", path.display(), err),
            FileParseError{ path, err } => write!(f, "Failed to parse state snapshot '{}' as JSON: {}", path.display(), err),

            StateSerializeError{ err }   => write!(f, "Failed to serialize world state to JSON: {}", err),
            FileCreateError{ path, err } => write!(f, "Failed to create the state snapshot '{}': {}", path.display(), err),
            FileWriteError{ path, err }  => write!(f, "Failed to write to the state snapshot '{}': {}", path.display(), err),
        }
    }
}

impl Error for StoreError {}



/// Errors that occur while running `salmonctl` subcommands.
#[derive(Debug)]
pub enum CtlError {
    /// Failed to load or save the world-state snapshot.
    StoreError{ err: StoreError },
    /// A contract function failed.
    ContractError{ contract: &'static str, function: String, err: ContractError },
    /// Failed to write the resolved profile configuration.
    ProfileGenerateError{ path: PathBuf, err: ProfileConfigError },
}

impl Display for CtlError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        use CtlError::*;
        match self {
            StoreError{ err }                       => write!(f, "{}", err),
            ContractError{ contract, function, err } => write!(f, "Failed to run '{}' on the {} contract: {}", function, contract, err),
            ProfileGenerateError{ path, err }        => write!(f, "Failed to generate profile configuration '{}': {}", path.display(), err),
        }
    }
}

impl Error for CtlError {}

impl From<StoreError> for CtlError {
    #[inline]
    fn from(err: StoreError) -> Self { Self::StoreError{ err } }
}
