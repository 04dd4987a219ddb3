//  ERRORS.rs
//    by Lut99
//
//  Created:
//    14 Feb 2023, 10:28:12
//  Last edited:
//    14 Feb 2023, 11:02:36
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines errors that occur in the `salmon-cfg` crate.
//

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FResult};
use std::path::PathBuf;


/***** LIBRARY *****/
/// Errors that relate to parsing client identities.
#[derive(Debug)]
pub enum IdentityParseError {
    /// The given identity was not one of the known network participants.
    UnknownIdentity{ raw: String },
}

impl Display for IdentityParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        use IdentityParseError::*;
        match self {
            UnknownIdentity{ raw } => write!(f, "Unknown client identity '{}'", raw),
        }
    }
}

impl Error for IdentityParseError {}



/// Errors that relate to the ProfileConfig struct.
#[derive(Debug)]
pub enum ProfileConfigError {
    /// The given string was not one of the known profile registry keys.
    UnknownProfileKey{ raw: String },

    /// Failed to open the given config path.
    FileOpenError{ path: PathBuf, err: std::io::Error },
    /// Failed to read from the given config path.
    FileReadError{ path: PathBuf, err: std::io::Error },
    /// Failed to parse the given file.
    FileParseError{ path: PathBuf, err: serde_yaml::Error },

    /// Failed to create the given config path.
    FileCreateError{ path: PathBuf, err: std::io::Error },
    /// Failed to write to the given config path.
    FileWriteError{ path: PathBuf, err: std::io::Error },
    /// Failed to serialize the ProfileConfig.
    ConfigSerializeError{ err: serde_yaml::Error },
}

impl Display for ProfileConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        use ProfileConfigError::*;
        match self {
            UnknownProfileKey{ raw } => write!(f, "Unknown connection-profile key '{}'", raw),

            FileOpenError{ path, err }  => write!(f, "Failed to open the profile config file '{}': {}", path.display(), err),
            FileReadError{ path, err }  => write!(f, "Failed to read the profile config file '{}': {}", path.display(), err),
            FileParseError{ path, err } => write!(f, "Failed to parse profile config file '{}' as YAML: {}", path.display(), err),

            FileCreateError{ path, err } => write!(f, "Failed to create the profile config file '{}': {}", path.display(), err),
            FileWriteError{ path, err }  => write!(f, "Failed to write to the profile config file '{}': {}", path.display(), err),
            ConfigSerializeError{ err }  => write!(f, "Failed to serialize profile config to YAML: {}", err),
        }
    }
}

impl Error for ProfileConfigError {}
