//  PROFILES.rs
//    by Lut99
//
//  Created:
//    14 Feb 2023, 10:44:19
//  Last edited:
//    15 Feb 2023, 09:31:57
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines the resolved locations of the four connection-profile files
//!   that the fabric client loads to initialize itself. The source project
//!   pushed these into a process-global registry; here they live in an
//!   explicit struct that is handed to whoever needs it.
//

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use salmon_shr::debug::EnumDebug as _;

use crate::spec::{Identity, ProfileKind};

pub use crate::errors::ProfileConfigError as Error;


/***** CONSTANTS *****/
/// The subdirectory of the network directory in which the profile files live.
pub const CONFIG_DIR: &str = "config";





/***** LIBRARY *****/
/// Defines the resolved paths of the four connection profiles.
///
/// Entries are written once at startup and then only read; the struct itself carries no file contents, since parsing the profiles is the fabric client's job.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ProfileConfig {
    /// The path of the network topology profile.
    pub network  : PathBuf,
    /// The path of Fredrick's client profile.
    pub fredrick : PathBuf,
    /// The path of Alice's client profile.
    pub alice    : PathBuf,
    /// The path of Bob's client profile.
    pub bob      : PathBuf,
}

impl ProfileConfig {
    /// Constructor for the ProfileConfig that resolves all four profiles against the given network directory.
    ///
    /// Only joins paths; neither checks that the files exist nor touches the disk, so the result is independent of the current working directory as long as `base` is.
    ///
    /// # Arguments
    /// - `base`: The network directory under which the `config/` folder with the profile files lives.
    ///
    /// # Returns
    /// A new ProfileConfig instance with one resolved path per profile.
    pub fn from_dir(base: impl AsRef<Path>) -> Self {
        let config: PathBuf = base.as_ref().join(CONFIG_DIR);
        debug!("Resolving connection profiles under '{}'", config.display());

        Self {
            network  : config.join(ProfileKind::Network.filename()),
            fredrick : config.join(ProfileKind::Client(Identity::Fredrick).filename()),
            alice    : config.join(ProfileKind::Client(Identity::Alice).filename()),
            bob      : config.join(ProfileKind::Client(Identity::Bob).filename()),
        }
    }

    /// Constructor for the ProfileConfig that reads it from the given path.
    ///
    /// # Arguments
    /// - `path`: The path to read the ProfileConfig from.
    ///
    /// # Returns
    /// A new ProfileConfig instance with the contents defined in the file.
    ///
    /// # Errors
    /// This function errors if the given file cannot be read or has an invalid format.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path: &Path = path.as_ref();

        // Get the raw file to parse
        let mut raw: String = String::new();
        {
            // Open the file
            let mut handle: File = match File::open(path) {
                Ok(handle) => handle,
                Err(err)   => { return Err(Error::FileOpenError{ path: path.into(), err }); },
            };

            // Read the file
            if let Err(err) = handle.read_to_string(&mut raw) { return Err(Error::FileReadError{ path: path.into(), err }); }
        }

        // Parse with serde
        match serde_yaml::from_str(&raw) {
            Ok(config) => Ok(config),
            Err(err)   => Err(Error::FileParseError{ path: path.into(), err }),
        }
    }

    /// Writes the ProfileConfig to the given path.
    ///
    /// # Arguments
    /// - `path`: The path to write the ProfileConfig to.
    ///
    /// # Returns
    /// Nothing, but does obviously create a new file with this ProfileConfig's contents.
    ///
    /// # Errors
    /// This function errors if the given file cannot be written or we failed to serialize ourselves.
    pub fn to_path(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path: &Path = path.as_ref();

        // Serialize the config
        let config: String = match serde_yaml::to_string(self) {
            Ok(config) => config,
            Err(err)   => { return Err(Error::ConfigSerializeError{ err }); },
        };

        // Write it
        {
            // Create the file
            let mut handle: File = match File::create(path) {
                Ok(handle) => handle,
                Err(err)   => { return Err(Error::FileCreateError{ path: path.into(), err }); },
            };

            // Write the serialized config
            if let Err(err) = handle.write_all(config.as_bytes()) { return Err(Error::FileWriteError{ path: path.into(), err }); }
        }

        // Done
        Ok(())
    }



    /// Returns the path registered for the given profile.
    #[inline]
    pub fn path(&self, kind: ProfileKind) -> &Path {
        use ProfileKind::*;
        match kind {
            Network                    => &self.network,
            Client(Identity::Fredrick) => &self.fredrick,
            Client(Identity::Alice)    => &self.alice,
            Client(Identity::Bob)      => &self.bob,
        }
    }

    /// Returns the path registered under the given registry key, if the key is known.
    ///
    /// # Arguments
    /// - `key`: One of the registry key strings (e.g., `alice-connection-profile-path`).
    ///
    /// # Returns
    /// The path registered for that key, or else `None` if the key is not one of the four known ones.
    #[inline]
    pub fn get(&self, key: impl AsRef<str>) -> Option<&Path> {
        ProfileKind::from_str(key.as_ref()).ok().map(|kind| self.path(kind))
    }

    /// Overwrites the path registered for the given profile.
    ///
    /// Registering the same path again is a no-op, mirroring the set-semantics of the registry this struct replaces.
    ///
    /// # Arguments
    /// - `kind`: The profile to (re-)register.
    /// - `path`: The new path for that profile.
    #[inline]
    pub fn register(&mut self, kind: ProfileKind, path: impl Into<PathBuf>) {
        use ProfileKind::*;
        let path: PathBuf = path.into();
        debug!("Registering {} profile at '{}'", kind.variant(), path.display());
        match kind {
            Network                    => { self.network = path; },
            Client(Identity::Fredrick) => { self.fredrick = path; },
            Client(Identity::Alice)    => { self.alice = path; },
            Client(Identity::Bob)      => { self.bob = path; },
        }
    }



    /// Returns the path of the network topology profile.
    #[inline]
    pub fn network(&self) -> &Path { &self.network }

    /// Returns the path of the client profile for the given identity.
    #[inline]
    pub fn profile(&self, identity: Identity) -> &Path { self.path(ProfileKind::Client(identity)) }
}

impl AsRef<ProfileConfig> for ProfileConfig {
    #[inline]
    fn as_ref(&self) -> &Self { self }
}
impl From<&ProfileConfig> for ProfileConfig {
    #[inline]
    fn from(value: &ProfileConfig) -> Self { value.clone() }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;


    /// Every registry key must resolve to a path ending in its fixed filename.
    #[test]
    fn fromdir_resolves_all_keys() {
        let config = ProfileConfig::from_dir("/app/network");
        for kind in ProfileKind::ALL {
            let path = config.get(kind.key()).unwrap_or_else(|| panic!("No path registered for key '{}'", kind.key()));
            assert!(!path.as_os_str().is_empty());
            assert!(path.ends_with(kind.filename()), "Path '{}' does not end in '{}'", path.display(), kind.filename());
        }
    }

    /// The paths must be the network dir joined with 'config/<filename>', independent of cwd.
    #[test]
    fn fromdir_joins_base_dir() {
        let config = ProfileConfig::from_dir("/app/network");
        assert_eq!(config.get("alice-connection-profile-path").unwrap(), Path::new("/app/network/config/alice.yaml"));
        assert_eq!(config.get("network-connection-profile-path").unwrap(), Path::new("/app/network/config/network-config.yaml"));
        assert_eq!(config.profile(Identity::Bob), Path::new("/app/network/config/bob.yaml"));
        assert_eq!(config.network(), Path::new("/app/network/config/network-config.yaml"));
    }

    /// Resolving twice, or re-registering the same values, must leave the config unchanged.
    #[test]
    fn registration_is_idempotent() {
        let config = ProfileConfig::from_dir("/app/network");
        assert_eq!(config, ProfileConfig::from_dir("/app/network"));

        let mut twice = config.clone();
        for kind in ProfileKind::ALL {
            let path: PathBuf = twice.path(kind).into();
            twice.register(kind, path);
        }
        assert_eq!(config, twice);
    }

    /// Unknown registry keys resolve to nothing instead of panicking.
    #[test]
    fn unknown_key_is_none() {
        let config = ProfileConfig::from_dir("/app/network");
        assert!(config.get("eve-connection-profile-path").is_none());
        assert!(config.get("").is_none());
    }

    /// A config written to disk must read back identically.
    #[test]
    fn yaml_file_roundtrip() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let file = dir.path().join("profiles.yml");

        let config = ProfileConfig::from_dir("/app/network");
        config.to_path(&file).expect("Failed to write profile config");
        let read = ProfileConfig::from_path(&file).expect("Failed to read profile config");
        assert_eq!(config, read);
    }
}
