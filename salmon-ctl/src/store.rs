//  STORE.rs
//    by Lut99
//
//  Created:
//    15 Feb 2023, 11:20:56
//  Last edited:
//    15 Feb 2023, 11:52:33
//  Auto updated?
//    Yes
//
//  Description:
//!   Loads and saves world-state snapshots, so contract invocations
//!   persist across `salmonctl` runs.
//

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use log::debug;

use salmon_chain::state::MemoryState;

pub use crate::errors::StoreError as Error;


/***** LIBRARY *****/
/// Loads the world-state snapshot at the given path.
///
/// # Arguments
/// - `path`: The path of the snapshot file.
///
/// # Returns
/// The stored MemoryState, or else a fresh empty one if no snapshot exists yet.
///
/// # Errors
/// This function errors if the snapshot exists but cannot be read or parsed.
pub fn load(path: impl AsRef<Path>) -> Result<MemoryState, Error> {
    let path: &Path = path.as_ref();

    // A missing snapshot simply means nothing was recorded yet
    if !path.exists() {
        debug!("No state snapshot at '{}'; starting empty", path.display());
        return Ok(MemoryState::new());
    }

    // Read the file to a string
    let raw: String = match fs::read_to_string(path) {
        Ok(raw)  => raw,
        Err(err) => { return Err(Error::FileReadError{ path: path.into(), err }); },
    };

    // Parse the file with serde
    match serde_json::from_str(&raw) {
        Ok(state) => Ok(state),
        Err(err)  => Err(Error::FileParseError{ path: path.into(), err }),
    }
}



/// Saves the given world state to the given path, overwriting any previous snapshot.
///
/// # Arguments
/// - `state`: The MemoryState to snapshot.
/// - `path`: The path of the snapshot file.
///
/// # Errors
/// This function errors if the state cannot be serialized or the file cannot be written.
pub fn save(state: &MemoryState, path: impl AsRef<Path>) -> Result<(), Error> {
    let path: &Path = path.as_ref();
    debug!("Saving {} state entries to '{}'...", state.len(), path.display());

    // Serialize the state
    let raw: String = match serde_json::to_string(state) {
        Ok(raw)  => raw,
        Err(err) => { return Err(Error::StateSerializeError{ err }); },
    };

    // Create the file
    let mut handle: File = match File::create(path) {
        Ok(handle) => handle,
        Err(err)   => { return Err(Error::FileCreateError{ path: path.into(), err }); },
    };

    // Write the serialized state
    if let Err(err) = handle.write_all(raw.as_bytes()) { return Err(Error::FileWriteError{ path: path.into(), err }); }

    // Done
    Ok(())
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use salmon_chain::state::State as _;

    use super::*;


    /// A saved snapshot must load back with the same entries.
    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let file = dir.path().join("state.json");

        let mut state = MemoryState::new();
        state.put("1", b"{\"holder\":\"fredrick\"}".to_vec()).unwrap();
        state.put("2", b"{\"holder\":\"alice\"}".to_vec()).unwrap();
        save(&state, &file).expect("Failed to save snapshot");

        let loaded = load(&file).expect("Failed to load snapshot");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get("1").unwrap(), state.get("1").unwrap());
        assert_eq!(loaded.get("2").unwrap(), state.get("2").unwrap());
    }

    /// A missing snapshot loads as an empty state instead of an error.
    #[test]
    fn load_missing_is_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let state = load(dir.path().join("nonexistent.json")).expect("Failed to load missing snapshot");
        assert!(state.is_empty());
    }
}
