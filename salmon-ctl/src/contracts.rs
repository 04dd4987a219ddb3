//  CONTRACTS.rs
//    by Lut99
//
//  Created:
//    15 Feb 2023, 12:20:31
//  Last edited:
//    15 Feb 2023, 13:01:19
//  Auto updated?
//    Yes
//
//  Description:
//!   Runs contract functions against the locally persisted world state.
//

use std::path::Path;

use log::debug;

use salmon_chain::spec::{Contract, Payload};
use salmon_chain::state::MemoryState;
use salmon_shr::debug::BlockFormatter;

use crate::store;

pub use crate::errors::CtlError as Error;


/***** HELPER FUNCTIONS *****/
/// Prints the payload of a contract function, if there is one.
fn print_payload(payload: Payload) {
    if let Some(payload) = payload {
        print!("{}", BlockFormatter::new(String::from_utf8_lossy(&payload)));
    }
}





/***** LIBRARY *****/
/// Initializes the given contract on the snapshot at the given path.
///
/// # Arguments
/// - `state_path`: The path of the world-state snapshot to load and save.
/// - `contract`: The contract to initialize.
/// - `args`: The initialization arguments.
///
/// # Errors
/// This function errors if the snapshot cannot be loaded or saved, or the contract itself fails.
pub fn init(state_path: impl AsRef<Path>, contract: &dyn Contract, args: &[String]) -> Result<(), Error> {
    let state_path: &Path = state_path.as_ref();
    debug!("Initializing the {} contract...", contract.name());

    // Load, run, save
    let mut state: MemoryState = store::load(state_path)?;
    let payload: Payload = match contract.init(&mut state, args) {
        Ok(payload) => payload,
        Err(err)    => { return Err(Error::ContractError{ contract: contract.name(), function: "init".into(), err }); },
    };
    store::save(&state, state_path)?;

    print_payload(payload);
    Ok(())
}



/// Runs the named function of the given contract on the snapshot at the given path.
///
/// # Arguments
/// - `state_path`: The path of the world-state snapshot to load and save.
/// - `contract`: The contract to run.
/// - `function`: The wire name of the function to run (e.g., `recordSalmon`).
/// - `args`: The function's arguments.
///
/// # Errors
/// This function errors if the snapshot cannot be loaded or saved, or the contract itself fails.
pub fn invoke(state_path: impl AsRef<Path>, contract: &dyn Contract, function: &str, args: &[String]) -> Result<(), Error> {
    let state_path: &Path = state_path.as_ref();
    debug!("Running '{}' on the {} contract...", function, contract.name());

    // Load, run, save
    let mut state: MemoryState = store::load(state_path)?;
    let payload: Payload = match contract.invoke(&mut state, function, args) {
        Ok(payload) => payload,
        Err(err)    => { return Err(Error::ContractError{ contract: contract.name(), function: function.into(), err }); },
    };
    store::save(&state, state_path)?;

    print_payload(payload);
    Ok(())
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use salmon_chain::salmon::SalmonContract;

    use super::*;


    /// An invocation must persist its writes to the snapshot for the next invocation to see.
    #[test]
    fn invocations_persist() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let file = dir.path().join("state.json");

        let args: Vec<String> = [ "9", "Cold Current", "2018-01-20", "Cook Inlet", "fredrick" ].into_iter().map(String::from).collect();
        invoke(&file, &SalmonContract, "recordSalmon", &args).expect("Failed to record salmon");

        // A second run sees the record
        invoke(&file, &SalmonContract, "querySalmon", &[ "9".into() ]).expect("Failed to query salmon");
    }

    /// A failing function must surface as a contract error, with the snapshot untouched.
    #[test]
    fn failures_surface() {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory");
        let file = dir.path().join("state.json");

        let err = invoke(&file, &SalmonContract, "querySalmon", &[ "404".into() ]).unwrap_err();
        assert!(matches!(err, Error::ContractError{ .. }), "Unexpected error: {}", err);
        assert!(!file.exists());
    }
}
