//  PROFILES.rs
//    by Lut99
//
//  Created:
//    15 Feb 2023, 11:58:44
//  Last edited:
//    15 Feb 2023, 12:14:02
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the `salmonctl profiles ...` subcommands, which resolve
//!   where the fabric client will find its connection profiles.
//

use std::path::Path;

use log::info;

use salmon_cfg::profiles::ProfileConfig;
use salmon_cfg::spec::ProfileKind;

pub use crate::errors::CtlError as Error;


/***** LIBRARY *****/
/// Resolves the four connection profiles against the given network directory and prints them.
///
/// # Arguments
/// - `network_dir`: The directory under which the `config/` folder with the profile files lives.
///
/// # Errors
/// This function never errors, but has the signature of the other subcommands for uniformity's sake.
pub fn list(network_dir: impl AsRef<Path>) -> Result<(), Error> {
    let config: ProfileConfig = ProfileConfig::from_dir(network_dir);

    // Print one line per registry key
    for kind in ProfileKind::ALL {
        let path: &Path = config.path(kind);
        println!("{:<34} {}{}", kind.key(), path.display(), if path.is_file() { "" } else { "  (missing)" });
    }

    Ok(())
}



/// Resolves the four connection profiles and writes them to a YAML file for later tooling to pick up.
///
/// # Arguments
/// - `network_dir`: The directory under which the `config/` folder with the profile files lives.
/// - `output`: The path to write the resolved configuration to.
///
/// # Errors
/// This function errors if the file cannot be written.
pub fn generate(network_dir: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<(), Error> {
    let output: &Path = output.as_ref();

    let config: ProfileConfig = ProfileConfig::from_dir(network_dir);
    match config.to_path(output) {
        Ok(_)    => { info!("Written profile configuration to '{}'", output.display()); Ok(()) },
        Err(err) => Err(Error::ProfileGenerateError{ path: output.into(), err }),
    }
}
