//  SPEC.rs
//    by Lut99
//
//  Created:
//    14 Feb 2023, 13:20:41
//  Last edited:
//    15 Feb 2023, 09:47:26
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines (public) interfaces and structs for the `salmon-chain` crate.
//

use crate::errors::ContractError;
use crate::state::State;


/***** LIBRARY *****/
/// The payload a contract function may hand back to its caller.
///
/// Record-writing functions return `None`; query functions return the serialized document they found.
pub type Payload = Option<Vec<u8>>;



/// Defines the interface of a contract that runs against the world state.
///
/// This is the seam where, in the deployed network, the fabric chaincode shim sits; locally, `salmonctl` calls it directly.
pub trait Contract {
    /// Returns the name of this contract, for logging.
    fn name(&self) -> &'static str;

    /// Initializes the contract's portion of the world state.
    ///
    /// # Arguments
    /// - `state`: The world state to initialize in.
    /// - `args`: The initialization arguments, as the caller passed them.
    ///
    /// # Returns
    /// The payload of the initialization, if any.
    ///
    /// # Errors
    /// This function errors if the arguments were invalid or the world state failed.
    fn init(&self, state: &mut dyn State, args: &[String]) -> Result<Payload, ContractError>;

    /// Runs the named function of this contract.
    ///
    /// # Arguments
    /// - `state`: The world state to run against.
    /// - `function`: The name of the function to run, as it appears on the wire (e.g., `recordSalmon`).
    /// - `args`: The function's arguments.
    ///
    /// # Returns
    /// The payload of the function, if any.
    ///
    /// # Errors
    /// This function errors if the function is unknown to this contract, the arguments were invalid or the world state failed.
    fn invoke(&self, state: &mut dyn State, function: &str, args: &[String]) -> Result<Payload, ContractError>;
}
