//  LIB.rs
//    by Lut99
//
//  Created:
//    15 Feb 2023, 11:02:13
//  Last edited:
//    15 Feb 2023, 11:03:40
//  Auto updated?
//    Yes
//
//  Description:
//!   The `salmon-ctl` crate implements the library backend of the
//!   `salmonctl` executable.
//

// Declare the modules
pub mod errors;
pub mod store;
pub mod profiles;
pub mod contracts;
