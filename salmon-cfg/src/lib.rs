//  LIB.rs
//    by Lut99
//
//  Created:
//    14 Feb 2023, 10:26:03
//  Last edited:
//    14 Feb 2023, 10:27:55
//  Auto updated?
//    Yes
//
//  Description:
//!   The `salmon-cfg` library provides functions for reading and resolving
//!   the connection-profile configuration of the salmon network. The
//!   profiles themselves are parsed by the fabric client, not by us; this
//!   crate only decides where they live.
//

// Declare modules
pub mod errors;
pub mod spec;
pub mod profiles;
