//  LIB.rs
//    by Lut99
//
//  Created:
//    14 Feb 2023, 13:10:18
//  Last edited:
//    15 Feb 2023, 09:44:02
//  Auto updated?
//    Yes
//
//  Description:
//!   The `salmon-chain` library implements the two contracts of the salmon
//!   network (catch provenance and price agreements) on top of a simple
//!   ordered key/value world state.
//

// Declare modules
pub mod errors;
pub mod spec;
pub mod state;
pub mod salmon;
pub mod agreement;
