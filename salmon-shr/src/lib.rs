//  LIB.rs
//    by Lut99
//
//  Created:
//    14 Feb 2023, 10:02:51
//  Last edited:
//    14 Feb 2023, 10:04:16
//  Auto updated?
//    Yes
//
//  Description:
//!   The `salmon-shr` crate defines common helpers used throughout the
//!   salmon network crates.
//

// Declare some modules
pub mod debug;
