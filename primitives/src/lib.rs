//! Shared value types for building cross-consensus transfers.
//!
//! Everything in here is a plain, immutable value compared structurally: locations, account
//! junctions, fungible assets and the XCM version tags. Version-specific wire shapes live in the
//! `xcm-transfer` crate.

pub mod address;
pub mod assets;
pub mod ecosystem;
pub mod location;

pub use address::*;
pub use assets::*;
pub use ecosystem::*;
pub use location::*;
