//! XCM Transfer
//!
//! Builds version-correct cross-consensus transfer payloads (destinations, beneficiaries, asset
//! bundles, fee items and weight limits) for XCM V2 to V5, and tells local transfers apart from
//! cross-consensus ones.
//!
//! Chain state is read through [`ChainContext`]; nothing here performs I/O itself. The library
//! logs through the `log` facade under `xcm-transfer::*` targets and installs no logger.

pub mod builder;
pub mod classify;
pub mod config;
pub mod context;
pub mod disabled;
pub mod error;
pub mod fees;
pub mod local;
pub mod negotiate;
pub mod options;
pub mod parse;
pub mod resolver;
pub mod versioned;

pub use builder::{Direction, TransferBuilder, TransferPlan, TransferRequest, XcmMethod, XcmPayload};
pub use config::TransferConfig;
pub use context::{ChainContext, TransferPallet};
pub use error::{Error, Result};
pub use local::LocalTxType;
pub use options::TransferOpts;
pub use versioned::{VersionAdapter, VersionedAssets, VersionedLocation, XcmAdapter};

#[cfg(test)]
mod mock;
