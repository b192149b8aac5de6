//! Ecosystem constants for cross-consensus transfers
//!
//! This module centralizes the XCM version tags this workspace can emit, the default version
//! policy, and the chain-id conventions used to tell relay chains, system parachains and
//! ordinary parachains apart.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use core::fmt;
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// XCM protocol versions with a dedicated wire shape.
///
/// Declaration order is protocol order, so `Ord` compares versions numerically.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  Hash,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub enum XcmVersion {
  V2,
  V3,
  V4,
  V5,
}

/// Raised when an integer does not name an implemented XCM version.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown XCM version {0}")]
pub struct UnknownXcmVersion(pub u32);

impl XcmVersion {
  /// Every implemented version, lowest first.
  pub const ALL: [XcmVersion; 4] = [XcmVersion::V2, XcmVersion::V3, XcmVersion::V4, XcmVersion::V5];

  pub const fn as_u32(self) -> u32 {
    match self {
      XcmVersion::V2 => 2,
      XcmVersion::V3 => 3,
      XcmVersion::V4 => 4,
      XcmVersion::V5 => 5,
    }
  }

  /// Lowest implemented version.
  pub const fn min() -> Self {
    XcmVersion::V2
  }

  /// Highest implemented version.
  pub const fn max() -> Self {
    XcmVersion::V5
  }
}

impl TryFrom<u32> for XcmVersion {
  type Error = UnknownXcmVersion;

  fn try_from(version: u32) -> Result<Self, Self::Error> {
    match version {
      2 => Ok(XcmVersion::V2),
      3 => Ok(XcmVersion::V3),
      4 => Ok(XcmVersion::V4),
      5 => Ok(XcmVersion::V5),
      other => Err(UnknownXcmVersion(other)),
    }
  }
}

impl From<XcmVersion> for u32 {
  fn from(version: XcmVersion) -> u32 {
    version.as_u32()
  }
}

impl fmt::Display for XcmVersion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_u32())
  }
}

/// Version policy defaults.
pub mod versions {
  use super::XcmVersion;

  /// Versions accepted when no explicit supported set is configured.
  pub const SUPPORTED_XCM_VERSIONS: [XcmVersion; 4] = XcmVersion::ALL;

  /// Version used when a destination reports neither a supported nor a safe version.
  pub const DEFAULT_XCM_VERSION: XcmVersion = XcmVersion::V4;
}

/// Chain identification conventions.
pub mod chains {
  /// Chain id of the relay chain itself.
  pub const RELAY_CHAIN_ID: &str = "0";

  /// Parachain ids strictly below this bound are system parachains.
  pub const SYSTEM_PARACHAIN_BOUND: u32 = 2000;

  /// Spec names of relay chains, lower-cased.
  pub const RELAY_CHAIN_SPEC_NAMES: [&str; 5] = ["polkadot", "kusama", "westend", "rococo", "paseo"];

  /// Maximum number of junctions a location interior can hold (`X1`..`X8`).
  pub const MAX_JUNCTIONS: usize = 8;

  /// Whether `chain_id` is the relay chain or a system parachain.
  pub fn is_system_chain(chain_id: &str) -> bool {
    chain_id == RELAY_CHAIN_ID
      || chain_id
        .parse::<u32>()
        .map(|id| id < SYSTEM_PARACHAIN_BOUND)
        .unwrap_or(false)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn versions_round_trip_through_integers() {
    for version in XcmVersion::ALL {
      assert_eq!(XcmVersion::try_from(version.as_u32()), Ok(version));
    }
    assert_eq!(XcmVersion::try_from(1), Err(UnknownXcmVersion(1)));
    assert_eq!(XcmVersion::try_from(6), Err(UnknownXcmVersion(6)));
  }

  #[test]
  fn versions_order_numerically() {
    assert!(XcmVersion::V2 < XcmVersion::V3);
    assert!(XcmVersion::V4 < XcmVersion::V5);
    assert_eq!(XcmVersion::min(), XcmVersion::ALL[0]);
    assert_eq!(XcmVersion::max(), XcmVersion::ALL[3]);
  }

  #[test]
  fn versions_deserialize_from_integers() {
    let parsed: Vec<XcmVersion> = serde_json::from_str("[2, 5]").unwrap();
    assert_eq!(parsed, vec![XcmVersion::V2, XcmVersion::V5]);
    assert!(serde_json::from_str::<XcmVersion>("7").is_err());
    assert_eq!(serde_json::to_string(&XcmVersion::V3).unwrap(), "3");
  }

  #[test]
  fn system_chains_are_relay_or_below_bound() {
    assert!(chains::is_system_chain("0"));
    assert!(chains::is_system_chain("1000"));
    assert!(chains::is_system_chain("1999"));
    assert!(!chains::is_system_chain("2000"));
    assert!(!chains::is_system_chain("2004"));
    assert!(!chains::is_system_chain("moonbeam"));
  }

  #[test]
  fn default_version_is_supported() {
    assert!(versions::SUPPORTED_XCM_VERSIONS.contains(&versions::DEFAULT_XCM_VERSION));
  }
}
