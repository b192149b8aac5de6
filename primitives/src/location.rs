//! Version-agnostic locations.
//!
//! A [`MultiLocation`] is a number of parent hops toward the relay chain followed by an ordered
//! list of [`Junction`]s, outermost first. The derived `Ord` on these types is the canonical
//! asset ordering: ascending `parents`, then the junction sequence compared lexicographically.

use crate::ecosystem::chains::MAX_JUNCTIONS;
use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;

/// Consensus systems a location can be anchored in.
#[derive(
  Clone,
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
)]
pub enum NetworkId {
  /// Wildcard network. Only meaningful for V2 account junctions.
  Any,
  Polkadot,
  Kusama,
  Westend,
  Rococo,
  Paseo,
  Ethereum { chain_id: u64 },
  BitcoinCore,
  BitcoinCash,
  PolkadotBulletin,
  /// Network identified by its genesis hash.
  ByGenesis([u8; 32]),
}

impl NetworkId {
  /// Resolves a bare network name (`"Polkadot"`, `"Kusama"`, ...) case-insensitively.
  pub fn from_name(name: &str) -> Option<Self> {
    let network = match name.to_ascii_lowercase().as_str() {
      "any" => NetworkId::Any,
      "polkadot" => NetworkId::Polkadot,
      "kusama" => NetworkId::Kusama,
      "westend" => NetworkId::Westend,
      "rococo" => NetworkId::Rococo,
      "paseo" => NetworkId::Paseo,
      "bitcoincore" => NetworkId::BitcoinCore,
      "bitcoincash" => NetworkId::BitcoinCash,
      "polkadotbulletin" => NetworkId::PolkadotBulletin,
      _ => return None,
    };
    Some(network)
  }
}

/// A single hop inside a location interior.
///
/// Variant order matters: it is the tie-breaker when two locations share a prefix.
#[derive(
  Clone,
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
)]
pub enum Junction {
  Parachain(u32),
  AccountId32 {
    network: Option<NetworkId>,
    id: [u8; 32],
  },
  AccountKey20 {
    network: Option<NetworkId>,
    key: [u8; 20],
  },
  GlobalConsensus(NetworkId),
  PalletInstance(u8),
  GeneralIndex(u128),
}

/// A location relative to the current consensus system.
#[derive(
  Clone,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  Hash,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
)]
pub struct MultiLocation {
  pub parents: u8,
  pub interior: Vec<Junction>,
}

impl MultiLocation {
  pub fn new(parents: u8, interior: Vec<Junction>) -> Self {
    Self { parents, interior }
  }

  /// The current consensus system.
  pub fn here() -> Self {
    Self::default()
  }

  /// The relay chain, seen from a parachain.
  pub fn parent() -> Self {
    Self::new(1, Vec::new())
  }

  /// A parachain reached through `parents` hops.
  pub fn parachain(parents: u8, para_id: u32) -> Self {
    Self::new(parents, vec![Junction::Parachain(para_id)])
  }

  pub fn junction_count(&self) -> usize {
    self.interior.len()
  }

  /// Whether the interior fits into the `X1`..`X8` containers.
  pub fn is_representable(&self) -> bool {
    self.junction_count() <= MAX_JUNCTIONS
  }

  /// Whether the interior is anchored in another consensus system.
  pub fn is_global_consensus(&self) -> bool {
    matches!(self.interior.first(), Some(Junction::GlobalConsensus(_)))
  }
}
