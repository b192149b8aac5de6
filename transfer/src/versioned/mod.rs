//! Version adapters.
//!
//! Each supported XCM version gets one [`VersionAdapter`] implementation projecting the
//! version-agnostic model from `primitives` into that version's wire shape. The shapes differ in
//! three ways:
//!
//! - V2 account junctions always carry a `network` (wildcard `Any` when unknown); V3+ omit it.
//! - V2/V3 put a bare junction under `X1`; V4/V5 always use a sequence, even for one junction.
//! - V2/V3 wrap asset ids in `Concrete`/`Abstract`; V4/V5 use the location directly.
//!
//! [`XcmAdapter`] dispatches a runtime [`XcmVersion`] to the matching implementation.

mod v2;
mod v3;
mod v4;
mod v5;

pub use v2::XcmV2;
pub use v3::XcmV3;
pub use v4::XcmV4;
pub use v5::XcmV5;

use crate::error::{Error, Result};
use primitives::{
  Account, AssetId, FungibleAsset, Junction, MultiAssets, MultiLocation, NetworkId, XcmVersion,
  chains::MAX_JUNCTIONS,
};
use serde::{Serialize, Serializer};

/// The five constructions every version provides.
pub trait VersionAdapter {
  const VERSION: XcmVersion;

  /// `X1` location holding the account junction chosen by its address kind.
  fn create_beneficiary(account: &Account, parents: u8) -> VersionedLocation;

  /// `X2` location: `Parachain(dest_chain_id)` followed by the account junction.
  fn create_xtokens_parachain_dest_beneficiary(
    account: &Account,
    dest_chain_id: u32,
    parents: u8,
  ) -> VersionedLocation;

  /// `X1` `AccountId32` beneficiary without a parachain hop, whatever the address kind.
  fn create_xtokens_dest_beneficiary(account: &Account, parents: u8) -> VersionedLocation;

  /// Version-tags an arbitrary location.
  fn multi_location(location: &MultiLocation) -> Result<VersionedLocation>;

  /// Version-tags a sorted, deduplicated asset bundle.
  fn multi_assets(assets: &MultiAssets) -> Result<VersionedAssets>;
}

macro_rules! dispatch {
  ($version:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
    match $version {
      XcmVersion::V2 => XcmV2::$method($($arg),*),
      XcmVersion::V3 => XcmV3::$method($($arg),*),
      XcmVersion::V4 => XcmV4::$method($($arg),*),
      XcmVersion::V5 => XcmV5::$method($($arg),*),
    }
  };
}

/// Runtime dispatch over the closed set of version adapters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct XcmAdapter {
  version: XcmVersion,
}

impl XcmAdapter {
  pub fn new(version: XcmVersion) -> Self {
    Self { version }
  }

  pub fn version(&self) -> XcmVersion {
    self.version
  }

  pub fn create_beneficiary(&self, account: &Account, parents: u8) -> VersionedLocation {
    dispatch!(self.version, create_beneficiary(account, parents))
  }

  pub fn create_xtokens_parachain_dest_beneficiary(
    &self,
    account: &Account,
    dest_chain_id: u32,
    parents: u8,
  ) -> VersionedLocation {
    dispatch!(
      self.version,
      create_xtokens_parachain_dest_beneficiary(account, dest_chain_id, parents)
    )
  }

  pub fn create_xtokens_dest_beneficiary(&self, account: &Account, parents: u8) -> VersionedLocation {
    dispatch!(self.version, create_xtokens_dest_beneficiary(account, parents))
  }

  pub fn multi_location(&self, location: &MultiLocation) -> Result<VersionedLocation> {
    dispatch!(self.version, multi_location(location))
  }

  pub fn multi_assets(&self, assets: &MultiAssets) -> Result<VersionedAssets> {
    dispatch!(self.version, multi_assets(assets))
  }
}

/// Network id as emitted on the wire.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum WireNetworkId {
  Any,
  Polkadot,
  Kusama,
  Westend,
  Rococo,
  Paseo,
  Ethereum {
    #[serde(rename = "chainId")]
    chain_id: u64,
  },
  BitcoinCore,
  BitcoinCash,
  PolkadotBulletin,
  ByGenesis(String),
}

impl From<&NetworkId> for WireNetworkId {
  fn from(network: &NetworkId) -> Self {
    match network {
      NetworkId::Any => WireNetworkId::Any,
      NetworkId::Polkadot => WireNetworkId::Polkadot,
      NetworkId::Kusama => WireNetworkId::Kusama,
      NetworkId::Westend => WireNetworkId::Westend,
      NetworkId::Rococo => WireNetworkId::Rococo,
      NetworkId::Paseo => WireNetworkId::Paseo,
      NetworkId::Ethereum { chain_id } => WireNetworkId::Ethereum {
        chain_id: *chain_id,
      },
      NetworkId::BitcoinCore => WireNetworkId::BitcoinCore,
      NetworkId::BitcoinCash => WireNetworkId::BitcoinCash,
      NetworkId::PolkadotBulletin => WireNetworkId::PolkadotBulletin,
      NetworkId::ByGenesis(genesis) => WireNetworkId::ByGenesis(hex_string(genesis)),
    }
  }
}

/// Junction as emitted on the wire. Byte payloads are `0x` hex, big indices decimal strings.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum WireJunction {
  Parachain(u32),
  AccountId32 {
    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<WireNetworkId>,
    id: String,
  },
  AccountKey20 {
    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<WireNetworkId>,
    key: String,
  },
  GlobalConsensus(WireNetworkId),
  PalletInstance(u8),
  GeneralIndex(String),
}

const JUNCTIONS_NAME: &str = "Junctions";
const JUNCTION_COUNTS: [&str; MAX_JUNCTIONS] = ["X1", "X2", "X3", "X4", "X5", "X6", "X7", "X8"];

/// V2/V3 interior: `Here`, a bare junction under `X1`, a list under `X2`..`X8`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BareJunctions(Vec<WireJunction>);

/// V4/V5 interior: `Here` or a list under `X1`..`X8`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SequenceJunctions(Vec<WireJunction>);

macro_rules! junctions_container {
  ($name:ident) => {
    impl $name {
      pub fn x1(junction: WireJunction) -> Self {
        Self(vec![junction])
      }

      pub fn x2(first: WireJunction, second: WireJunction) -> Self {
        Self(vec![first, second])
      }

      pub fn from_vec(junctions: Vec<WireJunction>) -> Result<Self> {
        if junctions.len() > MAX_JUNCTIONS {
          return Err(Error::InvalidInput(format!(
            "a location interior holds at most {MAX_JUNCTIONS} junctions, got {}",
            junctions.len()
          )));
        }
        Ok(Self(junctions))
      }

      pub fn as_slice(&self) -> &[WireJunction] {
        &self.0
      }
    }
  };
}

junctions_container!(BareJunctions);
junctions_container!(SequenceJunctions);

impl Serialize for BareJunctions {
  fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
    match self.0.as_slice() {
      [] => serializer.serialize_unit_variant(JUNCTIONS_NAME, 0, "Here"),
      [single] => serializer.serialize_newtype_variant(JUNCTIONS_NAME, 1, "X1", single),
      many => {
        let count = many.len();
        serializer.serialize_newtype_variant(
          JUNCTIONS_NAME,
          count as u32,
          JUNCTION_COUNTS[count - 1],
          many,
        )
      }
    }
  }
}

impl Serialize for SequenceJunctions {
  fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
    let count = self.0.len();
    if count == 0 {
      return serializer.serialize_unit_variant(JUNCTIONS_NAME, 0, "Here");
    }
    serializer.serialize_newtype_variant(
      JUNCTIONS_NAME,
      count as u32,
      JUNCTION_COUNTS[count - 1],
      self.0.as_slice(),
    )
  }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct WireLocation<J> {
  pub parents: u8,
  pub interior: J,
}

/// A location tagged with the version whose shape it follows.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum VersionedLocation {
  V2(WireLocation<BareJunctions>),
  V3(WireLocation<BareJunctions>),
  V4(WireLocation<SequenceJunctions>),
  V5(WireLocation<SequenceJunctions>),
}

impl VersionedLocation {
  pub fn version(&self) -> XcmVersion {
    match self {
      VersionedLocation::V2(_) => XcmVersion::V2,
      VersionedLocation::V3(_) => XcmVersion::V3,
      VersionedLocation::V4(_) => XcmVersion::V4,
      VersionedLocation::V5(_) => XcmVersion::V5,
    }
  }

  pub fn parents(&self) -> u8 {
    match self {
      VersionedLocation::V2(location) | VersionedLocation::V3(location) => location.parents,
      VersionedLocation::V4(location) | VersionedLocation::V5(location) => location.parents,
    }
  }

  pub fn junctions(&self) -> &[WireJunction] {
    match self {
      VersionedLocation::V2(location) | VersionedLocation::V3(location) => {
        location.interior.as_slice()
      }
      VersionedLocation::V4(location) | VersionedLocation::V5(location) => {
        location.interior.as_slice()
      }
    }
  }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum Fungibility {
  Fungible(String),
}

/// V2/V3 asset id.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum LegacyAssetId {
  Concrete(WireLocation<BareJunctions>),
  Abstract(String),
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct WireAsset<Id> {
  pub id: Id,
  pub fun: Fungibility,
}

/// An asset bundle tagged with the version whose shape it follows.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum VersionedAssets {
  V2(Vec<WireAsset<LegacyAssetId>>),
  V3(Vec<WireAsset<LegacyAssetId>>),
  V4(Vec<WireAsset<WireLocation<SequenceJunctions>>>),
  V5(Vec<WireAsset<WireLocation<SequenceJunctions>>>),
}

impl VersionedAssets {
  pub fn version(&self) -> XcmVersion {
    match self {
      VersionedAssets::V2(_) => XcmVersion::V2,
      VersionedAssets::V3(_) => XcmVersion::V3,
      VersionedAssets::V4(_) => XcmVersion::V4,
      VersionedAssets::V5(_) => XcmVersion::V5,
    }
  }

  pub fn len(&self) -> usize {
    match self {
      VersionedAssets::V2(assets) | VersionedAssets::V3(assets) => assets.len(),
      VersionedAssets::V4(assets) | VersionedAssets::V5(assets) => assets.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// How a version renders junctions.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Projection {
  /// Account junctions always carry a network, `Any` when unknown.
  wildcard_network: bool,
  /// `GlobalConsensus` junctions exist in this version.
  global_consensus: bool,
  version: XcmVersion,
}

impl Projection {
  pub(crate) const fn legacy(version: XcmVersion) -> Self {
    Self {
      wildcard_network: true,
      global_consensus: false,
      version,
    }
  }

  pub(crate) const fn modern(version: XcmVersion) -> Self {
    Self {
      wildcard_network: false,
      global_consensus: true,
      version,
    }
  }

  fn network(&self, network: &Option<NetworkId>) -> Option<WireNetworkId> {
    match network {
      Some(network) => Some(network.into()),
      None if self.wildcard_network => Some(WireNetworkId::Any),
      None => None,
    }
  }

  pub(crate) fn account(&self, account: &Account) -> WireJunction {
    match account {
      Account::Id32(_) => WireJunction::AccountId32 {
        network: self.network(&None),
        id: account.to_hex(),
      },
      Account::Key20(_) => WireJunction::AccountKey20 {
        network: self.network(&None),
        key: account.to_hex(),
      },
    }
  }

  pub(crate) fn junction(&self, junction: &Junction) -> Result<WireJunction> {
    let wire = match junction {
      Junction::Parachain(id) => WireJunction::Parachain(*id),
      Junction::AccountId32 { network, id } => WireJunction::AccountId32 {
        network: self.network(network),
        id: hex_string(id),
      },
      Junction::AccountKey20 { network, key } => WireJunction::AccountKey20 {
        network: self.network(network),
        key: hex_string(key),
      },
      Junction::GlobalConsensus(network) => {
        if !self.global_consensus {
          return Err(Error::InvalidInput(format!(
            "GlobalConsensus junctions cannot be expressed in XCM V{}",
            self.version
          )));
        }
        WireJunction::GlobalConsensus(network.into())
      }
      Junction::PalletInstance(index) => WireJunction::PalletInstance(*index),
      Junction::GeneralIndex(index) => WireJunction::GeneralIndex(index.to_string()),
    };
    Ok(wire)
  }

  /// `AccountId32` junction carrying the raw account bytes, whatever the address kind.
  pub(crate) fn account_id32(&self, account: &Account) -> WireJunction {
    WireJunction::AccountId32 {
      network: self.network(&None),
      id: account.to_hex(),
    }
  }

  pub(crate) fn interior(&self, location: &MultiLocation) -> Result<Vec<WireJunction>> {
    if !location.is_representable() {
      return Err(Error::InvalidInput(format!(
        "a location interior holds at most {MAX_JUNCTIONS} junctions, got {}",
        location.junction_count()
      )));
    }
    location
      .interior
      .iter()
      .map(|junction| self.junction(junction))
      .collect()
  }

  /// `Parachain(dest_chain_id)` then the account junction: the shared xTokens construction.
  pub(crate) fn parachain_then_account(
    &self,
    account: &Account,
    dest_chain_id: u32,
  ) -> (WireJunction, WireJunction) {
    (WireJunction::Parachain(dest_chain_id), self.account(account))
  }

  pub(crate) fn bare_location(
    &self,
    location: &MultiLocation,
  ) -> Result<WireLocation<BareJunctions>> {
    Ok(WireLocation {
      parents: location.parents,
      interior: BareJunctions::from_vec(self.interior(location)?)?,
    })
  }

  pub(crate) fn sequence_location(
    &self,
    location: &MultiLocation,
  ) -> Result<WireLocation<SequenceJunctions>> {
    Ok(WireLocation {
      parents: location.parents,
      interior: SequenceJunctions::from_vec(self.interior(location)?)?,
    })
  }

  /// V2/V3 asset list: `Concrete` for locations, `Abstract` for symbols.
  pub(crate) fn legacy_assets(&self, assets: &MultiAssets) -> Result<Vec<WireAsset<LegacyAssetId>>> {
    assets
      .iter()
      .map(|asset| {
        let id = match &asset.id {
          AssetId::Location(location) => LegacyAssetId::Concrete(self.bare_location(location)?),
          AssetId::Symbol(symbol) => LegacyAssetId::Abstract(symbol.clone()),
        };
        Ok(WireAsset {
          id,
          fun: fungible(asset),
        })
      })
      .collect()
  }

  /// V4/V5 asset list: ids must be locations.
  pub(crate) fn sequence_assets(
    &self,
    assets: &MultiAssets,
  ) -> Result<Vec<WireAsset<WireLocation<SequenceJunctions>>>> {
    assets
      .iter()
      .map(|asset| match &asset.id {
        AssetId::Location(location) => Ok(WireAsset {
          id: self.sequence_location(location)?,
          fun: fungible(asset),
        }),
        AssetId::Symbol(symbol) => Err(Error::InvalidInput(format!(
          "asset `{symbol}` has no location; XCM V{} requires location asset ids",
          self.version
        ))),
      })
      .collect()
  }
}

fn fungible(asset: &FungibleAsset) -> Fungibility {
  Fungibility::Fungible(asset.amount.to_string())
}

fn hex_string(bytes: &[u8]) -> String {
  format!("0x{}", hex::encode(bytes))
}
