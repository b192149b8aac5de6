use crate::location::MultiLocation;
use codec::{Decode, DecodeWithMemTracking, Encode};
use scale_info::TypeInfo;

/// Identity of a fungible asset, the single source of truth for dedup and ordering.
///
/// - `Location`: a concrete location, compared structurally.
/// - `Symbol`: a ticker not (yet) resolved to a location, stored upper-cased.
///
/// The derived `Ord` places every location before every symbol; locations order by
/// [`MultiLocation`]'s ordering and symbols lexicographically.
#[derive(
  Clone,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  Hash,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
)]
pub enum AssetId {
  Location(MultiLocation),
  Symbol(String),
}

impl AssetId {
  /// Builds a normalised symbol id.
  pub fn symbol(symbol: &str) -> Self {
    AssetId::Symbol(symbol.trim().to_uppercase())
  }

  pub fn as_location(&self) -> Option<&MultiLocation> {
    match self {
      AssetId::Location(location) => Some(location),
      AssetId::Symbol(_) => None,
    }
  }
}

impl From<MultiLocation> for AssetId {
  fn from(location: MultiLocation) -> Self {
    AssetId::Location(location)
  }
}

/// A fungible amount of a single asset.
#[derive(Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, PartialEq, TypeInfo)]
pub struct FungibleAsset {
  pub id: AssetId,
  pub amount: u128,
}

impl FungibleAsset {
  pub fn new(id: impl Into<AssetId>, amount: u128) -> Self {
    Self {
      id: id.into(),
      amount,
    }
  }
}

/// Raised when an id is inserted into a [`MultiAssets`] twice.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum MultiAssetsError {
  #[error("asset {0:?} appears more than once")]
  Duplicate(AssetId),
}

/// An ordered bundle of fungible assets, unique by id and sorted ascending by id.
///
/// The ordering is what makes two independent constructions of the same logical bundle
/// serialize identically.
#[derive(Clone, Debug, Decode, DecodeWithMemTracking, Default, Encode, Eq, PartialEq, TypeInfo)]
pub struct MultiAssets(Vec<FungibleAsset>);

impl MultiAssets {
  pub fn new() -> Self {
    Self::default()
  }

  /// Inserts `asset` at its sorted position; an already present id is a duplicate.
  pub fn push(&mut self, asset: FungibleAsset) -> Result<(), MultiAssetsError> {
    match self.0.binary_search_by(|probe| probe.id.cmp(&asset.id)) {
      Ok(_) => Err(MultiAssetsError::Duplicate(asset.id)),
      Err(index) => {
        self.0.insert(index, asset);
        Ok(())
      }
    }
  }

  /// Index of the asset with id `id`.
  pub fn position(&self, id: &AssetId) -> Option<usize> {
    self.0.binary_search_by(|probe| probe.id.cmp(id)).ok()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &FungibleAsset> {
    self.0.iter()
  }

  pub fn inner(&self) -> &[FungibleAsset] {
    &self.0
  }
}

/// Execution weight budget for the remote side of a transfer.
#[derive(
  Clone, Copy, Debug, Decode, DecodeWithMemTracking, Default, Encode, Eq, PartialEq, TypeInfo,
)]
pub enum WeightLimit {
  #[default]
  Unlimited,
  Limited { ref_time: u64, proof_size: u64 },
}

impl WeightLimit {
  /// `Limited` only when both components are known.
  pub fn from_parts(ref_time: Option<u64>, proof_size: Option<u64>) -> Self {
    match (ref_time, proof_size) {
      (Some(ref_time), Some(proof_size)) => WeightLimit::Limited {
        ref_time,
        proof_size,
      },
      _ => WeightLimit::Unlimited,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::location::Junction;

  fn usdt() -> MultiLocation {
    MultiLocation::new(
      0,
      vec![Junction::PalletInstance(50), Junction::GeneralIndex(1984)],
    )
  }

  #[test]
  fn locations_sort_before_symbols() {
    let location = AssetId::from(MultiLocation::parent());
    let symbol = AssetId::symbol("AAA");
    assert!(location < symbol);
  }

  #[test]
  fn symbols_are_upper_cased_and_trimmed() {
    assert_eq!(AssetId::symbol(" dot "), AssetId::Symbol("DOT".into()));
    assert!(AssetId::symbol("dot") < AssetId::symbol("usdt"));
  }

  #[test]
  fn push_keeps_bundle_sorted() {
    let mut assets = MultiAssets::new();
    assets.push(FungibleAsset::new(MultiLocation::parent(), 1)).unwrap();
    assets.push(FungibleAsset::new(usdt(), 2)).unwrap();
    assets.push(FungibleAsset::new(AssetId::symbol("xyz"), 3)).unwrap();

    let ids: Vec<_> = assets.iter().map(|asset| asset.id.clone()).collect();
    assert_eq!(
      ids,
      vec![
        AssetId::from(usdt()),
        AssetId::from(MultiLocation::parent()),
        AssetId::symbol("XYZ"),
      ]
    );
    assert_eq!(assets.position(&AssetId::from(MultiLocation::parent())), Some(1));
    assert_eq!(assets.position(&AssetId::symbol("none")), None);
  }

  #[test]
  fn push_rejects_duplicates() {
    let mut assets = MultiAssets::new();
    assets.push(FungibleAsset::new(usdt(), 1)).unwrap();
    assert_eq!(
      assets.push(FungibleAsset::new(usdt(), 2)),
      Err(MultiAssetsError::Duplicate(AssetId::from(usdt())))
    );
    assert_eq!(assets.len(), 1);
  }

  #[test]
  fn weight_limit_needs_both_parts() {
    assert_eq!(WeightLimit::from_parts(None, None), WeightLimit::Unlimited);
    assert_eq!(WeightLimit::from_parts(Some(1), None), WeightLimit::Unlimited);
    assert_eq!(WeightLimit::from_parts(None, Some(1)), WeightLimit::Unlimited);
    assert_eq!(
      WeightLimit::from_parts(Some(1000), Some(2000)),
      WeightLimit::Limited {
        ref_time: 1000,
        proof_size: 2000
      }
    );
  }
}
