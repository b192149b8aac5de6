//! XCM V4 shapes: every interior is a sequence and asset ids are plain locations.

use super::{
  Projection, SequenceJunctions, VersionAdapter, VersionedAssets, VersionedLocation, WireLocation,
};
use crate::error::Result;
use primitives::{Account, MultiAssets, MultiLocation, XcmVersion};

const PROJECTION: Projection = Projection::modern(<XcmV4 as VersionAdapter>::VERSION);

pub struct XcmV4;

impl XcmV4 {
  /// Untagged V4 account location, shared with V5.
  pub(crate) fn account_location(account: &Account, parents: u8) -> WireLocation<SequenceJunctions> {
    WireLocation {
      parents,
      interior: SequenceJunctions::x1(PROJECTION.account(account)),
    }
  }

  /// Untagged V4 `AccountId32` location, shared with V5.
  pub(crate) fn account_id32_location(
    account: &Account,
    parents: u8,
  ) -> WireLocation<SequenceJunctions> {
    WireLocation {
      parents,
      interior: SequenceJunctions::x1(PROJECTION.account_id32(account)),
    }
  }
}

impl VersionAdapter for XcmV4 {
  const VERSION: XcmVersion = XcmVersion::V4;

  fn create_beneficiary(account: &Account, parents: u8) -> VersionedLocation {
    VersionedLocation::V4(Self::account_location(account, parents))
  }

  fn create_xtokens_parachain_dest_beneficiary(
    account: &Account,
    dest_chain_id: u32,
    parents: u8,
  ) -> VersionedLocation {
    let (parachain, beneficiary) = PROJECTION.parachain_then_account(account, dest_chain_id);
    VersionedLocation::V4(WireLocation {
      parents,
      interior: SequenceJunctions::x2(parachain, beneficiary),
    })
  }

  fn create_xtokens_dest_beneficiary(account: &Account, parents: u8) -> VersionedLocation {
    VersionedLocation::V4(Self::account_id32_location(account, parents))
  }

  fn multi_location(location: &MultiLocation) -> Result<VersionedLocation> {
    Ok(VersionedLocation::V4(PROJECTION.sequence_location(location)?))
  }

  fn multi_assets(assets: &MultiAssets) -> Result<VersionedAssets> {
    Ok(VersionedAssets::V4(PROJECTION.sequence_assets(assets)?))
  }
}
