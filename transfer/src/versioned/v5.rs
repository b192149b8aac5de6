//! XCM V5 shapes. Locations and assets look exactly like V4; only the tag changes.

use super::{
  Projection, SequenceJunctions, VersionAdapter, VersionedAssets, VersionedLocation, WireLocation,
  XcmV4,
};
use crate::error::Result;
use primitives::{Account, MultiAssets, MultiLocation, XcmVersion};

const PROJECTION: Projection = Projection::modern(<XcmV5 as VersionAdapter>::VERSION);

pub struct XcmV5;

impl VersionAdapter for XcmV5 {
  const VERSION: XcmVersion = XcmVersion::V5;

  fn create_beneficiary(account: &Account, parents: u8) -> VersionedLocation {
    VersionedLocation::V5(XcmV4::account_location(account, parents))
  }

  fn create_xtokens_parachain_dest_beneficiary(
    account: &Account,
    dest_chain_id: u32,
    parents: u8,
  ) -> VersionedLocation {
    let (parachain, beneficiary) = PROJECTION.parachain_then_account(account, dest_chain_id);
    VersionedLocation::V5(WireLocation {
      parents,
      interior: SequenceJunctions::x2(parachain, beneficiary),
    })
  }

  fn create_xtokens_dest_beneficiary(account: &Account, parents: u8) -> VersionedLocation {
    VersionedLocation::V5(XcmV4::account_id32_location(account, parents))
  }

  fn multi_location(location: &MultiLocation) -> Result<VersionedLocation> {
    Ok(VersionedLocation::V5(PROJECTION.sequence_location(location)?))
  }

  fn multi_assets(assets: &MultiAssets) -> Result<VersionedAssets> {
    Ok(VersionedAssets::V5(PROJECTION.sequence_assets(assets)?))
  }
}
