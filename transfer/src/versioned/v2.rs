//! XCM V2 shapes: bare `X1`, account junctions always carry a network.

use super::{BareJunctions, Projection, VersionAdapter, VersionedAssets, VersionedLocation, WireLocation};
use crate::error::Result;
use primitives::{Account, MultiAssets, MultiLocation, XcmVersion};

const PROJECTION: Projection = Projection::legacy(<XcmV2 as VersionAdapter>::VERSION);

pub struct XcmV2;

impl VersionAdapter for XcmV2 {
  const VERSION: XcmVersion = XcmVersion::V2;

  fn create_beneficiary(account: &Account, parents: u8) -> VersionedLocation {
    VersionedLocation::V2(WireLocation {
      parents,
      interior: BareJunctions::x1(PROJECTION.account(account)),
    })
  }

  fn create_xtokens_parachain_dest_beneficiary(
    account: &Account,
    dest_chain_id: u32,
    parents: u8,
  ) -> VersionedLocation {
    let (parachain, beneficiary) = PROJECTION.parachain_then_account(account, dest_chain_id);
    VersionedLocation::V2(WireLocation {
      parents,
      interior: BareJunctions::x2(parachain, beneficiary),
    })
  }

  fn create_xtokens_dest_beneficiary(account: &Account, parents: u8) -> VersionedLocation {
    VersionedLocation::V2(WireLocation {
      parents,
      interior: BareJunctions::x1(PROJECTION.account_id32(account)),
    })
  }

  fn multi_location(location: &MultiLocation) -> Result<VersionedLocation> {
    Ok(VersionedLocation::V2(PROJECTION.bare_location(location)?))
  }

  fn multi_assets(assets: &MultiAssets) -> Result<VersionedAssets> {
    Ok(VersionedAssets::V2(PROJECTION.legacy_assets(assets)?))
  }
}
