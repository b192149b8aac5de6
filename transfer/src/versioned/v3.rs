//! XCM V3 shapes: bare `X1`, networks only when known, `GlobalConsensus` available.

use super::{BareJunctions, Projection, VersionAdapter, VersionedAssets, VersionedLocation, WireLocation};
use crate::error::Result;
use primitives::{Account, MultiAssets, MultiLocation, XcmVersion};

const PROJECTION: Projection = Projection::modern(<XcmV3 as VersionAdapter>::VERSION);

pub struct XcmV3;

impl VersionAdapter for XcmV3 {
  const VERSION: XcmVersion = XcmVersion::V3;

  fn create_beneficiary(account: &Account, parents: u8) -> VersionedLocation {
    VersionedLocation::V3(WireLocation {
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
    VersionedLocation::V3(WireLocation {
      parents,
      interior: BareJunctions::x2(parachain, beneficiary),
    })
  }

  fn create_xtokens_dest_beneficiary(account: &Account, parents: u8) -> VersionedLocation {
    VersionedLocation::V3(WireLocation {
      parents,
      interior: BareJunctions::x1(PROJECTION.account_id32(account)),
    })
  }

  fn multi_location(location: &MultiLocation) -> Result<VersionedLocation> {
    Ok(VersionedLocation::V3(PROJECTION.bare_location(location)?))
  }

  fn multi_assets(assets: &MultiAssets) -> Result<VersionedAssets> {
    Ok(VersionedAssets::V3(PROJECTION.legacy_assets(assets)?))
  }
}
