//! XCM version negotiation.
//!
//! A destination's version is taken from, in order: the version recorded for it on the origin
//! chain, the chain's safe version, the configured fallback. Versions reported by the chain are
//! clamped to what this crate can emit.

use crate::{
  context::ChainContext,
  error::{Error, Result},
};
use primitives::{MultiLocation, XcmVersion};

const LOG_TARGET: &str = "xcm-transfer::negotiate";

/// Fails with [`Error::InvalidXcmVersion`] unless `version` is one of `supported`.
pub fn check_xcm_version(version: u32, supported: &[XcmVersion]) -> Result<XcmVersion> {
  match XcmVersion::try_from(version) {
    Ok(known) if supported.contains(&known) => Ok(known),
    _ => Err(Error::InvalidXcmVersion {
      version,
      supported: supported.to_vec(),
    }),
  }
}

/// Picks the version to address `destination` with.
///
/// `requested` must itself be one of `supported`; the chain is not queried otherwise.
pub async fn negotiate<C: ChainContext + ?Sized>(
  destination: &MultiLocation,
  requested: XcmVersion,
  fallback: XcmVersion,
  supported: &[XcmVersion],
  ctx: &C,
) -> Result<XcmVersion> {
  check_xcm_version(requested.as_u32(), supported)?;

  if let Some(version) = ctx
    .supported_version_for(requested.as_u32(), destination)
    .await?
  {
    log::trace!(target: LOG_TARGET, "supported version for {destination:?} is {version}");
    return implemented(version);
  }

  if let Some(version) = ctx.safe_version().await? {
    log::trace!(target: LOG_TARGET, "falling back to safe version {version}");
    return implemented(version);
  }

  log::debug!(target: LOG_TARGET, "no version known for {destination:?}, using V{fallback}");
  Ok(fallback)
}

/// Maps a chain-reported version onto an implemented one.
fn implemented(version: u32) -> Result<XcmVersion> {
  let max = XcmVersion::max();
  if version > max.as_u32() {
    log::debug!(target: LOG_TARGET, "capping chain version {version} to V{max}");
    return Ok(max);
  }
  XcmVersion::try_from(version).map_err(|_| Error::InvalidXcmVersion {
    version,
    supported: XcmVersion::ALL.to_vec(),
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn check_rejects_unsupported_versions() {
    let supported = [XcmVersion::V2, XcmVersion::V3, XcmVersion::V4];
    let err = check_xcm_version(1, &supported).unwrap_err();
    assert_eq!(
      err.to_string(),
      "Xcm version 1 is not supported. Supported versions are: 2, 3, 4"
    );
    // Implemented but not configured.
    assert!(matches!(
      check_xcm_version(5, &supported),
      Err(Error::InvalidXcmVersion { version: 5, .. })
    ));
    assert_eq!(check_xcm_version(3, &supported).unwrap(), XcmVersion::V3);
  }

  #[test]
  fn chain_versions_are_clamped_from_above_only() {
    assert_eq!(implemented(7).unwrap(), XcmVersion::V5);
    assert_eq!(implemented(3).unwrap(), XcmVersion::V3);
    assert!(matches!(
      implemented(1),
      Err(Error::InvalidXcmVersion { version: 1, .. })
    ));
  }
}
