//! Errors surfaced by payload construction and classification.

use primitives::{AddressError, MultiAssetsError, XcmVersion};

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// Malformed or contradictory arguments: mismatched lengths, bad addresses, bad amounts.
  #[error("{0}")]
  InvalidInput(String),
  /// The requested XCM version is not in the supported set.
  #[error(
    "Xcm version {version} is not supported. Supported versions are: {}",
    join_versions(.supported)
  )]
  InvalidXcmVersion {
    version: u32,
    supported: Vec<XcmVersion>,
  },
  /// A runtime capability required by the transfer is absent on the target chain.
  #[error("{0}")]
  PalletNotFound(String),
  /// A symbol could not be resolved to a location.
  #[error("{0}")]
  AssetNotFound(String),
  /// A derived option an internal caller must set was missing.
  #[error("{0}")]
  InternalError(String),
  /// An option is not applicable to the targeted chain.
  #[error("{0}")]
  DisabledOption(String),
  /// The chain-client collaborator failed to answer a query.
  #[error("chain query failed: {0}")]
  ChainQuery(String),
  /// Configuration could not be parsed.
  #[error("invalid configuration: {0}")]
  Config(#[from] serde_json::Error),
}

impl From<AddressError> for Error {
  fn from(err: AddressError) -> Self {
    Error::InvalidInput(err.to_string())
  }
}

impl From<MultiAssetsError> for Error {
  fn from(err: MultiAssetsError) -> Self {
    Error::InvalidInput(err.to_string())
  }
}

fn join_versions(versions: &[XcmVersion]) -> String {
  versions
    .iter()
    .map(|version| version.to_string())
    .collect::<Vec<_>>()
    .join(", ")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn invalid_version_lists_supported_set() {
    let err = Error::InvalidXcmVersion {
      version: 1,
      supported: vec![XcmVersion::V2, XcmVersion::V3, XcmVersion::V4],
    };
    assert_eq!(
      err.to_string(),
      "Xcm version 1 is not supported. Supported versions are: 2, 3, 4"
    );
  }

  #[test]
  fn address_errors_become_invalid_input() {
    let err: Error = primitives::Account::parse("0x12").unwrap_err().into();
    assert!(matches!(err, Error::InvalidInput(message) if message.contains("0x12")));
  }
}
