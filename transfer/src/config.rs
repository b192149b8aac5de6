//! Builder configuration.

use crate::error::{Error, Result};
use primitives::{XcmVersion, versions};
use serde::Deserialize;

/// Deployment-level settings for [`crate::TransferBuilder`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TransferConfig {
  /// Versions this deployment accepts, in the order reported to users.
  pub supported_versions: Vec<XcmVersion>,
  /// Version used when the destination reports neither a supported nor a safe version.
  pub fallback_version: XcmVersion,
}

impl Default for TransferConfig {
  fn default() -> Self {
    Self {
      supported_versions: versions::SUPPORTED_XCM_VERSIONS.to_vec(),
      fallback_version: versions::DEFAULT_XCM_VERSION,
    }
  }
}

impl TransferConfig {
  /// Parses and validates a JSON configuration. Missing keys take their defaults.
  pub fn from_json(json: &str) -> Result<Self> {
    let config: Self = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<()> {
    if self.supported_versions.is_empty() {
      return Err(Error::InternalError(
        "at least one supported XCM version must be configured".into(),
      ));
    }
    if !self.supported_versions.contains(&self.fallback_version) {
      return Err(Error::InvalidXcmVersion {
        version: self.fallback_version.as_u32(),
        supported: self.supported_versions.clone(),
      });
    }
    Ok(())
  }

  /// Highest configured version; what the builder asks a destination for first.
  pub fn latest_version(&self) -> XcmVersion {
    self
      .supported_versions
      .iter()
      .copied()
      .max()
      .unwrap_or(self.fallback_version)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_config_is_valid() {
    let config = TransferConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.latest_version(), XcmVersion::V5);
    assert_eq!(config.fallback_version, XcmVersion::V4);
  }

  #[test]
  fn from_json_fills_defaults() {
    let config = TransferConfig::from_json(r#"{"supportedVersions":[2,3,4]}"#).unwrap();
    assert_eq!(
      config.supported_versions,
      vec![XcmVersion::V2, XcmVersion::V3, XcmVersion::V4]
    );
    assert_eq!(config.fallback_version, XcmVersion::V4);
    assert_eq!(config.latest_version(), XcmVersion::V4);
  }

  #[test]
  fn from_json_rejects_unknown_versions_and_keys() {
    assert!(matches!(
      TransferConfig::from_json(r#"{"supportedVersions":[1,2]}"#),
      Err(Error::Config(_))
    ));
    assert!(matches!(
      TransferConfig::from_json(r#"{"unknown":true}"#),
      Err(Error::Config(_))
    ));
  }

  #[test]
  fn fallback_must_be_supported() {
    let err = TransferConfig::from_json(r#"{"supportedVersions":[2,3],"fallbackVersion":4}"#)
      .unwrap_err();
    assert_eq!(
      err.to_string(),
      "Xcm version 4 is not supported. Supported versions are: 2, 3"
    );
  }

  #[test]
  fn empty_supported_set_is_rejected() {
    assert!(matches!(
      TransferConfig::from_json(r#"{"supportedVersions":[]}"#),
      Err(Error::InternalError(_))
    ));
  }
}
