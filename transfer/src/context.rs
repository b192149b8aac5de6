//! The chain-client collaborator.
//!
//! Everything this crate knows about live chain state comes through [`ChainContext`]. Queries
//! have no timeout or retry policy here; a failing query is propagated to the caller as
//! [`crate::Error::ChainQuery`] (or whatever error the implementation returns).

use crate::error::Result;
use async_trait::async_trait;
use primitives::MultiLocation;
use serde::Serialize;

/// Pallet the origin chain uses for cross-consensus transfers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TransferPallet {
  /// `xcmPallet` on relay chains.
  XcmPallet,
  /// `polkadotXcm` on system and most parachains.
  PolkadotXcm,
  /// `xTokens` (orml) parachains; destination and beneficiary share one location.
  XTokens,
}

/// Read-only view of the origin chain, provided by the chain client.
#[async_trait]
pub trait ChainContext: Send + Sync {
  /// Runtime spec name, e.g. `"asset-hub-polkadot"`.
  fn spec_name(&self) -> &str;

  /// Chain id of the origin: `"0"` for the relay chain, the parachain id otherwise.
  fn chain_id(&self) -> &str;

  /// Symbol of the chain's native asset.
  fn native_asset_symbol(&self) -> &str;

  fn transfer_pallet(&self) -> TransferPallet;

  /// Whether the runtime exposes a tokens pallet for non-native local transfers.
  fn has_tokens_pallet(&self) -> bool;

  /// Version recorded for `location` under the `version` registry key, if any.
  async fn supported_version_for(
    &self,
    version: u32,
    location: &MultiLocation,
  ) -> Result<Option<u32>>;

  /// The chain's safe (default) XCM version, if set.
  async fn safe_version(&self) -> Result<Option<u32>>;

  /// Canonical location registered for `symbol`, if known.
  async fn resolve_asset_metadata(&self, symbol: &str) -> Result<Option<MultiLocation>>;
}
